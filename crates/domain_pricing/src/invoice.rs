//! Invoice assembly
//!
//! An invoice session is opened once per checkout and fixes the invoice
//! number and dates. Every recompute within the session rebuilds the whole
//! record from the tariff, promo and tax results; nothing is patched in
//! place.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use core_kernel::{add_days, Currency, DateRange, Money, SessionId, Timezone};

use crate::currency::CurrencyPresenter;
use crate::cycle::BillingCycle;
use crate::discount::PromoOutcome;
use crate::error::PricingError;
use crate::tariff::{LineItem, TariffBreakdown};
use crate::tax::{TaxBreakdown, TaxComputation, TaxRegime};

/// Formats an issue timestamp as `YYYY_MM_DDHHMM`
pub fn invoice_number(issued_local: NaiveDateTime) -> String {
    issued_local.format("%Y_%m_%d%H%M").to_string()
}

/// Issuing context shared by every recompute of one checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSession {
    pub id: SessionId,
    pub issued_at: DateTime<Utc>,
    pub timezone: Timezone,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    /// Days between issue and due date; proforma invoices are due on issue
    pub grace_days: u32,
}

impl InvoiceSession {
    /// Opens a session at the current time
    pub fn open(timezone: Timezone) -> Self {
        Self::opened_at(Utc::now(), timezone)
    }

    /// Opens a session at a given instant
    pub fn opened_at(issued_at: DateTime<Utc>, timezone: Timezone) -> Self {
        let local = timezone.to_local(issued_at);
        Self {
            id: SessionId::new_v7(),
            issued_at,
            timezone,
            invoice_number: invoice_number(local),
            invoice_date: local.date(),
            grace_days: 0,
        }
    }

    pub fn with_grace_days(mut self, grace_days: u32) -> Self {
        self.grace_days = grace_days;
        self
    }

    pub fn due_date(&self) -> NaiveDate {
        add_days(self.invoice_date, self.grace_days).unwrap_or_else(|err| {
            warn!(%err, "Due date out of range, using invoice date");
            self.invoice_date
        })
    }

    pub fn service_period(&self) -> DateRange {
        DateRange::one_month_from(self.invoice_date).unwrap_or_else(|err| {
            warn!(%err, "Service period out of range, using a single day");
            DateRange {
                start: self.invoice_date,
                end: self.invoice_date,
            }
        })
    }
}

/// Read-only result handed to the invoice view and the payment step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub service_period: DateRange,
    pub currency: Currency,
    pub plan_id: String,
    pub billing_cycle: BillingCycle,
    pub quantity: u32,
    pub line_items: Vec<LineItem>,
    pub per_server_monthly_cost: Decimal,
    pub subtotal: Decimal,
    pub promo_code: Option<String>,
    pub promo_discount: Decimal,
    pub taxable_amount: Decimal,
    pub tax_regime: TaxRegime,
    pub tax: TaxBreakdown,
    pub total_tax: Decimal,
    pub total: Decimal,
    pub formatted_total: String,
    pub amount_in_words: String,
}

impl InvoiceRecord {
    /// Total as money in the invoice currency
    pub fn total_money(&self) -> Money {
        Money::new(self.total, self.currency)
    }

    /// Checks a client-presented total against this record
    ///
    /// Both sides are compared at the currency's minor-unit precision.
    pub fn verify_presented_total(&self, presented: Decimal) -> Result<(), PricingError> {
        let computed = self.total_money().round_to_currency().amount();
        let presented_rounded = Money::new(presented, self.currency).round_to_currency().amount();
        if computed == presented_rounded {
            Ok(())
        } else {
            Err(PricingError::TotalMismatch {
                computed,
                presented,
            })
        }
    }
}

/// Figure handed to the payment gateway when creating an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAmount {
    /// Amount in the smallest currency unit (paise for INR)
    pub amount: i64,
    pub currency: Currency,
}

impl PaymentAmount {
    pub fn from_total(total: Money) -> Result<Self, PricingError> {
        Ok(Self {
            amount: total.to_minor_units()?,
            currency: total.currency(),
        })
    }

    pub fn from_record(record: &InvoiceRecord) -> Result<Self, PricingError> {
        Self::from_total(record.total_money())
    }
}

/// Combines the pipeline stages into a record
#[derive(Debug, Clone, Copy)]
pub struct InvoiceAssembler<'a> {
    session: &'a InvoiceSession,
    presenter: CurrencyPresenter,
}

impl<'a> InvoiceAssembler<'a> {
    pub fn new(session: &'a InvoiceSession, presenter: CurrencyPresenter) -> Self {
        Self { session, presenter }
    }

    pub fn assemble(
        &self,
        plan_id: &str,
        billing_cycle: BillingCycle,
        tariff: TariffBreakdown,
        promo: &PromoOutcome,
        tax: &TaxComputation,
    ) -> InvoiceRecord {
        let total_tax = tax.total_tax();
        let total = tax.taxable_amount + total_tax;

        InvoiceRecord {
            invoice_number: self.session.invoice_number.clone(),
            invoice_date: self.session.invoice_date,
            due_date: self.session.due_date(),
            service_period: self.session.service_period(),
            currency: self.presenter.currency(),
            plan_id: plan_id.to_string(),
            billing_cycle,
            quantity: tariff.quantity,
            line_items: tariff.line_items,
            per_server_monthly_cost: tariff.per_server_monthly_cost,
            subtotal: tariff.subtotal,
            promo_code: promo.status.applied_code().map(str::to_string),
            promo_discount: promo.discount,
            taxable_amount: tax.taxable_amount,
            tax_regime: tax.regime,
            tax: tax.breakdown,
            total_tax,
            total,
            formatted_total: self.presenter.format(total),
            amount_in_words: self.presenter.in_words(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn session() -> InvoiceSession {
        // 09:15 UTC is 14:45 in Kolkata
        let issued = Utc.with_ymd_and_hms(2024, 3, 5, 9, 15, 0).unwrap();
        InvoiceSession::opened_at(issued, Timezone::default())
    }

    #[test]
    fn test_invoice_number_format() {
        assert_eq!(session().invoice_number, "2024_03_051445");
    }

    #[test]
    fn test_due_date_defaults_to_issue_date() {
        let session = session();
        assert_eq!(session.due_date(), session.invoice_date);
        assert_eq!(
            session.clone().with_grace_days(7).due_date(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
        );
    }

    #[test]
    fn test_service_period() {
        let period = session().service_period();
        assert_eq!(period.start, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 4, 4).unwrap());
    }

    fn record(total: Decimal, currency: Currency) -> InvoiceRecord {
        let session = session();
        InvoiceRecord {
            invoice_number: session.invoice_number.clone(),
            invoice_date: session.invoice_date,
            due_date: session.due_date(),
            service_period: session.service_period(),
            currency,
            plan_id: "vps-standard".to_string(),
            billing_cycle: BillingCycle::Monthly,
            quantity: 1,
            line_items: Vec::new(),
            per_server_monthly_cost: total,
            subtotal: total,
            promo_code: None,
            promo_discount: Decimal::ZERO,
            taxable_amount: total,
            tax_regime: TaxRegime::Exempt,
            tax: TaxBreakdown::default(),
            total_tax: Decimal::ZERO,
            total,
            formatted_total: String::new(),
            amount_in_words: String::new(),
        }
    }

    #[test]
    fn test_payment_amount_in_paise() {
        let payment = PaymentAmount::from_record(&record(dec!(5310), Currency::INR)).unwrap();
        assert_eq!(payment.amount, 531000);
        assert_eq!(payment.currency, Currency::INR);
    }

    #[test]
    fn test_verify_presented_total() {
        let record = record(dec!(5310), Currency::INR);
        assert!(record.verify_presented_total(dec!(5310.00)).is_ok());
        assert!(matches!(
            record.verify_presented_total(dec!(5309)),
            Err(PricingError::TotalMismatch { .. })
        ));
    }
}
