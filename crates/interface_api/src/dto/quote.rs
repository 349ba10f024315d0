//! Quote DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{QuoteId, Timezone};
use domain_pricing::{
    AddOnSelections, BillingAddress, BillingCycle, InvoiceRecord, InvoiceSession, PaymentAmount,
    PromoStatus, Quote,
};

/// Checkout selection sent by the storefront
///
/// Prices are never taken from the client; the base price is re-derived
/// from the plan catalog on every request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 1, max = 64))]
    pub plan_id: String,
    #[serde(default)]
    pub billing_cycle: BillingCycle,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub add_ons: AddOnSelections,
    #[serde(default)]
    pub address: BillingAddress,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub promo_code: Option<String>,
    /// Echoed back from an earlier response to keep the invoice number
    #[serde(default)]
    pub session: Option<SessionRequest>,
}

fn default_quantity() -> i64 {
    1
}

/// Issue details of an existing checkout session
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionRequest {
    pub issued_at: DateTime<Utc>,
    #[serde(default)]
    pub grace_days: Option<u32>,
}

impl SessionRequest {
    /// Reopens the session, or opens a new one when none was sent
    pub fn resolve(request: Option<&SessionRequest>, timezone: Timezone, default_grace_days: u32) -> InvoiceSession {
        match request {
            Some(existing) => InvoiceSession::opened_at(existing.issued_at, timezone)
                .with_grace_days(existing.grace_days.unwrap_or(default_grace_days)),
            None => InvoiceSession::open(timezone).with_grace_days(default_grace_days),
        }
    }
}

/// Quote request with the total the client displayed
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyQuoteRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub quote: QuoteRequest,
    pub presented_total: Decimal,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: QuoteId,
    pub session: SessionRequest,
    pub invoice: InvoiceRecord,
    pub promo: PromoStatus,
    pub payment: PaymentAmount,
}

impl QuoteResponse {
    pub fn new(quote: Quote, session: &InvoiceSession, payment: PaymentAmount) -> Self {
        Self {
            quote_id: QuoteId::new_v7(),
            session: SessionRequest {
                issued_at: session.issued_at,
                grace_days: Some(session.grace_days),
            },
            invoice: quote.invoice,
            promo: quote.promo,
            payment,
        }
    }
}
