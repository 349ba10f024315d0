//! Test Data Builders
//!
//! Provides builder patterns for constructing quote inputs with sensible
//! defaults. Tests specify only the fields they care about.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use core_kernel::Timezone;
use domain_pricing::{
    compute_invoice, AddOnCategory, AddOnSelections, BillingAddress, BillingCycle, InvoiceSession,
    Quote, ReferenceData, ServerConfiguration,
};

use crate::fixtures::{AddressFixtures, ConfigurationFixtures, SessionFixtures, STANDARD_REFERENCE};

/// Builder for a full quote computation
#[derive(Debug, Clone)]
pub struct QuoteBuilder {
    plan_id: String,
    billing_cycle: BillingCycle,
    quantity: i64,
    add_ons: AddOnSelections,
    address: BillingAddress,
    promo_code: Option<String>,
    issued_at: DateTime<Utc>,
    grace_days: u32,
}

impl Default for QuoteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteBuilder {
    /// Creates a builder for one monthly vps-standard server in Uttar Pradesh
    pub fn new() -> Self {
        Self {
            plan_id: ConfigurationFixtures::plan_id().to_string(),
            billing_cycle: BillingCycle::Monthly,
            quantity: 1,
            add_ons: AddOnSelections::default(),
            address: AddressFixtures::uttar_pradesh(),
            promo_code: None,
            issued_at: SessionFixtures::issued_at(),
            grace_days: 0,
        }
    }

    pub fn with_plan(mut self, plan_id: impl Into<String>) -> Self {
        self.plan_id = plan_id.into();
        self
    }

    pub fn with_billing_cycle(mut self, cycle: BillingCycle) -> Self {
        self.billing_cycle = cycle;
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_ipv4(mut self, count: i64) -> Self {
        self.add_ons = self.add_ons.with_ipv4(count);
        self
    }

    pub fn with_storage_gb(mut self, gb: i64) -> Self {
        self.add_ons = self.add_ons.with_storage_gb(gb);
        self
    }

    pub fn with_add_ons(mut self, add_ons: AddOnSelections) -> Self {
        self.add_ons = add_ons;
        self
    }

    pub fn with_tier(mut self, category: AddOnCategory, tier_id: impl Into<String>) -> Self {
        self.add_ons = self.add_ons.with_tier(category, tier_id);
        self
    }

    pub fn with_address(mut self, address: BillingAddress) -> Self {
        self.address = address;
        self
    }

    pub fn with_promo(mut self, code: impl Into<String>) -> Self {
        self.promo_code = Some(code.into());
        self
    }

    pub fn with_grace_days(mut self, days: u32) -> Self {
        self.grace_days = days;
        self
    }

    /// Builds the configuration snapshot against the standard catalog
    ///
    /// # Panics
    ///
    /// Panics if the plan id is not in the standard catalog
    pub fn configuration(&self) -> ServerConfiguration {
        let plan = STANDARD_REFERENCE
            .plans
            .get(&self.plan_id)
            .expect("plan should exist in the standard catalog");
        ServerConfiguration::for_plan(plan, self.billing_cycle)
            .with_quantity(self.quantity)
            .with_add_ons(self.add_ons.clone())
    }

    pub fn session(&self) -> InvoiceSession {
        InvoiceSession::opened_at(self.issued_at, Timezone::default()).with_grace_days(self.grace_days)
    }

    /// Computes the quote against the standard reference data
    pub fn compute(&self) -> Quote {
        self.compute_with(&STANDARD_REFERENCE)
    }

    pub fn compute_with(&self, reference: &ReferenceData) -> Quote {
        compute_invoice(
            &self.configuration(),
            &self.address,
            self.promo_code.as_deref(),
            reference,
            &self.session(),
        )
    }

    /// JSON body for `POST /api/v1/quotes`
    pub fn request_body(&self) -> Value {
        json!({
            "plan_id": self.plan_id,
            "billing_cycle": self.billing_cycle,
            "quantity": self.quantity,
            "add_ons": self.add_ons,
            "address": self.address,
            "promo_code": self.promo_code,
            "session": {
                "issued_at": self.issued_at,
                "grace_days": self.grace_days,
            },
        })
    }

    /// JSON body for `POST /api/v1/quotes/verify`
    pub fn verify_body(&self, presented_total: impl Into<Value>) -> Value {
        let mut body = self.request_body();
        body["presented_total"] = presented_total.into();
        body
    }
}
