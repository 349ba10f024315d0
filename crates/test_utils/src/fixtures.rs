//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the checkout scenarios the pricing
//! suites keep coming back to. Fixtures are fixed and predictable.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Money, Currency, Timezone};
use domain_pricing::{
    AddOnSelections, BillingAddress, BillingCycle, InvoiceSession, ReferenceData,
    ServerConfiguration,
};

/// Standard reference data, built once per test binary
pub static STANDARD_REFERENCE: Lazy<ReferenceData> = Lazy::new(ReferenceData::standard);

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The scenario subtotal: two vps-standard servers with extras
    pub fn inr_subtotal() -> Money {
        Money::new(dec!(5000), Currency::INR)
    }

    /// The scenario total after WELCOME10 and 18% GST
    pub fn inr_total() -> Money {
        Money::new(dec!(5310), Currency::INR)
    }

    pub fn usd_100() -> Money {
        Money::new(dec!(100), Currency::USD)
    }
}

/// Fixture for billing addresses
pub struct AddressFixtures;

impl AddressFixtures {
    /// Same state as the seller: CGST + SGST
    pub fn uttar_pradesh() -> BillingAddress {
        BillingAddress::new("India", "Uttar Pradesh")
    }

    /// Another Indian state: IGST
    pub fn maharashtra() -> BillingAddress {
        BillingAddress::new("India", "Maharashtra")
    }

    /// Outside India: no GST, billed in USD
    pub fn california() -> BillingAddress {
        BillingAddress::new("United States", "California")
    }
}

/// Fixture for invoice timing
pub struct SessionFixtures;

impl SessionFixtures {
    /// 2024-03-15 09:30 UTC, 15:00 in Kolkata
    pub fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }

    pub fn invoice_number() -> &'static str {
        "2024_03_151500"
    }

    pub fn session() -> InvoiceSession {
        InvoiceSession::opened_at(Self::issued_at(), Timezone::default())
    }
}

/// Fixture for checkout configurations
pub struct ConfigurationFixtures;

impl ConfigurationFixtures {
    pub fn plan_id() -> &'static str {
        "vps-standard"
    }

    /// Monthly vps-standard price
    pub fn plan_price() -> Decimal {
        dec!(2000)
    }

    /// One vps-standard server, monthly, no extras
    pub fn standard_monthly() -> ServerConfiguration {
        let plan = STANDARD_REFERENCE
            .plans
            .get(Self::plan_id())
            .expect("standard catalog has vps-standard");
        ServerConfiguration::for_plan(plan, BillingCycle::Monthly)
    }

    /// Two servers with two IPv4 addresses and 50 GB storage each
    pub fn two_servers_with_extras() -> ServerConfiguration {
        Self::standard_monthly()
            .with_quantity(2)
            .with_add_ons(AddOnSelections::default().with_ipv4(2).with_storage_gb(50))
    }
}
