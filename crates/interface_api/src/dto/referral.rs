//! Referral DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Rate;

#[derive(Debug, Deserialize)]
pub struct ReferralCoverageQuery {
    pub plan_price: Decimal,
    pub average_price: Decimal,
    /// Overrides the default commission
    #[serde(default)]
    pub commission_percent: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct ReferralCoverageResponse {
    pub plan_price: Decimal,
    pub average_price: Decimal,
    pub commission_rate: Rate,
    /// Absent when a referral earns no commission
    pub referrals_needed: Option<u64>,
}
