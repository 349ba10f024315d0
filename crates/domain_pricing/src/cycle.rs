//! Billing cycles
//!
//! Longer commitments earn a standard discount on the monthly list price.
//! The discounted monthly-equivalent price is what the checkout shows as
//! "per month" and what seeds a configuration's base price.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Rate, round_to_unit};

/// Payment period for a server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    /// Billed every month
    #[default]
    Monthly,
    /// Billed every 3 months
    Quarterly,
    /// Billed every 6 months
    SemiAnnual,
    /// Billed every 12 months
    Annual,
    /// Billed every 24 months
    Biennial,
    /// Billed every 36 months
    Triennial,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 6] = [
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::SemiAnnual,
        BillingCycle::Annual,
        BillingCycle::Biennial,
        BillingCycle::Triennial,
    ];

    /// Returns the number of months covered by one payment
    pub fn months(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Quarterly => 3,
            BillingCycle::SemiAnnual => 6,
            BillingCycle::Annual => 12,
            BillingCycle::Biennial => 24,
            BillingCycle::Triennial => 36,
        }
    }

    /// Returns the standard discount for committing to this cycle
    pub fn discount_rate(&self) -> Rate {
        let percentage = match self {
            BillingCycle::Monthly => dec!(0),
            BillingCycle::Quarterly => dec!(5),
            BillingCycle::SemiAnnual => dec!(10),
            BillingCycle::Annual => dec!(15),
            BillingCycle::Biennial => dec!(20),
            BillingCycle::Triennial => dec!(25),
        };
        Rate::from_percentage(percentage)
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::SemiAnnual => "Semi-Annually",
            BillingCycle::Annual => "Annually",
            BillingCycle::Biennial => "Biennially",
            BillingCycle::Triennial => "Triennially",
        }
    }

    /// Monthly price after the cycle discount, rounded to the whole unit
    pub fn monthly_equivalent(&self, list_monthly_price: Decimal) -> Decimal {
        let list = list_monthly_price.max(Decimal::ZERO);
        round_to_unit(list * (Decimal::ONE - self.discount_rate().as_decimal()))
    }

    /// Amount payable up front for one full cycle
    pub fn cycle_total(&self, list_monthly_price: Decimal) -> Decimal {
        self.monthly_equivalent(list_monthly_price) * Decimal::from(self.months())
    }

    /// Amount saved over the cycle compared to paying list price monthly
    pub fn cycle_savings(&self, list_monthly_price: Decimal) -> Decimal {
        let list = list_monthly_price.max(Decimal::ZERO) * Decimal::from(self.months());
        list - self.cycle_total(list_monthly_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_has_no_discount() {
        assert_eq!(BillingCycle::Monthly.monthly_equivalent(dec!(2000)), dec!(2000));
        assert_eq!(BillingCycle::Monthly.cycle_total(dec!(2000)), dec!(2000));
    }

    #[test]
    fn test_annual_monthly_equivalent() {
        // 2000 * 0.85
        assert_eq!(BillingCycle::Annual.monthly_equivalent(dec!(2000)), dec!(1700));
        assert_eq!(BillingCycle::Annual.cycle_total(dec!(2000)), dec!(20400));
        assert_eq!(BillingCycle::Annual.cycle_savings(dec!(2000)), dec!(3600));
    }

    #[test]
    fn test_quarterly_rounds_to_unit() {
        // 799 * 0.95 = 759.05
        assert_eq!(BillingCycle::Quarterly.monthly_equivalent(dec!(799)), dec!(759));
    }

    #[test]
    fn test_negative_list_price_is_zero() {
        assert_eq!(BillingCycle::Biennial.monthly_equivalent(dec!(-10)), dec!(0));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&BillingCycle::SemiAnnual).unwrap();
        assert_eq!(json, "\"semi_annual\"");
    }
}
