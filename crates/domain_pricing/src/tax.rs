//! GST computation
//!
//! Sales inside the seller's country are taxed at a single combined rate.
//! When the buyer is in the seller's home state the tax is split into
//! central and state halves (CGST + SGST); otherwise it is charged as a
//! single integrated tax (IGST). Foreign buyers are not taxed.
//!
//! The combined tax is rounded once, then split: CGST takes the floor of
//! half and SGST takes the remainder, so the parts always add back up to
//! the rounded total.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::Rate;

use crate::configuration::BillingAddress;
use crate::error::PricingError;

/// Which tax regime applied to a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    /// Foreign buyer or nothing to tax
    Exempt,
    /// Buyer in the seller's home state: CGST + SGST
    IntraState,
    /// Buyer elsewhere in the country: IGST
    InterState,
}

/// Tax split across the three GST heads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl TaxBreakdown {
    /// Splits a combined intra-state tax into CGST (floor of half) and SGST
    pub fn intra_state(total_tax: Decimal) -> Self {
        let cgst = (total_tax / dec!(2)).floor();
        Self {
            cgst,
            sgst: total_tax - cgst,
            igst: Decimal::ZERO,
        }
    }

    pub fn inter_state(total_tax: Decimal) -> Self {
        Self {
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: total_tax,
        }
    }

    pub fn total(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }
}

/// Outcome of running the tax rules over a discounted subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputation {
    /// `max(subtotal - discount, 0)`
    pub taxable_amount: Decimal,
    pub regime: TaxRegime,
    pub rate: Rate,
    pub breakdown: TaxBreakdown,
}

impl TaxComputation {
    pub fn total_tax(&self) -> Decimal {
        self.breakdown.total()
    }
}

/// Jurisdiction rules for the seller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRuleSet {
    pub domestic_country: String,
    #[serde(default)]
    pub country_aliases: Vec<String>,
    pub home_state: String,
    #[serde(default)]
    pub home_state_aliases: Vec<String>,
    pub rate: Rate,
}

/// Lowercases and drops everything but letters and digits, so "U.P." matches "up"
fn fold(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn matches_any(value: &str, primary: &str, aliases: &[String]) -> bool {
    let value = fold(value);
    if value.is_empty() {
        return false;
    }
    std::iter::once(primary)
        .chain(aliases.iter().map(String::as_str))
        .any(|candidate| fold(candidate) == value)
}

impl TaxRuleSet {
    /// GST at 18% for a seller registered in Uttar Pradesh, India
    pub fn india_uttar_pradesh() -> Self {
        Self {
            domestic_country: "India".to_string(),
            country_aliases: vec!["IN".to_string(), "IND".to_string(), "Bharat".to_string()],
            home_state: "Uttar Pradesh".to_string(),
            home_state_aliases: vec!["UP".to_string()],
            rate: Rate::from_percentage(dec!(18)),
        }
    }

    pub fn is_domestic(&self, country: &str) -> bool {
        matches_any(country, &self.domestic_country, &self.country_aliases)
    }

    pub fn is_home_state(&self, state: &str) -> bool {
        matches_any(state, &self.home_state, &self.home_state_aliases)
    }

    /// Computes the taxable amount and its GST split
    pub fn compute(&self, subtotal: Decimal, discount: Decimal, address: &BillingAddress) -> TaxComputation {
        let taxable_amount = (subtotal - discount).max(Decimal::ZERO);

        let (regime, breakdown) = if taxable_amount.is_zero() || !self.is_domestic(&address.country) {
            (TaxRegime::Exempt, TaxBreakdown::default())
        } else {
            let total_tax = self.rate.apply_rounded(taxable_amount);
            if self.is_home_state(&address.state) {
                (TaxRegime::IntraState, TaxBreakdown::intra_state(total_tax))
            } else {
                (TaxRegime::InterState, TaxBreakdown::inter_state(total_tax))
            }
        };

        debug!(
            country = %address.country,
            state = %address.state,
            ?regime,
            %taxable_amount,
            total_tax = %breakdown.total(),
            "Computed tax"
        );

        TaxComputation {
            taxable_amount,
            regime,
            rate: self.rate,
            breakdown,
        }
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        let rate = self.rate.as_decimal();
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(PricingError::invalid_reference(format!(
                "tax rate {} is outside 0-100%",
                self.rate
            )));
        }
        if fold(&self.domestic_country).is_empty() {
            return Err(PricingError::invalid_reference("domestic country is blank"));
        }
        Ok(())
    }
}

impl Default for TaxRuleSet {
    fn default() -> Self {
        Self::india_uttar_pradesh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn up() -> BillingAddress {
        BillingAddress::new("India", "Uttar Pradesh")
    }

    #[test]
    fn test_same_state_split() {
        let tax = TaxRuleSet::default().compute(dec!(5000), dec!(500), &up());

        assert_eq!(tax.taxable_amount, dec!(4500));
        assert_eq!(tax.regime, TaxRegime::IntraState);
        assert_eq!(tax.breakdown.cgst, dec!(405));
        assert_eq!(tax.breakdown.sgst, dec!(405));
        assert_eq!(tax.breakdown.igst, dec!(0));
    }

    #[test]
    fn test_cross_state_igst() {
        let address = BillingAddress::new("India", "Maharashtra");
        let tax = TaxRuleSet::default().compute(dec!(5000), dec!(500), &address);

        assert_eq!(tax.regime, TaxRegime::InterState);
        assert_eq!(tax.breakdown, TaxBreakdown::inter_state(dec!(810)));
    }

    #[test]
    fn test_odd_total_split_puts_remainder_in_sgst() {
        // 1005 * 0.18 = 180.9, rounds to 181
        let tax = TaxRuleSet::default().compute(dec!(1005), dec!(0), &up());
        assert_eq!(tax.breakdown.cgst, dec!(90));
        assert_eq!(tax.breakdown.sgst, dec!(91));
        assert_eq!(tax.total_tax(), dec!(181));
    }

    #[test]
    fn test_state_abbreviations() {
        let rules = TaxRuleSet::default();
        assert!(rules.is_home_state("UP"));
        assert!(rules.is_home_state("u.p."));
        assert!(rules.is_home_state("  uttar pradesh "));
        assert!(!rules.is_home_state("Uttarakhand"));
        assert!(!rules.is_home_state(""));
    }

    #[test]
    fn test_foreign_buyer_is_exempt() {
        let address = BillingAddress::new("United States", "California");
        let tax = TaxRuleSet::default().compute(dec!(5000), dec!(0), &address);
        assert_eq!(tax.regime, TaxRegime::Exempt);
        assert_eq!(tax.total_tax(), dec!(0));
    }

    #[test]
    fn test_oversized_discount_floors_taxable_at_zero() {
        let tax = TaxRuleSet::default().compute(dec!(100), dec!(150), &up());
        assert_eq!(tax.taxable_amount, dec!(0));
        assert_eq!(tax.regime, TaxRegime::Exempt);
    }

    #[test]
    fn test_country_codes_are_domestic() {
        let rules = TaxRuleSet::default();
        assert!(rules.is_domestic("IN"));
        assert!(rules.is_domestic("india"));
        assert!(!rules.is_domestic("Indonesia"));
    }
}
