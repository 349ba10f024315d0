//! Promotional codes
//!
//! A closed table of codes, each worth a fixed percentage off the subtotal.
//! Unknown codes are not errors: they resolve to no discount and an
//! `Invalid` status the caller can surface however it likes.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::Rate;

use crate::error::PricingError;

/// What happened to the promo code on this quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PromoStatus {
    /// No code was entered
    NotApplied,
    /// Code recognised and discount applied
    Applied { code: String, rate: Rate },
    /// Code not recognised; no discount applied
    Invalid { code: String },
}

impl PromoStatus {
    pub fn is_invalid(&self) -> bool {
        matches!(self, PromoStatus::Invalid { .. })
    }

    /// The normalised code, when one was applied
    pub fn applied_code(&self) -> Option<&str> {
        match self {
            PromoStatus::Applied { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Discount resolved for a subtotal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoOutcome {
    pub status: PromoStatus,
    pub discount: Decimal,
}

impl PromoOutcome {
    fn none(status: PromoStatus) -> Self {
        Self {
            status,
            discount: Decimal::ZERO,
        }
    }
}

/// Known promo codes keyed by their uppercase form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Decimal>", into = "BTreeMap<String, Decimal>")]
pub struct PromoTable {
    codes: BTreeMap<String, Rate>,
}

impl From<BTreeMap<String, Decimal>> for PromoTable {
    fn from(percentages: BTreeMap<String, Decimal>) -> Self {
        percentages
            .into_iter()
            .fold(PromoTable::empty(), |table, (code, pct)| table.with_code(&code, pct))
    }
}

impl From<PromoTable> for BTreeMap<String, Decimal> {
    fn from(table: PromoTable) -> Self {
        table
            .codes
            .into_iter()
            .map(|(code, rate)| (code, rate.as_percentage()))
            .collect()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

impl PromoTable {
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// Codes currently running in the storefront
    pub fn standard() -> Self {
        Self::empty()
            .with_code("WELCOME10", dec!(10))
            .with_code("SAVE20", dec!(20))
    }

    /// Adds a code worth `percentage` percent off
    pub fn with_code(mut self, code: &str, percentage: Decimal) -> Self {
        self.codes.insert(normalize(code), Rate::from_percentage(percentage));
        self
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Looks up a code after trimming and uppercasing it
    pub fn lookup(&self, code: &str) -> Option<Rate> {
        self.codes.get(&normalize(code)).copied()
    }

    /// Resolves the discount a code earns on `subtotal`
    ///
    /// The discount is `round(subtotal * rate)`. It is not clamped here; the
    /// taxable amount floors at zero downstream.
    pub fn apply_promo(&self, subtotal: Decimal, code: Option<&str>) -> PromoOutcome {
        let Some(code) = code.map(normalize).filter(|c| !c.is_empty()) else {
            return PromoOutcome::none(PromoStatus::NotApplied);
        };

        match self.codes.get(&code) {
            Some(rate) => {
                let discount = rate.apply_rounded(subtotal.max(Decimal::ZERO));
                debug!(%code, %rate, %discount, "Applied promo code");
                PromoOutcome {
                    status: PromoStatus::Applied { code, rate: *rate },
                    discount,
                }
            }
            None => {
                warn!(%code, "Rejected unknown promo code");
                PromoOutcome::none(PromoStatus::Invalid { code })
            }
        }
    }

    /// Checks every code is worth more than 0% and at most 100%
    pub fn validate(&self) -> Result<(), PricingError> {
        for (code, rate) in &self.codes {
            let pct = rate.as_percentage();
            if pct <= Decimal::ZERO || pct > dec!(100) {
                return Err(PricingError::invalid_reference(format!(
                    "promo code {code} has out-of-range percentage {pct}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PromoTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome10_on_5000() {
        let outcome = PromoTable::standard().apply_promo(dec!(5000), Some("WELCOME10"));
        assert_eq!(outcome.discount, dec!(500));
        assert_eq!(outcome.status.applied_code(), Some("WELCOME10"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let outcome = PromoTable::standard().apply_promo(dec!(1000), Some("  save20 "));
        assert_eq!(outcome.discount, dec!(200));
    }

    #[test]
    fn test_unknown_code_is_flagged() {
        let outcome = PromoTable::standard().apply_promo(dec!(5000), Some("BOGUS"));
        assert_eq!(outcome.discount, dec!(0));
        assert!(outcome.status.is_invalid());
    }

    #[test]
    fn test_missing_or_blank_code_is_not_applied() {
        let table = PromoTable::standard();
        assert_eq!(table.apply_promo(dec!(100), None).status, PromoStatus::NotApplied);
        assert_eq!(table.apply_promo(dec!(100), Some("   ")).status, PromoStatus::NotApplied);
    }

    #[test]
    fn test_discount_rounds_to_unit() {
        // 1999 * 0.10 = 199.9
        let outcome = PromoTable::standard().apply_promo(dec!(1999), Some("WELCOME10"));
        assert_eq!(outcome.discount, dec!(200));
    }

    #[test]
    fn test_deserialize_normalises_codes() {
        let table: PromoTable = serde_json::from_str(r#"{"spring15": 15}"#).unwrap();
        assert_eq!(table.lookup("SPRING15"), Some(Rate::from_percentage(dec!(15))));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let table = PromoTable::empty().with_code("FREE", dec!(150));
        assert!(table.validate().is_err());
    }
}
