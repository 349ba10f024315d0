//! Country to currency resolution
//!
//! Country reference data is fetched by the storefront and may be empty or
//! half-loaded when a quote is computed, so every lookup has a default.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::Currency;

/// Resolves the billing currency for a country
pub trait CurrencyResolver: Send + Sync {
    /// Returns the currency for a country label or code, never failing
    fn resolve_currency(&self, country: &str) -> Currency;
}

/// Resolver that always answers with one currency
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCurrencyResolver {
    pub currency: Currency,
}

impl CurrencyResolver for DefaultCurrencyResolver {
    fn resolve_currency(&self, _country: &str) -> Currency {
        self.currency
    }
}

/// One entry of the country reference list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub currency_code: Option<String>,
}

impl CountryEntry {
    pub fn new(label: &str, value: &str, currency_code: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            currency_code: Some(currency_code.to_string()),
        }
    }

    fn matches(&self, country: &str) -> bool {
        self.label.trim().eq_ignore_ascii_case(country) || self.value.trim().eq_ignore_ascii_case(country)
    }
}

/// Country list with a fallback currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDirectory {
    #[serde(default)]
    pub entries: Vec<CountryEntry>,
    #[serde(default)]
    pub default_currency: Currency,
}

impl CountryDirectory {
    pub fn new(entries: Vec<CountryEntry>, default_currency: Currency) -> Self {
        Self {
            entries,
            default_currency,
        }
    }

    /// A directory with no countries, resolving everything to the default
    pub fn empty(default_currency: Currency) -> Self {
        Self::new(Vec::new(), default_currency)
    }

    /// Countries the storefront bills in
    pub fn standard() -> Self {
        Self::new(
            vec![
                CountryEntry::new("India", "IN", "INR"),
                CountryEntry::new("United States", "US", "USD"),
                CountryEntry::new("United Kingdom", "GB", "GBP"),
                CountryEntry::new("Germany", "DE", "EUR"),
                CountryEntry::new("France", "FR", "EUR"),
                CountryEntry::new("Netherlands", "NL", "EUR"),
                CountryEntry::new("Japan", "JP", "JPY"),
                CountryEntry::new("Switzerland", "CH", "CHF"),
                CountryEntry::new("Australia", "AU", "AUD"),
                CountryEntry::new("Canada", "CA", "CAD"),
                CountryEntry::new("Singapore", "SG", "SGD"),
                CountryEntry::new("Hong Kong", "HK", "HKD"),
                CountryEntry::new("United Arab Emirates", "AE", "AED"),
            ],
            Currency::INR,
        )
    }

    /// Finds a country by label or value, ignoring case
    pub fn find(&self, country: &str) -> Option<&CountryEntry> {
        let country = country.trim();
        if country.is_empty() {
            return None;
        }
        self.entries.iter().find(|entry| entry.matches(country))
    }
}

impl Default for CountryDirectory {
    fn default() -> Self {
        Self::standard()
    }
}

impl CurrencyResolver for CountryDirectory {
    fn resolve_currency(&self, country: &str) -> Currency {
        let resolved = self
            .find(country)
            .and_then(|entry| entry.currency_code.as_deref())
            .and_then(Currency::from_code);

        resolved.unwrap_or_else(|| {
            debug!(country, default = %self.default_currency, "Falling back to default currency");
            self.default_currency
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_by_label_and_value() {
        let directory = CountryDirectory::standard();
        assert_eq!(directory.resolve_currency("India"), Currency::INR);
        assert_eq!(directory.resolve_currency("us"), Currency::USD);
        assert_eq!(directory.resolve_currency(" germany "), Currency::EUR);
    }

    #[test]
    fn test_unknown_country_falls_back() {
        let directory = CountryDirectory::standard();
        assert_eq!(directory.resolve_currency("Atlantis"), Currency::INR);
        assert_eq!(directory.resolve_currency(""), Currency::INR);
    }

    #[test]
    fn test_empty_directory_falls_back() {
        let directory = CountryDirectory::empty(Currency::USD);
        assert_eq!(directory.resolve_currency("India"), Currency::USD);
    }

    #[test]
    fn test_unsupported_or_missing_code_falls_back() {
        let directory = CountryDirectory::new(
            vec![
                CountryEntry::new("Brazil", "BR", "BRL"),
                CountryEntry {
                    label: "Nepal".to_string(),
                    value: "NP".to_string(),
                    currency_code: None,
                },
            ],
            Currency::INR,
        );
        assert_eq!(directory.resolve_currency("Brazil"), Currency::INR);
        assert_eq!(directory.resolve_currency("Nepal"), Currency::INR);
    }

    #[test]
    fn test_deserializes_camel_case_entries() {
        let json = r#"{"entries":[{"label":"Canada","value":"CA","currencyCode":"CAD"}]}"#;
        let directory: CountryDirectory = serde_json::from_str(json).unwrap();
        assert_eq!(directory.resolve_currency("Canada"), Currency::CAD);
        assert_eq!(directory.default_currency, Currency::INR);
    }

    #[test]
    fn test_default_resolver() {
        let resolver = DefaultCurrencyResolver::default();
        assert_eq!(resolver.resolve_currency("United States"), Currency::INR);
    }
}
