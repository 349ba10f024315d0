//! Currency presentation
//!
//! Resolves the billing currency from the customer's country and renders
//! amounts for display: locale-formatted figures and amount-in-words.

pub mod format;
pub mod resolver;
pub mod words;

use rust_decimal::Decimal;

use core_kernel::Currency;

pub use format::{Grouping, LocaleFormat};
pub use resolver::{CountryDirectory, CountryEntry, CurrencyResolver, DefaultCurrencyResolver};
pub use words::amount_in_words;

/// Formats amounts for one currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyPresenter {
    currency: Currency,
    format: LocaleFormat,
}

impl CurrencyPresenter {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            format: LocaleFormat::for_currency(currency),
        }
    }

    /// Presenter for the currency a country is billed in
    pub fn for_country(resolver: &dyn CurrencyResolver, country: &str) -> Self {
        Self::new(resolver.resolve_currency(country))
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn locale(&self) -> &'static str {
        self.format.locale
    }

    pub fn format(&self, amount: Decimal) -> String {
        self.format.format(amount)
    }

    pub fn format_f64(&self, amount: f64) -> String {
        self.format.format_f64(amount)
    }

    pub fn in_words(&self, amount: Decimal) -> String {
        amount_in_words(amount, self.currency.code())
    }
}
