//! Locale-aware amount formatting
//!
//! Each currency is paired with the locale its customers read prices in.
//! Amounts always show exactly two fraction digits.

use rust_decimal::{Decimal, RoundingStrategy};

use core_kernel::{Currency, sanitize_f64};

/// How integer digits are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567 (lakh/crore)
    Indian,
}

/// Formatting rules for one currency/locale pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    pub locale: &'static str,
    pub symbol: &'static str,
    pub symbol_after: bool,
    /// Space between symbol and number
    pub spaced: bool,
    pub group_separator: char,
    pub decimal_separator: char,
    pub grouping: Grouping,
}

impl LocaleFormat {
    const fn prefix(locale: &'static str, symbol: &'static str, spaced: bool) -> Self {
        Self {
            locale,
            symbol,
            symbol_after: false,
            spaced,
            group_separator: ',',
            decimal_separator: '.',
            grouping: Grouping::Thousands,
        }
    }

    pub fn for_currency(currency: Currency) -> Self {
        match currency {
            Currency::INR => Self {
                grouping: Grouping::Indian,
                ..Self::prefix("en-IN", "₹", false)
            },
            Currency::USD => Self::prefix("en-US", "$", false),
            Currency::GBP => Self::prefix("en-GB", "£", false),
            Currency::EUR => Self {
                locale: "de-DE",
                symbol: "€",
                symbol_after: true,
                spaced: true,
                group_separator: '.',
                decimal_separator: ',',
                grouping: Grouping::Thousands,
            },
            Currency::JPY => Self::prefix("ja-JP", "¥", false),
            Currency::AUD => Self::prefix("en-AU", "$", false),
            Currency::CAD => Self::prefix("en-CA", "$", false),
            Currency::SGD => Self::prefix("en-SG", "$", false),
            Currency::HKD => Self::prefix("en-HK", "HK$", false),
            Currency::CHF => Self::prefix("de-CH", "CHF", true),
            Currency::AED => Self::prefix("en-AE", "AED", true),
        }
    }

    /// Formats an amount, e.g. `₹1,23,456.00`
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.2}", rounded.abs());
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut number = self.group(integer);
        number.push(self.decimal_separator);
        number.push_str(fraction);

        let sign = if negative { "-" } else { "" };
        let space = if self.spaced { " " } else { "" };
        if self.symbol_after {
            format!("{sign}{number}{space}{}", self.symbol)
        } else {
            format!("{sign}{}{space}{number}", self.symbol)
        }
    }

    /// Formats a float from the wire; NaN and infinities render as zero
    pub fn format_f64(&self, amount: f64) -> String {
        self.format(sanitize_f64(amount))
    }

    fn group(&self, integer: &str) -> String {
        let digits: Vec<char> = integer.chars().collect();
        let mut groups: Vec<String> = Vec::new();
        let mut end = digits.len();

        let mut size = 3;
        while end > 0 {
            let start = end.saturating_sub(size);
            groups.push(digits[start..end].iter().collect());
            end = start;
            if self.grouping == Grouping::Indian {
                size = 2;
            }
        }

        groups.reverse();
        groups.join(&self.group_separator.to_string())
    }
}
