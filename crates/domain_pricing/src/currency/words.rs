//! Amount in words, as printed on invoices
//!
//! "Rupees one thousand nine hundred ninety nine and Paise fifty only".
//! The integer part is spelled in three-digit chunks joined by scale words;
//! the minor part is the fraction rounded to two digits.

use std::borrow::Cow;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use core_kernel::Currency;

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u128, &str); 3] = [
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Spells a non-negative integer in English without "and" or hyphens
pub fn integer_to_words(n: u128) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    if n < 100 {
        let tens = TENS[(n / 10) as usize];
        return match n % 10 {
            0 => tens.to_string(),
            ones => format!("{tens} {}", ONES[ones as usize]),
        };
    }
    if n < 1000 {
        let hundreds = format!("{} hundred", ONES[(n / 100) as usize]);
        return match n % 100 {
            0 => hundreds,
            rest => format!("{hundreds} {}", integer_to_words(rest)),
        };
    }

    let (scale, name) = SCALES
        .into_iter()
        .find(|(scale, _)| n >= *scale)
        .unwrap_or(SCALES[SCALES.len() - 1]);
    let head = format!("{} {name}", integer_to_words(n / scale));
    match n % scale {
        0 => head,
        rest => format!("{head} {}", integer_to_words(rest)),
    }
}

/// Major and minor unit names for a currency code
///
/// Unknown codes get a generic "<CODE> Units" / "Cents" pair.
pub fn unit_names(code: &str) -> (Cow<'static, str>, Cow<'static, str>) {
    let code = code.trim();
    let known = match Currency::from_code(code) {
        Some(Currency::INR) => Some(("Rupees", "Paise")),
        Some(Currency::USD) => Some(("US Dollars", "Cents")),
        Some(Currency::EUR) => Some(("Euros", "Cents")),
        Some(Currency::GBP) => Some(("Pounds Sterling", "Pence")),
        Some(Currency::JPY) => Some(("Japanese Yen", "Sen")),
        Some(Currency::CHF) => Some(("Swiss Francs", "Rappen")),
        Some(Currency::AUD) => Some(("Australian Dollars", "Cents")),
        Some(Currency::CAD) => Some(("Canadian Dollars", "Cents")),
        Some(Currency::SGD) => Some(("Singapore Dollars", "Cents")),
        Some(Currency::HKD) => Some(("Hong Kong Dollars", "Cents")),
        Some(Currency::AED) => Some(("UAE Dirhams", "Fils")),
        None => None,
    };

    match known {
        Some((major, minor)) => (Cow::Borrowed(major), Cow::Borrowed(minor)),
        None if code.is_empty() => unit_names(Currency::default().code()),
        None => (Cow::Owned(format!("{} Units", code.to_uppercase())), Cow::Borrowed("Cents")),
    }
}

/// Splits an amount into whole major units and two-digit minor units
///
/// Negative amounts count as zero. A fraction that rounds up to 100 carries
/// into the major part.
pub fn split_units(amount: Decimal) -> (u128, u32) {
    let amount = amount.max(Decimal::ZERO);
    let whole = amount.floor();
    let minor = ((amount - whole) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0);
    let major = whole.to_u128().unwrap_or(0);

    if minor >= 100 {
        (major + 1, 0)
    } else {
        (major, minor)
    }
}

/// Renders an amount in words for a currency code
pub fn amount_in_words(amount: Decimal, currency_code: &str) -> String {
    let (major_name, minor_name) = unit_names(currency_code);
    let (major, minor) = split_units(amount);

    match (major, minor) {
        (0, 0) => format!("{major_name} zero only"),
        (0, minor) => format!("{minor_name} {} only", integer_to_words(u128::from(minor))),
        (major, 0) => format!("{major_name} {} only", integer_to_words(major)),
        (major, minor) => format!(
            "{major_name} {} and {minor_name} {} only",
            integer_to_words(major),
            integer_to_words(u128::from(minor))
        ),
    }
}
