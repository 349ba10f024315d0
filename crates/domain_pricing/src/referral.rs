//! Referral coverage hint
//!
//! Shown next to the plan picker: how many referred sales, at the average
//! referral price, pay for the selected plan through commission.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Rate;

/// Commission earned on a referred sale (15%)
pub fn default_commission_rate() -> Rate {
    Rate::from_percentage(dec!(15))
}

/// Referrals needed to cover `plan_price`, rounded up
///
/// Returns `None` when the commission per referral is zero or negative.
pub fn referrals_to_cover(
    plan_price: Decimal,
    average_referral_price: Decimal,
    commission_rate: Rate,
) -> Option<u64> {
    let per_referral = average_referral_price * commission_rate.as_decimal();
    if per_referral <= Decimal::ZERO {
        return None;
    }
    let needed = (plan_price.max(Decimal::ZERO) / per_referral).ceil();
    needed.to_u64()
}
