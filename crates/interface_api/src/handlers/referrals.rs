//! Referral handlers

use axum::{extract::Query, Json};
use rust_decimal::Decimal;

use core_kernel::Rate;
use domain_pricing::{default_commission_rate, referrals_to_cover};

use crate::dto::referral::*;
use crate::error::ApiError;

/// How many referrals pay for a plan
pub async fn referral_coverage(
    Query(query): Query<ReferralCoverageQuery>,
) -> Result<Json<ReferralCoverageResponse>, ApiError> {
    let commission_rate = match query.commission_percent {
        Some(pct) if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED => {
            return Err(ApiError::BadRequest(format!(
                "commission_percent must be between 0 and 100, got {pct}"
            )));
        }
        Some(pct) => Rate::from_percentage(pct),
        None => default_commission_rate(),
    };

    Ok(Json(ReferralCoverageResponse {
        plan_price: query.plan_price,
        average_price: query.average_price,
        commission_rate,
        referrals_needed: referrals_to_cover(query.plan_price, query.average_price, commission_rate),
    }))
}
