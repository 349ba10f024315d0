//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub plans: usize,
    pub promo_codes: usize,
    pub countries: usize,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check, reporting the loaded reference data
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let reference = state.reference.as_ref();
    Json(ReadinessResponse {
        status: "ready".to_string(),
        plans: reference.plans.plans().len(),
        promo_codes: reference.promos.len(),
        countries: reference.countries.entries.len(),
    })
}
