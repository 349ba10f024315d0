//! Catalog handlers

use axum::{extract::State, Json};

use crate::dto::catalog::CatalogResponse;
use crate::AppState;

/// Lists plans, add-on tiers and billing cycles
pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse::from(state.reference.as_ref()))
}
