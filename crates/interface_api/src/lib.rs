//! HTTP API Layer
//!
//! This crate exposes the pricing engine over HTTP using Axum, so the
//! storefront can have quotes computed server-side and re-verify the total a
//! customer saw before a payment order is created.
//!
//! # Architecture
//!
//! - **Handlers**: Catalog, quote, verification and referral endpoints
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(ReferenceData::standard()), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_pricing::ReferenceData;

use crate::config::ApiConfig;
use crate::handlers::{catalog, health, quotes, referrals};
use crate::middleware::{audit_middleware, REQUEST_ID_HEADER};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only pricing tables, shared by every request
    pub reference: Arc<ReferenceData>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `reference` - Pricing reference data
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(reference: Arc<ReferenceData>, config: ApiConfig) -> Router {
    let state = AppState { reference, config };
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Quote routes
    let quote_routes = Router::new()
        .route("/", post(quotes::create_quote))
        .route("/verify", post(quotes::verify_quote));

    let api_routes = Router::new()
        .route("/catalog", get(catalog::get_catalog))
        .nest("/quotes", quote_routes)
        .route("/referrals/coverage", get(referrals::referral_coverage))
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
