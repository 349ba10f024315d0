//! HTTP tests for interface_api

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use domain_pricing::ReferenceData;
use interface_api::{config::ApiConfig, create_router};
use test_utils::{AddressFixtures, QuoteBuilder, SessionFixtures};

fn app() -> Router {
    create_router(Arc::new(ReferenceData::standard()), ApiConfig::default())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
    )
    .await
}

fn scenario() -> QuoteBuilder {
    QuoteBuilder::new().with_quantity(2).with_ipv4(2).with_storage_gb(50)
}

// ============================================================================
// Health & Catalog
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_reference_data() {
        let (status, body) = get("/health/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["plans"], 5);
        assert_eq!(body["promo_codes"], 2);
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_catalog_lists_plans_and_cycles() {
        let (status, body) = get("/api/v1/catalog").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["plans"].as_array().unwrap().len(), 5);
        assert_eq!(body["billing_cycles"].as_array().unwrap().len(), 6);
        assert_eq!(body["billing_cycles"][3]["cycle"], "annual");
        assert_eq!(body["billing_cycles"][3]["months"], 12);
    }
}

// ============================================================================
// Quotes
// ============================================================================

mod quote_tests {
    use super::*;

    #[tokio::test]
    async fn test_intra_state_quote() {
        let body = scenario().with_promo("WELCOME10").request_body();
        let (status, response) = post_json("/api/v1/quotes", &body).await;

        assert_eq!(status, StatusCode::OK);
        let invoice = &response["invoice"];
        assert_eq!(invoice["invoice_number"], SessionFixtures::invoice_number());
        assert_eq!(invoice["subtotal"], "5000");
        assert_eq!(invoice["tax"]["cgst"], "405");
        assert_eq!(invoice["tax"]["sgst"], "405");
        assert_eq!(invoice["total"], "5310");
        assert_eq!(invoice["formatted_total"], "₹5,310.00");
        assert_eq!(response["promo"]["status"], "applied");
        assert_eq!(response["payment"]["amount"], 531000);
        assert_eq!(response["payment"]["currency"], "INR");
    }

    #[tokio::test]
    async fn test_inter_state_quote() {
        let body = scenario()
            .with_promo("WELCOME10")
            .with_address(AddressFixtures::maharashtra())
            .request_body();
        let (status, response) = post_json("/api/v1/quotes", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["invoice"]["tax"]["igst"], "810");
        assert_eq!(response["invoice"]["total"], "5310");
    }

    #[tokio::test]
    async fn test_bogus_promo_is_flagged_not_rejected() {
        let body = scenario().with_promo("BOGUS").request_body();
        let (status, response) = post_json("/api/v1/quotes", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["promo"]["status"], "invalid");
        assert_eq!(response["invoice"]["promo_discount"], "0");
    }

    #[tokio::test]
    async fn test_unknown_plan_is_not_found() {
        let mut body = scenario().request_body();
        body["plan_id"] = "vps-mainframe".into();
        let (status, response) = post_json("/api/v1/quotes", &body).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(response["error"], "not_found");
    }

    #[tokio::test]
    async fn test_blank_plan_fails_validation() {
        let mut body = scenario().request_body();
        body["plan_id"] = "".into();
        let (status, response) = post_json("/api/v1/quotes", &body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_session_is_echoed_for_recomputes() {
        let (_, first) = post_json("/api/v1/quotes", &scenario().request_body()).await;

        let mut second_body = scenario().with_quantity(5).request_body();
        second_body["session"] = first["session"].clone();
        let (_, second) = post_json("/api/v1/quotes", &second_body).await;

        assert_eq!(first["invoice"]["invoice_number"], second["invoice"]["invoice_number"]);
        assert_ne!(first["invoice"]["total"], second["invoice"]["total"]);
    }

    #[tokio::test]
    async fn test_quote_without_session_opens_one() {
        let mut body = scenario().request_body();
        body.as_object_mut().unwrap().remove("session");
        let (status, response) = post_json("/api/v1/quotes", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(response["session"]["issued_at"].is_string());
        assert_eq!(response["invoice"]["total"], "5900");
    }
}

// ============================================================================
// Verification
// ============================================================================

mod verify_tests {
    use super::*;

    #[tokio::test]
    async fn test_matching_total_is_accepted() {
        let body = scenario().with_promo("WELCOME10").verify_body("5310.00");
        let (status, response) = post_json("/api/v1/quotes/verify", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["invoice"]["total"], "5310");
    }

    #[tokio::test]
    async fn test_tampered_total_is_a_conflict() {
        let body = scenario().with_promo("WELCOME10").verify_body(4000);
        let (status, response) = post_json("/api/v1/quotes/verify", &body).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(response["error"], "conflict");
        assert_eq!(response["details"][0], "computed=5310");
    }
}

// ============================================================================
// Referrals
// ============================================================================

mod referral_tests {
    use super::*;

    #[tokio::test]
    async fn test_referral_coverage() {
        let (status, body) = get("/api/v1/referrals/coverage?plan_price=2000&average_price=1000").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["referrals_needed"], 14);
    }

    #[tokio::test]
    async fn test_zero_average_price_has_no_answer() {
        let (status, body) = get("/api/v1/referrals/coverage?plan_price=2000&average_price=0").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["referrals_needed"].is_null());
    }

    #[tokio::test]
    async fn test_out_of_range_commission_is_rejected() {
        let (status, _) =
            get("/api/v1/referrals/coverage?plan_price=2000&average_price=1000&commission_percent=150").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
