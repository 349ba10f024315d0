//! Quote handlers

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use domain_pricing::{compute_invoice, InvoiceSession, PaymentAmount, Quote, ServerConfiguration};

use crate::dto::quote::*;
use crate::{error::ApiError, AppState};

/// Computes a quote from a checkout selection
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    request.validate()?;
    let (quote, session) = price(&state, &request)?;
    let payment = PaymentAmount::from_record(&quote.invoice)?;

    info!(
        plan = %request.plan_id,
        invoice_number = %quote.invoice.invoice_number,
        total = %quote.invoice.total,
        "Quote computed"
    );

    Ok(Json(QuoteResponse::new(quote, &session, payment)))
}

/// Recomputes a quote and checks it against the total the client showed
///
/// Responds 409 Conflict when the totals differ.
pub async fn verify_quote(
    State(state): State<AppState>,
    Json(request): Json<VerifyQuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    request.validate()?;
    let (quote, session) = price(&state, &request.quote)?;
    quote.invoice.verify_presented_total(request.presented_total)?;
    let payment = PaymentAmount::from_record(&quote.invoice)?;

    info!(
        invoice_number = %quote.invoice.invoice_number,
        amount = payment.amount,
        currency = %payment.currency,
        "Presented total verified"
    );

    Ok(Json(QuoteResponse::new(quote, &session, payment)))
}

fn price(state: &AppState, request: &QuoteRequest) -> Result<(Quote, InvoiceSession), ApiError> {
    let reference = state.reference.as_ref();
    let plan = reference.plans.get(request.plan_id.trim())?;

    let config = ServerConfiguration::for_plan(plan, request.billing_cycle)
        .with_quantity(request.quantity)
        .with_add_ons(request.add_ons.clone());
    let session = SessionRequest::resolve(
        request.session.as_ref(),
        state.config.timezone,
        state.config.due_days,
    );

    let quote = compute_invoice(
        &config,
        &request.address,
        request.promo_code.as_deref(),
        reference,
        &session,
    );
    Ok((quote, session))
}
