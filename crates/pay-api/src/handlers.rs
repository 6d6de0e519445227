//! # Request Handlers
//!
//! The two payment handlers plus a health check.
//!
//! Both payment handlers share the same dispatch: OPTIONS gets the preflight
//! reply, anything but POST gets 405, and a POST body is validated and then
//! forwarded to the payment processor in a single call. Neither handler
//! retries; a processor failure is reported to the caller immediately.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use pay_core::{
    CheckoutRequest, CheckoutResponse, CheckoutSessionParams, GatewayError, GatewayResult,
    IntentRequest, IntentResponse, PaymentIntentParams,
};
use serde::Serialize;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn error_to_response(state: &AppState, err: GatewayError) -> Response {
    if err.is_client_error() {
        warn!("Rejected request: {}", err);
    } else {
        error!("Request failed: {}", err);
    }

    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match err {
        GatewayError::MethodNotAllowed => state.cors.method_not_allowed(),
        err => state.cors.json(status, &ErrorResponse::new(err.to_string())),
    }
}

fn respond<T: Serialize>(state: &AppState, result: GatewayResult<T>) -> Response {
    match result {
        Ok(body) => state.cors.json(StatusCode::OK, &body),
        Err(err) => error_to_response(state, err),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "pay-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a hosted checkout session from `{"lineItems": [...]}`
#[instrument(skip(state, method, body), fields(invocation = %Uuid::new_v4(), method = %method))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    if let Some(response) = state.cors.gate(&method) {
        return response;
    }
    let result = checkout_session(&state, &body).await;
    respond(&state, result)
}

async fn checkout_session(state: &AppState, body: &[u8]) -> GatewayResult<CheckoutResponse> {
    let request = CheckoutRequest::from_body(body)?;
    let params = CheckoutSessionParams::payment(request.line_items, &state.settings);

    info!(
        "Creating checkout session: {} line items via {}",
        params.line_items.len(),
        state.processor.provider_name()
    );

    let session = state.processor.create_checkout_session(&params).await?;

    info!("Created checkout session: {}", session.id);
    Ok(session.into())
}

/// Create a payment intent from `{"amount": <minor units>, "currency": "..."}`
#[instrument(skip(state, method, body), fields(invocation = %Uuid::new_v4(), method = %method))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    if let Some(response) = state.cors.gate(&method) {
        return response;
    }
    let result = payment_intent(&state, &body).await;
    respond(&state, result)
}

async fn payment_intent(state: &AppState, body: &[u8]) -> GatewayResult<IntentResponse> {
    let request = IntentRequest::from_body(body, &state.settings.default_currency)?;

    info!(
        "Creating payment intent: amount={} {} via {}",
        request.amount,
        request.currency,
        state.processor.provider_name()
    );

    let params = PaymentIntentParams::from(request);
    let intent = state.processor.create_payment_intent(&params).await?;

    info!("Created payment intent: {} ({})", intent.id, intent.status);
    Ok(intent.into())
}
