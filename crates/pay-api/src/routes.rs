//! # Routes
//!
//! Axum router configuration for the payment gateway.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{any, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router
///
/// Routes:
/// - Payment handlers (every method; the handler answers OPTIONS and 405s):
///   - /create-checkout-session
///   - /create-payment-intent
///
/// - Function-style aliases for clients built against a serverless deploy:
///   - /.netlify/functions/create-checkout-session
///   - /.netlify/functions/create-payment-intent
///
/// - Health:
///   - GET / and GET /health
pub fn create_router(state: AppState) -> Router {
    let payment_routes = Router::new()
        .route("/create-checkout-session", any(handlers::create_checkout_session))
        .route("/create-payment-intent", any(handlers::create_payment_intent));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .merge(payment_routes.clone())
        .nest("/.netlify/functions", payment_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
