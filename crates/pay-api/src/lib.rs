//! # pay-api
//!
//! HTTP layer for the payment-session gateway.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Checkout-session and payment-intent handlers
//! - Single-origin CORS headers
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | OPTIONS | `/create-checkout-session` | CORS preflight |
//! | POST | `/create-checkout-session` | Create checkout session |
//! | OPTIONS | `/create-payment-intent` | CORS preflight |
//! | POST | `/create-payment-intent` | Create payment intent |
//!
//! Any other method on the payment paths answers 405.

pub mod cors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
