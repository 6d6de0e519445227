//! # pay-core
//!
//! Core types and traits for the payment-session gateway.
//!
//! This crate provides:
//! - `PaymentProcessor` trait over the remote payment API
//! - `CheckoutRequest` / `IntentRequest` body validation
//! - Processor parameter and result types for sessions and intents
//! - `GatewaySettings` for the trusted origin and redirect URLs
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{CheckoutRequest, CheckoutSessionParams, GatewaySettings};
//!
//! let settings = GatewaySettings::load()?;
//! let request = CheckoutRequest::from_body(&body)?;
//!
//! let params = CheckoutSessionParams::payment(request.line_items, &settings);
//! let session = processor.create_checkout_session(&params).await?;
//! ```

pub mod checkout;
pub mod error;
pub mod intent;
pub mod processor;
pub mod request;
pub mod settings;

// Re-exports for convenience
pub use checkout::{CheckoutRequest, CheckoutResponse, CheckoutSession, CheckoutSessionParams};
pub use error::{GatewayError, GatewayResult, ProcessorError};
pub use intent::{
    AutomaticPaymentMethods, IntentRequest, IntentResponse, PaymentIntent, PaymentIntentParams,
};
pub use processor::{BoxedPaymentProcessor, PaymentProcessor};
pub use settings::GatewaySettings;
