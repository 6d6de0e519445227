//! # pay-stripe
//!
//! Stripe payment processor for the payment-session gateway.
//!
//! `StripeClient` implements `pay_core::PaymentProcessor` on top of two
//! Stripe endpoints:
//!
//! 1. **Checkout Sessions** (`POST /v1/checkout/sessions`)
//!    - Hosted payment page, card only, one-time payment
//!    - Line items passed through as the caller sent them
//!
//! 2. **Payment Intents** (`POST /v1/payment_intents`)
//!    - Amount in the smallest currency unit
//!    - Automatic payment-method detection
//!    - Returns the client secret for client-side confirmation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::{PaymentProcessor, PaymentIntentParams, IntentRequest};
//! use pay_stripe::StripeClient;
//!
//! // Create client from environment (STRIPE_SECRET_KEY)
//! let stripe = StripeClient::from_env()?;
//!
//! let request = IntentRequest::new(1000, "cad");
//! let intent = stripe.create_payment_intent(&request.into()).await?;
//!
//! // Hand intent.client_secret to Stripe.js
//! ```

pub mod checkout;
pub mod client;
pub mod config;
pub mod form;
pub mod intent;

// Re-exports
pub use client::StripeClient;
pub use config::StripeConfig;
pub use form::to_form_params;
