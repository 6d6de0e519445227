//! # Payment Processor Trait
//!
//! The single seam between the gateway handlers and the remote payment API.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PaymentProcessor (trait)                   │
//! │  ├── create_checkout_session()                              │
//! │  ├── create_payment_intent()                                │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                  ┌─────────┴─────────┐
//!                  │                   │
//!          ┌───────┴───────┐   ┌───────┴───────┐
//!          │ StripeClient  │   │  test stubs   │
//!          └───────────────┘   └───────────────┘
//! ```
//!
//! The production client is built once at startup and shared read-only by
//! every request. Neither operation is idempotent: each call creates a new
//! remote object.

use crate::checkout::{CheckoutSession, CheckoutSessionParams};
use crate::error::ProcessorError;
use crate::intent::{PaymentIntent, PaymentIntentParams};
use async_trait::async_trait;
use std::sync::Arc;

/// Capability interface over the remote payment API.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create a hosted checkout session.
    ///
    /// # Returns
    /// The processor's session, whose `id` the caller hands to the client SDK
    /// to redirect the payer.
    async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<CheckoutSession, ProcessorError>;

    /// Create a payment intent.
    ///
    /// # Returns
    /// The processor's intent, carrying the client secret used to confirm it.
    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> Result<PaymentIntent, ProcessorError>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Shared, dynamically dispatched processor handle
pub type BoxedPaymentProcessor = Arc<dyn PaymentProcessor>;
