//! # Payment Intents
//!
//! Request, response, and processor parameter types for payment intents.
//! Amounts are in the smallest currency unit (cents for CAD/USD).
//!
//! The gateway only checks that `amount` is present and truthy. The amount
//! and currency are otherwise forwarded exactly as the caller sent them, and
//! the processor decides whether they are acceptable.

use crate::error::{GatewayError, GatewayResult};
use crate::request::{is_truthy, parse_fields};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validation message for a missing or falsy `amount`
pub const AMOUNT_REQUIRED: &str = "Amount is required.";

/// Validated payment intent request
#[derive(Debug, Clone, PartialEq)]
pub struct IntentRequest {
    /// Amount in the smallest currency unit, as sent
    pub amount: Value,
    /// ISO 4217 code, as sent, or the configured default
    pub currency: Value,
}

impl IntentRequest {
    pub fn new(amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount: Value::from(amount),
            currency: Value::String(currency.into()),
        }
    }

    /// Parse and validate a raw request body.
    ///
    /// `default_currency` applies only when `currency` is absent.
    pub fn from_body(body: &[u8], default_currency: &str) -> GatewayResult<Self> {
        let mut fields = parse_fields(body)?;

        let amount = match fields.remove("amount") {
            Some(value) if is_truthy(&value) => value,
            _ => return Err(GatewayError::InvalidInput(AMOUNT_REQUIRED.to_string())),
        };

        let currency = fields
            .remove("currency")
            .unwrap_or_else(|| Value::String(default_currency.to_string()));

        Ok(Self { amount, currency })
    }
}

/// Successful intent response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Automatic payment-method detection toggle
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AutomaticPaymentMethods {
    pub enabled: bool,
}

/// Parameters sent to the processor to create a payment intent
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentIntentParams {
    pub amount: Value,
    pub currency: Value,
    pub automatic_payment_methods: AutomaticPaymentMethods,
}

impl From<IntentRequest> for PaymentIntentParams {
    fn from(request: IntentRequest) -> Self {
        Self {
            amount: request.amount,
            currency: request.currency,
            automatic_payment_methods: AutomaticPaymentMethods { enabled: true },
        }
    }
}

/// A payment intent created by the processor
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    pub id: String,
    /// Secret the payer's client uses to confirm the payment
    pub client_secret: String,
    pub amount: u64,
    pub currency: String,
    /// Processor lifecycle status (e.g. `requires_payment_method`)
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<PaymentIntent> for IntentResponse {
    fn from(intent: PaymentIntent) -> Self {
        Self {
            client_secret: intent.client_secret,
        }
    }
}
