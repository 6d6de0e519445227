//! # Checkout Sessions
//!
//! Request, response, and processor parameter types for hosted checkout.

use crate::error::{GatewayError, GatewayResult};
use crate::request::parse_fields;
use crate::settings::GatewaySettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validation message for a missing, non-array, or empty `lineItems`
pub const LINE_ITEMS_REQUIRED: &str = "lineItems is required and must be a non-empty array";

/// Only card payments are offered on the hosted page
pub const PAYMENT_METHOD_CARD: &str = "card";

/// One-time payment checkout
pub const MODE_PAYMENT: &str = "payment";

/// Validated checkout request
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    /// Processor-defined line items, passed through untouched
    pub line_items: Vec<Value>,
}

impl CheckoutRequest {
    /// Parse and validate a raw request body
    pub fn from_body(body: &[u8]) -> GatewayResult<Self> {
        let mut fields = parse_fields(body)?;
        match fields.remove("lineItems") {
            Some(Value::Array(items)) if !items.is_empty() => Ok(Self { line_items: items }),
            _ => Err(GatewayError::InvalidInput(LINE_ITEMS_REQUIRED.to_string())),
        }
    }
}

/// Successful checkout response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutResponse {
    /// Processor session id
    pub id: String,
}

/// Parameters sent to the processor to open a checkout session
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckoutSessionParams {
    pub payment_method_types: Vec<String>,
    pub mode: String,
    pub line_items: Vec<Value>,
    pub success_url: String,
    pub cancel_url: String,
}

impl CheckoutSessionParams {
    /// Card-only, one-time payment session redirecting to the configured URLs
    pub fn payment(line_items: Vec<Value>, settings: &GatewaySettings) -> Self {
        Self {
            payment_method_types: vec![PAYMENT_METHOD_CARD.to_string()],
            mode: MODE_PAYMENT.to_string(),
            line_items,
            success_url: settings.success_url.clone(),
            cancel_url: settings.cancel_url.clone(),
        }
    }
}

/// A checkout session created by the processor
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    /// Opaque session identifier
    pub id: String,
    /// Hosted payment page URL
    pub url: Option<String>,
    /// When the session stops accepting payment
    pub expires_at: Option<DateTime<Utc>>,
}

impl CheckoutSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: None,
            expires_at: None,
        }
    }
}

impl From<CheckoutSession> for CheckoutResponse {
    fn from(session: CheckoutSession) -> Self {
        Self { id: session.id }
    }
}
