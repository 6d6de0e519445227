//! # Stripe Client
//!
//! `PaymentProcessor` implementation over Stripe's REST API.
//! One client is built at startup and shared by every request.

use crate::checkout::{StripeCheckoutSession, CHECKOUT_SESSIONS_PATH};
use crate::config::StripeConfig;
use crate::form::to_form_params;
use crate::intent::{StripePaymentIntent, PAYMENT_INTENTS_PATH};
use async_trait::async_trait;
use pay_core::{
    CheckoutSession, CheckoutSessionParams, GatewayError, PaymentIntent, PaymentIntentParams,
    PaymentProcessor, ProcessorError,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Stripe API client
pub struct StripeClient {
    config: StripeConfig,
    client: Client,
}

impl StripeClient {
    /// Create a new client from explicit configuration
    pub fn new(config: StripeConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(StripeConfig::from_env()?)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// POST form-encoded `params` to `path` and decode the JSON reply
    async fn post_form<P, R>(&self, path: &str, params: &P) -> Result<R, ProcessorError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let form = to_form_params(params)
            .map_err(|e| ProcessorError::InvalidResponse(format!("Failed to encode request: {}", e)))?;
        let url = format!("{}{}", self.config.api_base_url, path);

        debug!("POST {} ({} form fields)", url, form.len());

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form)
            .send()
            .await
            .map_err(|e| ProcessorError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProcessorError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);
            return Err(parse_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            ProcessorError::InvalidResponse(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentProcessor for StripeClient {
    #[instrument(skip(self, params), fields(items = params.line_items.len()))]
    async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> Result<CheckoutSession, ProcessorError> {
        let session: StripeCheckoutSession =
            self.post_form(CHECKOUT_SESSIONS_PATH, params).await?;

        info!("Created Stripe checkout session: id={}", session.id);
        Ok(session.into())
    }

    #[instrument(skip(self, params), fields(amount = %params.amount, currency = %params.currency))]
    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> Result<PaymentIntent, ProcessorError> {
        let intent: StripePaymentIntent = self.post_form(PAYMENT_INTENTS_PATH, params).await?;

        info!("Created Stripe payment intent: id={}, status={}", intent.id, intent.status);
        intent.try_into()
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe Error Bodies
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
}

fn parse_error(status: StatusCode, body: &str) -> ProcessorError {
    let parsed = serde_json::from_str::<StripeErrorResponse>(body).ok();
    let (message, code) = match parsed {
        Some(StripeErrorResponse { error }) => {
            let message = error
                .message
                .or_else(|| error.code.clone())
                .or(error.error_type)
                .unwrap_or_else(|| format!("HTTP {}", status));
            (message, error.code)
        }
        None => (format!("HTTP {}: {}", status, body), None),
    };

    ProcessorError::Rejected {
        status: status.as_u16(),
        code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stripe_error() {
        let body = r#"{"error":{"message":"Your card was declined.","code":"card_declined","type":"card_error"}}"#;
        let err = parse_error(StatusCode::PAYMENT_REQUIRED, body);

        assert_eq!(err.to_string(), "Your card was declined.");
        assert_eq!(err.code(), Some("card_declined"));
    }

    #[test]
    fn test_parse_error_without_message() {
        let err = parse_error(StatusCode::BAD_REQUEST, r#"{"error":{"code":"parameter_missing"}}"#);
        assert_eq!(err.to_string(), "parameter_missing");
    }

    #[test]
    fn test_parse_non_stripe_error() {
        let err = parse_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: upstream down");
        assert_eq!(err.code(), None);
    }
}
