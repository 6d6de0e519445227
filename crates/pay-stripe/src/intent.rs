//! # Stripe Payment Intents
//!
//! Wire type for `POST /v1/payment_intents`.

use chrono::DateTime;
use pay_core::{PaymentIntent, ProcessorError};
use serde::Deserialize;

pub(crate) const PAYMENT_INTENTS_PATH: &str = "/v1/payment_intents";

#[derive(Debug, Deserialize)]
pub(crate) struct StripePaymentIntent {
    pub id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    pub amount: u64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub created: Option<i64>,
}

impl TryFrom<StripePaymentIntent> for PaymentIntent {
    type Error = ProcessorError;

    fn try_from(intent: StripePaymentIntent) -> Result<Self, Self::Error> {
        let client_secret = intent.client_secret.ok_or_else(|| {
            ProcessorError::InvalidResponse(format!(
                "Payment intent {} has no client_secret",
                intent.id
            ))
        })?;

        Ok(Self {
            id: intent.id,
            client_secret,
            amount: intent.amount,
            currency: intent.currency,
            status: intent.status,
            created_at: intent.created.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}
