//! # Stripe Checkout Sessions
//!
//! Wire type for `POST /v1/checkout/sessions`.

use chrono::DateTime;
use pay_core::CheckoutSession;
use serde::Deserialize;

pub(crate) const CHECKOUT_SESSIONS_PATH: &str = "/v1/checkout/sessions";

#[derive(Debug, Deserialize)]
pub(crate) struct StripeCheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl From<StripeCheckoutSession> for CheckoutSession {
    fn from(session: StripeCheckoutSession) -> Self {
        Self {
            id: session.id,
            url: session.url,
            expires_at: session.expires_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        }
    }
}
