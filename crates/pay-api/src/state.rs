//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the payment processor, gateway settings, and CORS policy. Everything
//! is built once at startup and read-only afterwards.

use crate::cors::CorsPolicy;
use pay_core::{BoxedPaymentProcessor, GatewaySettings};
use pay_stripe::StripeClient;
use std::net::SocketAddr;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Emit JSON log lines instead of text
    pub json_logs: bool,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            json_logs: lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Remote payment API
    pub processor: BoxedPaymentProcessor,
    /// Origin, redirect URLs, default currency
    pub settings: Arc<GatewaySettings>,
    /// Header policy derived from `settings`
    pub cors: CorsPolicy,
}

impl AppState {
    /// Build state with the Stripe client and settings from the environment
    pub fn from_env() -> anyhow::Result<Self> {
        let settings = GatewaySettings::load()
            .map_err(|e| anyhow::anyhow!("Failed to load gateway settings: {}", e))?;

        let stripe = StripeClient::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;
        if stripe.config().is_test_mode() {
            tracing::warn!("Stripe is in test mode");
        }

        Self::new(Arc::new(stripe), settings)
    }

    /// Build state around any processor (tests inject stubs here)
    pub fn new(processor: BoxedPaymentProcessor, settings: GatewaySettings) -> anyhow::Result<Self> {
        let cors = CorsPolicy::new(&settings)?;
        Ok(Self {
            processor,
            settings: Arc::new(settings),
            cors,
        })
    }
}
