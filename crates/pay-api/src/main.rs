//! # Pay Gateway
//!
//! Checkout-session and payment-intent gateway in front of Stripe.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export GATEWAY_ALLOWED_ORIGIN=https://book.zite.so   # optional
//!
//! # Run the server
//! pay-gateway
//! ```

use pay_api::{routes, AppConfig, AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    if config.json_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    let state = AppState::from_env()?;
    let addr = config.socket_addr()?;

    info!("Environment: {}", config.environment);
    info!("Payment provider: {}", state.processor.provider_name());
    info!("Allowed origin: {}", state.settings.allowed_origin);

    let app = routes::create_router(state);

    info!("pay-gateway {} listening on http://{}", env!("CARGO_PKG_VERSION"), addr);

    if !config.is_production() {
        info!("Checkout: POST http://{}/create-checkout-session", addr);
        info!("Intent:   POST http://{}/create-payment-intent", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
