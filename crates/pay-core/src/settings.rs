//! # Gateway Settings
//!
//! The trusted CORS origin, checkout redirect URLs, and default currency.
//! Defaults can be overridden by `config/gateway.toml` and then by
//! `GATEWAY_*` environment variables. Settings are validated once at startup.

use crate::error::{GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://book.zite.so";
pub const DEFAULT_SUCCESS_URL: &str = "https://vetgo-book.netlify.app/success";
pub const DEFAULT_CANCEL_URL: &str = "https://vetgo-book.netlify.app/cancel";
pub const DEFAULT_CURRENCY: &str = "cad";

const CONFIG_PATHS: [&str; 3] = [
    "config/gateway.toml",
    "../config/gateway.toml",
    "../../config/gateway.toml",
];

/// Static gateway configuration shared by both handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    /// The single origin advertised in `Access-Control-Allow-Origin`
    pub allowed_origin: String,

    /// Where the hosted checkout page sends the payer after paying
    pub success_url: String,

    /// Where the hosted checkout page sends the payer on cancel
    pub cancel_url: String,

    /// Currency used when an intent request names none
    pub default_currency: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            success_url: DEFAULT_SUCCESS_URL.to_string(),
            cancel_url: DEFAULT_CANCEL_URL.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl GatewaySettings {
    /// Load from the first config file found, apply environment overrides,
    /// and validate.
    pub fn load() -> GatewayResult<Self> {
        let mut settings = Self::default();

        for path in CONFIG_PATHS {
            if let Ok(content) = std::fs::read_to_string(path) {
                settings = Self::from_toml_str(&content)
                    .map_err(|e| GatewayError::Configuration(format!("{}: {}", path, e)))?;
                tracing::info!("Loaded gateway settings from {}", path);
                break;
            }
        }

        let settings = settings.with_overrides(|key| std::env::var(key).ok());
        settings.validate()?;
        Ok(settings)
    }

    /// Parse a TOML document; unspecified keys keep their defaults
    pub fn from_toml_str(content: &str) -> GatewayResult<Self> {
        toml::from_str(content).map_err(|e| GatewayError::Configuration(e.to_string()))
    }

    /// Apply `GATEWAY_*` overrides from `lookup` (normally the process env)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(origin) = lookup("GATEWAY_ALLOWED_ORIGIN") {
            self.allowed_origin = origin;
        }
        if let Some(url) = lookup("GATEWAY_SUCCESS_URL") {
            self.success_url = url;
        }
        if let Some(url) = lookup("GATEWAY_CANCEL_URL") {
            self.cancel_url = url;
        }
        if let Some(currency) = lookup("GATEWAY_DEFAULT_CURRENCY") {
            self.default_currency = currency;
        }
        self
    }

    /// Builder: set the allowed origin
    pub fn with_allowed_origin(mut self, origin: impl Into<String>) -> Self {
        self.allowed_origin = origin.into();
        self
    }

    /// Builder: set both redirect URLs
    pub fn with_redirects(
        mut self,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        self.success_url = success_url.into();
        self.cancel_url = cancel_url.into();
        self
    }

    /// Check every field; the first problem found is reported
    pub fn validate(&self) -> GatewayResult<()> {
        let origin = parse_http_url("allowed_origin", &self.allowed_origin)?;
        if origin.origin().ascii_serialization() != self.allowed_origin {
            return Err(GatewayError::Configuration(format!(
                "allowed_origin must be scheme://host[:port] without a path: {}",
                self.allowed_origin
            )));
        }
        parse_http_url("success_url", &self.success_url)?;
        parse_http_url("cancel_url", &self.cancel_url)?;

        let currency = &self.default_currency;
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(GatewayError::Configuration(format!(
                "default_currency must be a lowercase three-letter code: {}",
                currency
            )));
        }
        Ok(())
    }
}

/// Parse an absolute http(s) URL with a host
fn parse_http_url(name: &str, value: &str) -> GatewayResult<Url> {
    let url = Url::parse(value)
        .map_err(|e| GatewayError::Configuration(format!("{} is not a valid URL ({}): {}", name, e, value)))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(url),
        _ => Err(GatewayError::Configuration(format!(
            "{} must be an absolute http(s) URL: {}",
            name, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GatewaySettings::default();
        assert_eq!(settings.allowed_origin, "https://book.zite.so");
        assert_eq!(settings.default_currency, "cad");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_toml_overlay_keeps_defaults() {
        let settings =
            GatewaySettings::from_toml_str(r#"allowed_origin = "https://staging.zite.so""#).unwrap();
        assert_eq!(settings.allowed_origin, "https://staging.zite.so");
        assert_eq!(settings.success_url, DEFAULT_SUCCESS_URL);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("GATEWAY_SUCCESS_URL", "http://localhost:8888/success"),
            ("GATEWAY_DEFAULT_CURRENCY", "usd"),
        ]
        .into_iter()
        .collect();

        let settings = GatewaySettings::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(settings.success_url, "http://localhost:8888/success");
        assert_eq!(settings.cancel_url, DEFAULT_CANCEL_URL);
        assert_eq!(settings.default_currency, "usd");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_origin_validation() {
        let bad = ["https://book.zite.so/", "book.zite.so", "https://", "*", "https://a.b/path"];
        for origin in bad {
            let settings = GatewaySettings::default().with_allowed_origin(origin);
            assert!(settings.validate().is_err(), "{origin} should be rejected");
        }
        let settings = GatewaySettings::default().with_allowed_origin("http://localhost:3000");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_origin_rejects_unparseable_authority() {
        for origin in ["https://:@", "https://a:notaport", "https://user:pw@evil.example"] {
            let settings = GatewaySettings::default().with_allowed_origin(origin);
            assert!(
                matches!(settings.validate(), Err(GatewayError::Configuration(_))),
                "{origin} should be rejected"
            );
        }
    }

    #[test]
    fn test_redirect_validation() {
        let settings = GatewaySettings::default().with_redirects("/success", DEFAULT_CANCEL_URL);
        assert!(matches!(settings.validate(), Err(GatewayError::Configuration(_))));

        for url in ["https://%%%/s", "http://[::1/c", "mailto:pay@zite.so", "ftp://files.zite.so/ok"] {
            let settings = GatewaySettings::default().with_redirects(DEFAULT_SUCCESS_URL, url);
            assert!(settings.validate().is_err(), "{url} should be rejected");
        }

        let settings = GatewaySettings::default()
            .with_redirects("http://localhost:8888/success?session={CHECKOUT_SESSION_ID}", DEFAULT_CANCEL_URL);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_currency_validation() {
        let mut settings = GatewaySettings::default();
        settings.default_currency = "CAD".into();
        assert!(settings.validate().is_err());
        settings.default_currency = "cadd".into();
        assert!(settings.validate().is_err());
    }
}
