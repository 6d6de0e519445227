//! # Gateway Error Types
//!
//! Typed error handling for the payment-session gateway.
//! Every handler outcome is a `Result<T, GatewayError>`; the HTTP layer maps
//! each kind to a status code with [`GatewayError::status_code`].

use thiserror::Error;

/// Failure reported by the payment processor (or the transport to it).
///
/// `Display` yields the bare message so it can be relayed to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessorError {
    /// The processor answered with an error body
    #[error("{message}")]
    Rejected {
        /// HTTP status returned by the processor
        status: u16,
        /// Processor error code (e.g. `card_declined`), when provided
        code: Option<String>,
        message: String,
    },

    /// The request never got a usable answer (DNS, TLS, timeout, reset)
    #[error("{0}")]
    Network(String),

    /// The processor answered 2xx but the body could not be understood
    #[error("{0}")]
    InvalidResponse(String),
}

impl ProcessorError {
    /// Shorthand for a rejection without an HTTP status (used by stubs)
    pub fn rejected(message: impl Into<String>) -> Self {
        ProcessorError::Rejected {
            status: 402,
            code: None,
            message: message.into(),
        }
    }

    /// Processor error code, if the processor supplied one
    pub fn code(&self) -> Option<&str> {
        match self {
            ProcessorError::Rejected { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Core error type for all gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing or invalid required field; the message is safe to show callers
    #[error("{0}")]
    InvalidInput(String),

    /// HTTP verb outside {OPTIONS, POST}
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Request body is not valid JSON, or is JSON `null`.
    ///
    /// Reported as a server error with the parser's message, like any other
    /// unexpected failure past the method gate.
    #[error("{0}")]
    MalformedBody(String),

    /// The payment processor rejected or failed the call
    #[error(transparent)]
    Processor(#[from] ProcessorError),

    /// Startup configuration problems (missing keys, invalid URLs)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GatewayError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::InvalidInput(_) => 400,
            GatewayError::MethodNotAllowed => 405,
            GatewayError::MalformedBody(_) => 500,
            GatewayError::Processor(_) => 500,
            GatewayError::Configuration(_) => 500,
        }
    }

    /// True for errors caused by the caller's request
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::MalformedBody(err.to_string())
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
