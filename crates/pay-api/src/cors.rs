//! # CORS Policy
//!
//! Fixed single-origin CORS headers shared by both payment handlers.
//!
//! The origin is advertised, not enforced: requests from other origins are
//! still served and the browser decides whether the page may read the reply.

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use pay_core::{GatewayError, GatewaySettings};
use serde::Serialize;

/// Methods advertised to preflight requests
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Request headers advertised to preflight requests
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Header policy for one trusted origin
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origin: HeaderValue,
}

impl CorsPolicy {
    /// Build from validated settings
    pub fn new(settings: &GatewaySettings) -> Result<Self, GatewayError> {
        let origin = HeaderValue::from_str(&settings.allowed_origin).map_err(|e| {
            GatewayError::Configuration(format!("allowed_origin is not a header value: {}", e))
        })?;
        Ok(Self { origin })
    }

    pub fn origin(&self) -> &HeaderValue {
        &self.origin
    }

    /// Short-circuit OPTIONS and non-POST requests before the body is read.
    ///
    /// Returns `None` when the request should be processed.
    pub fn gate(&self, method: &Method) -> Option<Response> {
        if method == Method::OPTIONS {
            Some(self.preflight())
        } else if method != Method::POST {
            Some(self.method_not_allowed())
        } else {
            None
        }
    }

    /// 200 with the three CORS headers and body `OK`
    pub fn preflight(&self) -> Response {
        let mut response = Response::new(Body::from("OK"));
        let headers = response.headers_mut();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, self.origin.clone());
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        response
    }

    /// 405 carrying only the origin header
    pub fn method_not_allowed(&self) -> Response {
        let mut response = Response::new(Body::from(GatewayError::MethodNotAllowed.to_string()));
        *response.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
        response
            .headers_mut()
            .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, self.origin.clone());
        response
    }

    /// JSON body with the origin header
    pub fn json<T: Serialize>(&self, status: StatusCode, body: &T) -> Response {
        let mut response = (status, Json(body)).into_response();
        response
            .headers_mut()
            .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, self.origin.clone());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CorsPolicy {
        CorsPolicy::new(&GatewaySettings::default()).unwrap()
    }

    #[test]
    fn test_gate() {
        let policy = policy();
        assert!(policy.gate(&Method::POST).is_none());
        assert_eq!(policy.gate(&Method::OPTIONS).unwrap().status(), StatusCode::OK);
        for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH, Method::HEAD] {
            assert_eq!(
                policy.gate(&method).unwrap().status(),
                StatusCode::METHOD_NOT_ALLOWED
            );
        }
    }

    #[test]
    fn test_preflight_headers() {
        let response = policy().preflight();
        let headers = response.headers();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://book.zite.so");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }

    #[test]
    fn test_method_not_allowed_headers() {
        let response = policy().method_not_allowed();
        assert_eq!(response.headers().len(), 1);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://book.zite.so"
        );
    }

    #[test]
    fn test_json_headers() {
        let response = policy().json(StatusCode::BAD_REQUEST, &serde_json::json!({"error": "x"}));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
