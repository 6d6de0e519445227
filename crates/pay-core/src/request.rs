//! # Request Bodies
//!
//! JSON body helpers shared by both handlers.

use crate::error::{GatewayError, GatewayResult};
use serde_json::{Map, Value};

/// Message for a body that is the JSON literal `null`
pub const NULL_BODY: &str = "Request body must be a JSON object, not null";

/// Parse a raw request body as JSON and return its top-level fields.
///
/// A JSON `null` body has no fields to read and is malformed. Any other
/// non-object body (an array, a number, a string) yields an empty field map,
/// so the caller's own validation reports the missing fields.
pub fn parse_fields(body: &[u8]) -> GatewayResult<Map<String, Value>> {
    let value: Value = serde_json::from_slice(body)?;
    match value {
        Value::Object(fields) => Ok(fields),
        Value::Null => Err(GatewayError::MalformedBody(NULL_BODY.to_string())),
        _ => Ok(Map::new()),
    }
}

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy; everything else (including empty
/// arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
