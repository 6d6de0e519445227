//! # Form Encoding
//!
//! Stripe's API takes `application/x-www-form-urlencoded` bodies with nested
//! values spelled in bracket notation: `line_items[0][price_data][currency]`.
//! Line items arrive as arbitrary JSON, so the encoder works on
//! `serde_json::Value` rather than typed structs.

use serde::Serialize;
use serde_json::Value;

/// Flatten any serializable value into Stripe form pairs
pub fn to_form_params<T: Serialize>(value: &T) -> serde_json::Result<Vec<(String, String)>> {
    let value = serde_json::to_value(value)?;
    let mut params = Vec::new();
    match value {
        Value::Object(fields) => {
            for (key, field) in fields {
                flatten(key, field, &mut params);
            }
        }
        other => flatten(String::new(), other, &mut params),
    }
    Ok(params)
}

fn flatten(key: String, value: Value, out: &mut Vec<(String, String)>) {
    match value {
        // dropped: Stripe reads an empty value as "unset"
        Value::Null => {}
        Value::Bool(b) => out.push((key, b.to_string())),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::String(s) => out.push((key, s)),
        Value::Array(items) => {
            for (i, item) in items.into_iter().enumerate() {
                flatten(format!("{}[{}]", key, i), item, out);
            }
        }
        Value::Object(fields) => {
            for (name, field) in fields {
                flatten(format!("{}[{}]", key, name), field, out);
            }
        }
    }
}
