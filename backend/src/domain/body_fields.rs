//! Loose coercion of JSON request bodies into trimmed text fields.
//!
//! Form bodies arrive as arbitrary JSON. Strings are taken as-is, numbers and
//! booleans use their textual form, arrays and objects their compact JSON,
//! and `null` or a missing key reads as empty. Every value is trimmed.

use serde_json::{Map, Value};

/// JSON object view of a request body.
pub type FormBody = Map<String, Value>;

/// Treat any non-object JSON document as an empty form.
pub fn into_form_body(value: Value) -> FormBody {
    match value {
        Value::Object(map) => map,
        _ => FormBody::new(),
    }
}

/// Coerce `body[key]` to trimmed text.
///
/// # Examples
/// ```
/// use breakout_backend::domain::body_fields::field_text;
/// use serde_json::json;
///
/// let body = json!({ "name": "  Ana ", "age": 20, "tags": ["a"] });
/// let body = body.as_object().expect("object literal");
/// assert_eq!(field_text(body, "name"), "Ana");
/// assert_eq!(field_text(body, "age"), "20");
/// assert_eq!(field_text(body, "tags"), r#"["a"]"#);
/// assert_eq!(field_text(body, "missing"), "");
/// ```
pub fn field_text(body: &FormBody, key: &str) -> String {
    match body.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.trim().to_owned(),
        Some(other) => other.to_string().trim().to_owned(),
    }
}

/// Like [`field_text`], but `None` when the trimmed text is empty.
pub fn optional_field_text(body: &FormBody, key: &str) -> Option<String> {
    Some(field_text(body, key)).filter(|text| !text.is_empty())
}
