//! Request-body decoding shared by the submission endpoints.

use actix_web::web;
use futures_util::StreamExt;

use crate::domain::SubmissionError;
use crate::domain::body_fields::{FormBody, into_form_body};

/// Largest accepted submission body.
pub const MAX_FORM_BODY_BYTES: usize = 256 * 1024;

/// Message reported when a body exceeds [`MAX_FORM_BODY_BYTES`].
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "payload reached size limit";

/// Drain the request payload and parse it with [`parse_form_body`].
///
/// Oversized bodies and stream failures are transport failures, so they
/// leave through the JSON error envelope like every other failure.
pub async fn read_form_body(mut payload: web::Payload) -> Result<FormBody, SubmissionError> {
    let mut raw = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| SubmissionError::transport(err.to_string()))?;
        if raw.len() + chunk.len() > MAX_FORM_BODY_BYTES {
            return Err(SubmissionError::transport(PAYLOAD_TOO_LARGE_MESSAGE));
        }
        raw.extend_from_slice(&chunk);
    }
    parse_form_body(&raw)
}

/// Parse raw bytes as JSON and view the result as a form body.
///
/// Bodies that are valid JSON but not objects read as empty forms, so they
/// fail field validation rather than parsing. Invalid JSON is a transport
/// failure carrying the parser message.
///
/// # Examples
/// ```
/// use breakout_backend::inbound::http::body::parse_form_body;
///
/// let form = parse_form_body(br#"{"name":"Ana"}"#).expect("valid json");
/// assert_eq!(form["name"], "Ana");
/// assert!(parse_form_body(b"[1, 2]").expect("valid json").is_empty());
/// assert!(parse_form_body(b"not json").is_err());
/// ```
pub fn parse_form_body(raw: &[u8]) -> Result<FormBody, SubmissionError> {
    serde_json::from_slice(raw)
        .map(into_form_body)
        .map_err(|err| SubmissionError::transport(err.to_string()))
}
