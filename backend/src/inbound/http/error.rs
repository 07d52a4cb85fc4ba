//! HTTP mapping for submission failures.
//!
//! Every failure leaves the service as the same JSON envelope:
//! `{ "error", "upstreamStatus"?, "details"?, "hint"? }`, with absent members
//! omitted rather than `null`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::{MISSING_STORE_CONFIG_MESSAGE, SubmissionError, UPSTREAM_FAILURE_MESSAGE};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Uniform error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// User-facing message.
    #[schema(example = "Airtable request failed")]
    pub error: String,
    /// Status returned by the record store, when it answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 422)]
    pub upstream_status: Option<u16>,
    /// Raw upstream response body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Remediation hint for operators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Handler failure carrying its status and envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .envelope.error)]
pub struct ApiError {
    status: StatusCode,
    envelope: ErrorEnvelope,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            envelope: ErrorEnvelope {
                error: message.into(),
                upstream_status: None,
                details: None,
                hint: None,
            },
        }
    }

    /// Attach a remediation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.envelope.hint = Some(hint.into());
        self
    }

    /// Drop the upstream body from the envelope.
    #[must_use]
    pub fn without_details(mut self) -> Self {
        self.envelope.details = None;
        self
    }

    /// Whether the failure came from a non-success record-store response.
    pub fn is_upstream(&self) -> bool {
        self.envelope.upstream_status.is_some()
    }

    pub fn envelope(&self) -> &ErrorEnvelope {
        &self.envelope
    }
}

/// Upstream status to relay. Codes outside the HTTP range become 502.
fn relay_status(upstream: u16) -> StatusCode {
    StatusCode::from_u16(upstream).unwrap_or(StatusCode::BAD_GATEWAY)
}

impl From<SubmissionError> for ApiError {
    fn from(error: SubmissionError) -> Self {
        match error {
            SubmissionError::Configuration(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                MISSING_STORE_CONFIG_MESSAGE,
            ),
            SubmissionError::Validation(err) => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            SubmissionError::Upstream { status, body } => {
                let mut api = Self::new(relay_status(status), UPSTREAM_FAILURE_MESSAGE);
                api.envelope.upstream_status = Some(status);
                api.envelope.details = Some(body);
                api
            }
            SubmissionError::Transport { message } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(&self.envelope)
    }
}
