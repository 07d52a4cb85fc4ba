//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps each
//! category onto a status code and the uniform JSON error envelope; nothing in
//! the domain knows about HTTP.

use thiserror::Error;

use super::ports::RecordStoreError;

/// Message returned whenever record-store credentials are absent.
pub const MISSING_STORE_CONFIG_MESSAGE: &str = "Missing AIRTABLE_BASE_ID or AIRTABLE_API_KEY";

/// Message returned when the application form misses a mandatory field.
pub const MISSING_APPLICATION_FIELDS_MESSAGE: &str =
    "Todos los campos son requeridos excepto LinkedIn";

/// Message returned when a contact entry has no name.
pub const MISSING_CONTACT_NAME_MESSAGE: &str = "Name is required";

/// Message returned when the record store answers with a non-success status.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Airtable request failed";

/// Required configuration is absent. Always a server fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A credential variable is unset or empty.
    #[error("Missing AIRTABLE_BASE_ID or AIRTABLE_API_KEY")]
    MissingCredential {
        /// Name of the first variable found missing.
        variable: &'static str,
    },
}

/// Caller-supplied data failed a required-field check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more mandatory application fields are blank.
    #[error("Todos los campos son requeridos excepto LinkedIn")]
    MissingApplicationFields {
        /// Body keys that were blank after trimming.
        fields: Vec<&'static str>,
    },
    /// The contact entry has no name.
    #[error("Name is required")]
    MissingContactName,
}

/// Failure of one submission or listing request.
///
/// Every variant is terminal for the request; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Record-store configuration is missing.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The request body failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The record store answered with a non-success status.
    #[error("Airtable request failed")]
    Upstream {
        /// Raw upstream status code.
        status: u16,
        /// Upstream response body, verbatim.
        body: String,
    },
    /// Body parsing or network I/O failed.
    #[error("{message}")]
    Transport {
        /// Underlying failure message.
        message: String,
    },
}

impl SubmissionError {
    /// Helper for body-parsing and I/O failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

impl From<RecordStoreError> for SubmissionError {
    fn from(error: RecordStoreError) -> Self {
        match error {
            RecordStoreError::Upstream { status, body } => Self::Upstream { status, body },
            RecordStoreError::Transport { message } | RecordStoreError::Decode { message } => {
                Self::Transport { message }
            }
        }
    }
}
