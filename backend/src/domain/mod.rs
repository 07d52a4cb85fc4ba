//! Domain types and services.
//!
//! Purpose: keep submission rules, phone normalization, and reference data
//! independent of HTTP and of the record-store vendor. Adapters talk to this
//! layer through the traits in [`ports`].
//!
//! Public surface:
//! - [`SubmissionService`] and [`RosterService`]: the use-cases driven by the
//!   HTTP adapter.
//! - [`SubmissionError`] with its [`ConfigurationError`] and
//!   [`ValidationError`] causes.
//! - [`phone`], [`country`], and [`forms`]: the logic shared with the
//!   browser forms.

pub mod application;
pub mod body_fields;
pub mod contact;
pub mod country;
pub mod error;
pub mod forms;
pub mod phone;
pub mod ports;
pub mod roster;
mod roster_service;
mod submission_service;

pub use self::error::{
    ConfigurationError, MISSING_APPLICATION_FIELDS_MESSAGE, MISSING_CONTACT_NAME_MESSAGE,
    MISSING_STORE_CONFIG_MESSAGE, SubmissionError, UPSTREAM_FAILURE_MESSAGE, ValidationError,
};
pub use self::roster_service::RosterService;
pub use self::submission_service::{SubmissionReceipt, SubmissionService};
