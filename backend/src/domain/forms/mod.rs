//! Client-side form state machines.
//!
//! Each form is a plain state value plus an event enum; `reduce` maps the
//! current state and one event to the next state without side effects, so
//! any renderer can drive it and tests can replay event sequences.

pub mod application_form;
pub mod community_form;

pub use application_form::{
    ApplicationField, ApplicationFormEvent, ApplicationFormState, ClientValidationError,
    CountryPicker, INSTITUTIONAL_EMAIL_MESSAGE, INVALID_PHONE_MESSAGE, SubmitStatus,
};
pub use community_form::{CommunityField, CommunityFormEvent, CommunityFormState};
