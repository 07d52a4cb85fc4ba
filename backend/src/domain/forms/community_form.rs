//! State machine for the join-the-community form and its member roster.
//!
//! Submitting inserts the upper-cased name at the front of the roster before
//! the request settles. A failed request leaves that entry in place.

use serde_json::Value;

use crate::domain::body_fields::FormBody;
use crate::domain::contact::keys;

/// Editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommunityField {
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunityFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Names shown in the roster visualisation, newest first.
    pub names: Vec<String>,
    pub loading_names: bool,
    pub submitting: bool,
    pub submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunityFormEvent {
    FieldEdited { field: CommunityField, value: String },
    RosterLoadStarted,
    /// Replaces the roster wholesale.
    RosterLoaded(Vec<String>),
    /// Silent: the previous roster stays.
    RosterLoadFailed,
    Submitted,
    SubmissionSettled,
}

impl CommunityFormState {
    /// Empty form showing `names` until the roster loads.
    pub fn with_names(names: Vec<String>) -> Self {
        Self {
            names,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn reduce(mut self, event: CommunityFormEvent) -> Self {
        match event {
            CommunityFormEvent::FieldEdited { field, value } => match field {
                CommunityField::Name => self.name = value,
                CommunityField::Email => self.email = value,
                CommunityField::Phone => self.phone = value,
            },
            CommunityFormEvent::RosterLoadStarted => self.loading_names = true,
            CommunityFormEvent::RosterLoaded(names) => {
                self.names = names.iter().map(|name| name.to_uppercase()).collect();
                self.loading_names = false;
            }
            CommunityFormEvent::RosterLoadFailed => self.loading_names = false,
            CommunityFormEvent::Submitted => {
                let name = self.display_name();
                if !name.is_empty() {
                    self.names.insert(0, name);
                    self.submitting = true;
                }
            }
            CommunityFormEvent::SubmissionSettled => {
                self.submitting = false;
                self.submitted = true;
            }
        }
        self
    }

    /// Trimmed, upper-cased name as inserted and posted.
    pub fn display_name(&self) -> String {
        self.name.trim().to_uppercase()
    }

    /// Whether the submit button is enabled; one submission per visit.
    pub fn can_submit(&self) -> bool {
        !self.submitting
            && !self.submitted
            && [&self.name, &self.email, &self.phone]
                .iter()
                .all(|value| !value.trim().is_empty())
    }

    /// JSON body posted to the contacts endpoint, or `None` with a blank name.
    pub fn submission_body(&self) -> Option<FormBody> {
        let name = self.display_name();
        if name.is_empty() {
            return None;
        }
        let mut body = FormBody::new();
        body.insert(keys::NAME.to_owned(), Value::String(name));
        body.insert(keys::EMAIL.to_owned(), Value::String(self.email.clone()));
        body.insert(keys::PHONE.to_owned(), Value::String(self.phone.clone()));
        Some(body)
    }
}
