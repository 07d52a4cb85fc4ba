//! State machine for the long application form.

use serde_json::Value;
use thiserror::Error;

use crate::domain::application::{is_institutional_email, keys, motivation_meets_minimum};
use crate::domain::body_fields::FormBody;
use crate::domain::country::{Country, default_country, filter_countries};
use crate::domain::phone::{self, PhoneNumber};

/// Banner text for a non-institutional email.
pub const INSTITUTIONAL_EMAIL_MESSAGE: &str =
    "El correo debe ser un correo institucional PUCP (@pucp.edu.pe o @pucp.pe)";

/// Banner text for an implausible phone number.
pub const INVALID_PHONE_MESSAGE: &str = "Por favor ingresa un número de teléfono válido";

/// Checks that block submission before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClientValidationError {
    #[error("El correo debe ser un correo institucional PUCP (@pucp.edu.pe o @pucp.pe)")]
    InstitutionalEmail,
    #[error("Por favor ingresa un número de teléfono válido")]
    InvalidPhone,
}

/// Editable inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationField {
    GivenName,
    FamilyName,
    Phone,
    Faculty,
    Term,
    InstitutionalEmail,
    Linkedin,
    AreaOfInterest,
    Motivation,
}

impl ApplicationField {
    /// Every field, in form order.
    pub const ALL: [Self; 9] = [
        Self::GivenName,
        Self::FamilyName,
        Self::Phone,
        Self::Faculty,
        Self::Term,
        Self::InstitutionalEmail,
        Self::Linkedin,
        Self::AreaOfInterest,
        Self::Motivation,
    ];

    /// JSON key posted for this field.
    pub const fn key(self) -> &'static str {
        match self {
            Self::GivenName => keys::GIVEN_NAME,
            Self::FamilyName => keys::FAMILY_NAME,
            Self::Phone => keys::PHONE,
            Self::Faculty => keys::FACULTY,
            Self::Term => keys::TERM,
            Self::InstitutionalEmail => keys::INSTITUTIONAL_EMAIL,
            Self::Linkedin => keys::LINKEDIN,
            Self::AreaOfInterest => keys::AREA_OF_INTEREST,
            Self::Motivation => keys::MOTIVATION,
        }
    }
}

/// Raw text of every input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFields {
    pub given_name: String,
    pub family_name: String,
    pub phone: String,
    pub faculty: String,
    pub term: String,
    pub institutional_email: String,
    pub linkedin: String,
    pub area_of_interest: String,
    pub motivation: String,
}

impl ApplicationFields {
    pub fn get(&self, field: ApplicationField) -> &str {
        match field {
            ApplicationField::GivenName => &self.given_name,
            ApplicationField::FamilyName => &self.family_name,
            ApplicationField::Phone => &self.phone,
            ApplicationField::Faculty => &self.faculty,
            ApplicationField::Term => &self.term,
            ApplicationField::InstitutionalEmail => &self.institutional_email,
            ApplicationField::Linkedin => &self.linkedin,
            ApplicationField::AreaOfInterest => &self.area_of_interest,
            ApplicationField::Motivation => &self.motivation,
        }
    }

    fn slot(&mut self, field: ApplicationField) -> &mut String {
        match field {
            ApplicationField::GivenName => &mut self.given_name,
            ApplicationField::FamilyName => &mut self.family_name,
            ApplicationField::Phone => &mut self.phone,
            ApplicationField::Faculty => &mut self.faculty,
            ApplicationField::Term => &mut self.term,
            ApplicationField::InstitutionalEmail => &mut self.institutional_email,
            ApplicationField::Linkedin => &mut self.linkedin,
            ApplicationField::AreaOfInterest => &mut self.area_of_interest,
            ApplicationField::Motivation => &mut self.motivation,
        }
    }
}

/// Country selector dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryPicker {
    pub open: bool,
    pub query: String,
}

/// Outcome banner of the latest submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Whole form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationFormState {
    pub fields: ApplicationFields,
    pub country: &'static Country,
    pub phone_possible: bool,
    pub picker: CountryPicker,
    pub status: SubmitStatus,
}

/// Inputs driving the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationFormEvent {
    FieldEdited {
        field: ApplicationField,
        value: String,
    },
    CountryPickerToggled,
    /// Click outside the picker.
    CountryPickerDismissed,
    CountryQueryChanged(String),
    CountrySelected(&'static Country),
    SubmitStarted,
    SubmitFailed(String),
    SubmitSucceeded,
}

impl ApplicationFormState {
    /// Empty form with `country` preselected.
    pub fn new(country: &'static Country) -> Self {
        Self {
            fields: ApplicationFields::default(),
            country,
            phone_possible: true,
            picker: CountryPicker::default(),
            status: SubmitStatus::Idle,
        }
    }

    /// Empty form with the country implied by a browser locale.
    pub fn for_locale(locale: Option<&str>) -> Self {
        Self::new(default_country(locale))
    }

    /// Apply one event.
    ///
    /// Selecting a country keeps the typed phone text and re-checks it
    /// against the newly selected numbering plan.
    #[must_use]
    pub fn reduce(mut self, event: ApplicationFormEvent) -> Self {
        match event {
            ApplicationFormEvent::FieldEdited { field, value } => {
                if field == ApplicationField::Phone {
                    self.phone_possible = phone::is_possible(&value, self.country);
                }
                *self.fields.slot(field) = value;
            }
            ApplicationFormEvent::CountryPickerToggled => self.picker.open = !self.picker.open,
            ApplicationFormEvent::CountryPickerDismissed => self.picker.open = false,
            ApplicationFormEvent::CountryQueryChanged(query) => self.picker.query = query,
            ApplicationFormEvent::CountrySelected(country) => {
                self.country = country;
                self.picker = CountryPicker::default();
                self.phone_possible = phone::is_possible(&self.fields.phone, country);
            }
            ApplicationFormEvent::SubmitStarted => self.status = SubmitStatus::Submitting,
            ApplicationFormEvent::SubmitFailed(message) => {
                self.status = SubmitStatus::Error(message);
            }
            ApplicationFormEvent::SubmitSucceeded => {
                self.fields = ApplicationFields::default();
                self.phone_possible = true;
                self.status = SubmitStatus::Success;
            }
        }
        self
    }

    /// Countries listed under the current picker query.
    pub fn visible_countries(&self) -> Vec<&'static Country> {
        filter_countries(&self.picker.query)
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting && motivation_meets_minimum(&self.fields.motivation)
    }

    /// Run the pre-flight checks and build the JSON body to post.
    ///
    /// Fields are sent as typed, except the phone which is replaced by its
    /// normalized form.
    pub fn prepare_submission(&self) -> Result<FormBody, ClientValidationError> {
        if !is_institutional_email(&self.fields.institutional_email) {
            return Err(ClientValidationError::InstitutionalEmail);
        }
        let raw_phone = self.fields.phone.trim();
        let plausible = PhoneNumber::parse(raw_phone, self.country)
            .is_ok_and(|number| number.is_possible());
        if !plausible {
            return Err(ClientValidationError::InvalidPhone);
        }

        let mut body = FormBody::new();
        for field in ApplicationField::ALL {
            let value = match field {
                ApplicationField::Phone => phone::normalize(raw_phone, self.country).into_inner(),
                other => self.fields.get(other).to_owned(),
            };
            body.insert(field.key().to_owned(), Value::String(value));
        }
        Ok(body)
    }
}
