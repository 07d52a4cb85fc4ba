//! Join-the-community contact entries.

use crate::domain::ValidationError;
use crate::domain::body_fields::{FormBody, field_text, optional_field_text};
use crate::domain::ports::RecordFields;

/// Request body keys.
pub mod keys {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
}

/// Upstream column names.
pub mod columns {
    pub const NAME: &str = "Nombre";
    pub const EMAIL: &str = "Correo Electrónico";
    pub const PHONE: &str = "Número de Teléfono";
}

/// A name plus optional email and phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    name: String,
    email: Option<String>,
    phone: Option<String>,
}

impl ContactEntry {
    /// Read a request body; only the name is mandatory.
    ///
    /// # Examples
    /// ```
    /// use breakout_backend::domain::body_fields::into_form_body;
    /// use breakout_backend::domain::contact::ContactEntry;
    /// use serde_json::json;
    ///
    /// let body = into_form_body(json!({ "name": "Ana", "email": "", "phone": "" }));
    /// let entry = ContactEntry::from_body(&body).expect("name present");
    /// assert_eq!(entry.to_record_fields().len(), 1);
    /// ```
    pub fn from_body(body: &FormBody) -> Result<Self, ValidationError> {
        let name = field_text(body, keys::NAME);
        if name.is_empty() {
            return Err(ValidationError::MissingContactName);
        }
        Ok(Self {
            name,
            email: optional_field_text(body, keys::EMAIL),
            phone: optional_field_text(body, keys::PHONE),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email_provided(&self) -> bool {
        self.email.is_some()
    }

    pub fn phone_provided(&self) -> bool {
        self.phone.is_some()
    }

    /// Upstream columns; blank email and phone produce no key at all.
    pub fn to_record_fields(&self) -> RecordFields {
        let mut fields = RecordFields::new();
        fields.insert(columns::NAME, self.name.as_str());
        fields.insert_present(columns::EMAIL, self.email.clone());
        fields.insert_present(columns::PHONE, self.phone.clone());
        fields
    }
}
