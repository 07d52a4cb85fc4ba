//! Environment-backed record-store configuration.
//!
//! Variables are read on every `resolve` call, so rotating a credential takes
//! effect on the next request. Empty values count as unset.

use mockable::{DefaultEnv, Env};
use tracing::error;

use crate::domain::ConfigurationError;
use crate::domain::ports::{ApiKey, RecordStoreConfig, RecordStoreTarget, TableRole};

pub const BASE_ID_ENV: &str = "AIRTABLE_BASE_ID";
pub const API_KEY_ENV: &str = "AIRTABLE_API_KEY";
pub const APPLICATIONS_TABLE_ENV: &str = "AIRTABLE_APPLICATIONS_TABLE";
pub const CONTACTS_TABLE_ENV: &str = "AIRTABLE_CONTACTS_TABLE";

/// Resolves table coordinates from process environment variables.
///
/// # Examples
/// ```
/// use breakout_backend::domain::ports::{RecordStoreConfig, TableRole};
/// use breakout_backend::outbound::airtable::EnvRecordStoreConfig;
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "AIRTABLE_BASE_ID" => Some("appBase123".to_owned()),
///     "AIRTABLE_API_KEY" => Some("patKey".to_owned()),
///     _ => None,
/// });
/// let target = EnvRecordStoreConfig::new(env)
///     .resolve(TableRole::Contacts)
///     .expect("credentials present");
/// assert_eq!(target.table(), "Contactos Básicos");
/// ```
pub struct EnvRecordStoreConfig<E = DefaultEnv> {
    env: E,
}

impl Default for EnvRecordStoreConfig<DefaultEnv> {
    fn default() -> Self {
        Self::new(DefaultEnv::new())
    }
}

impl<E> EnvRecordStoreConfig<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: Env> EnvRecordStoreConfig<E> {
    fn non_empty(&self, name: &str) -> Option<String> {
        self.env.string(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &'static str) -> Result<String, ConfigurationError> {
        self.non_empty(name).ok_or_else(|| {
            error!(variable = name, "record store configuration missing");
            ConfigurationError::MissingCredential { variable: name }
        })
    }
}

const fn table_variable(role: TableRole) -> &'static str {
    match role {
        TableRole::Applications => APPLICATIONS_TABLE_ENV,
        TableRole::Contacts => CONTACTS_TABLE_ENV,
    }
}

impl<E: Env + Send + Sync> RecordStoreConfig for EnvRecordStoreConfig<E> {
    fn resolve(&self, role: TableRole) -> Result<RecordStoreTarget, ConfigurationError> {
        let base_id = self.required(BASE_ID_ENV)?;
        let api_key = ApiKey::new(self.required(API_KEY_ENV)?);
        let table = self
            .non_empty(table_variable(role))
            .unwrap_or_else(|| role.default_table().to_owned());
        Ok(RecordStoreTarget::new(base_id, api_key, table))
    }
}
