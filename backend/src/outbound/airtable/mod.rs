//! Airtable outbound adapters.
//!
//! A reqwest implementation of the `RecordStore` port plus the
//! environment-backed resolver for base, credential, and table names.

mod config;
mod dto;
mod http_store;

pub use config::{
    API_KEY_ENV, APPLICATIONS_TABLE_ENV, BASE_ID_ENV, CONTACTS_TABLE_ENV, EnvRecordStoreConfig,
};
pub use http_store::{AirtableHttpStore, DEFAULT_API_ROOT};
