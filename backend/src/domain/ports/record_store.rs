//! Driven port for the external record store.
//!
//! The domain owns the payload shapes so services stay adapter-agnostic; the
//! outbound adapter only serialises them onto the wire.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use super::define_port_error;
use super::record_store_config::RecordStoreTarget;

/// Upstream column name → value for one record being created.
///
/// Keys are the exact upstream column names, accents included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordFields(BTreeMap<String, String>);

impl RecordFields {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value unconditionally.
    pub fn insert(&mut self, column: &str, value: impl Into<String>) {
        self.0.insert(column.to_owned(), value.into());
    }

    /// Set a column only when the value is present and non-empty, so absent
    /// optional fields produce omitted keys rather than empty strings.
    pub fn insert_present(&mut self, column: &str, value: Option<String>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.insert(column, value);
        }
    }

    /// Look up a column value.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// Whether the column is present.
    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    /// Column names in sorted order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of populated columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no column is populated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw `fields` object of a record returned by a listing.
pub type StoredFields = Map<String, Value>;

/// Listing request: one bounded page, optionally projected onto columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRecordsQuery {
    /// Maximum number of records in the page.
    pub page_size: u16,
    /// Columns to return; empty means all.
    pub fields: Vec<String>,
}

define_port_error! {
    /// Errors surfaced while calling the record store.
    pub enum RecordStoreError {
        /// The store answered with a non-success status.
        Upstream { status: u16, body: String } =>
            "record store returned status {status}: {body}",
        /// The request never produced a response.
        Transport { message: String } =>
            "record store transport failed: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "record store response decode failed: {message}",
    }
}

/// Port for creating and listing records in one table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create exactly one record and return the first created record echoed
    /// by the store, if any.
    ///
    /// No idempotency key is sent: repeated calls create repeated records.
    async fn create_record(
        &self,
        target: &RecordStoreTarget,
        fields: &RecordFields,
    ) -> Result<Option<Value>, RecordStoreError>;

    /// Fetch one page of records, in upstream order.
    async fn list_records(
        &self,
        target: &RecordStoreTarget,
        query: &ListRecordsQuery,
    ) -> Result<Vec<StoredFields>, RecordStoreError>;
}
