//! Wire shapes of the Airtable records API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::ports::{RecordFields, StoredFields};

#[derive(Debug, Serialize)]
pub(super) struct CreateRecordsRequestDto<'a> {
    pub(super) records: [CreateRecordDto<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(super) struct CreateRecordDto<'a> {
    pub(super) fields: &'a RecordFields,
}

impl<'a> CreateRecordsRequestDto<'a> {
    pub(super) fn single(fields: &'a RecordFields) -> Self {
        Self {
            records: [CreateRecordDto { fields }],
        }
    }
}

/// Creation responses are echoed back as opaque JSON.
#[derive(Debug, Deserialize)]
pub(super) struct CreateRecordsResponseDto {
    #[serde(default)]
    pub(super) records: Vec<Value>,
}

impl CreateRecordsResponseDto {
    pub(super) fn into_first_record(self) -> Option<Value> {
        self.records.into_iter().next()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ListRecordsResponseDto {
    #[serde(default)]
    pub(super) records: Vec<ListedRecordDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ListedRecordDto {
    #[serde(default)]
    pub(super) fields: StoredFields,
}

impl ListRecordsResponseDto {
    pub(super) fn into_fields(self) -> Vec<StoredFields> {
        self.records.into_iter().map(|record| record.fields).collect()
    }
}
