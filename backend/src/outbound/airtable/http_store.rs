//! Reqwest-backed Airtable record store.
//!
//! Owns transport details only: URL composition, bearer authentication, status
//! mapping, and JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use super::dto::{CreateRecordsRequestDto, CreateRecordsResponseDto, ListRecordsResponseDto};
use crate::domain::ports::{
    ListRecordsQuery, RecordFields, RecordStore, RecordStoreError, RecordStoreTarget, StoredFields,
};

/// Public Airtable REST root.
pub const DEFAULT_API_ROOT: &str = "https://api.airtable.com/v0";

/// Record store talking to the Airtable REST API.
pub struct AirtableHttpStore {
    client: Client,
    api_root: Url,
}

impl AirtableHttpStore {
    /// Build an adapter; without a timeout requests use the client default.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(api_root: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let builder = Client::builder();
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self {
            client: builder.build()?,
            api_root,
        })
    }

    /// `<root>/<base>/<table>`, each segment percent-encoded.
    fn table_url(&self, target: &RecordStoreTarget) -> Result<Url, RecordStoreError> {
        let mut url = self.api_root.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                RecordStoreError::transport(format!(
                    "record store root {} cannot carry a path",
                    self.api_root
                ))
            })?;
            segments
                .pop_if_empty()
                .push(target.base_id())
                .push(target.table());
        }
        Ok(url)
    }

    fn list_url(
        &self,
        target: &RecordStoreTarget,
        query: &ListRecordsQuery,
    ) -> Result<Url, RecordStoreError> {
        let mut url = self.table_url(target)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("pageSize", &query.page_size.to_string());
            for field in &query.fields {
                pairs.append_pair("fields[]", field);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl RecordStore for AirtableHttpStore {
    async fn create_record(
        &self,
        target: &RecordStoreTarget,
        fields: &RecordFields,
    ) -> Result<Option<Value>, RecordStoreError> {
        let response = self
            .client
            .post(self.table_url(target)?)
            .bearer_auth(target.api_key().expose())
            .json(&CreateRecordsRequestDto::single(fields))
            .send()
            .await
            .map_err(map_transport_error)?;

        let body = successful_body(response).await?;
        let decoded: CreateRecordsResponseDto = decode(&body)?;
        Ok(decoded.into_first_record())
    }

    async fn list_records(
        &self,
        target: &RecordStoreTarget,
        query: &ListRecordsQuery,
    ) -> Result<Vec<StoredFields>, RecordStoreError> {
        let response = self
            .client
            .get(self.list_url(target, query)?)
            .bearer_auth(target.api_key().expose())
            .send()
            .await
            .map_err(map_transport_error)?;

        let body = successful_body(response).await?;
        let decoded: ListRecordsResponseDto = decode(&body)?;
        Ok(decoded.into_fields())
    }
}

async fn successful_body(response: reqwest::Response) -> Result<Vec<u8>, RecordStoreError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status.as_u16(), &body));
    }
    Ok(body.to_vec())
}

fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, RecordStoreError> {
    serde_json::from_slice(body).map_err(|error| {
        RecordStoreError::decode(format!("invalid record store JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> RecordStoreError {
    RecordStoreError::transport(error.to_string())
}

/// The upstream body is kept verbatim; callers decide whether to expose it.
fn map_status_error(status: u16, body: &[u8]) -> RecordStoreError {
    RecordStoreError::upstream(status, String::from_utf8_lossy(body).into_owned())
}
