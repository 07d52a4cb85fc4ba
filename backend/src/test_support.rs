//! Test doubles shared by unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled for tests and behind the `test-support` feature.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use serde_json::Value;

use crate::domain::ports::{
    ListRecordsQuery, RecordFields, RecordStore, RecordStoreError, RecordStoreTarget, StoredFields,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(_) => panic!("test double mutex poisoned"),
    }
}

/// Clock frozen at a settable instant.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *lock(&self.0) += TimeDelta::seconds(seconds);
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *lock(&self.0)
    }
}

/// One call observed by [`RecordingRecordStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Create {
        base_id: String,
        table: String,
        fields: RecordFields,
    },
    List {
        base_id: String,
        table: String,
        query: ListRecordsQuery,
    },
}

/// Record store that records every call and replays scripted outcomes.
///
/// Unscripted creations echo nothing back; unscripted listings are empty.
#[derive(Default)]
pub struct RecordingRecordStore {
    calls: Mutex<Vec<RecordedCall>>,
    creations: Mutex<VecDeque<Result<Option<Value>, RecordStoreError>>>,
    listings: Mutex<VecDeque<Result<Vec<StoredFields>, RecordStoreError>>>,
}

impl RecordingRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next `create_record` call.
    pub fn script_create(&self, outcome: Result<Option<Value>, RecordStoreError>) {
        lock(&self.creations).push_back(outcome);
    }

    /// Queue the outcome of the next `list_records` call.
    pub fn script_list(&self, outcome: Result<Vec<StoredFields>, RecordStoreError>) {
        lock(&self.listings).push_back(outcome);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Field maps of every creation, in call order.
    pub fn created_fields(&self) -> Vec<RecordFields> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Create { fields, .. } => Some(fields.clone()),
                RecordedCall::List { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl RecordStore for RecordingRecordStore {
    async fn create_record(
        &self,
        target: &RecordStoreTarget,
        fields: &RecordFields,
    ) -> Result<Option<Value>, RecordStoreError> {
        lock(&self.calls).push(RecordedCall::Create {
            base_id: target.base_id().to_owned(),
            table: target.table().to_owned(),
            fields: fields.clone(),
        });
        lock(&self.creations).pop_front().unwrap_or(Ok(None))
    }

    async fn list_records(
        &self,
        target: &RecordStoreTarget,
        query: &ListRecordsQuery,
    ) -> Result<Vec<StoredFields>, RecordStoreError> {
        lock(&self.calls).push(RecordedCall::List {
            base_id: target.base_id().to_owned(),
            table: target.table().to_owned(),
            query: query.clone(),
        });
        lock(&self.listings).pop_front().unwrap_or(Ok(Vec::new()))
    }
}
