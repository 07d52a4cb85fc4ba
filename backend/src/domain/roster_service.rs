//! Member roster listing with a time-bounded cache in front of the store.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::SubmissionError;
use crate::domain::ports::{RecordStore, RecordStoreTarget, RosterCache, RosterCacheKey};
use crate::domain::roster::{extract_names, roster_query};

/// Lists member names for the community roster.
#[derive(Clone)]
pub struct RosterService {
    store: Arc<dyn RecordStore>,
    cache: Arc<dyn RosterCache>,
}

impl RosterService {
    pub fn new(store: Arc<dyn RecordStore>, cache: Arc<dyn RosterCache>) -> Self {
        Self { store, cache }
    }

    /// Names in upstream order. Only successful listings are cached.
    pub async fn list_names(
        &self,
        target: &RecordStoreTarget,
    ) -> Result<Vec<String>, SubmissionError> {
        let key = RosterCacheKey::for_target(target);
        if let Some(names) = self.cache.get(&key) {
            debug!(target: "contacts", count = names.len(), "roster served from cache");
            return Ok(names);
        }

        info!(
            target: "contacts",
            base_id = %target.masked_base_id(),
            table = target.table(),
            "fetching roster"
        );
        let records = self
            .store
            .list_records(target, &roster_query())
            .await
            .map_err(SubmissionError::from)
            .inspect_err(|err| error!(target: "contacts", error = %err, "roster listing failed"))?;
        let names = extract_names(&records);
        self.cache.put(key, names.clone());
        Ok(names)
    }
}
