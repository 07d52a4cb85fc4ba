//! Port for the time-bounded roster cache.
//!
//! Stale reads are acceptable for up to the revalidation interval; the cache
//! only trades freshness for fewer upstream listing calls.

use super::record_store_config::RecordStoreTarget;

/// Cache key: one entry per base and table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RosterCacheKey {
    base_id: String,
    table: String,
}

impl RosterCacheKey {
    /// Derive the key for a resolved target.
    pub fn for_target(target: &RecordStoreTarget) -> Self {
        Self {
            base_id: target.base_id().to_owned(),
            table: target.table().to_owned(),
        }
    }
}

/// Port for caching roster names between upstream fetches.
#[cfg_attr(test, mockall::automock)]
pub trait RosterCache: Send + Sync {
    /// Return cached names when an entry is still fresh.
    fn get(&self, key: &RosterCacheKey) -> Option<Vec<String>>;

    /// Store freshly fetched names.
    fn put(&self, key: RosterCacheKey, names: Vec<String>);
}

/// Cache that never stores anything; every read misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRosterCache;

impl RosterCache for NoRosterCache {
    fn get(&self, _key: &RosterCacheKey) -> Option<Vec<String>> {
        None
    }

    fn put(&self, _key: RosterCacheKey, _names: Vec<String>) {}
}
