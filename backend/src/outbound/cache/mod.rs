//! In-process roster cache.
//!
//! Entries expire a fixed interval after they were stored. Expired entries
//! are treated as misses and replaced on the next successful fetch, so a
//! failing upstream is retried on every request rather than served stale.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::ports::{RosterCache, RosterCacheKey};

struct CachedRoster {
    names: Vec<String>,
    stored_at: DateTime<Utc>,
}

/// Time-bounded, per-table roster cache.
pub struct InMemoryRosterCache {
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<RosterCacheKey, CachedRoster>>,
}

impl InMemoryRosterCache {
    /// Cache entries for `ttl`, reading time from `clock`.
    ///
    /// A zero interval disables caching. Intervals beyond the range of
    /// `chrono` saturate.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<RosterCacheKey, CachedRoster>> {
        // Entries are replaced whole, so a poisoned map is still consistent.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn is_fresh(&self, entry: &CachedRoster, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.stored_at) < self.ttl
    }
}

impl RosterCache for InMemoryRosterCache {
    fn get(&self, key: &RosterCacheKey) -> Option<Vec<String>> {
        let now = self.clock.utc();
        let mut entries = self.entries();
        match entries.get(key) {
            Some(entry) if self.is_fresh(entry, now) => Some(entry.names.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn put(&self, key: RosterCacheKey, names: Vec<String>) {
        if self.ttl <= TimeDelta::zero() {
            return;
        }
        let stored_at = self.clock.utc();
        self.entries().insert(key, CachedRoster { names, stored_at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{ApiKey, RecordStoreTarget};
    use crate::test_support::MutableClock;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn clock() -> Arc<MutableClock> {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid instant");
        Arc::new(MutableClock::new(start))
    }

    fn key(table: &str) -> RosterCacheKey {
        RosterCacheKey::for_target(&RecordStoreTarget::new(
            "appBase123",
            ApiKey::new("patKey"),
            table,
        ))
    }

    #[rstest]
    fn entries_expire_after_the_interval(clock: Arc<MutableClock>) {
        let cache = InMemoryRosterCache::new(Duration::from_secs(60), clock.clone());
        cache.put(key("Contactos Básicos"), vec!["Ana".to_owned()]);

        clock.advance_seconds(59);
        assert_eq!(cache.get(&key("Contactos Básicos")), Some(vec!["Ana".to_owned()]));

        clock.advance_seconds(1);
        assert_eq!(cache.get(&key("Contactos Básicos")), None);
    }

    #[rstest]
    fn tables_do_not_share_entries(clock: Arc<MutableClock>) {
        let cache = InMemoryRosterCache::new(Duration::from_secs(60), clock);
        cache.put(key("Contactos Básicos"), vec!["Ana".to_owned()]);
        assert_eq!(cache.get(&key("Otra")), None);
    }

    #[rstest]
    fn zero_interval_disables_caching(clock: Arc<MutableClock>) {
        let cache = InMemoryRosterCache::new(Duration::ZERO, clock);
        cache.put(key("Contactos Básicos"), vec!["Ana".to_owned()]);
        assert_eq!(cache.get(&key("Contactos Básicos")), None);
    }

    #[rstest]
    fn refresh_replaces_stale_names(clock: Arc<MutableClock>) {
        let cache = InMemoryRosterCache::new(Duration::from_secs(60), clock.clone());
        cache.put(key("Contactos Básicos"), vec!["Ana".to_owned()]);
        clock.advance_seconds(61);
        cache.put(key("Contactos Básicos"), vec!["Luis".to_owned(), "Ana".to_owned()]);
        assert_eq!(
            cache.get(&key("Contactos Básicos")),
            Some(vec!["Luis".to_owned(), "Ana".to_owned()])
        );
    }
}
