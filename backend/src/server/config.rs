//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use breakout_backend::domain::ports::{NoRosterCache, RecordStore, RecordStoreConfig, RosterCache};

/// Everything the server needs beyond the health flags.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store_config: Arc<dyn RecordStoreConfig>,
    pub(crate) store: Arc<dyn RecordStore>,
    pub(crate) roster_cache: Arc<dyn RosterCache>,
    pub(crate) roster_revalidate: Duration,
}

impl ServerConfig {
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        store_config: Arc<dyn RecordStoreConfig>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            bind_addr,
            store_config,
            store,
            roster_cache: Arc::new(NoRosterCache),
            roster_revalidate: Duration::ZERO,
        }
    }

    /// Cache roster listings and advertise the same window to shared caches.
    #[must_use]
    pub fn with_roster_cache(mut self, cache: Arc<dyn RosterCache>, revalidate: Duration) -> Self {
        self.roster_cache = cache;
        self.roster_revalidate = revalidate;
        self
    }
}
