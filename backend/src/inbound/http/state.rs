//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only depend on domain
//! services and ports, so they can be exercised without network I/O.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::{RecordStore, RecordStoreConfig, RosterCache};
use crate::domain::{RosterService, SubmissionService};

/// Ports needed to build [`HttpState`].
#[derive(Clone)]
pub struct HttpStatePorts {
    pub config: Arc<dyn RecordStoreConfig>,
    pub store: Arc<dyn RecordStore>,
    pub roster_cache: Arc<dyn RosterCache>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub config: Arc<dyn RecordStoreConfig>,
    pub submissions: SubmissionService,
    pub roster: RosterService,
    /// Advertised freshness window for roster listings.
    pub roster_revalidate: Duration,
}

impl HttpState {
    /// Wire services over the supplied ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use breakout_backend::domain::ports::NoRosterCache;
    /// use breakout_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use breakout_backend::outbound::airtable::{AirtableHttpStore, EnvRecordStoreConfig};
    ///
    /// let root = "https://api.airtable.com/v0".parse().expect("valid url");
    /// let store = AirtableHttpStore::new(root, None).expect("client builds");
    /// let state = HttpState::new(
    ///     HttpStatePorts {
    ///         config: Arc::new(EnvRecordStoreConfig::default()),
    ///         store: Arc::new(store),
    ///         roster_cache: Arc::new(NoRosterCache),
    ///     },
    ///     Duration::from_secs(60),
    /// );
    /// assert_eq!(state.roster_revalidate.as_secs(), 60);
    /// ```
    pub fn new(ports: HttpStatePorts, roster_revalidate: Duration) -> Self {
        let HttpStatePorts {
            config,
            store,
            roster_cache,
        } = ports;
        Self {
            config,
            submissions: SubmissionService::new(store.clone()),
            roster: RosterService::new(store, roster_cache),
            roster_revalidate,
        }
    }
}
