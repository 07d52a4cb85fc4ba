//! Test helpers for inbound HTTP components.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ConfigurationError;
use crate::domain::ports::{
    ApiKey, MockRecordStoreConfig, NoRosterCache, RecordStoreConfig, RecordStoreTarget, TableRole,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::airtable::BASE_ID_ENV;
use crate::test_support::RecordingRecordStore;

pub const TEST_BASE_ID: &str = "appTESTBASE01";

/// Target the configured helpers resolve for `role`.
pub fn target_for(role: TableRole) -> RecordStoreTarget {
    RecordStoreTarget::new(TEST_BASE_ID, ApiKey::new("patTEST"), role.default_table())
}

/// Configuration resolving every role to its default table.
pub fn configured() -> Arc<dyn RecordStoreConfig> {
    let mut config = MockRecordStoreConfig::new();
    config
        .expect_resolve()
        .returning(|role| Ok(target_for(role)));
    Arc::new(config)
}

/// Configuration with no base identifier set.
pub fn unconfigured() -> Arc<dyn RecordStoreConfig> {
    let mut config = MockRecordStoreConfig::new();
    config.expect_resolve().returning(|_| {
        Err(ConfigurationError::MissingCredential {
            variable: BASE_ID_ENV,
        })
    });
    Arc::new(config)
}

/// Handler state over a recording store without roster caching.
pub fn state_with(
    config: Arc<dyn RecordStoreConfig>,
    store: Arc<RecordingRecordStore>,
) -> HttpState {
    HttpState::new(
        HttpStatePorts {
            config,
            store,
            roster_cache: Arc::new(NoRosterCache),
        },
        Duration::from_secs(60),
    )
}
