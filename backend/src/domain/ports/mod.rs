//! Domain ports: the driven edges of the hexagon.
//!
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod record_store;
mod record_store_config;
mod roster_cache;

#[cfg(test)]
pub use record_store::MockRecordStore;
pub use record_store::{
    ListRecordsQuery, RecordFields, RecordStore, RecordStoreError, StoredFields,
};
#[cfg(test)]
pub use record_store_config::MockRecordStoreConfig;
pub use record_store_config::{
    ApiKey, RecordStoreConfig, RecordStoreTarget, TableRole, mask_identifier,
};
#[cfg(test)]
pub use roster_cache::MockRosterCache;
pub use roster_cache::{NoRosterCache, RosterCache, RosterCacheKey};
