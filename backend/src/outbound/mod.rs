//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **airtable**: reqwest-backed record store and environment-backed
//!   configuration resolver
//! - **cache**: in-process roster cache
//!
//! Adapters are thin translators between domain types and wire formats. They
//! contain no business logic.

pub mod airtable;
pub mod cache;
