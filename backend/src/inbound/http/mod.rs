//! HTTP inbound adapter exposing REST endpoints.

pub mod applications;
pub mod body;
pub mod cache_control;
pub mod contacts;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiError, ApiResult};
