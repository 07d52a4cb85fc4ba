//! Process settings loaded once at startup via OrthoConfig.
//!
//! Values come from CLI flags, `BREAKOUT_*` environment variables, or a
//! configuration file. Record-store credentials are deliberately absent:
//! they are resolved per request by
//! [`EnvRecordStoreConfig`](crate::outbound::airtable::EnvRecordStoreConfig).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::airtable::DEFAULT_API_ROOT;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Startup settings for the HTTP server and record-store client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BREAKOUT")]
pub struct BreakoutSettings {
    /// Listen address.
    pub host: Option<IpAddr>,
    /// Listen port.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Root URL of the record-store REST API.
    pub api_root: Option<String>,
    /// Upstream request timeout in seconds. Unset keeps the client default.
    pub upstream_timeout_secs: Option<u64>,
    /// Roster revalidation interval in seconds; `0` disables caching.
    #[ortho_config(default = 60)]
    pub roster_ttl_secs: u64,
}

impl BreakoutSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Parsed API root, falling back to the public endpoint.
    ///
    /// # Errors
    /// Returns [`url::ParseError`] when the configured value is not a URL.
    pub fn api_root(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.api_root.as_deref().unwrap_or(DEFAULT_API_ROOT))
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }

    pub fn roster_ttl(&self) -> Duration {
        Duration::from_secs(self.roster_ttl_secs)
    }
}
