//! Driven port resolving record-store coordinates for one request.
//!
//! Configuration is looked up fresh on every request, so a missing credential
//! surfaces as a per-request server fault instead of a startup failure.

use std::fmt;

use zeroize::Zeroize;

use crate::domain::ConfigurationError;

/// Which form's table a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableRole {
    /// Long "apply to join" form.
    Applications,
    /// Join-the-community contacts and the member roster.
    Contacts,
}

impl TableRole {
    /// Table used when none is configured.
    pub const fn default_table(self) -> &'static str {
        match self {
            Self::Applications => "Contactos",
            Self::Contacts => "Contactos Básicos",
        }
    }

    /// Short tag used in log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applications => "applications",
            Self::Contacts => "contacts",
        }
    }
}

/// Bearer credential for the record store.
///
/// `Debug` output is redacted and the secret is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw credential.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the secret for building an `Authorization` header.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Fully resolved coordinates of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStoreTarget {
    base_id: String,
    api_key: ApiKey,
    table: String,
}

impl RecordStoreTarget {
    /// Bundle the base identifier, credential, and table name.
    pub fn new(base_id: impl Into<String>, api_key: ApiKey, table: impl Into<String>) -> Self {
        Self {
            base_id: base_id.into(),
            api_key,
            table: table.into(),
        }
    }

    /// Base identifier.
    pub fn base_id(&self) -> &str {
        self.base_id.as_str()
    }

    /// Bearer credential.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Table name.
    pub fn table(&self) -> &str {
        self.table.as_str()
    }

    /// Base identifier safe for logs and debug payloads.
    pub fn masked_base_id(&self) -> String {
        mask_identifier(&self.base_id)
    }
}

/// Keep the first and last three characters of an identifier.
///
/// # Examples
/// ```
/// use breakout_backend::domain::ports::mask_identifier;
///
/// assert_eq!(mask_identifier("appA1b2C3d4"), "app…3d4");
/// ```
pub fn mask_identifier(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let head: String = chars.iter().take(3).collect();
    let tail: String = chars[chars.len().saturating_sub(3)..].iter().collect();
    format!("{head}…{tail}")
}

/// Port resolving the target table for a request.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStoreConfig: Send + Sync {
    /// Resolve coordinates for `role`, failing when credentials are missing.
    fn resolve(&self, role: TableRole) -> Result<RecordStoreTarget, ConfigurationError>;
}
