//! Shared cache-control policies for HTTP handlers.

use std::time::Duration;

/// Health and error responses must never be reused.
pub const NO_STORE: &str = "no-store";

/// Shared caches may serve a listing for `interval` and revalidate in the
/// background for as long again; browsers always revalidate.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use breakout_backend::inbound::http::cache_control::revalidating_public;
///
/// assert_eq!(
///     revalidating_public(Duration::from_secs(60)),
///     "public, max-age=0, s-maxage=60, stale-while-revalidate=60"
/// );
/// ```
pub fn revalidating_public(interval: Duration) -> String {
    let seconds = interval.as_secs();
    format!("public, max-age=0, s-maxage={seconds}, stale-while-revalidate={seconds}")
}

/// Header tuple for [`revalidating_public`].
pub fn revalidating_public_header(interval: Duration) -> (&'static str, String) {
    ("Cache-Control", revalidating_public(interval))
}
