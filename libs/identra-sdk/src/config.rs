//! Connection configuration: recognized keys, parse-or-default helpers,
//! and the process-wide default timeout.

use std::collections::HashMap;
use std::time::Duration;

use once_cell::sync::Lazy;
use url::Url;

/// Recognized connection-configuration keys, matching the wire names
/// used by other Identra SDKs.
pub mod keys {
    /// Request timeout in milliseconds.
    pub const CONNECTION_TIMEOUT: &str = "connectionTimeout";

    /// Absolute URI of an HTTP proxy to tunnel requests through.
    pub const PROXY_ADDRESS: &str = "proxyAddress";

    /// Proxy credentials in `username:password` form.
    pub const PROXY_CREDENTIALS: &str = "proxyCredentials";
}

/// String-keyed connection settings, read-only at request-construction time.
pub type ConnectionConfig = HashMap<String, String>;

const FALLBACK_CONNECTION_TIMEOUT_MS: u64 = 30_000;

static DEFAULT_CONNECTION_TIMEOUT: Lazy<Duration> = Lazy::new(|| {
    std::env::var("IDENTRA_CONNECTION_TIMEOUT")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_millis(FALLBACK_CONNECTION_TIMEOUT_MS))
});

/// Process-wide default request timeout.
///
/// Read once from the `IDENTRA_CONNECTION_TIMEOUT` environment variable
/// (milliseconds); 30 seconds when unset or unparsable.
pub fn default_connection_timeout() -> Duration {
    *DEFAULT_CONNECTION_TIMEOUT
}

/// Resolve the request timeout from `config`, falling back to the
/// process-wide default when the key is absent or unparsable.
pub(crate) fn resolve_timeout(config: &ConnectionConfig) -> Duration {
    config
        .get(keys::CONNECTION_TIMEOUT)
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or_else(default_connection_timeout)
}

/// Proxy address and optional credentials resolved from connection config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyDescriptor {
    pub address: Url,
    pub credentials: Option<ProxyCredentials>,
}

/// Basic credentials for an HTTP proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyCredentials {
    pub username: String,
    pub password: String,
}

#[cfg(feature = "client")]
impl ProxyDescriptor {
    pub(crate) fn to_reqwest(&self) -> reqwest::Result<reqwest::Proxy> {
        let mut proxy = reqwest::Proxy::all(self.address.clone())?;
        if let Some(credentials) = &self.credentials {
            proxy = proxy.basic_auth(&credentials.username, &credentials.password);
        }
        Ok(proxy)
    }
}

/// Resolve the optional proxy from `config`.
///
/// A missing, blank, or non-absolute-URI address means no proxy.
/// Credentials are attached only when they are exactly `username:password`;
/// malformed credential strings are ignored without error.
pub(crate) fn resolve_proxy(config: &ConnectionConfig) -> Option<ProxyDescriptor> {
    let raw = config.get(keys::PROXY_ADDRESS)?;
    if raw.trim().is_empty() {
        return None;
    }
    let address = Url::parse(raw).ok()?;

    let credentials = config
        .get(keys::PROXY_CREDENTIALS)
        .and_then(|raw| parse_credentials(raw));

    Some(ProxyDescriptor {
        address,
        credentials,
    })
}

fn parse_credentials(raw: &str) -> Option<ProxyCredentials> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    Some(ProxyCredentials {
        username: parts[0].to_string(),
        password: parts[1].to_string(),
    })
}
