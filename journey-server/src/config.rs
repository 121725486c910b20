//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const BIND_VAR: &str = "JOURNEY_BIND";

/// Environment variable holding an optional network definition file.
pub const NETWORK_VAR: &str = "JOURNEY_NETWORK";

/// Error reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidAddress {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Process-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,

    /// JSON network file; the built-in Mumbai network when absent
    pub network_file: Option<PathBuf>,
}

/// Listen address when `JOURNEY_BIND` is unset: localhost, port 5000.
pub fn default_bind() -> SocketAddr {
    ([127, 0, 0, 1], 5000).into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            network_file: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind = match get(BIND_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidAddress {
                    var: BIND_VAR,
                    value,
                    source,
                })?,
            None => default_bind(),
        };

        Ok(Self {
            bind,
            network_file: get(NETWORK_VAR).map(PathBuf::from),
        })
    }
}
