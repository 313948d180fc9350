//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).
//!
//! | key                         | default                     |
//! |-----------------------------|-----------------------------|
//! | `LISTEN_ADDR`               | `0.0.0.0:3000`              |
//! | `RECORD_STORE_URL`          | `http://localhost:3001/api` |
//! | `RECORD_STORE_TIMEOUT_SECS` | `10`                        |
//! | `DEMO_MODE`                 | `false`                     |
//! | `LOG_FORMAT`                | `text`                      |

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Url;

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Default base URL of the record store's REST layer.
pub const DEFAULT_RECORD_STORE_URL: &str = "http://localhost:3001/api";

/// Default per-request timeout for record store calls.
pub const DEFAULT_RECORD_STORE_TIMEOUT_SECS: u64 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` is not a socket address.
    #[error("invalid LISTEN_ADDR {value:?}: {source}")]
    ListenAddr {
        /// Offending value.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },

    /// `RECORD_STORE_URL` is not an absolute http(s) URL.
    #[error("invalid RECORD_STORE_URL {value:?}: {reason}")]
    RecordStoreUrl {
        /// Offending value.
        value: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Base URL of the record store; collections are path segments below it.
    pub record_store_url: Url,

    /// Timeout applied to every record store request.
    pub record_store_timeout: Duration,

    /// Serve the built-in demo documents from memory instead of calling
    /// the record store.
    pub demo_mode: bool,

    /// Log output format.
    pub log_format: LogFormat,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `LISTEN_ADDR` or `RECORD_STORE_URL`
    /// is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`GatewayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_addr
            .parse()
            .map_err(|source| ConfigError::ListenAddr {
                value: listen_addr.clone(),
                source,
            })?;

        let record_store_url = parse_store_url(
            &lookup("RECORD_STORE_URL").unwrap_or_else(|| DEFAULT_RECORD_STORE_URL.to_string()),
        )?;

        let timeout_secs = parse_or(
            lookup("RECORD_STORE_TIMEOUT_SECS"),
            DEFAULT_RECORD_STORE_TIMEOUT_SECS,
        )
        .max(1);

        let demo_mode = parse_bool(lookup("DEMO_MODE"), false);

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            record_store_url,
            record_store_timeout: Duration::from_secs(timeout_secs),
            demo_mode,
            log_format,
        })
    }
}

fn parse_store_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::RecordStoreUrl {
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other:?}"))),
    }
}

/// Parses `value` as `T`, returning `default` on missing or invalid values.
fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Parses a boolean. Accepts `"true"`, `"1"`, `"false"`, `"0"`
/// (case-insensitive). Returns `default` otherwise.
fn parse_bool(value: Option<String>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}
