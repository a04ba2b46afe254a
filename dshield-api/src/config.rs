// Server configuration and environment helpers
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use dshield_repository::{JobTrackerConfig, MockDataConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

// Server configuration defaults
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8000;

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "dshield_api=info,dshield_repository=info,tower_http=info";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable console output
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers
    Json,
}

impl LogFormat {
    /// Parse `LOG_FORMAT` ("json" or "pretty", case-insensitive).
    ///
    /// Read before tracing is initialized, so unknown values fall back silently.
    pub fn from_env() -> Self {
        Self::parse(env::var("LOG_FORMAT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Runtime configuration of the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Bound on retained Napoleon jobs; `None` keeps every job
    pub max_retained_jobs: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            max_retained_jobs: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: Interface to bind (default: 0.0.0.0)
    /// - `PORT`: Port to bind (default: 8000)
    /// - `MAX_RETAINED_JOBS`: Bound on retained research jobs (default: unbounded)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Values that fail to parse are logged and replaced by their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: parse_or("HOST", lookup("HOST"), defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            max_retained_jobs: lookup("MAX_RETAINED_JOBS").and_then(|raw| {
                match raw.trim().parse::<usize>() {
                    Ok(max) => Some(max),
                    Err(_) => {
                        warn!(value = %raw, "Invalid MAX_RETAINED_JOBS, retaining every job");
                        None
                    }
                }
            }),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Store configuration derived from the server settings
    pub fn mock_data_config(&self) -> MockDataConfig {
        MockDataConfig {
            jobs: JobTrackerConfig {
                max_retained_jobs: self.max_retained_jobs,
            },
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(key = %key, value = %raw, default = %default, "Invalid value, using default");
            default
        }
    }
}

/// Create CORS layer open to any origin, method and header
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("MAX_RETAINED_JOBS", " 50 "),
        ]));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.max_retained_jobs, Some(50));
        assert_eq!(
            config.mock_data_config().jobs,
            JobTrackerConfig::with_max_retained_jobs(50)
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "not-an-ip"),
            ("PORT", "99999"),
            ("MAX_RETAINED_JOBS", "lots"),
        ]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse(None), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(Some("xml")), LogFormat::Pretty);
    }
}
