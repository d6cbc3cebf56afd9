//! Server configuration read from environment variables.

use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://applications.db?mode=rwc";

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
    /// When set, files under this directory are served for unmatched paths.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: "0.0.0.0".into(),
            port: 3000,
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: 5,
            request_timeout: Duration::from_secs(30),
            body_limit_bytes: 1024 * 1024,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Read from the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(ServerConfig {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse(&get, "PORT")?.unwrap_or(defaults.port),
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse(&get, "DATABASE_MAX_CONNECTIONS")?
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
            request_timeout: parse(&get, "REQUEST_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            body_limit_bytes: parse(&get, "BODY_LIMIT_BYTES")?.unwrap_or(defaults.body_limit_bytes),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse<T, G>(get: &G, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
