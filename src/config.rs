//! Server configuration
//!
//! Settings come from built-in defaults, then an optional JSON file, then
//! `PATHSTORE_*` environment variables.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Environment variable overriding the listen address
pub const ENV_ADDR: &str = "PATHSTORE_ADDR";
/// Environment variable overriding the log filter
pub const ENV_LOG: &str = "PATHSTORE_LOG";
/// Environment variable overriding the request body limit
pub const ENV_MAX_BODY: &str = "PATHSTORE_MAX_BODY";

/// Configuration for the HTTP server and its store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,

    /// `tracing` filter directive, e.g. `info` or `pathstore=debug`
    pub log_filter: String,

    /// Initial capacity of the record map
    pub initial_capacity: usize,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,

    /// Allow cross-origin requests from any origin
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen_addr: "127.0.0.1:8080".to_string(),
            log_filter: "info".to_string(),
            initial_capacity: 1024,
            max_body_bytes: 8 * 1024 * 1024,
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional JSON file plus the environment
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse configuration from a JSON document
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Apply overrides from environment-style lookups
    pub fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ENV_ADDR) {
            self.listen_addr = addr;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        if let Some(max_body) = lookup(ENV_MAX_BODY) {
            self.max_body_bytes = max_body
                .trim()
                .parse()
                .with_context(|| format!("{} must be a byte count, got '{}'", ENV_MAX_BODY, max_body))?;
        }
        Ok(())
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.socket_addr()?;
        if self.max_body_bytes == 0 {
            bail!("max_body_bytes must be greater than zero");
        }
        Ok(())
    }

    /// The parsed listen address
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listen_addr
            .parse()
            .with_context(|| format!("invalid listen address '{}'", self.listen_addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ServerConfig::from_json(r#"{"listen_addr": "0.0.0.0:9000"}"#).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.initial_capacity, 1024);
        assert!(config.cors_permissive);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_filter": "debug", "max_body_bytes": 512}}"#).unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.max_body_bytes, 512);
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file(Path::new("/nonexistent/pathstore.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_ADDR, "127.0.0.1:7000"),
            (ENV_LOG, "pathstore=trace"),
            (ENV_MAX_BODY, " 1024 "),
        ]
        .into_iter()
        .collect();

        let mut config = ServerConfig::default();
        config
            .apply_env(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:7000");
        assert_eq!(config.log_filter, "pathstore=trace");
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_bad_env_body_limit() {
        let mut config = ServerConfig::default();
        let result = config.apply_env(|name| (name == ENV_MAX_BODY).then(|| "lots".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ServerConfig {
            listen_addr: "not an address".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            max_body_bytes: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
