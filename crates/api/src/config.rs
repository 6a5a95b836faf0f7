//! Environment-driven server configuration.

use thiserror::Error;

pub const HOST_VAR: &str = "USERREG_HOST";
pub const PORT_VAR: &str = "USERREG_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a TCP port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (unset or blank means default).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR).filter(|v| !v.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(raw) = lookup(PORT_VAR).filter(|v| !v.trim().is_empty()) {
            config.port = raw.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_host_and_port() {
        let vars = [(HOST_VAR, "127.0.0.1"), (PORT_VAR, " 9000 ")];
        let config = ApiConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = ApiConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                var: PORT_VAR,
                value: "eighty".to_string()
            }
        );
    }
}
