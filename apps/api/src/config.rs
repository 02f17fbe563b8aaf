//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. `main` loads a `.env` file first, if present.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use cashier_core::CheckoutPolicy;
use cashier_db::DbConfig;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Listen address
    pub host: String,

    /// SQLite database file
    pub db_path: PathBuf,

    /// Connection pool size
    pub db_max_connections: u32,

    /// Let checkout drive stock below zero
    pub allow_negative_stock: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(ApiConfig {
            port: var("PORT", "8080")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            host: var("HOST", "0.0.0.0"),

            db_path: PathBuf::from(var("DB_PATH", "./cashier.db")),

            db_max_connections: var("DB_MAX_CONNECTIONS", "5")
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,

            allow_negative_stock: parse_bool(&var("ALLOW_NEGATIVE_STOCK", "false"))
                .ok_or_else(|| ConfigError::InvalidValue("ALLOW_NEGATIVE_STOCK".to_string()))?,
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HOST".to_string()))
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.db_path.clone()).max_connections(self.db_max_connections)
    }

    pub fn checkout_policy(&self) -> CheckoutPolicy {
        CheckoutPolicy {
            allow_negative_stock: self.allow_negative_stock,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.db_path, PathBuf::from("./cashier.db"));
        assert_eq!(config.db_max_connections, 5);
        assert!(!config.allow_negative_stock);
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "3000"),
            ("HOST", "127.0.0.1"),
            ("DB_PATH", "/var/lib/cashier/cashier.db"),
            ("ALLOW_NEGATIVE_STOCK", "TRUE"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert!(config.checkout_policy().allow_negative_stock);
        assert_eq!(config.db_config().max_connections, 5);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("PORT", "http")]),
            Err(ConfigError::InvalidValue(name)) if name == "PORT"
        ));
        assert!(load(&[("DB_MAX_CONNECTIONS", "0")]).is_err());
        assert!(load(&[("ALLOW_NEGATIVE_STOCK", "maybe")]).is_err());
        assert!(load(&[("HOST", "not a host")]).unwrap().bind_addr().is_err());
    }
}
