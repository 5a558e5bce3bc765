//! Runtime settings: defaults, overridden by environment variables (after `.env` is loaded).

use crate::error::ConfigError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub bcrypt_cost: u32,
    pub body_limit_bytes: usize,
    /// Create missing tables from the catalog at startup.
    pub apply_schema: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: "0.0.0.0".into(),
            port: 3000,
            database_url: "postgres://localhost/bizdesk".into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
            bcrypt_cost: 10,
            body_limit_bytes: 1024 * 1024,
            apply_schema: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults, malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = AppConfig::default();
        if let Some(v) = lookup("BIND_ADDR") {
            cfg.bind_addr = v;
        }
        if let Some(v) = lookup("DATABASE_URL") {
            cfg.database_url = v;
        }
        override_parsed(&lookup, "PORT", &mut cfg.port)?;
        override_parsed(&lookup, "DATABASE_MAX_CONNECTIONS", &mut cfg.max_connections)?;
        let mut acquire_secs = cfg.acquire_timeout.as_secs();
        override_parsed(&lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS", &mut acquire_secs)?;
        cfg.acquire_timeout = Duration::from_secs(acquire_secs);
        override_parsed(&lookup, "BCRYPT_COST", &mut cfg.bcrypt_cost)?;
        override_parsed(&lookup, "BODY_LIMIT_BYTES", &mut cfg.body_limit_bytes)?;
        override_parsed(&lookup, "APPLY_SCHEMA", &mut cfg.apply_schema)?;

        if !(4..=31).contains(&cfg.bcrypt_cost) {
            return Err(ConfigError::Env(format!("BCRYPT_COST must be 4-31, got {}", cfg.bcrypt_cost)));
        }
        if cfg.max_connections == 0 {
            return Err(ConfigError::Env("DATABASE_MAX_CONNECTIONS must be positive".into()));
        }
        Ok(cfg)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn override_parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
) -> Result<(), ConfigError> {
    if let Some(raw) = lookup(key) {
        *slot = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Env(format!("{} has invalid value '{}'", key, raw)))?;
    }
    Ok(())
}
