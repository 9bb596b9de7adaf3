use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "EVENTS_API_ADDR";
pub const SEED_VAR: &str = "EVENTS_API_SEED";
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// Start with the two default events instead of an empty collection.
    pub seed: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            name: ADDR_VAR,
            value: raw_addr.clone(),
        })?;

        let seed = match lookup(SEED_VAR) {
            None => true,
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: SEED_VAR,
                        value: raw,
                    });
                }
            },
        };

        Ok(Self { addr, seed })
    }
}
