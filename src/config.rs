//! Service configuration
//!
//! Everything is read from environment variables, with defaults suitable
//! for local development.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Variable holding the bind address
pub const ADDR_VAR: &str = "GROCERY_ADDR";

/// Variable selecting the run mode
pub const ENV_VAR: &str = "GROCERY_ENV";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    Parse { key: String, details: String },
}

/// Run mode of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Normal,
    /// Store starts pre-seeded with fixture items
    Test,
}

impl RunMode {
    /// Parse a mode name; anything other than `test` is normal mode
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("test") {
            RunMode::Test
        } else {
            RunMode::Normal
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, RunMode::Test)
    }
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub addr: SocketAddr,

    /// Run mode
    pub mode: RunMode,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_addr = env_or_default(ADDR_VAR, DEFAULT_ADDR);
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Parse {
                key: ADDR_VAR.to_string(),
                details: format!("'{}': {}", raw_addr, e),
            })?;

        let mode = RunMode::parse(&env_or_default(ENV_VAR, "development"));

        Ok(Config { addr, mode })
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset([ADDR_VAR, ENV_VAR], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
            assert_eq!(config.mode, RunMode::Normal);
        });
    }

    #[test]
    fn test_test_mode_case_insensitive() {
        temp_env::with_var(ENV_VAR, Some("TEST"), || {
            let config = Config::from_env().unwrap();
            assert!(config.mode.is_test());
        });

        temp_env::with_var(ENV_VAR, Some("production"), || {
            let config = Config::from_env().unwrap();
            assert!(!config.mode.is_test());
        });
    }

    #[test]
    fn test_custom_addr() {
        temp_env::with_var(ADDR_VAR, Some("0.0.0.0:8081"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.addr.port(), 8081);
        });
    }

    #[test]
    fn test_invalid_addr() {
        temp_env::with_var(ADDR_VAR, Some("not-an-address"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains(ADDR_VAR));
        });
    }
}
