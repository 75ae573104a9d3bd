//! Server configuration from the environment.
//!
//! `.env` is loaded by `main` before this runs, so values there behave like
//! real environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    Port { value: String, source: ParseIntError },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Read `PORT` (default 3000).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Port`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(std::env::var("PORT").ok())
    }

    fn from_port_var(value: Option<String>) -> Result<Self, ConfigError> {
        let port = match value {
            None => DEFAULT_PORT,
            Some(value) => value.trim().parse::<u16>().map_err(|source| ConfigError::Port { value, source })?,
        };
        Ok(Self { port })
    }
}
