use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid number, got '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` via dotenvy in `main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let pool_size = parse_or(
            "DATABASE_POOL_SIZE",
            lookup("DATABASE_POOL_SIZE"),
            DEFAULT_POOL_SIZE,
        )?;
        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                name: "DATABASE_POOL_SIZE",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            database_url,
            host,
            port,
            pool_size,
        })
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
