use std::str::FromStr;

use thiserror::Error;

pub const APP_NAME: &str = "APP_NAME";
pub const APP_VERSION: &str = "APP_VERSION";
pub const API_PREFIX: &str = "API_PREFIX";
pub const DOCS_PATH: &str = "DOCS_PATH";
pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";

const DEFAULT_APP_NAME: &str = "VibeMoney Stock API";
const DEFAULT_API_PREFIX: &str = "/api/v1";
const DEFAULT_DOCS_PATH: &str = "/docs";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must not be empty")]
    Empty { key: &'static str },

    #[error("{key} must start with '/' and must not end with '/': '{value}'")]
    InvalidPath { key: &'static str, value: String },

    #[error("{key} is not a valid {expected}: '{value}'")]
    Parse {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Process-wide settings, read once at startup and immutable afterwards.
///
/// Every field can be overridden by the environment variable of the same name (see the
/// constants in this module); a `.env` file is honoured when the binary loads it first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub app_name: String,
    pub version: String,
    /// Mount point of the versioned API, e.g. `/api/v1`
    pub api_prefix: String,
    /// Interactive docs path, relative to `api_prefix`
    pub docs_path: String,
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            docs_path: DEFAULT_DOCS_PATH.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, falling back to the defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            app_name: non_empty(APP_NAME, lookup(APP_NAME))?.unwrap_or(defaults.app_name),
            version: non_empty(APP_VERSION, lookup(APP_VERSION))?.unwrap_or(defaults.version),
            api_prefix: url_path(API_PREFIX, lookup(API_PREFIX))?.unwrap_or(defaults.api_prefix),
            docs_path: url_path(DOCS_PATH, lookup(DOCS_PATH))?.unwrap_or(defaults.docs_path),
            host: non_empty(HOST, lookup(HOST))?.unwrap_or(defaults.host),
            port: parsed(PORT, lookup(PORT), "port number")?.unwrap_or(defaults.port),
        })
    }

    pub fn docs_url(&self) -> String {
        format!("{}{}", self.api_prefix, self.docs_path)
    }

    pub fn redoc_url(&self) -> String {
        format!("{}/redoc", self.api_prefix)
    }

    pub fn rapidoc_url(&self) -> String {
        format!("{}/rapidoc", self.api_prefix)
    }

    pub fn scalar_url(&self) -> String {
        format!("{}/scalar", self.api_prefix)
    }

    pub fn openapi_url(&self) -> String {
        format!("{}/openapi.json", self.api_prefix)
    }
}

fn non_empty(key: &'static str, value: Option<String>) -> Result<Option<String>, ConfigError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { key }),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

fn url_path(key: &'static str, value: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(value) = non_empty(key, value)? else {
        return Ok(None);
    };

    if !value.starts_with('/') || value.len() < 2 || value.ends_with('/') {
        return Err(ConfigError::InvalidPath { key, value });
    }
    Ok(Some(value))
}

fn parsed<T: FromStr>(
    key: &'static str,
    value: Option<String>,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    non_empty(key, value)?
        .map(|value| {
            value.parse::<T>().map_err(|_| ConfigError::Parse {
                key,
                value,
                expected,
            })
        })
        .transpose()
}
