pub mod server;
pub mod tracing;

use std::env;
use thiserror::Error;

/// Failures while reading configuration from the process environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable '{0}'")]
    MissingEnvVar(String),

    #[error("Invalid value for environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment (dev = local, prod = deployed)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read `APP_ENV`. Anything other than `production` (any casing),
    /// including an unset variable, means development.
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        !self.is_production()
    }
}

/// Name and version of the running binary, captured at compile time.
///
/// Construct with the [`app_info!`] macro so the values come from the
/// calling crate's Cargo metadata, not this library's.
#[derive(Clone, Debug)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Capture the calling crate's `CARGO_PKG_NAME`/`CARGO_PKG_VERSION` as an
/// [`AppInfo`]. Must be a macro: `env!` expands where it is written.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Configuration that knows how to assemble itself from the environment.
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Read `key`, falling back to `default` when unset.
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read `key`, failing with [`ConfigError::MissingEnvVar`] when unset.
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Read `key` and parse it as a `T`, falling back to `default` when unset.
///
/// Parse failures carry the variable name so the operator knows which
/// knob to fix.
pub fn env_parsed<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    env_or_default(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        })
}
