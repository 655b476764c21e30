//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` first, so every key can live in the
//! process environment or in a local `.env` file.

use std::net::IpAddr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 24 * 7;
pub const DEFAULT_ACCESS_CODE_TTL_MINUTES: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub session_ttl: Duration,
    pub access_code_ttl: Duration,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
    /// Return freshly issued access codes in the API response. Development only.
    pub echo_access_codes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_HOURS * 3600),
            access_code_ttl: Duration::from_secs(DEFAULT_ACCESS_CODE_TTL_MINUTES * 60),
            cookie_secure: false,
            echo_access_codes: false,
        }
    }
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SESSION_TTL_HOURS`: default 168
    /// - `ACCESS_CODE_TTL_MINUTES`: default 10
    /// - `COOKIE_SECURE`: default false
    /// - `ECHO_ACCESS_CODES`: default false
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for any key that is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for any key that is set but unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), defaults.bind_addr)?;
        let port = parse_or("PORT", lookup("PORT"), defaults.port)?;
        let session_ttl_hours = parse_or("SESSION_TTL_HOURS", lookup("SESSION_TTL_HOURS"), DEFAULT_SESSION_TTL_HOURS)?;
        let access_code_ttl_minutes = parse_or(
            "ACCESS_CODE_TTL_MINUTES",
            lookup("ACCESS_CODE_TTL_MINUTES"),
            DEFAULT_ACCESS_CODE_TTL_MINUTES,
        )?;
        let cookie_secure = bool_or("COOKIE_SECURE", lookup("COOKIE_SECURE"), defaults.cookie_secure)?;
        let echo_access_codes = bool_or("ECHO_ACCESS_CODES", lookup("ECHO_ACCESS_CODES"), defaults.echo_access_codes)?;

        Ok(Self {
            bind_addr,
            port,
            session_ttl: Duration::from_secs(session_ttl_hours.saturating_mul(3600)),
            access_code_ttl: Duration::from_secs(access_code_ttl_minutes.saturating_mul(60)),
            cookie_secure,
            echo_access_codes,
        })
    }
}

/// Parse the usual truthy/falsy spellings, case-insensitive.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn bool_or(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid { key, value }),
    }
}

pub(crate) fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
