//! Server configuration.
//!
//! Everything is read once at startup from the process environment (a `.env`
//! file is honoured through `dotenvy`) and then handed to the handlers as
//! application data. Handlers never read the environment themselves.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use log::info;
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JSON_LIMIT_BYTES: usize = 10 * 1024 * 1024; // 10 MB
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Where the external case-management service lives.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamConfig {
    /// Absolute http(s) root without a trailing slash, e.g. `http://records:8000`.
    pub base_url: String,
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        })
    }

    /// Joins an absolute API path such as `/api/missing_persons` onto the base.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upstream: UpstreamConfig,
    pub open_browser: bool,
    pub json_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("BASE_URL"))?;

        let mut upstream = UpstreamConfig::new(&base_url)?;
        upstream.timeout = Duration::from_secs(parse_or(
            &lookup,
            "UPSTREAM_TIMEOUT_SECS",
            DEFAULT_UPSTREAM_TIMEOUT_SECS,
        )?);

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            upstream,
            open_browser: parse_flag(&lookup, "OPEN_BROWSER")?,
            json_limit: parse_or(&lookup, "JSON_LIMIT_BYTES", DEFAULT_JSON_LIMIT_BYTES)?,
        })
    }

    pub fn bind_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
        key: "BASE_URL",
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            key: "BASE_URL",
            reason: format!("unsupported scheme `{}`", parsed.scheme()),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<bool, ConfigError> {
    match lookup(key).as_deref().map(str::trim) {
        None | Some("") | Some("0") | Some("false") => Ok(false),
        Some("1") | Some("true") => Ok(true),
        Some(other) => Err(ConfigError::Invalid {
            key,
            reason: format!("expected true/false, got `{other}`"),
        }),
    }
}
