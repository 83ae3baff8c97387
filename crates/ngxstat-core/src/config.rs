//! Configuration types for ngxstat.
//!
//! [`Config::load`] reads `~/.config/ngxstat/config.toml` (or
//! `$XDG_CONFIG_HOME/ngxstat/config.toml`) layered on top of the built-in
//! defaults. The file is optional. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).
//!
//! Command-line flags override whatever is loaded here.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[report]
format = "markdown"

[source]
http_timeout_secs = 30
user_agent        = "ngxstat"
"#;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal configuration problems, reported before any log is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown report format {format:?}, expected one of: markdown, adoc")]
    UnknownFormat { format: String },

    #[error("invalid date {value:?}, expected ISO-8601 (e.g. 2024-01-02 or 2024-01-02T10:30:00)")]
    InvalidDate { value: String },

    #[error("failed to load config: {0}")]
    Load(#[from] config::ConfigError),
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// `[report]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// `markdown` or `adoc`. Validated when the report format is resolved.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String { "markdown".to_string() }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

/// `[source]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_http_timeout_secs() -> u64 { 30 }
fn default_user_agent() -> String { "ngxstat".to_string() }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the default location, layered on top of the built-in
    /// defaults. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit file path, layered on top of the built-in
    /// defaults. A missing file is not an error; a malformed one is.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Range bounds
// ---------------------------------------------------------------------------

const BOUND_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a `--from` / `--to` value into an offset-naive date-time.
///
/// Accepts a bare `yyyy-mm-dd` (midnight), `yyyy-mm-ddTHH:MM`,
/// `yyyy-mm-ddTHH:MM:SS[.fff]`, or RFC 3339 with an offset, in which case the
/// offset is dropped and the wall-clock value kept.
pub fn parse_bound(value: &str) -> Result<NaiveDateTime, ConfigError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }
    for fmt in BOUND_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt);
        }
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .map_err(|_| ConfigError::InvalidDate {
            value: value.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ngxstat")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
