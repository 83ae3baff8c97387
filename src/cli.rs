//! Command-line surface and settings resolution.
//!
//! Flags override the config file. Everything that can be rejected up front
//! (dates, report format, agent pattern) is rejected here, before any log is
//! read.

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::Parser;
use ngxstat_core::config::{parse_bound, Config, SourceConfig};
use ngxstat_core::{FieldFilter, FilterCriteria};
use ngxstat_report::ReportFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ngxstat",
    version,
    about = "Summarise NGINX access logs as a Markdown or AsciiDoc report"
)]
pub struct Cli {
    /// Log file, glob pattern (e.g. `logs/*.log`), `-` for stdin, or an
    /// http(s):// URL.
    #[arg(long)]
    pub path: String,

    /// Report format: `markdown` or `adoc`. Defaults to `[report] format`.
    #[arg(long)]
    pub format: Option<String>,

    /// Drop requests before this time. ISO-8601; a bare date means midnight.
    #[arg(long, value_parser = parse_bound)]
    pub from: Option<NaiveDateTime>,

    /// Drop requests after this time. ISO-8601; a bare date means midnight.
    #[arg(long, value_parser = parse_bound)]
    pub to: Option<NaiveDateTime>,

    /// Field to filter on: `method` or `agent`.
    #[arg(long)]
    pub filter_field: Option<String>,

    /// Exact method, or an agent glob where `*` matches anything.
    #[arg(long)]
    pub filter_value: Option<String>,

    /// Config file to use instead of ~/.config/ngxstat/config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log at debug level to stderr (RUST_LOG still wins when set).
    #[arg(long)]
    pub debug: bool,
}

/// Fully resolved run settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub location: String,
    pub format: ReportFormat,
    pub criteria: FilterCriteria,
    pub source: SourceConfig,
}

impl Cli {
    /// Load the config named by `--config` (errors are fatal) or the default
    /// one (errors are logged and the built-in defaults used).
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("loading config from {}", path.display())),
            None => Ok(Config::load().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring unreadable config file");
                Config::defaults()
            })),
        }
    }

    pub fn settings(&self, config: &Config) -> anyhow::Result<Settings> {
        let format: ReportFormat = self
            .format
            .as_deref()
            .unwrap_or(config.report.format.as_str())
            .parse()?;

        let field = FieldFilter::from_parts(
            self.filter_field.as_deref(),
            self.filter_value.as_deref(),
        )?;

        Ok(Settings {
            location: self.path.clone(),
            format,
            criteria: FilterCriteria::between(self.from, self.to).with_field(field),
            source: config.source.clone(),
        })
    }
}
