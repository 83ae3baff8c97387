//! Record filters applied at parse time.
//!
//! A line that parses cleanly is still dropped when it falls outside the
//! requested time range or fails the optional field filter. Filtering is not
//! an error; the parser reports it as [`FilterReason`].
//!
//! Range bounds are offset-naive. Record timestamps are compared by their
//! wall-clock component with the recorded offset discarded, so logs that mix
//! UTC offsets compare inconsistently. That is inherited behaviour and is not
//! normalised here.

use crate::types::LogRecord;
use chrono::NaiveDateTime;
use regex::Regex;
use thiserror::Error;

/// Errors raised while building a [`FieldFilter`].
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid agent pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Why an otherwise well-formed line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    /// Timestamp strictly before `from`.
    BeforeRange,
    /// Timestamp strictly after `to`.
    AfterRange,
    /// The field filter rejected the method or user agent.
    FieldMismatch,
}

/// Per-run filter settings. Absent bounds leave that side of the range open.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub field: Option<FieldFilter>,
}

impl FilterCriteria {
    /// Time range only, no field filter.
    pub fn between(from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Self {
        Self {
            from,
            to,
            field: None,
        }
    }

    pub fn with_field(mut self, field: Option<FieldFilter>) -> Self {
        self.field = field;
        self
    }

    /// Range check first, then the field filter.
    pub fn check(&self, record: &LogRecord) -> Result<(), FilterReason> {
        let wall_clock = record.timestamp.naive_local();
        if self.from.is_some_and(|from| wall_clock < from) {
            return Err(FilterReason::BeforeRange);
        }
        if self.to.is_some_and(|to| wall_clock > to) {
            return Err(FilterReason::AfterRange);
        }
        match &self.field {
            Some(field) if !field.matches(record) => Err(FilterReason::FieldMismatch),
            _ => Ok(()),
        }
    }
}

/// Filter on a single record field.
#[derive(Debug, Clone)]
pub enum FieldFilter {
    /// Case-insensitive exact match on the HTTP method.
    Method(String),
    /// Case-insensitive glob over the whole user agent, compiled to a regex.
    Agent(Regex),
}

impl FieldFilter {
    /// Build a filter from the raw `--filter-field` / `--filter-value` pair.
    ///
    /// Returns `Ok(None)` when either half is missing or the field name is
    /// not one of `method` / `agent` (any case). Unknown names are logged and
    /// otherwise ignored, so every record passes.
    pub fn from_parts(
        name: Option<&str>,
        pattern: Option<&str>,
    ) -> Result<Option<Self>, FilterError> {
        let (Some(name), Some(pattern)) = (name, pattern) else {
            return Ok(None);
        };
        match name.to_ascii_lowercase().as_str() {
            "method" => Ok(Some(Self::method(pattern))),
            "agent" => Self::agent(pattern).map(Some),
            other => {
                tracing::warn!(field = other, "unknown filter field, field filtering disabled");
                Ok(None)
            }
        }
    }

    pub fn method(method: &str) -> Self {
        FieldFilter::Method(method.to_string())
    }

    pub fn agent(pattern: &str) -> Result<Self, FilterError> {
        glob_to_regex(pattern)
            .map(FieldFilter::Agent)
            .map_err(|source| FilterError::Pattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        match self {
            FieldFilter::Method(method) => record.method.eq_ignore_ascii_case(method),
            FieldFilter::Agent(re) => re.is_match(&record.user_agent),
        }
    }
}

/// Compile a glob where `*` matches any run of characters (including none).
/// Everything else matches literally, case-insensitively, against the full
/// string.
pub fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("(?is)^(?:{body})$"))
}
