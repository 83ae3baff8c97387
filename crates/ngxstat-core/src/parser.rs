//! Parser — turns raw access log lines into [`LogRecord`] values.
//!
//! Exactly one grammar is supported, NGINX `combined`:
//!
//! ```text
//! <addr> <ident> <user> [<timestamp>] "<method> <resource> <protocol>" <status> <size> "<referrer>" "<agent>"
//! ```
//!
//! A line is handled in three steps: structural match plus field conversion,
//! the time-range check, then the field filter. Failures at any step are
//! per-line outcomes, never errors that abort the batch.

use crate::filter::{FilterCriteria, FilterReason};
use crate::types::{LogRecord, TIMESTAMP_FORMAT};
use chrono::DateTime;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

const ACCESS_LINE_PATTERN: &str =
    r#"^(\S+) \S+ \S+ \[(.+?)\] "(\S+) (\S+) \S+" (\d{3}) (\d+) "(.*?)" "(.*?)""#;

static ACCESS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ACCESS_LINE_PATTERN).expect("built-in access log pattern must compile")
});

/// Exact shape of the bracketed timestamp. chrono alone also accepts
/// lowercase months, one-digit days, and `+00:00` offsets.
static TIMESTAMP_LAYOUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}/[A-Z][a-z]{2}/\d{4}:\d{2}:\d{2}:\d{2} [+-]\d{4}$")
        .expect("built-in timestamp layout must compile")
});

/// Why a line could not be turned into a record.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line does not match the combined log format")]
    Mismatch,
    #[error("timestamp {value:?} is not in dd/Mon/yyyy:HH:mm:ss +hhmm layout")]
    TimestampLayout { value: String },
    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid {field} {value:?}: {source}")]
    Number {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Result of feeding one line through the parser and filter.
#[derive(Debug)]
pub enum LineOutcome {
    Record(LogRecord),
    Filtered(FilterReason),
    Failed(ParseError),
}

/// Everything a batch parse produced. `filtered` and `failed` are counts of
/// lines that yielded no record.
#[derive(Debug, Default)]
pub struct ParseReport {
    pub records: Vec<LogRecord>,
    pub filtered: usize,
    pub failed: usize,
}

/// Parse a line without applying any filter.
pub fn parse_record(line: &str) -> Result<LogRecord, ParseError> {
    let caps = ACCESS_LINE.captures(line).ok_or(ParseError::Mismatch)?;

    let raw_ts = &caps[2];
    if !TIMESTAMP_LAYOUT.is_match(raw_ts) {
        return Err(ParseError::TimestampLayout {
            value: raw_ts.to_string(),
        });
    }
    let timestamp =
        DateTime::parse_from_str(raw_ts, TIMESTAMP_FORMAT).map_err(|source| {
            ParseError::Timestamp {
                value: raw_ts.to_string(),
                source,
            }
        })?;

    Ok(LogRecord {
        client_address: caps[1].to_string(),
        timestamp,
        method: caps[3].to_string(),
        resource: caps[4].to_string(),
        status: parse_number("status", &caps[5])?,
        response_size: parse_number("response size", &caps[6])?,
        user_agent: caps[8].to_string(),
    })
}

fn parse_number<T>(field: &'static str, value: &str) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|source| ParseError::Number {
        field,
        value: value.to_string(),
        source,
    })
}

/// Parse a line and apply `criteria` to the result.
pub fn parse_line(line: &str, criteria: &FilterCriteria) -> LineOutcome {
    match parse_record(line) {
        Ok(record) => match criteria.check(&record) {
            Ok(()) => LineOutcome::Record(record),
            Err(reason) => LineOutcome::Filtered(reason),
        },
        Err(err) => LineOutcome::Failed(err),
    }
}

/// Parse a whole batch, keeping accepted records in input order.
///
/// Blank lines are skipped without being counted. Unparseable lines are
/// logged at `warn` and counted in [`ParseReport::failed`].
pub fn parse_lines<I, S>(lines: I, criteria: &FilterCriteria) -> ParseReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ParseReport::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, criteria) {
            LineOutcome::Record(record) => report.records.push(record),
            LineOutcome::Filtered(reason) => {
                tracing::trace!(line_no = idx + 1, ?reason, "line filtered out");
                report.filtered += 1;
            }
            LineOutcome::Failed(err) => {
                tracing::warn!(line_no = idx + 1, error = %err, line, "skipping unparseable line");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        parsed = report.records.len(),
        filtered = report.filtered,
        failed = report.failed,
        "parsed access log"
    );
    report
}
