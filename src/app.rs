//! Pipeline orchestration: source → parser → analyzer → formatter.
//!
//! [`run`] never panics on bad input. Source failures and empty results are
//! returned as distinct [`Outcome`] variants so the caller can tell "could
//! not read the log" apart from "the log had nothing to report".

use crate::cli::Settings;
use ngxstat_core::{analyze, parse_lines, AnalysisError};
use ngxstat_feeds::{open_source, LineSource, SourceError};
use ngxstat_report::render;

/// Printed instead of a report when no record survived parsing and filtering.
pub const NO_DATA_MESSAGE: &str =
    "No log records to analyze: the source is empty or no line matched the filters.";

#[derive(Debug)]
pub enum Outcome {
    /// Rendered report, ready for stdout.
    Report(String),
    /// The source was read but yielded zero records.
    NoData,
    /// The source could not be read at all.
    SourceFailed(SourceError),
}

/// Run the whole pipeline for `settings`.
pub fn run(settings: &Settings) -> Outcome {
    let source = open_source(&settings.location, &settings.source);
    analyze_source(source.as_ref(), settings)
}

/// Same as [`run`] with an already-constructed source.
pub fn analyze_source(source: &dyn LineSource, settings: &Settings) -> Outcome {
    let descriptor = source.describe();

    let lines = match source.read_lines() {
        Ok(lines) => lines,
        Err(err) => {
            tracing::error!(source = %descriptor, error = %err, "log source unavailable");
            return Outcome::SourceFailed(err);
        }
    };
    tracing::debug!(source = %descriptor, lines = lines.len(), "read log source");

    let parsed = parse_lines(&lines, &settings.criteria);
    match analyze(&parsed.records) {
        Ok(stats) => {
            let stats = stats.labelled(descriptor, &settings.criteria);
            Outcome::Report(render(settings.format, &stats))
        }
        Err(AnalysisError::NoRecords) => {
            tracing::info!(
                source = %descriptor,
                lines = lines.len(),
                filtered = parsed.filtered,
                failed = parsed.failed,
                "no records to analyze"
            );
            Outcome::NoData
        }
    }
}
