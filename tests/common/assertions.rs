//! Domain-specific assertion macros for ngxstat harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! statistics invariant was violated.

use ngxstat_core::{LogRecord, Statistics};

// ---------------------------------------------------------------------------
// Statistics invariants
// ---------------------------------------------------------------------------

/// Assert that both count maps sum to `total_requests`.
///
/// ```rust
/// assert_counts_consistent!(stats);
/// ```
#[macro_export]
macro_rules! assert_counts_consistent {
    ($stats:expr) => {{
        let stats: &ngxstat_core::Statistics = &$stats;
        let resources: u64 = stats.resource_counts.values().sum();
        let statuses: u64 = stats.status_counts.values().sum();
        if resources != stats.total_requests || statuses != stats.total_requests {
            panic!(
                "assert_counts_consistent! failed:\n  total_requests: {}\n  sum(resource_counts): {}\n  sum(status_counts): {}",
                stats.total_requests, resources, statuses
            );
        }
    }};
}

/// Assert that `stats` agrees with a direct computation over `records`:
/// minimum size, zero-size count, and total.
pub fn assert_matches_records(stats: &Statistics, records: &[LogRecord]) {
    let sizes: Vec<u64> = records.iter().map(|r| r.response_size).collect();
    assert_eq!(
        stats.total_requests,
        records.len() as u64,
        "total_requests should equal the record count"
    );
    assert_eq!(
        Some(stats.min_response_size),
        sizes.iter().copied().min(),
        "min_response_size should equal min(sizes)"
    );
    assert_eq!(
        stats.zero_response_count,
        sizes.iter().filter(|&&s| s == 0).count() as u64,
        "zero_response_count should count sizes equal to 0"
    );
}

// ---------------------------------------------------------------------------
// Report assertions
// ---------------------------------------------------------------------------

/// Assert that a rendered report contains a line, with a readable dump on
/// failure.
///
/// ```rust
/// assert_report_line!(report, "| Total requests | 4 |");
/// ```
#[macro_export]
macro_rules! assert_report_line {
    ($report:expr, $line:expr) => {{
        let report: &str = &$report;
        let line: &str = $line;
        if !report.lines().any(|l| l == line) {
            panic!(
                "assert_report_line! failed: line not found.\n  expected line: {:?}\n  report:\n{}",
                line, report
            );
        }
    }};
}

/// Assert that a record list holds exactly the given resources, in order.
#[macro_export]
macro_rules! assert_resources {
    ($records:expr, [$($resource:expr),* $(,)?]) => {{
        let records: &[ngxstat_core::LogRecord] = &$records;
        let actual: Vec<&str> = records.iter().map(|r| r.resource.as_str()).collect();
        let expected: Vec<&str> = vec![$($resource),*];
        pretty_assertions::assert_eq!(actual, expected, "record resources differ");
    }};
}
