//! Cell values shared by every layout, so both formats print identical
//! numbers.

use chrono::NaiveDateTime;
use ngxstat_core::Statistics;

const BOUND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `(label, value)` rows of the summary table, in display order.
pub fn summary_rows(stats: &Statistics) -> Vec<(&'static str, String)> {
    vec![
        ("File(s)", format!("`{}`", escape_cell(&stats.source))),
        ("Start date", bound(stats.range_start)),
        ("End date", bound(stats.range_end)),
        ("Total requests", stats.total_requests.to_string()),
        (
            "Average response size",
            format!("{:.2}b", stats.average_response_size),
        ),
        ("95p response size", format!("{}b", stats.p95_response_size)),
        ("Min response size", format!("{}b", stats.min_response_size)),
        ("Zero-size responses", stats.zero_response_count.to_string()),
    ]
}

/// `(resource, count)` rows, resource already escaped and quoted.
pub fn resource_rows(stats: &Statistics) -> Vec<(String, u64)> {
    stats
        .top_resources()
        .into_iter()
        .map(|(resource, count)| (format!("`{}`", escape_cell(resource)), count))
        .collect()
}

fn bound(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(BOUND_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Both markups use `|` as the cell separator.
pub fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
