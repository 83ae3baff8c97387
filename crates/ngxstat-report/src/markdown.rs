//! Markdown (GitHub-flavoured tables) layout.

use crate::layout::{resource_rows, summary_rows};
use crate::status::status_name;
use crate::ReportFormatter;
use ngxstat_core::Statistics;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, stats: &Statistics) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_report(&mut out, stats);
        out
    }
}

fn write_report(out: &mut String, stats: &Statistics) -> fmt::Result {
    writeln!(out, "#### General information\n")?;
    writeln!(out, "| Metric | Value |")?;
    writeln!(out, "|:---------------------:|-------------:|")?;
    for (label, value) in summary_rows(stats) {
        writeln!(out, "| {label} | {value} |")?;
    }

    writeln!(out, "\n#### Requested resources\n")?;
    writeln!(out, "| Resource | Requests |")?;
    writeln!(out, "|:---------------:|-----------:|")?;
    for (resource, count) in resource_rows(stats) {
        writeln!(out, "| {resource} | {count} |")?;
    }

    writeln!(out, "\n#### Response codes\n")?;
    writeln!(out, "| Code | Name | Requests |")?;
    writeln!(out, "|:---:|:---------------------:|-----------:|")?;
    for (code, count) in stats.status_breakdown() {
        writeln!(out, "| {code} | {} | {count} |", status_name(code))?;
    }
    Ok(())
}
