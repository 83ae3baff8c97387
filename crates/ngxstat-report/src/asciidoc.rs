//! AsciiDoc layout. Same rows as the Markdown report, in `|===` tables.

use crate::layout::{resource_rows, summary_rows};
use crate::status::status_name;
use crate::ReportFormatter;
use ngxstat_core::Statistics;
use std::fmt::{self, Write};

const TABLE: &str = "|===";

#[derive(Debug, Clone, Copy, Default)]
pub struct AsciidocFormatter;

impl ReportFormatter for AsciidocFormatter {
    fn format(&self, stats: &Statistics) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_report(&mut out, stats);
        out
    }
}

fn write_report(out: &mut String, stats: &Statistics) -> fmt::Result {
    writeln!(out, "== General information\n")?;
    writeln!(out, "{TABLE}")?;
    writeln!(out, "| Metric | Value")?;
    for (label, value) in summary_rows(stats) {
        writeln!(out, "| {label} | {value}")?;
    }
    writeln!(out, "{TABLE}")?;

    writeln!(out, "\n== Requested resources\n")?;
    writeln!(out, "{TABLE}")?;
    writeln!(out, "| Resource | Requests")?;
    for (resource, count) in resource_rows(stats) {
        writeln!(out, "| {resource} | {count}")?;
    }
    writeln!(out, "{TABLE}")?;

    writeln!(out, "\n== Response codes\n")?;
    writeln!(out, "{TABLE}")?;
    writeln!(out, "| Code | Name | Requests")?;
    for (code, count) in stats.status_breakdown() {
        writeln!(out, "| {code} | {} | {count}", status_name(code))?;
    }
    writeln!(out, "{TABLE}")?;
    Ok(())
}
