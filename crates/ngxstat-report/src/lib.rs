//! ngxstat-report — render [`Statistics`] as text.
//!
//! Two layouts are supported, Markdown and AsciiDoc. Both read the same
//! fields, in the same order, with the same number formatting; only the
//! table markup differs. Formatters do no computation beyond formatting.
//!
//! Each report has three sections: a summary table, requests per resource
//! (most requested first), and requests per status code (ascending).

pub mod asciidoc;
pub mod layout;
pub mod markdown;
pub mod status;

use ngxstat_core::config::ConfigError;
use ngxstat_core::Statistics;

pub use asciidoc::AsciidocFormatter;
pub use markdown::MarkdownFormatter;
pub use status::status_name;

/// Output markup selected with `--format` or `[report] format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Asciidoc,
}

impl std::str::FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "adoc" | "asciidoc" => Ok(ReportFormat::Asciidoc),
            _ => Err(ConfigError::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Asciidoc => write!(f, "adoc"),
        }
    }
}

/// Renders statistics into one markup language.
pub trait ReportFormatter {
    fn format(&self, stats: &Statistics) -> String;
}

pub fn formatter_for(format: ReportFormat) -> Box<dyn ReportFormatter> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownFormatter),
        ReportFormat::Asciidoc => Box::new(AsciidocFormatter),
    }
}

/// Shorthand for `formatter_for(format).format(stats)`.
pub fn render(format: ReportFormat, stats: &Statistics) -> String {
    formatter_for(format).format(stats)
}
