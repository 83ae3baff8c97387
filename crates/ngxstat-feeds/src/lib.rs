//! ngxstat-feeds — log source adapters for ngxstat.
//!
//! Each source reads its whole input into memory as a list of lines. Bytes
//! are decoded as lossy UTF-8 and line endings (`\n` or `\r\n`) are stripped.
//! Which adapter is used depends only on the location string; see
//! [`open_source`].

pub mod file;
pub mod stdin;
pub mod url;

use ngxstat_core::config::SourceConfig;
use std::io::BufRead;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileSource;
pub use stdin::StdinSource;
pub use url::UrlSource;

/// The whole source failed. Distinct from a source that is merely empty.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no files match {pattern}")]
    NoMatches { pattern: String },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {url}: {source}")]
    HttpBody {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Something that can supply raw access log lines.
pub trait LineSource {
    /// Label for reports: the path, glob, or URL as the user gave it.
    fn describe(&self) -> String;

    /// Read every line. An empty input is `Ok(vec![])`, not an error.
    fn read_lines(&self) -> Result<Vec<String>, SourceError>;
}

/// Pick a source for `location`:
///
/// | Location                    | Source          |
/// |-----------------------------|-----------------|
/// | `http://…`, `https://…`     | [`UrlSource`]   |
/// | `-`                         | [`StdinSource`] |
/// | anything else               | [`FileSource`]  |
pub fn open_source(location: &str, config: &SourceConfig) -> Box<dyn LineSource> {
    if url::is_url(location) {
        Box::new(UrlSource::new(location, config))
    } else if location == "-" {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Read `reader` to the end, splitting on `\n`.
pub fn read_lines_from<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}
