//! Core record type for ngxstat-core.
//!
//! A [`LogRecord`] is one successfully parsed and accepted access log line.
//! Records are only ever built by the parser (or by test builders); a
//! malformed or filtered-out line never produces one.

use chrono::{DateTime, FixedOffset};

/// Timestamp layout inside the bracketed field, e.g. `10/Oct/2000:13:55:36 -0700`.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// One parsed line of an NGINX `combined` access log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// First whitespace-delimited token (IP or hostname).
    pub client_address: String,
    /// Request time with the UTC offset recorded in the log.
    pub timestamp: DateTime<FixedOffset>,
    /// HTTP method token. Only consulted by the field filter.
    pub method: String,
    /// Requested path, query string included verbatim.
    pub resource: String,
    /// Final quoted field. Only consulted by the field filter.
    pub user_agent: String,
    /// Three-digit HTTP status.
    pub status: u16,
    /// Response body size in bytes.
    pub response_size: u64,
}

/// Renders the record back into the combined log format. Fields the record
/// does not keep (ident, user, protocol, referrer) are written as
/// placeholders, so the output re-parses to an equal record.
impl std::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - - [{}] \"{} {} HTTP/1.1\" {} {} \"-\" \"{}\"",
            self.client_address,
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.method,
            self.resource,
            self.status,
            self.response_size,
            self.user_agent,
        )
    }
}
