//! Test builders — ergonomic constructors for `LogRecord` values and the
//! raw lines that parse into them.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use ngxstat_core::LogRecord;

// ---------------------------------------------------------------------------
// LogRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogRecord`] fixtures.
///
/// # Example
///
/// ```rust
/// let record = LogRecordBuilder::new("/index.html")
///     .method("POST")
///     .status(404)
///     .size(0)
///     .build();
/// ```
pub struct LogRecordBuilder {
    client_address: String,
    timestamp: DateTime<FixedOffset>,
    method: String,
    resource: String,
    user_agent: String,
    status: u16,
    response_size: u64,
}

impl LogRecordBuilder {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            client_address: "127.0.0.1".to_string(),
            timestamp: at(2024, 1, 1, 12, 0, 0),
            method: "GET".to_string(),
            resource: resource.into(),
            user_agent: "Mozilla/5.0".to_string(),
            status: 200,
            response_size: 1234,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.client_address = address.into();
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.response_size = size;
        self
    }

    pub fn build(self) -> LogRecord {
        LogRecord {
            client_address: self.client_address,
            timestamp: self.timestamp,
            method: self.method,
            resource: self.resource,
            user_agent: self.user_agent,
            status: self.status,
            response_size: self.response_size,
        }
    }

    /// The combined-format line for this record.
    pub fn line(self) -> String {
        self.build().to_string()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A record with the given resource, status, and size; defaults elsewhere.
pub fn record(resource: &str, status: u16, size: u64) -> LogRecord {
    LogRecordBuilder::new(resource).status(status).size(size).build()
}

/// A UTC timestamp.
pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// An offset-naive range bound.
pub fn bound(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

/// Build `n` records cycling through three resources, four statuses, and
/// sizes `0, 100, 200, …`.
pub fn build_corpus(n: usize) -> Vec<LogRecord> {
    const RESOURCES: &[&str] = &["/index.html", "/about.html", "/api/v1/items"];
    const STATUSES: &[u16] = &[200, 200, 304, 404];
    (0..n)
        .map(|i| {
            LogRecordBuilder::new(RESOURCES[i % RESOURCES.len()])
                .status(STATUSES[i % STATUSES.len()])
                .size((i as u64 % 7) * 100)
                .timestamp(at(2024, 1, 1 + (i % 28) as u32, 12, 0, 0))
                .build()
        })
        .collect()
}
