//! ngxstat-core — parse, filter, and aggregate NGINX access logs.
//!
//! This crate holds the only non-trivial logic in ngxstat: the fixed-format
//! line parser, the per-line filter predicate, and the statistics accumulator.
//! Sources and report rendering live in `ngxstat-feeds` and `ngxstat-report`.
//!
//! # Pipeline
//!
//! ```text
//! raw lines ──► parser (+ filter) ──► Vec<LogRecord> ──► analyzer ──► Statistics
//! ```
//!
//! Everything here is synchronous and single-threaded. The input is fully
//! buffered before aggregation begins.

pub mod analyzer;
pub mod config;
pub mod filter;
pub mod parser;
pub mod types;

pub use analyzer::{analyze, Accumulator, AnalysisError, Statistics};
pub use filter::{FieldFilter, FilterCriteria, FilterError, FilterReason};
pub use parser::{parse_line, parse_lines, parse_record, LineOutcome, ParseError, ParseReport};
pub use types::LogRecord;
