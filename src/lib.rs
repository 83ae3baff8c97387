//! ngxstat — summarise NGINX access logs.
//!
//! Reads an access log from a file, glob, stdin, or URL, parses it with the
//! fixed `combined` grammar, filters by time range and method / user agent,
//! and renders request statistics as a Markdown or AsciiDoc report.
//!
//! # Architecture
//!
//! ```text
//! feeds ──► core::parser ──► core::analyzer ──► report
//!   ▲                                               │
//!   └──────────────── app (orchestration) ◄─────────┘
//! ```
//!
//! The pipeline is synchronous and batch-oriented: the whole source is read
//! before anything is aggregated. This crate only holds the argument surface
//! ([`cli`]) and the glue ([`app`]); the logic lives in the member crates.

pub mod app;
pub mod cli;

pub use app::{run, Outcome};
pub use cli::{Cli, Settings};
