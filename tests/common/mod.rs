//! Shared test utilities for ngxstat integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod fake_log_server;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
