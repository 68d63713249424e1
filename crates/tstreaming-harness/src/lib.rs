//! Conformance testing harness for tstreaming formatters.
//!
//! This crate provides:
//! - Fixture loading: JSON cases describing a formatter, an input and the
//!   expected bytes
//! - Runtime rendering: the same helpers the const-generic formatters use,
//!   driven by a parsed formatter description
//! - Verification and report generation (markdown + JSON)
//! - Structured JSONL logging with a SHA-256 artifact index

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod fixtures;
pub mod render;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use render::{FixtureValue, FormatSpec, Rendered, render};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
