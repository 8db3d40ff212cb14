//! Verification harness for the aixnet constant table.
//!
//! This crate provides:
//! - Fixture capture: record the table's values and helper behavior as JSON
//! - Fixture verify: replay captured fixtures against the table
//! - Report generation: human-readable + machine-readable verification reports
//! - Structured JSONL logging and environment configuration for all of the above

#![forbid(unsafe_code)]

pub mod args;
pub mod capture;
pub mod config;
pub mod diff;
mod error;
pub mod fixtures;
pub mod render;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::VerificationResult;
