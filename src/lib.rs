//! Deprector core library.
//!
//! This crate exposes programmatic APIs for governing deprecation warnings
//! raised during a test run: occurrence aggregation, policy-rule matching,
//! verdict evaluation, and summary formatting. The binary is a thin host
//! that replays a recorded warning-event stream through the same hooks an
//! embedding test harness would call.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `errors`: Fatal setup-time configuration errors.
//! - `models`: Data models for events, policy rules, and verdicts.
//! - `session`: Per-session occurrence aggregation and lifecycle.
//! - `engine`: Verdict evaluation joining counts with policy.
//! - `report`: Structured report lines and the summary title.
//! - `hooks`: Host-facing session hooks and the exit-status override.
//! - `output`: Human/JSON printers for check/rules.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod hooks;
pub mod models;
pub mod output;
pub mod report;
pub mod session;
pub mod utils;
