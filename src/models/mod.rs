//! Shared data models for events, policy rules, and evaluation output.

pub mod event;
pub mod policy;

use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Per-identifier decision after joining counts with the policy table.
pub enum Outcome {
    /// Enforce rule matched and the count exceeded the allowed threshold.
    Fail,
    /// Enforce rule matched and the count stayed within the threshold.
    Pass,
    /// Observe rule matched; reported regardless of count, never fails.
    Report,
    /// No rule matched; excluded from report rows and fail computation.
    Unmatched,
}

#[derive(Serialize, Clone, Debug)]
/// Decision for one recorded warning identifier.
pub struct Verdict {
    pub identifier: String,
    pub count: u64,
    /// Effective allowed threshold; present only for enforce matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<u64>,
    pub outcome: Outcome,
}

#[derive(Serialize, Clone, Debug)]
/// Session-wide evaluation result: per-identifier verdicts in first-seen
/// order plus the overall failure flag.
pub struct Evaluation {
    pub verdicts: Vec<Verdict>,
    pub failed: bool,
}
