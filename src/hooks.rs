//! Host-facing hooks wiring run lifecycle events to the core.
//!
//! A `Governor` is constructed once per session by whatever harness embeds
//! it, then driven by three events: session start, warning observed, and
//! session finish. Warning handling never returns an error and never
//! panics; an event the governor cannot use (wrong category, missing
//! identifier, out-of-order delivery) is dropped, so the worst failure mode
//! is under-reporting, never taking down the run being instrumented.
//!
//! The host serializes event delivery; `&mut self` on every hook makes that
//! assumption explicit at the type level.

use crate::engine;
use crate::models::event::{WarningCategory, WarningEvent};
use crate::models::policy::PolicyTable;
use crate::models::Evaluation;
use crate::session::SessionAggregator;

/// Exit status reserved for deprecation-policy violations, distinct from
/// ordinary test failures. Stable; embedders may rely on it.
pub const POLICY_VIOLATION_EXIT: i32 = 101;

/// Session-scoped governance state: policy table plus a fresh aggregator.
pub struct Governor {
    table: PolicyTable,
    session: SessionAggregator,
}

impl Governor {
    pub fn new(table: PolicyTable) -> Self {
        Self {
            table,
            session: SessionAggregator::new(),
        }
    }

    /// Session start: begin with empty aggregation state.
    pub fn on_session_start(&mut self) {
        self.session.reset();
    }

    /// Warning observed. Only deprecation-category events with a present
    /// identifier are recorded; everything else is ignored.
    pub fn on_warning_recorded(&mut self, event: &WarningEvent) {
        if event.category != WarningCategory::Deprecation {
            return;
        }
        if let Some(identifier) = event.identifier() {
            self.session.record(identifier);
        }
    }

    /// Session finish: finalize the aggregator and evaluate policy.
    pub fn on_session_finish(&mut self) -> Evaluation {
        self.session.finish();
        engine::evaluate(self.session.counts(), &self.table)
    }

    /// Exit-status override the host should apply, if any.
    pub fn exit_override(eval: &Evaluation) -> Option<i32> {
        eval.failed.then_some(POLICY_VIOLATION_EXIT)
    }
}
