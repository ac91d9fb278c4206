//! Verdict evaluation: joins session counts with the policy table.
//!
//! Runs once per session, after finalization. Rule lookup is deferred to
//! this point; recording stays rule-agnostic so a slow pattern can never
//! tax the warning hot path during the run.
//!
//! Decision per identifier:
//! - no matching rule: `unmatched`, excluded from the failure computation
//!   (untracked occurrences are dropped by policy, not by accident);
//! - `observe` match: `report`, regardless of count;
//! - `enforce` match: `fail` when count exceeds the allowed threshold
//!   (blank threshold means zero tolerance), otherwise `pass`.
//!
//! One failing identifier fails the whole session, but every identifier is
//! still evaluated so the report is complete. Iteration follows first-seen
//! order, keeping repeated runs byte-identical.

use crate::models::policy::{PolicyTable, RuleAction};
use crate::models::{Evaluation, Outcome, Verdict};

/// Evaluate finalized session counts against the policy table.
pub fn evaluate(counts: &[(String, u64)], table: &PolicyTable) -> Evaluation {
    let mut verdicts = Vec::with_capacity(counts.len());
    let mut failed = false;
    for (identifier, count) in counts {
        let verdict = match table.resolve(identifier) {
            None => Verdict {
                identifier: identifier.clone(),
                count: *count,
                allowed: None,
                outcome: Outcome::Unmatched,
            },
            Some(rule) if rule.action == RuleAction::Observe => Verdict {
                identifier: identifier.clone(),
                count: *count,
                allowed: None,
                outcome: Outcome::Report,
            },
            Some(rule) => {
                let allowed = rule.effective_allowed();
                let outcome = if *count > allowed {
                    failed = true;
                    Outcome::Fail
                } else {
                    Outcome::Pass
                };
                Verdict {
                    identifier: identifier.clone(),
                    count: *count,
                    allowed: Some(allowed),
                    outcome,
                }
            }
        };
        verdicts.push(verdict);
    }
    Evaluation { verdicts, failed }
}
