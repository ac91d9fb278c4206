//! Per-session occurrence aggregation.
//!
//! A `SessionAggregator` counts warning identifiers for exactly one test
//! session. Lifecycle: UNINITIALIZED until `reset()` marks the session
//! active, then FINALIZED once `finish()` is called; finalization is
//! irreversible, a new session needs a new instance. `record()` outside the
//! active phase is dropped silently so a stray warning can never crash or
//! corrupt the host run.
//!
//! Counts keep the insertion order of each identifier's first occurrence,
//! which makes repeated runs with identical input produce byte-identical
//! reports. State never outlives the process; there is no persistence.
//!
//! All mutators take `&mut self`, so the single-writer discipline the host
//! dispatcher is assumed to provide is also enforced at compile time.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Active,
    Finalized,
}

/// Accumulates identifier occurrence counts for one session.
pub struct SessionAggregator {
    phase: Phase,
    // first-seen order; the map indexes into it for O(1) increments
    counts: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Default for SessionAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Start the session with empty state. Clears anything recorded before,
    /// so counts never leak between sessions. A finalized aggregator stays
    /// finalized; a new session requires a new instance.
    pub fn reset(&mut self) {
        if self.phase == Phase::Finalized {
            return;
        }
        self.counts.clear();
        self.index.clear();
        self.phase = Phase::Active;
    }

    /// Increment `identifier`'s count, creating it at 1 when first seen.
    /// Dropped silently unless the session is active.
    pub fn record(&mut self, identifier: &str) {
        if self.phase != Phase::Active {
            return;
        }
        match self.index.get(identifier) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(identifier.to_string(), self.counts.len());
                self.counts.push((identifier.to_string(), 1));
            }
        }
    }

    /// Freeze the session; counts are read-only from here on.
    pub fn finish(&mut self) {
        self.phase = Phase::Finalized;
    }

    /// Recorded counts in first-seen order.
    pub fn counts(&self) -> &[(String, u64)] {
        &self.counts
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }
}
