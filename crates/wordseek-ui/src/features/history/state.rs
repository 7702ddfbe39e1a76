//! History feature state.
//!
//! # Design
//! - Bulk clear fires one request per item; this accumulator decides the
//!   outcome once every request has settled, independent of arrival order.
//! - Partial failure is never success: the caller must reconcile from the
//!   server instead of trusting the optimistic view.

use crate::state::{HistoryRow, ListPhase};

/// Text for the counter slot in the page header. Every phase gets a
/// label; the slot never collapses while the list is loading or broken.
#[must_use]
pub fn count_label(phase: &ListPhase<HistoryRow>) -> String {
    match phase {
        ListPhase::Loading => "Loading…".to_string(),
        ListPhase::Error(_) => "Error loading count".to_string(),
        ListPhase::Empty => "0 recent searches".to_string(),
        ListPhase::Populated(rows) => format!("{} recent searches", rows.len()),
    }
}

/// Result of a bulk clear once every deletion has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Every deletion succeeded; the list is known to be empty.
    Cleared,
    /// Some deletions failed; the view must be reloaded from the server.
    Partial {
        /// How many deletions failed.
        failed: usize,
        /// How many deletions were attempted.
        total: usize,
    },
}

/// Accumulator for a bulk clear over concurrently issued deletions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClearAllProgress {
    total: usize,
    settled: usize,
    failed: usize,
}

impl ClearAllProgress {
    /// Track a bulk clear over `total` items.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            total,
            settled: 0,
            failed: 0,
        }
    }

    /// Record one settled deletion. Returns the outcome once the last
    /// deletion has settled, `None` while any are still in flight.
    pub const fn record(&mut self, succeeded: bool) -> Option<ClearOutcome> {
        self.settled += 1;
        if !succeeded {
            self.failed += 1;
        }
        if self.settled < self.total {
            return None;
        }
        if self.failed == 0 {
            Some(ClearOutcome::Cleared)
        } else {
            Some(ClearOutcome::Partial {
                failed: self.failed,
                total: self.total,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_labels_every_phase() {
        assert_eq!(count_label(&ListPhase::Loading), "Loading…");
        assert_eq!(
            count_label(&ListPhase::Error("boom".to_string())),
            "Error loading count"
        );
        assert_eq!(count_label(&ListPhase::Empty), "0 recent searches");
        let rows = vec![HistoryRow {
            id: 7,
            term: "cat".to_string(),
            timestamp: "2026-08-20 10:00:00".to_string(),
        }];
        assert_eq!(count_label(&ListPhase::Populated(rows)), "1 recent searches");
    }

    #[test]
    fn all_successes_clear_the_list() {
        let mut progress = ClearAllProgress::new(3);
        assert_eq!(progress.record(true), None);
        assert_eq!(progress.record(true), None);
        assert_eq!(progress.record(true), Some(ClearOutcome::Cleared));
    }

    #[test]
    fn any_failure_is_partial_never_success() {
        let mut progress = ClearAllProgress::new(3);
        assert_eq!(progress.record(true), None);
        assert_eq!(progress.record(false), None);
        assert_eq!(
            progress.record(true),
            Some(ClearOutcome::Partial {
                failed: 1,
                total: 3
            })
        );
    }

    #[test]
    fn outcome_ignores_settlement_order() {
        let mut progress = ClearAllProgress::new(2);
        assert_eq!(progress.record(false), None);
        assert_eq!(
            progress.record(false),
            Some(ClearOutcome::Partial {
                failed: 2,
                total: 2
            })
        );
    }
}
