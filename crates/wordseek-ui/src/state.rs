//! View-model types and pure state transformations for the list pages.
//!
//! # Design
//! - The rendered list is always a projection of the last fetched snapshot;
//!   DOM nodes are derived from these rows, never read back as state.
//! - Mutation callbacks key on row identifiers, not captured elements.
//! - Request sequencing lives here so stale responses can be discarded
//!   deterministically and under test.

use wordseek_api_models::{HistoryEntry, SavedSearch, UploadEntry};

/// Render phase of a list page. Exactly one phase is shown at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListPhase<T> {
    /// Shown immediately on (re)load until the fetch settles.
    Loading,
    /// Transport failure, non-success status, or server `{error}` payload.
    Error(String),
    /// The fetch settled with a zero-length collection.
    Empty,
    /// One row per fetched item, in server order.
    Populated(Vec<T>),
}

impl<T> ListPhase<T> {
    /// Terminal phase for a fetched collection: empty or populated.
    #[must_use]
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Populated(items)
        }
    }

    /// Terminal phase for a settled fetch.
    #[must_use]
    pub fn from_result(result: Result<Vec<T>, String>) -> Self {
        match result {
            Ok(items) => Self::from_items(items),
            Err(message) => Self::Error(message),
        }
    }

    /// Rows currently shown, if the phase is populated.
    #[must_use]
    pub fn rows(&self) -> Option<&[T]> {
        match self {
            Self::Populated(rows) => Some(rows),
            _ => None,
        }
    }
}

/// Row types that carry a server-assigned identifier.
pub trait Keyed {
    /// The identifier deletes and in-place updates key on.
    fn key(&self) -> u64;
}

/// One search-history row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    /// Server-assigned identifier.
    pub id: u64,
    /// The searched term, also the click-to-search label.
    pub term: String,
    /// Server-formatted timestamp.
    pub timestamp: String,
}

impl Keyed for HistoryRow {
    fn key(&self) -> u64 {
        self.id
    }
}

impl From<HistoryEntry> for HistoryRow {
    fn from(value: HistoryEntry) -> Self {
        Self {
            id: value.id,
            term: value.search_term,
            timestamp: value.timestamp,
        }
    }
}

/// One saved-search row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedRow {
    /// Server-assigned identifier.
    pub id: u64,
    /// The saved term.
    pub term: String,
    /// Server-formatted timestamp of the save.
    pub timestamp: String,
}

impl Keyed for SavedRow {
    fn key(&self) -> u64 {
        self.id
    }
}

impl From<SavedSearch> for SavedRow {
    fn from(value: SavedSearch) -> Self {
        Self {
            id: value.id,
            term: value.search_term,
            timestamp: value.timestamp,
        }
    }
}

/// One uploaded-file row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRow {
    /// Original filename.
    pub filename: String,
    /// Server-formatted upload timestamp.
    pub uploaded_at: String,
}

impl From<UploadEntry> for UploadRow {
    fn from(value: UploadEntry) -> Self {
        Self {
            filename: value.filename,
            uploaded_at: value.upload_time,
        }
    }
}

/// Remove exactly the row with the given identifier, leaving order intact.
#[must_use]
pub fn remove_row<T: Keyed + Clone>(rows: &[T], id: u64) -> Vec<T> {
    rows.iter().filter(|row| row.key() != id).cloned().collect()
}

/// Whether a silently re-fetched history collection should replace the
/// rendered rows. Differ by length, or by any (term, timestamp) pair;
/// identifiers alone changing does not disturb the view.
#[must_use]
pub fn rows_differ(current: &[HistoryRow], fetched: &[HistoryRow]) -> bool {
    if current.len() != fetched.len() {
        return true;
    }
    current
        .iter()
        .zip(fetched)
        .any(|(left, right)| left.term != right.term || left.timestamp != right.timestamp)
}

/// Monotonic token issuer for in-flight request bookkeeping.
///
/// Each fetch takes a fresh token; a response is applied only while its
/// token is still the latest issued, so an out-of-order response can never
/// overwrite a newer one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Fresh sequence with no tokens issued.
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issue the next token, invalidating all earlier ones.
    pub const fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether the token belongs to the most recent request.
    #[must_use]
    pub const fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, term: &str, stamp: &str) -> HistoryRow {
        HistoryRow {
            id,
            term: term.to_string(),
            timestamp: stamp.to_string(),
        }
    }

    #[test]
    fn phases_are_mutually_exclusive() {
        assert_eq!(ListPhase::<HistoryRow>::from_items(vec![]), ListPhase::Empty);
        let populated = ListPhase::from_items(vec![row(1, "cat", "t")]);
        assert!(matches!(populated, ListPhase::Populated(ref rows) if rows.len() == 1));
        let errored = ListPhase::<HistoryRow>::from_result(Err("db unavailable".to_string()));
        assert_eq!(errored, ListPhase::Error("db unavailable".to_string()));
        assert!(errored.rows().is_none());
    }

    #[test]
    fn remove_row_removes_exactly_one() {
        let rows = vec![row(1, "cat", "t1"), row(2, "dog", "t2")];
        let remaining = remove_row(&rows, 1);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn remove_row_with_unknown_id_is_a_noop() {
        let rows = vec![row(1, "cat", "t1")];
        assert_eq!(remove_row(&rows, 99), rows);
    }

    #[test]
    fn rows_differ_on_length() {
        let current = vec![row(1, "cat", "t1")];
        let fetched = vec![row(1, "cat", "t1"), row(2, "dog", "t2")];
        assert!(rows_differ(&current, &fetched));
    }

    #[test]
    fn rows_differ_on_term_or_timestamp_only() {
        let current = vec![row(1, "cat", "t1")];
        assert!(rows_differ(&current, &[row(1, "cats", "t1")]));
        assert!(rows_differ(&current, &[row(1, "cat", "t2")]));
        // A changed id with the same (term, timestamp) does not force a redraw.
        assert!(!rows_differ(&current, &[row(9, "cat", "t1")]));
    }

    #[test]
    fn stale_tokens_are_rejected() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
