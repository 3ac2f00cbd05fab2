//! In-memory calculation history.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use calculator_sdk::HistoryEntry;
use parking_lot::Mutex;

/// Ordered, append-only log of successful calculations.
///
/// Every method takes the lock exactly once, so appends and clears are
/// mutually exclusive and snapshots are never torn.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<VecDeque<HistoryEntry>>,
    limit: Option<NonZeroUsize>,
}

impl History {
    /// Create an empty history, optionally capped at `limit` entries.
    #[must_use]
    pub fn new(limit: Option<NonZeroUsize>) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            limit,
        }
    }

    /// Append an entry, evicting the oldest ones if the cap is exceeded.
    pub fn push(&self, entry: HistoryEntry) {
        let mut entries = self.entries.lock();
        entries.push_back(entry);
        if let Some(limit) = self.limit {
            while entries.len() > limit.get() {
                entries.pop_front();
            }
        }
    }

    /// Copy of the current entries, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Remove every entry. Clearing an empty history is a no-op.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
