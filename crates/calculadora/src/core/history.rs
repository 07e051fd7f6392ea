//! Bounded operation history
//!
//! Keeps the ten most recent successful computations, newest first.

use serde::{Deserialize, Serialize};

use crate::core::numeric::format_number;
use crate::core::Operator;

/// A single successful computation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: u64,
    num1: f64,
    num2: f64,
    operator: Operator,
    result: String,
}

impl HistoryEntry {
    /// Creates a history entry
    #[must_use]
    pub fn new(id: u64, num1: f64, num2: f64, operator: Operator, result: String) -> Self {
        Self {
            id,
            num1,
            num2,
            operator,
            result,
        }
    }

    /// Unique key, also the creation time in Unix epoch millis
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// First parsed operand
    #[must_use]
    pub fn num1(&self) -> f64 {
        self.num1
    }

    /// Second parsed operand
    #[must_use]
    pub fn num2(&self) -> f64 {
        self.num2
    }

    /// Operator applied
    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Result exactly as it was displayed
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Left side of a history row, e.g. `4 + 5`
    #[must_use]
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            format_number(self.num1),
            self.operator,
            format_number(self.num2)
        )
    }

    /// Right side of a history row, e.g. `= 9`
    #[must_use]
    pub fn result_label(&self) -> String {
        format!("= {}", self.result)
    }

    /// Returns a formatted display string
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.expression(), self.result_label())
    }
}

/// Calculator history manager
///
/// Entries are stored newest first. Pushing beyond [`History::CAPACITY`]
/// drops the oldest entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Maximum number of entries kept
    pub const CAPACITY: usize = 10;

    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::CAPACITY + 1),
        }
    }

    /// Prepends an entry, evicting the oldest past capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(Self::CAPACITY);
    }

    /// Picks the id for the next entry.
    ///
    /// This is the clock reading, bumped past the newest id when the clock
    /// has not moved since, so ids stay unique and ascending.
    #[must_use]
    pub fn next_id(&self, now_ms: u64) -> u64 {
        match self.newest() {
            Some(newest) => now_ms.max(newest.id.saturating_add(1)),
            None => now_ms,
        }
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only snapshot, newest first
    #[must_use]
    pub fn as_slice(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Returns the oldest entry still kept
    #[must_use]
    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns the entry at the given index (0 = newest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Serializes the history to a JSON array, newest first
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }
}

/// Current time in milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Current time in milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_browser_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(now_millis() > 1_577_836_800_000);
    }

    #[wasm_bindgen_test]
    fn test_history_ids_from_browser_clock() {
        let mut history = History::new();
        let first = history.next_id(now_millis());
        history.push(HistoryEntry::new(first, 1.0, 1.0, Operator::Add, "2".into()));
        assert!(history.next_id(now_millis()) > first);
    }
}
