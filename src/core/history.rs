//! Cursor-addressed history of visited states.
//!
//! The history is a linear log with a cursor pointing at the current state.
//! Undo and redo only move the cursor. Writing a new state first drops every
//! entry after the cursor, the same discipline a text editor's undo buffer uses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a serialized history is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History has no entries")]
    Empty,

    #[error("Cursor {cursor} is out of range for {len} entries")]
    CursorOutOfRange { cursor: usize, len: usize },
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl TryFrom<RawHistory> for History {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.entries.is_empty() {
            return Err(HistoryError::Empty);
        }
        if raw.cursor >= raw.entries.len() {
            return Err(HistoryError::CursorOutOfRange {
                cursor: raw.cursor,
                len: raw.entries.len(),
            });
        }
        Ok(Self {
            entries: raw.entries,
            cursor: raw.cursor,
        })
    }
}

/// Ordered log of visited states plus the cursor marking the current one.
///
/// Invariant: `entries` is never empty and `cursor < entries.len()`.
///
/// # Example
///
/// ```rust
/// use retrace::core::History;
///
/// let mut history = History::new("idle");
/// history.push("running");
/// history.push("paused");
///
/// assert!(history.undo());
/// assert_eq!(history.current(), "running");
///
/// // A new write discards the "paused" branch.
/// history.push("idle");
/// assert!(!history.redo());
/// assert_eq!(history.entries(), ["idle", "running", "idle"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Start a history containing only `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// The state under the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries, including any redo tail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Record a new current state.
    ///
    /// Entries beyond the cursor are discarded before appending.
    pub fn push(&mut self, state: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state.into());
        self.cursor += 1;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Step back one entry. Returns `false` at the start of the history.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of the history.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move the cursor to the first entry without touching the log.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Replace the log with the current state alone.
    pub fn collapse(&mut self) {
        let current = self.entries.swap_remove(self.cursor);
        self.entries.clear();
        self.entries.push(current);
        self.cursor = 0;
    }
}
