#![forbid(unsafe_code)]

//! LIFO log of inverse operations.
//!
//! [`UndoLog`] holds the [`Operation`]s that reverse recent mutations of a
//! list, newest on top. It sits on its own [`Slots`] buffer, so it grows by
//! doubling exactly like the text store.
//!
//! # Invariants
//!
//! 1. Records are popped in exact reverse order of push
//! 2. `total_bytes` equals the sum of `size_bytes()` over held records
//! 3. `len() <= max_depth` after every push
//!
//! # Memory Model
//!
//! ```text
//! push(RemoveAt 3), push(SetList [a, b]), push(SetAt 0 "x")
//! ┌─────────────────────────────────────────────┐
//! │ top ► SetAt(0, "x")                         │
//! │       SetList(["a", "b"])   owns snapshot   │
//! │       RemoveAt(3)                           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! A record (and any snapshot inside it) is dropped the moment it is
//! popped, evicted or cleared. Nothing is shared with other logs.
//!
//! # Eviction
//!
//! With a depth limit, the oldest record is taken out of its slot and the
//! `head` offset moves past it, so a push never shifts the stack. Dead
//! slots are compacted in one pass once they outnumber the live records,
//! which keeps eviction amortized O(1) and the buffer under
//! `2 * max_depth + 1` slots.

use std::fmt;

use crate::operation::Operation;
use crate::slots::Slots;

/// Default number of record slots reserved by a new log.
pub const DEFAULT_LOG_CAPACITY: usize = 4;

/// Stack of inverse operations for one list.
pub struct UndoLog {
    /// Slots before `head` are evicted (`None`); the rest are live.
    records: Slots<Option<Operation>>,
    head: usize,
    max_depth: Option<usize>,
    total_bytes: usize,
}

impl fmt::Debug for UndoLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoLog")
            .field("depth", &self.len())
            .field("capacity", &self.records.capacity())
            .field("max_depth", &self.max_depth)
            .field("total_bytes", &self.total_bytes)
            .finish()
    }
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY, None)
    }
}

impl UndoLog {
    /// Create an empty log. Zero `capacity` is raised to 1, as is a
    /// `Some(0)` depth. `None` keeps every record.
    #[must_use]
    pub fn new(capacity: usize, max_depth: Option<usize>) -> Self {
        Self {
            records: Slots::with_capacity(capacity, "undo_log"),
            head: 0,
            max_depth: max_depth.map(|depth| depth.max(1)),
            total_bytes: 0,
        }
    }

    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Push a record on top, evicting the oldest if the depth limit is hit.
    pub fn push(&mut self, op: Operation) {
        self.total_bytes += op.size_bytes();
        tracing::trace!(
            target: "undolist.log",
            op = op.name(),
            depth = self.len() + 1,
            "operation recorded"
        );
        self.records.push(Some(op));
        self.enforce_depth();
    }

    /// Pop the most recent record, or `None` if the log is empty.
    pub fn pop(&mut self) -> Option<Operation> {
        if self.is_empty() {
            return None;
        }
        let op = self.records.pop().flatten()?;
        if self.is_empty() {
            self.records.clear();
            self.head = 0;
        }
        self.total_bytes = self.total_bytes.saturating_sub(op.size_bytes());
        tracing::trace!(
            target: "undolist.log",
            op = op.name(),
            depth = self.len(),
            "operation popped"
        );
        Some(op)
    }

    /// The record `pop` would return next.
    #[must_use]
    pub fn peek(&self) -> Option<&Operation> {
        if self.is_empty() {
            return None;
        }
        self.records.last().and_then(Option::as_ref)
    }

    /// Drop every record, releasing any snapshots they own.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        tracing::debug!(
            target: "undolist.log",
            dropped = self.len(),
            bytes = self.total_bytes,
            "undo log cleared"
        );
        self.records.clear();
        self.head = 0;
        self.total_bytes = 0;
    }

    // ========================================================================
    // Info
    // ========================================================================

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len() - self.head
    }

    /// Reserved record slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Depth limit, or `None` when unlimited.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Bytes attributed to held records, snapshots included.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.total_bytes
    }

    fn enforce_depth(&mut self) {
        let Some(max_depth) = self.max_depth else {
            return;
        };
        while self.len() > max_depth {
            let evicted = self.records.replace(self.head, None);
            self.head += 1;
            if let Some(op) = evicted {
                self.total_bytes = self.total_bytes.saturating_sub(op.size_bytes());
                tracing::debug!(
                    target: "undolist.log",
                    op = op.name(),
                    max_depth,
                    "oldest operation evicted"
                );
            }
        }
        if self.head >= self.len() {
            self.records.drain_front(self.head);
            self.head = 0;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
