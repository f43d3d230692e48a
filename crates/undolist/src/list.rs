#![forbid(unsafe_code)]

//! The undo-capable text list.
//!
//! [`StringList`] composes a [`TextStore`] with an [`UndoLog`]. The
//! positional and whole-list mutations go through primitives (`apply_set`,
//! `apply_insert`, `apply_remove`, `apply_replace`) that take a
//! `Recording` mode. Public mutators pass `Recording::On` and push the
//! inverse of what they did; [`StringList::undo`] pops one inverse and
//! replays it through the same primitives with `Recording::Off`, so replay
//! never records itself.
//!
//! ```text
//! insert_back("z")           undo()
//!   store: [x y] → [x y z]     pop RemoveAt(2)
//!   log:   [.. RemoveAt(2)]    apply_remove(2, Off)
//!                              store: [x y z] → [x y]
//! ```
//!
//! # Invariants
//!
//! - `undo()` right after a successful mutation restores the exact prior
//!   contents; k undos after k mutations restore the original.
//! - A call rejected with [`ListError`] neither mutates nor records.
//! - Copies (`clone`, `clone_from`) start with an empty log.
//! - Equality compares contents only.

use std::fmt;
use std::io::{self, Write};

use crate::config::ListConfig;
use crate::error::Result;
use crate::operation::Operation;
use crate::store::TextStore;
use crate::undo_log::UndoLog;

/// Whether a primitive pushes the inverse of its mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recording {
    On,
    Off,
}

/// Ordered text values with single-step, repeatable undo.
pub struct StringList {
    store: TextStore,
    log: UndoLog,
    config: ListConfig,
}

impl Default for StringList {
    fn default() -> Self {
        Self::new()
    }
}

impl StringList {
    /// Empty list with the default capacity (10).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Empty list sized by `config`. Zero capacities are raised to 1.
    #[must_use]
    pub fn with_config(config: ListConfig) -> Self {
        Self {
            store: TextStore::with_capacity(config.initial_capacity),
            log: UndoLog::new(config.log_initial_capacity, config.max_undo_depth),
            config,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Value at `index`; requires `index < len()`.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.store.get(index)
    }

    /// Index of the first value equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.store.as_slice().iter().position(|v| v == value)
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.index_of(value).is_some()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        self.store.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.store.as_slice().iter().map(String::as_str)
    }

    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Number of mutations that can currently be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    /// The inverse the next [`undo`](Self::undo) would replay.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&Operation> {
        self.log.peek()
    }

    /// Bytes held by the undo log, snapshots included.
    #[must_use]
    pub fn undo_memory_bytes(&self) -> usize {
        self.log.memory_usage()
    }

    /// Write the rendering and a newline to stdout.
    pub fn print(&self) {
        println!("{self}");
    }

    /// Write the rendering and a newline to `out`.
    pub fn print_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    // ========================================================================
    // Undoable mutators
    // ========================================================================

    /// Overwrite the value at `index`; requires `index < len()`.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.apply_set(index, value.into(), Recording::On)
    }

    /// Insert before the value at `pos`; requires `pos < len()`.
    ///
    /// Inserting at `pos == len()` is rejected, use
    /// [`insert_back`](Self::insert_back) to append.
    pub fn insert_before(&mut self, pos: usize, value: impl Into<String>) -> Result<()> {
        self.store.check_index(pos, "insert_before")?;
        self.apply_insert(pos, value.into(), Recording::On)
    }

    pub fn insert_front(&mut self, value: impl Into<String>) {
        self.store.insert_front(value.into());
        self.record(Recording::On, |_| Operation::RemoveAt(0));
    }

    pub fn insert_back(&mut self, value: impl Into<String>) {
        let end = self.len();
        self.store.insert_back(value.into());
        self.record(Recording::On, |_| Operation::RemoveAt(end));
    }

    /// Remove the value at `pos`; requires `pos < len()`.
    pub fn remove(&mut self, pos: usize) -> Result<()> {
        self.apply_remove(pos, Recording::On)
    }

    /// Remove every value. Capacity is unchanged.
    pub fn remove_all(&mut self) {
        self.record(Recording::On, |store| Operation::SetList(store.snapshot()));
        self.store.clear();
    }

    /// Replace this list's contents with a deep copy of `other`'s.
    ///
    /// Undoable; `other` is never touched and its log is not copied.
    pub fn assign(&mut self, other: &StringList) {
        self.apply_replace(other.store.snapshot(), Recording::On);
    }

    // ========================================================================
    // Undo
    // ========================================================================

    /// Reverse the most recent recorded mutation.
    ///
    /// Returns `false` (and does nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(op) = self.log.pop() else {
            return false;
        };
        let name = op.name();
        let _span = tracing::debug_span!("list.undo", op = name, remaining = self.log.len())
            .entered();

        match self.replay(op) {
            Ok(()) => {
                tracing::debug!(
                    target: "undolist.list",
                    op = name,
                    len = self.len(),
                    "operation undone"
                );
                true
            }
            Err(err) => {
                tracing::warn!(
                    target: "undolist.list",
                    op = name,
                    error = %err,
                    "undo replay rejected by store"
                );
                false
            }
        }
    }

    /// Drop all recorded history without touching the contents.
    pub fn clear_undo_log(&mut self) {
        self.log.clear();
    }

    fn replay(&mut self, op: Operation) -> Result<()> {
        match op {
            Operation::RemoveAt(index) => self.apply_remove(index, Recording::Off),
            Operation::InsertAt(index, value) => self.apply_insert(index, value, Recording::Off),
            Operation::SetAt(index, value) => self.apply_set(index, value, Recording::Off),
            Operation::SetList(snapshot) => {
                self.apply_replace(snapshot, Recording::Off);
                Ok(())
            }
        }
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    fn apply_set(&mut self, index: usize, value: String, mode: Recording) -> Result<()> {
        let old = self.store.set(index, value)?;
        self.record(mode, |_| Operation::SetAt(index, old));
        Ok(())
    }

    /// Shift-insert anywhere in `0..=len`; replaying a removal of the last
    /// value lands on the logical end.
    fn apply_insert(&mut self, index: usize, value: String, mode: Recording) -> Result<()> {
        self.store.restore_at(index, value)?;
        self.record(mode, |_| Operation::RemoveAt(index));
        Ok(())
    }

    fn apply_remove(&mut self, index: usize, mode: Recording) -> Result<()> {
        let removed = self.store.remove_at(index)?;
        self.record(mode, move |_| Operation::InsertAt(index, removed));
        Ok(())
    }

    fn apply_replace(&mut self, values: Vec<String>, mode: Recording) {
        self.record(mode, |store| Operation::SetList(store.snapshot()));
        self.store.replace_all(values);
    }

    /// Push the inverse built by `inverse` when recording is on.
    ///
    /// `inverse` sees the store before any pending replacement, which is
    /// what whole-list snapshots need.
    fn record(&mut self, mode: Recording, inverse: impl FnOnce(&TextStore) -> Operation) {
        if mode == Recording::On {
            let op = inverse(&self.store);
            self.log.push(op);
        }
    }
}

impl Clone for StringList {
    /// Copy the contents only; the copy's undo log starts empty.
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            log: UndoLog::new(
                self.config.log_initial_capacity,
                self.config.max_undo_depth,
            ),
            config: self.config.clone(),
        }
    }

    /// Copy `source`'s contents and config into `self` and discard `self`'s
    /// history, leaving the same state as `*self = source.clone()`.
    ///
    /// Not undoable; use [`StringList::assign`] for that.
    fn clone_from(&mut self, source: &Self) {
        self.store.replace_all(source.store.snapshot());
        self.config.clone_from(&source.config);
        self.log = UndoLog::new(
            self.config.log_initial_capacity,
            self.config.max_undo_depth,
        );
    }
}

impl PartialEq for StringList {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl Eq for StringList {}

impl fmt::Display for StringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{value}\"")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for StringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringList")
            .field("items", &self.store.as_slice())
            .field("capacity", &self.capacity())
            .field("undo_depth", &self.log.len())
            .finish()
    }
}

/// Builds a list without recording; the result has nothing to undo.
impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut store = TextStore::default();
        for value in iter {
            store.insert_back(value.into());
        }
        let config = ListConfig::default();
        Self {
            store,
            log: UndoLog::new(config.log_initial_capacity, config.max_undo_depth),
            config,
        }
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.as_slice().iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
