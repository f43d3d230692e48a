#![forbid(unsafe_code)]

//! Bounds-checked text storage.
//!
//! [`TextStore`] is the backing store of a [`StringList`](crate::StringList).
//! It knows nothing about undo; it validates indices, reports
//! [`ListError::IndexOutOfRange`] and delegates to [`Slots`].
//!
//! `insert_before` only accepts `pos < len`. Appending is the job of
//! `insert_back`, so an insert "before" the logical end is rejected.

use crate::error::{ListError, Result};
use crate::slots::Slots;

/// Default number of slots reserved by a new store.
pub const DEFAULT_CAPACITY: usize = 10;

/// Contiguous, exclusively owned text values.
#[derive(Debug, Clone)]
pub struct TextStore {
    slots: Slots<String>,
}

impl Default for TextStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl TextStore {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slots::with_capacity(capacity, "store"),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        self.slots.as_slice()
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.check_index(index, "get")?;
        Ok(self.slots.as_slice()[index].as_str())
    }

    /// Overwrite `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: String) -> Result<String> {
        self.check_index(index, "set")?;
        Ok(self.slots.replace(index, value))
    }

    /// Insert before the value currently at `pos` (`pos < len`).
    pub fn insert_before(&mut self, pos: usize, value: String) -> Result<()> {
        self.check_index(pos, "insert_before")?;
        self.slots.insert(pos, value);
        Ok(())
    }

    pub fn insert_front(&mut self, value: String) {
        self.slots.insert(0, value);
    }

    pub fn insert_back(&mut self, value: String) {
        self.slots.push(value);
    }

    /// Shift-remove `pos`, returning the removed value.
    pub fn remove_at(&mut self, pos: usize) -> Result<String> {
        self.check_index(pos, "remove_at")?;
        Ok(self.slots.remove(pos))
    }

    /// Reinsert at any position in `0..=len`.
    ///
    /// Used when replaying a removal; the removed value may have been the
    /// last one, so the logical end is accepted here.
    pub fn restore_at(&mut self, pos: usize, value: String) -> Result<()> {
        if pos > self.len() {
            return Err(ListError::IndexOutOfRange {
                op: "restore_at",
                index: pos,
                len: self.len(),
            });
        }
        self.slots.insert(pos, value);
        Ok(())
    }

    /// Remove every value. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Deep copy of the live contents.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.slots.to_vec()
    }

    /// Replace the live contents with `values`, taking ownership of them.
    pub fn replace_all(&mut self, values: Vec<String>) {
        self.slots.replace_all(values);
    }

    /// Fail with [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn check_index(&self, index: usize, op: &'static str) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange {
                op,
                index,
                len: self.len(),
            })
        }
    }
}

impl PartialEq for TextStore {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for TextStore {}
