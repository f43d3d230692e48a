#![forbid(unsafe_code)]

//! Owned slot buffer with explicit capacity doubling.
//!
//! Both the text store and the undo log sit on top of [`Slots`]. The buffer
//! tracks its own logical capacity instead of trusting `Vec`'s growth
//! strategy, so the observable capacity follows one rule:
//!
//! ```text
//! insert when len == cap
//! ┌───────────────┐        ┌───────────────────────────────┐
//! │ a b c d       │  ───►  │ a b c d e . . .               │
//! │ len 4 / cap 4 │        │ len 5 / cap 8                 │
//! └───────────────┘        └───────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. `len() <= capacity()`
//! 2. `capacity() >= 1` and never decreases
//! 3. When an insertion finds `len() == capacity()`, capacity doubles first
//!
//! Positional operations here are unchecked; callers validate indices and
//! report [`ListError`](crate::ListError) themselves.

use std::fmt;

/// Contiguous owned storage with amortized-doubling growth.
pub struct Slots<T> {
    items: Vec<T>,
    capacity: usize,
    label: &'static str,
}

impl<T: fmt::Debug> fmt::Debug for Slots<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slots")
            .field("label", &self.label)
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Clone> Clone for Slots<T> {
    /// Deep copy that reserves the same logical capacity.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
            label: self.label,
        }
    }
}

impl<T> Slots<T> {
    /// Create an empty buffer. A zero `capacity` is raised to 1.
    #[must_use]
    pub fn with_capacity(capacity: usize, label: &'static str) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            label,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity (slots reserved before the next doubling).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Overwrite slot `index`, returning the previous value.
    ///
    /// `index` must be `< len()`.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self.items[index], value)
    }

    /// Append a value, doubling capacity first if the buffer is full.
    pub fn push(&mut self, value: T) {
        self.reserve_one();
        self.items.push(value);
    }

    /// Shift-insert at `index`. `index` must be `<= len()`.
    pub fn insert(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.items.len());
        self.reserve_one();
        self.items.insert(index, value);
    }

    /// Shift-remove slot `index`. `index` must be `< len()`.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Drop the first `count` values, shifting the rest down once.
    ///
    /// `count` must be `<= len()`. Capacity is kept.
    pub fn drain_front(&mut self, count: usize) {
        self.items.drain(..count);
    }

    /// Drop every live value. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace all live values with `items`, releasing the previous ones.
    ///
    /// Capacity is kept, or doubled until it fits `items`.
    pub fn replace_all(&mut self, items: Vec<T>) {
        let mut capacity = self.capacity;
        while capacity < items.len() {
            capacity = capacity.saturating_mul(2);
        }
        self.grow_to(capacity);
        self.items = items;
        self.items.reserve_exact(self.capacity - self.items.len());
    }

    fn reserve_one(&mut self) {
        if self.items.len() == self.capacity {
            self.grow_to(self.capacity.saturating_mul(2));
            self.items.reserve_exact(self.capacity - self.items.len());
        }
    }

    fn grow_to(&mut self, capacity: usize) {
        if capacity > self.capacity {
            tracing::debug!(
                target: "undolist.slots",
                buffer = self.label,
                from = self.capacity,
                to = capacity,
                "capacity grown"
            );
            self.capacity = capacity;
        }
    }
}

impl<T: Clone> Slots<T> {
    /// Deep copy of the live values.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================
