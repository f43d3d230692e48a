#![forbid(unsafe_code)]

//! Inverse operations recorded by the undo log.
//!
//! Every undoable call on a [`StringList`](crate::StringList) records the
//! [`Operation`] that exactly reverses it, computed from the state *before*
//! the mutation:
//!
//! | Mutation                   | Recorded inverse              |
//! |----------------------------|-------------------------------|
//! | `set(i, v)`                | `SetAt(i, old)`               |
//! | `insert_before(pos, v)`    | `RemoveAt(pos)`               |
//! | `insert_front(v)`          | `RemoveAt(0)`                 |
//! | `insert_back(v)`           | `RemoveAt(len)`               |
//! | `remove(pos)`              | `InsertAt(pos, removed)`      |
//! | `remove_all()`, `assign()` | `SetList(prior contents)`     |
//!
//! # Invariants
//!
//! - Replaying an inverse against the post-mutation state restores the
//!   pre-mutation state exactly.
//! - A `SetList` snapshot is owned by its record alone and is dropped with it.

use std::fmt;

/// The inverse of one mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Undo an insertion: remove the value at `index`.
    RemoveAt(usize),
    /// Undo a removal: reinsert `value` at `index`.
    InsertAt(usize, String),
    /// Undo an index assignment: restore `value` at `index`.
    SetAt(usize, String),
    /// Undo a whole-list replacement: restore the exact prior contents.
    SetList(Vec<String>),
}

impl Operation {
    /// Short stable name, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RemoveAt(_) => "remove_at",
            Self::InsertAt(..) => "insert_at",
            Self::SetAt(..) => "set_at",
            Self::SetList(_) => "set_list",
        }
    }

    /// Index the operation applies to, if it is positional.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::RemoveAt(i) | Self::InsertAt(i, _) | Self::SetAt(i, _) => Some(*i),
            Self::SetList(_) => None,
        }
    }

    /// Approximate heap + inline size for memory accounting.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        let payload = match self {
            Self::RemoveAt(_) => 0,
            Self::InsertAt(_, value) | Self::SetAt(_, value) => value.capacity(),
            Self::SetList(snapshot) => {
                snapshot.capacity() * std::mem::size_of::<String>()
                    + snapshot.iter().map(String::capacity).sum::<usize>()
            }
        };
        std::mem::size_of::<Self>() + payload
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoveAt(i) => write!(f, "remove at {i}"),
            Self::InsertAt(i, value) => write!(f, "insert {value:?} at {i}"),
            Self::SetAt(i, value) => write!(f, "set {i} to {value:?}"),
            Self::SetList(snapshot) => write!(f, "restore {} values", snapshot.len()),
        }
    }
}
