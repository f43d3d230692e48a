#![forbid(unsafe_code)]

//! Undo-capable text list.
//!
//! This crate provides [`StringList`], an ordered, growable sequence of
//! `String`s whose mutations can be undone one at a time, newest first.
//!
//! # Key Components
//!
//! - [`Slots`] - Owned buffer with explicit capacity doubling
//! - [`TextStore`] - Bounds-checked backing store for the list values
//! - [`Operation`] - The inverse of one mutating call
//! - [`UndoLog`] - LIFO stack of operations, owner of whole-list snapshots
//! - [`StringList`] - The public list tying store and log together
//! - [`ListConfig`] - Capacities and history depth
//!
//! # Example
//!
//! ```
//! use undolist::StringList;
//!
//! let mut list: StringList = ["dog", "cat", "tree"].into_iter().collect();
//! list.insert_before(1, "shoe")?;
//! assert_eq!(list.to_string(), r#"{"dog", "shoe", "cat", "tree"}"#);
//!
//! list.undo();
//! assert_eq!(list.to_string(), r#"{"dog", "cat", "tree"}"#);
//! # Ok::<(), undolist::ListError>(())
//! ```
//!
//! # Copies
//!
//! `Clone` copies the values only. The copy starts with an empty undo log,
//! so undoing on it never reaches back into the original's history. Use
//! [`StringList::assign`] for an undoable content replacement.

pub mod config;
pub mod error;
pub mod list;
pub mod operation;
pub mod slots;
pub mod store;
pub mod undo_log;

pub use config::ListConfig;
pub use error::{ConfigError, ListError, Result};
pub use list::StringList;
pub use operation::Operation;
pub use slots::Slots;
pub use store::{DEFAULT_CAPACITY, TextStore};
pub use undo_log::{DEFAULT_LOG_CAPACITY, UndoLog};
