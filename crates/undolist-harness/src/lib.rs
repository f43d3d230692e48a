#![forbid(unsafe_code)]

//! Scenario runner for `undolist`.
//!
//! Builds fixture lists, runs the named undo scenarios and reports each as
//! `[PASS]` or `[FAIL]`, followed by a summary line.

pub mod cli;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod scenarios;

pub use cli::{run_from_env, run_scenarios};
pub use error::{HarnessError, Result};
