#![forbid(unsafe_code)]

//! Fixture helpers: build lists without history and read them back.

use undolist::StringList;

/// A list holding `values` in order, with nothing to undo.
#[must_use]
pub fn list_of(values: &[&str]) -> StringList {
    values.iter().copied().collect()
}

/// Owned copy of the list contents.
#[must_use]
pub fn contents(list: &StringList) -> Vec<String> {
    list.as_slice().to_vec()
}

/// Owned copy of `values`.
#[must_use]
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Render values the way the report prints them: `{"a", "b"}`.
#[must_use]
pub fn render(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("\"{v}\"")).collect();
    format!("{{{}}}", quoted.join(", "))
}
