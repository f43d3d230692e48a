#![forbid(unsafe_code)]

//! Named undo scenarios.
//!
//! Each scenario builds its fixture with [`list_of`], runs a short script
//! against the public list API and compares the final contents with the
//! expected values. Extra conditions (source untouched, error returned)
//! fold into `passed`.

use undolist::{ListError, StringList};

use crate::fixtures::{contents, list_of, strings};

/// Result of running one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    pub got: Vec<String>,
    pub expected: Vec<String>,
}

impl Outcome {
    fn compare_and(list: &StringList, expected: &[&str], extra: bool) -> Self {
        let got = contents(list);
        let expected = strings(expected);
        Self {
            passed: extra && got == expected,
            got,
            expected,
        }
    }
}

/// A named, runnable scenario.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub run: fn() -> Outcome,
}

/// Every scenario, in reporting order.
#[must_use]
pub fn catalogue() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Undo insert_before at end (rejected)",
            run: insert_before_at_end,
        },
        Scenario {
            name: "Undo insert_before in middle",
            run: insert_before_in_middle,
        },
        Scenario {
            name: "Undo set at index",
            run: set_at_index,
        },
        Scenario {
            name: "Undo remove at index",
            run: remove_at_index,
        },
        Scenario {
            name: "Undo remove_all",
            run: remove_all,
        },
        Scenario {
            name: "Undo assign (restore whole list)",
            run: assign_restores_whole_list,
        },
        Scenario {
            name: "LIFO sequence across mixed ops",
            run: lifo_across_mixed_ops,
        },
        Scenario {
            name: "Undo on empty log (no-op)",
            run: undo_on_empty_log,
        },
        Scenario {
            name: "Copy does not copy undo log",
            run: copy_does_not_copy_log,
        },
    ]
}

/// Scenarios whose name contains `filter` (case-insensitive).
#[must_use]
pub fn matching(filter: Option<&str>) -> Vec<Scenario> {
    let needle = filter.map(str::to_lowercase);
    catalogue()
        .into_iter()
        .filter(|s| match &needle {
            Some(n) => s.name.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .collect()
}

fn insert_before_at_end() -> Outcome {
    let mut lst = list_of(&["dog", "cat", "tree"]);
    let rejected = matches!(
        lst.insert_before(3, "hat"),
        Err(ListError::IndexOutOfRange { index: 3, .. })
    );
    let nothing_recorded = !lst.undo();
    Outcome::compare_and(&lst, &["dog", "cat", "tree"], rejected && nothing_recorded)
}

fn insert_before_in_middle() -> Outcome {
    let mut lst = list_of(&["dog", "cat", "tree"]);
    let inserted = lst.insert_before(1, "shoe").is_ok();
    lst.undo();
    Outcome::compare_and(&lst, &["dog", "cat", "tree"], inserted)
}

fn set_at_index() -> Outcome {
    let mut lst = list_of(&["yellow", "green", "red", "orange"]);
    let set = lst.set(2, "cow").is_ok();
    lst.undo();
    Outcome::compare_and(&lst, &["yellow", "green", "red", "orange"], set)
}

fn remove_at_index() -> Outcome {
    let mut lst = list_of(&["dog", "cat", "tree"]);
    let removed = lst.remove(1).is_ok();
    lst.undo();
    Outcome::compare_and(&lst, &["dog", "cat", "tree"], removed)
}

fn remove_all() -> Outcome {
    let mut lst = list_of(&["a", "b", "c", "d"]);
    lst.remove_all();
    let emptied = lst.is_empty();
    lst.undo();
    Outcome::compare_and(&lst, &["a", "b", "c", "d"], emptied)
}

fn assign_restores_whole_list() -> Outcome {
    let mut lst1 = list_of(&["dog", "cat", "tree"]);
    let lst2 = list_of(&["yellow", "green", "red", "orange"]);
    lst1.assign(&lst2);
    let copied = lst1 == lst2;
    lst1.undo();
    let source_untouched = contents(&lst2) == strings(&["yellow", "green", "red", "orange"]);
    Outcome::compare_and(&lst1, &["dog", "cat", "tree"], copied && source_untouched)
}

fn lifo_across_mixed_ops() -> Outcome {
    let mut lst = list_of(&["x", "y"]);
    lst.insert_back("z");
    let mut ok = lst.set(1, "Y").is_ok();
    lst.insert_front("w");
    ok &= lst.remove(2).is_ok();

    let steps: [&[&str]; 4] = [
        &["w", "x", "Y", "z"],
        &["x", "Y", "z"],
        &["x", "y", "z"],
        &["x", "y"],
    ];
    for expected in steps {
        lst.undo();
        ok &= contents(&lst) == strings(expected);
    }
    Outcome::compare_and(&lst, &["x", "y"], ok)
}

fn undo_on_empty_log() -> Outcome {
    let mut lst = StringList::new();
    let undone = lst.undo();
    Outcome::compare_and(&lst, &[], !undone)
}

fn copy_does_not_copy_log() -> Outcome {
    let mut lst = list_of(&["a", "b", "c"]);
    lst.insert_back("d");
    let set = lst.set(1, "B").is_ok();

    let mut copy = lst.clone();
    let before_copy_undo = contents(&copy);
    copy.undo();
    let copy_ok = contents(&copy) == before_copy_undo;

    lst.undo();
    lst.undo();
    Outcome::compare_and(&lst, &["a", "b", "c"], set && copy_ok)
}
