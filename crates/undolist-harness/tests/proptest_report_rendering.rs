#![forbid(unsafe_code)]

//! Property tests for report rendering.
//!
//! Validates:
//! - Report rendering of list contents agrees with the list's `Display`.
//! - The summary line always counts passes against the total.

use proptest::prelude::*;

use undolist::StringList;
use undolist_harness::fixtures::render;
use undolist_harness::report::{Report, ScenarioResult};

fn values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 ]{0,6}", 0..12)
}

fn result_strategy() -> impl Strategy<Value = ScenarioResult> {
    ("[a-z]{1,8}", any::<bool>(), values(), values()).prop_map(|(name, passed, got, expected)| {
        ScenarioResult {
            name,
            passed,
            got,
            expected,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn render_agrees_with_display(values in values()) {
        let list: StringList = values.iter().cloned().collect();
        prop_assert_eq!(render(&values), list.to_string());
    }

    #[test]
    fn summary_counts_passes(results in prop::collection::vec(result_strategy(), 0..10)) {
        let passed = results.iter().filter(|r| r.passed).count();
        let total = results.len();
        let report = Report { results };

        let text = report.render_text();
        let summary = format!("Summary: {passed} / {total} tests passed.\n");
        prop_assert!(text.ends_with(&summary));
        prop_assert_eq!(text.matches("[FAIL]").count(), total - passed);
        prop_assert_eq!(report.all_passed(), passed == total);
    }
}
