#![forbid(unsafe_code)]

//! Scenario report rendering (text and JSON).

use std::fmt::Write as _;

use serde::Serialize;

use crate::fixtures::render;
use crate::scenarios::Scenario;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub passed: bool,
    pub got: Vec<String>,
    pub expected: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub results: Vec<ScenarioResult>,
}

impl Report {
    /// Run `scenarios` in order and collect their outcomes.
    #[must_use]
    pub fn run(scenarios: &[Scenario]) -> Self {
        let results = scenarios
            .iter()
            .map(|scenario| {
                let outcome = (scenario.run)();
                tracing::debug!(
                    target: "undolist.harness",
                    scenario = scenario.name,
                    passed = outcome.passed,
                    "scenario finished"
                );
                ScenarioResult {
                    name: scenario.name.to_string(),
                    passed: outcome.passed,
                    got: outcome.got,
                    expected: outcome.expected,
                }
            })
            .collect();
        Self { results }
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Plain-text report: one `[PASS]`/`[FAIL]` line per scenario, the
    /// contents for failures, then a summary line.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let tag = if result.passed { "[PASS]" } else { "[FAIL]" };
            let _ = writeln!(out, "{tag} {}", result.name);
            if !result.passed {
                let _ = writeln!(out, "  got: {}", render(&result.got));
                let _ = writeln!(out, "  exp: {}", render(&result.expected));
            }
        }
        let _ = writeln!(
            out,
            "\nSummary: {} / {} tests passed.",
            self.passed(),
            self.total()
        );
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({
            "passed": self.passed(),
            "total": self.total(),
            "results": self.results,
        }))
    }
}
