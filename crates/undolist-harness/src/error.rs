#![forbid(unsafe_code)]

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no scenario matches filter: {filter}")]
    NoScenarioMatched { filter: String },

    #[error("{failed} of {total} scenarios failed")]
    ScenarioFailures { failed: usize, total: usize },
}

impl HarnessError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoScenarioMatched { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HarnessError;

    #[test]
    fn unmatched_filter_is_a_usage_error() {
        let error = HarnessError::NoScenarioMatched {
            filter: "nope".into(),
        };
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "no scenario matches filter: nope");
    }

    #[test]
    fn failures_exit_with_one() {
        let error = HarnessError::ScenarioFailures {
            failed: 2,
            total: 9,
        };
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.to_string(), "2 of 9 scenarios failed");
    }
}
