//! Harness error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("formatter '{formatter}' expects {expected} input, got {found}")]
    InputMismatch {
        formatter: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("formatter '{formatter}': {message}")]
    InvalidParameter {
        formatter: &'static str,
        message: String,
    },
    #[error("no fixture JSON files found in {}", .0.display())]
    NoFixtures(PathBuf),
}

impl HarnessError {
    pub(crate) fn invalid(formatter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            formatter,
            message: message.into(),
        }
    }
}
