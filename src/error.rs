//! Error types surfaced by the quiz library.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure to obtain the question set. This is the only error a quiz taker
/// ever sees, always paired with a retry action.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The source answered with a non-success status.
    #[error("Failed to fetch questions (HTTP {status} from {url})")]
    Status { status: u16, url: String },

    /// The request never produced a response.
    #[error("Failed to fetch questions: {0}")]
    Network(#[from] reqwest::Error),

    /// The request did not finish within the configured timeout.
    #[error("Failed to fetch questions: timed out after {}", format_timeout(.0))]
    Timeout(Duration),

    /// A local question file could not be read.
    #[error("Failed to read questions from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Contract violations while driving a quiz session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// A trait code that is not one letter of `EISNTFJP` followed by digits.
    #[error("invalid trait code '{0}'")]
    InvalidTraitCode(String),

    /// An answer arrived after the last question was already answered.
    #[error("quiz is already complete")]
    SessionComplete,

    /// The chosen option does not exist on the current question.
    #[error("option {index} does not exist (question has {available} options)")]
    NoSuchOption { index: usize, available: usize },
}

fn format_timeout(timeout: &Duration) -> String {
    humantime::format_duration(*timeout).to_string()
}
