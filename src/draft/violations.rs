//! Reasons a draft is not ready to commit.

use thiserror::Error;

/// A single failed commit check
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommitViolation {
    #[error("Input too short ({length} < {min})")]
    TooShort { length: usize, min: usize },

    #[error("Input has no words")]
    Blank,

    #[error("Input ends with a space")]
    TrailingSpace,

    #[error("Input ends with a hyphen")]
    TrailingHyphen,

    #[error("Last word ends with name prefix {prefix:?}")]
    OpenNamePrefix { prefix: &'static str },

    #[error("Last word too short ({length} < 2)")]
    ShortLastWord { length: usize },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
