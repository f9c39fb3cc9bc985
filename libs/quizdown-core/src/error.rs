//! Error types for quizdown-core.

use thiserror::Error;

/// Result type alias using BlockError.
pub type Result<T> = std::result::Result<T, BlockError>;

/// Errors raised while compiling a single question block.
///
/// These never escape [`crate::parse`]: a failing block degrades to an
/// error-placeholder record at its ordinal and the remaining blocks parse
/// normally.
#[derive(Debug, Error)]
pub enum BlockError {
    /// A multiple-choice block where no option carries the `[x]` mark.
    #[error("no option is marked correct")]
    NoCorrectOption,
}
