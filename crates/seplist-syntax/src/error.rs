use thiserror::Error;

/// Failures of separated list construction and editing.
///
/// A failed call never leaves a partially edited list behind; the input list
/// is untouched either way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeparatedListError {
    #[error("index {index} is out of range for a list of {len} elements")]
    OutOfRange { index: usize, len: usize },

    #[error("malformed separated list at position {position}: {reason}")]
    MalformedSequence {
        position: usize,
        reason: &'static str,
    },

    #[error("{text:?} is not a single {expected}")]
    Snippet { expected: &'static str, text: String },
}
