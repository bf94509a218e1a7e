//! Error types for restartable sequences.

use std::fmt;

/// Errors raised when a sequence does not have the shape its type promises.
///
/// # Examples
///
/// ```rust
/// use seglist::generator::{GeneratorFunction, NonEmptyGeneratorFunction, SequenceError};
///
/// let result = NonEmptyGeneratorFunction::try_from_generator(GeneratorFunction::<i32>::empty());
/// assert_eq!(result.err(), Some(SequenceError::Empty));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// A sequence required to have content yielded nothing.
    Empty,
    /// A completion report was requested before the iteration completed.
    Unfinished,
    /// A producer known to be non-empty completed a replay without yielding.
    EmptyReplay,
    /// A producer known to be infinite completed.
    Exhausted,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(formatter, "sequence is empty"),
            Self::Unfinished => write!(formatter, "iteration has not completed yet"),
            Self::EmptyReplay => write!(
                formatter,
                "non-empty producer yielded nothing on replay; producers must restart identically"
            ),
            Self::Exhausted => write!(
                formatter,
                "infinite producer completed; producers must restart identically"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

/// Aborts on a producer that broke the restartability contract.
pub(crate) fn broken_contract(error: SequenceError) -> ! {
    tracing::error!(%error, "restartability contract violated");
    panic!("{error}")
}
