//! Error types for segmented lists.

use std::fmt;

/// Errors raised when a list does not have the shape a caller asked for.
///
/// # Examples
///
/// ```rust
/// use seglist::persistent::{FiniteList, InfiniteList, List, ListError};
///
/// let finite = List::from_vec(vec![1, 2]);
/// assert_eq!(InfiniteList::try_from(finite).err(), Some(ListError::NotInfinite));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// A static segment was given no items.
    EmptyStaticHead,
    /// The list contains a segment that never completes.
    NotFinite,
    /// The list has no segment that never completes.
    NotInfinite,
    /// The list has no segment that guarantees an element.
    Empty,
}

impl fmt::Display for ListError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStaticHead => write!(formatter, "static segment requires at least one item"),
            Self::NotFinite => write!(formatter, "list contains an infinite segment"),
            Self::NotInfinite => write!(formatter, "list has no infinite segment"),
            Self::Empty => write!(formatter, "list is not provably non-empty"),
        }
    }
}

impl std::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ListError::EmptyStaticHead, "static segment requires at least one item")]
    #[case(ListError::NotFinite, "list contains an infinite segment")]
    #[case(ListError::NotInfinite, "list has no infinite segment")]
    #[case(ListError::Empty, "list is not provably non-empty")]
    fn display_messages(#[case] error: ListError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn is_a_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ListError::Empty);
        assert!(error.source().is_none());
    }
}
