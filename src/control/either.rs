//! Either type - a value that can be one of two types.
//!
//! `partition_map`, `separate` and `wilt` on generator functions route every
//! element through an `Either`: `Left` values go to one side of the split,
//! `Right` values to the other.
//!
//! # Examples
//!
//! ```rust
//! use seglist::control::Either;
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! assert_eq!(right.clone().left(), None);
//! assert_eq!(right.right().as_deref(), Some("hello"));
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Converts into `Option<L>`, discarding a `Right` value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a `Left` value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }
}
