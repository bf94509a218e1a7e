//! Lists with a checked shape.
//!
//! [`List`] itself promises nothing about length. The wrappers here record a
//! shape checked once, at conversion, so that the operations that depend on
//! it are only offered where they are sound:
//!
//! - [`FiniteList`]: no infinite segment; offers `to_vec`
//! - [`InfiniteList`]: at least one infinite segment; has no `to_vec`
//! - [`NonEmptyList`]: a static or infinite segment somewhere; `head` is total
//!
//! # Examples
//!
//! ```rust
//! use seglist::generator::InfiniteGeneratorFunction;
//! use seglist::persistent::{FiniteList, InfiniteList, List, ListError};
//!
//! let zeros = List::lazy_head(InfiniteGeneratorFunction::repeat(0), List::empty());
//! assert_eq!(FiniteList::try_from(zeros.clone()).err(), Some(ListError::NotFinite));
//!
//! let infinite = InfiniteList::try_from(zeros).unwrap();
//! assert_eq!(infinite.take_left(2).to_vec(), vec![0, 0]);
//! ```

use super::error::ListError;
use super::list::List;
use super::pointer::Pointer;
use super::strategy::Strategy;
use crate::generator::{Iteration, Restartable, SequenceError, broken_contract};

macro_rules! list_view_common {
    ($name:ident) => {
        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                Self(self.0.clone())
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Debug for $name<T> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl<T> $name<T> {
            /// Borrows the underlying list.
            #[inline]
            pub const fn as_list(&self) -> &List<T> {
                &self.0
            }

            /// Forgets the checked shape.
            #[inline]
            pub fn into_list(self) -> List<T> {
                self.0
            }
        }

        impl<T> From<$name<T>> for List<T> {
            fn from(view: $name<T>) -> Self {
                view.into_list()
            }
        }

        impl<T: Clone + 'static> $name<T> {
            /// One fresh iteration flattened by `strategy`.
            pub fn to_iterable<S: Strategy>(&self, strategy: &S) -> Iteration<T> {
                self.0.to_iterable(strategy)
            }

            /// Searches for elements equal to `target`.
            pub fn find(&self, target: T) -> List<Pointer<T>>
            where
                T: PartialEq,
            {
                self.0.find(target)
            }
        }

        impl<T: Clone + 'static> Restartable for $name<T> {
            type Item = T;

            fn iterate(&self) -> Iteration<T> {
                self.0.iterate()
            }
        }
    };
}

// =============================================================================
// FiniteList
// =============================================================================

/// A list with no infinite segment.
///
/// Lazy segments are trusted to complete, as their producers promise.
pub struct FiniteList<T>(List<T>);

list_view_common!(FiniteList);

impl<T> FiniteList<T> {
    /// The empty finite list.
    #[must_use]
    pub const fn empty() -> Self {
        Self(List::empty())
    }

    /// Builds a finite list of at most one static segment.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        Self(List::from_vec(items))
    }

    /// Returns a finite list with `value` first.
    #[must_use]
    pub fn prepend(&self, value: T) -> Self {
        Self(self.0.prepend(value))
    }

    /// Returns a finite list with `value` last.
    #[must_use]
    pub fn append(&self, value: T) -> Self {
        Self(self.0.append(value))
    }
}

impl<T: Clone + 'static> FiniteList<T> {
    /// Collects the linear view.
    pub fn to_vec(&self) -> Vec<T> {
        self.0.to_vec()
    }

    /// The first `count` elements as a finite list.
    #[must_use]
    pub fn take_left(&self, count: usize) -> Self {
        Self(self.0.take_left(count))
    }
}

impl<T> TryFrom<List<T>> for FiniteList<T> {
    type Error = ListError;

    fn try_from(list: List<T>) -> Result<Self, Self::Error> {
        if list.is_provably_infinite() {
            return Err(ListError::NotFinite);
        }
        Ok(Self(list))
    }
}

impl<T> Default for FiniteList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// InfiniteList
// =============================================================================

/// A list with at least one infinite segment.
///
/// Its linear view never completes, so it cannot be collected.
pub struct InfiniteList<T>(List<T>);

list_view_common!(InfiniteList);

impl<T> InfiniteList<T> {
    /// Returns an infinite list with `value` first.
    #[must_use]
    pub fn prepend(&self, value: T) -> Self {
        Self(self.0.prepend(value))
    }

    /// Returns an infinite list with a static segment holding `value` after
    /// the last segment.
    ///
    /// The new segment is never reached in linear order but does take part
    /// in round-robin traversals and searches.
    #[must_use]
    pub fn append(&self, value: T) -> Self {
        Self(self.0.append(value))
    }
}

impl<T: Clone + 'static> InfiniteList<T> {
    /// The first `count` elements of the linear view as a finite list.
    #[must_use]
    pub fn take_left(&self, count: usize) -> FiniteList<T> {
        FiniteList(self.0.take_left(count))
    }
}

impl<T> TryFrom<List<T>> for InfiniteList<T> {
    type Error = ListError;

    fn try_from(list: List<T>) -> Result<Self, Self::Error> {
        if !list.is_provably_infinite() {
            return Err(ListError::NotInfinite);
        }
        Ok(Self(list))
    }
}

// =============================================================================
// NonEmptyList
// =============================================================================

/// A list guaranteed to yield at least one element.
///
/// # Examples
///
/// ```rust
/// use seglist::generator::GeneratorFunction;
/// use seglist::persistent::{List, ListError, NonEmptyList};
///
/// let only_lazy = List::lazy_head(GeneratorFunction::new(|| [1]), List::empty());
/// assert_eq!(NonEmptyList::try_from(only_lazy.clone()).err(), Some(ListError::Empty));
///
/// let list = NonEmptyList::try_from(only_lazy.append(2)).unwrap();
/// assert_eq!(list.head(), 1);
/// ```
pub struct NonEmptyList<T>(List<T>);

list_view_common!(NonEmptyList);

impl<T> NonEmptyList<T> {
    /// A single static segment holding `first`.
    #[must_use]
    pub fn of(first: T) -> Self {
        Self(List::from_vec(vec![first]))
    }

    /// Returns a non-empty list with `value` first.
    #[must_use]
    pub fn prepend(&self, value: T) -> Self {
        Self(self.0.prepend(value))
    }

    /// Returns a non-empty list with `value` last.
    #[must_use]
    pub fn append(&self, value: T) -> Self {
        Self(self.0.append(value))
    }
}

impl<T: Clone + 'static> NonEmptyList<T> {
    /// The first element of the linear view.
    ///
    /// # Panics
    ///
    /// Panics if a lazy producer broke its contract and the traversal found
    /// nothing.
    pub fn head(&self) -> T {
        self.0
            .iterate()
            .next()
            .unwrap_or_else(|| broken_contract(SequenceError::EmptyReplay))
    }
}

impl<T> TryFrom<List<T>> for NonEmptyList<T> {
    type Error = ListError;

    fn try_from(list: List<T>) -> Result<Self, Self::Error> {
        if !list.is_provably_non_empty() {
            return Err(ListError::Empty);
        }
        Ok(Self(list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GeneratorFunction, InfiniteGeneratorFunction};
    use crate::persistent::RoundRobin;
    use rstest::rstest;

    fn zeros() -> List<i32> {
        List::lazy_head(InfiniteGeneratorFunction::repeat(0), List::empty())
    }

    #[rstest]
    fn finite_accepts_static_and_finite_lazy() {
        let list = List::lazy_head(GeneratorFunction::new(|| [1, 2]), List::from_vec(vec![3]));
        let finite = FiniteList::try_from(list);
        assert_eq!(finite.map(|list| list.append(4).to_vec()), Ok(vec![1, 2, 3, 4]));
    }

    #[rstest]
    fn finite_rejects_infinite_continuation() {
        let list = List::from_vec(vec![1]).append(2).prepend(0);
        let with_infinite_tail = List::static_head(vec![1], zeros());
        assert!(FiniteList::try_from(list).is_ok());
        assert_eq!(
            FiniteList::try_from(with_infinite_tail).err(),
            Some(ListError::NotFinite)
        );
    }

    #[rstest]
    fn finite_helpers() {
        let finite = FiniteList::from_vec(vec![2, 3]).prepend(1);
        assert_eq!(finite.to_vec(), vec![1, 2, 3]);
        assert_eq!(finite.take_left(2).to_vec(), vec![1, 2]);
        assert!(FiniteList::<i32>::default().to_vec().is_empty());
    }

    #[rstest]
    fn infinite_requires_an_infinite_segment() {
        assert_eq!(
            InfiniteList::try_from(List::from_vec(vec![1])).err(),
            Some(ListError::NotInfinite)
        );
        let infinite = InfiniteList::try_from(List::static_head(vec![1], zeros()));
        assert!(infinite.is_ok());
    }

    #[rstest]
    fn infinite_append_is_visible_to_round_robin() {
        let infinite = match InfiniteList::try_from(zeros()) {
            Ok(list) => list.prepend(5).append(9),
            Err(error) => panic!("{error}"),
        };
        assert_eq!(infinite.take_left(3).to_vec(), vec![5, 0, 0]);
        let interleaved: Vec<i32> = infinite.to_iterable(&RoundRobin).take(4).collect();
        assert_eq!(interleaved, vec![5, 0, 9, 0]);
    }

    #[rstest]
    #[case(List::empty(), false)]
    #[case(List::lazy_head(GeneratorFunction::new(|| [1]), List::empty()), false)]
    #[case(List::from_vec(vec![1]), true)]
    #[case(zeros(), true)]
    #[case(List::lazy_head(GeneratorFunction::<i32>::empty(), List::from_vec(vec![1])), true)]
    fn non_empty_checks(#[case] list: List<i32>, #[case] accepted: bool) {
        assert_eq!(NonEmptyList::try_from(list).is_ok(), accepted);
    }

    #[rstest]
    fn non_empty_head_skips_empty_lazy_segments() {
        let list = List::lazy_head(GeneratorFunction::<i32>::empty(), List::from_vec(vec![7]));
        let head = NonEmptyList::try_from(list).map(|list| list.head());
        assert_eq!(head, Ok(7));
        assert_eq!(NonEmptyList::of(3).prepend(2).append(4).head(), 2);
    }

    #[rstest]
    fn views_convert_back_into_lists() {
        let list: List<i32> = NonEmptyList::of(1).into();
        assert_eq!(list.to_vec(), vec![1]);
        let finite = FiniteList::from_vec(vec![1, 1]);
        assert_eq!(finite.find(1).to_vec().len(), 2);
        assert!(finite.as_list().ptr_eq(&finite.clone().into_list()));
    }
}
