//! Persistent chain of static and lazy segments.
//!
//! This module provides [`List`], a singly-linked chain whose nodes
//! ([`Head`]) each hold either a fixed block of values ([`StaticHead`]) or a
//! restartable producer ([`LazyHead`]). The chain ends at the empty list.
//!
//! # Overview
//!
//! - O(1) `prepend`, sharing the whole existing chain
//! - `append` and `map_with_index` rebuild the path of segments, reusing
//!   every segment's items
//! - `take_left` wraps a prefix of the linear view in one lazy segment
//! - traversal by any [`Strategy`]; `find` searches round-robin and reports
//!   [`Pointer`]s
//!
//! Nothing is ever mutated: every operation returns a new list referencing
//! the old, untouched segments.
//!
//! # Examples
//!
//! ```rust
//! use seglist::generator::GeneratorFunction;
//! use seglist::persistent::List;
//!
//! let list = List::lazy_head(
//!     GeneratorFunction::new(|| 1..=3),
//!     List::static_head(vec![4, 5], List::empty()),
//! );
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
//!
//! let extended = list.prepend(0).append(6);
//! assert_eq!(extended.to_vec(), vec![0, 1, 2, 3, 4, 5, 6]);
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]); // original unchanged
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list:              [1, 2, 3] -> [4, 5] -> empty
//! list.prepend(0):   [0] -> list                        // shares every segment
//! list.append(6):    [1, 2, 3]' -> [4, 5]' -> [6] -> empty
//!                    // new nodes, same item blocks and producers
//! ```

use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use super::error::ListError;
use super::pointer::{Index, Pointer};
use super::strategy::{Linear, RoundRobin, Strategy};
use crate::generator::{
    GeneratorFunction, InfiniteGeneratorFunction, Iteration, NonEmptyGeneratorFunction,
    Restartable, boxed, replay_slice,
};

// =============================================================================
// Segment Content
// =============================================================================

/// The producer held by a [`LazyHead`].
///
/// `Finite` producers complete (each call restarts from the top). `Infinite`
/// producers never complete, and lists holding one refuse to convert into a
/// [`FiniteList`](super::FiniteList).
pub enum LazyItems<T> {
    /// A producer whose iterations are not known to be infinite.
    Finite(GeneratorFunction<T>),
    /// A producer whose iterations never complete.
    Infinite(InfiniteGeneratorFunction<T>),
}

impl<T> Clone for LazyItems<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Finite(generator) => Self::Finite(generator.clone()),
            Self::Infinite(generator) => Self::Infinite(generator.clone()),
        }
    }
}

impl<T> LazyItems<T> {
    /// Returns `true` for a producer that never completes.
    #[inline]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite(_))
    }
}

impl<T: 'static> LazyItems<T> {
    /// Starts a fresh iteration of the producer.
    pub fn iterate(&self) -> Iteration<T> {
        match self {
            Self::Finite(generator) => generator.iterate(),
            Self::Infinite(generator) => generator.iterate(),
        }
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Finite(left), Self::Finite(right)) => left.ptr_eq(right),
            (Self::Infinite(left), Self::Infinite(right)) => {
                left.as_generator().ptr_eq(right.as_generator())
            }
            _ => false,
        }
    }
}

impl<T> fmt::Debug for LazyItems<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(_) => formatter.write_str("Finite(..)"),
            Self::Infinite(_) => formatter.write_str("Infinite(..)"),
        }
    }
}

impl<T> From<GeneratorFunction<T>> for LazyItems<T> {
    fn from(generator: GeneratorFunction<T>) -> Self {
        Self::Finite(generator)
    }
}

impl<T: 'static> From<NonEmptyGeneratorFunction<T>> for LazyItems<T> {
    fn from(generator: NonEmptyGeneratorFunction<T>) -> Self {
        Self::Finite(generator.into_generator())
    }
}

impl<T> From<InfiniteGeneratorFunction<T>> for LazyItems<T> {
    fn from(generator: InfiniteGeneratorFunction<T>) -> Self {
        Self::Infinite(generator)
    }
}

// =============================================================================
// Segments
// =============================================================================

/// A segment holding a non-empty block of values.
pub struct StaticHead<T> {
    items: Rc<[T]>,
    next: List<T>,
}

impl<T> StaticHead<T> {
    /// The values of this segment, never empty.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The continuation.
    #[inline]
    pub const fn next(&self) -> &List<T> {
        &self.next
    }
}

/// A segment holding a restartable producer.
pub struct LazyHead<T> {
    items: LazyItems<T>,
    next: List<T>,
}

impl<T> LazyHead<T> {
    /// The producer of this segment.
    #[inline]
    pub const fn items(&self) -> &LazyItems<T> {
        &self.items
    }

    /// The continuation.
    #[inline]
    pub const fn next(&self) -> &List<T> {
        &self.next
    }
}

/// One node of a [`List`].
///
/// The set of segment kinds is closed; every traversal matches it
/// exhaustively.
pub enum Head<T> {
    /// A fixed block of values.
    Static(Rc<StaticHead<T>>),
    /// A restartable producer.
    Lazy(Rc<LazyHead<T>>),
}

impl<T> Clone for Head<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(node) => Self::Static(Rc::clone(node)),
            Self::Lazy(node) => Self::Lazy(Rc::clone(node)),
        }
    }
}

impl<T> Head<T> {
    /// The continuation after this segment.
    #[inline]
    pub fn next(&self) -> &List<T> {
        match self {
            Self::Static(node) => &node.next,
            Self::Lazy(node) => &node.next,
        }
    }

    /// Returns `true` if both handles are the same segment instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Static(left), Self::Static(right)) => Rc::ptr_eq(left, right),
            (Self::Lazy(left), Self::Lazy(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Returns `true` for a [`StaticHead`].
    #[inline]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    /// Returns `true` for a [`LazyHead`].
    #[inline]
    pub const fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Returns `true` for a lazy segment whose producer never completes.
    pub fn is_provably_infinite(&self) -> bool {
        match self {
            Self::Static(_) => false,
            Self::Lazy(node) => node.items.is_infinite(),
        }
    }

    /// The name of the segment kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Static(_) => "StaticHead",
            Self::Lazy(_) => "LazyHead",
        }
    }

    /// A copy of this segment with the same items and a different continuation.
    fn with_next(&self, next: List<T>) -> Self {
        match self {
            Self::Static(node) => Self::Static(Rc::new(StaticHead {
                items: Rc::clone(&node.items),
                next,
            })),
            Self::Lazy(node) => Self::Lazy(Rc::new(LazyHead {
                items: node.items.clone(),
                next,
            })),
        }
    }
}

impl<T: 'static> Head<T> {
    /// Returns `true` if both segments hold the same item block or producer,
    /// regardless of their continuations.
    pub fn shares_items_with(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Static(left), Self::Static(right)) => Rc::ptr_eq(&left.items, &right.items),
            (Self::Lazy(left), Self::Lazy(right)) => left.items.ptr_eq(&right.items),
            _ => false,
        }
    }
}

impl<T: Clone + 'static> Head<T> {
    /// Starts a fresh iteration over this segment's content only.
    pub fn iterate(&self) -> Iteration<T> {
        match self {
            Self::Static(node) => replay_slice(&node.items),
            Self::Lazy(node) => node.items.iterate(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Head<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(node) => formatter
                .debug_struct("StaticHead")
                .field("items", &node.items)
                .finish_non_exhaustive(),
            Self::Lazy(node) => formatter
                .debug_struct("LazyHead")
                .field("items", &node.items)
                .finish_non_exhaustive(),
        }
    }
}

// =============================================================================
// List
// =============================================================================

/// A persistent chain of static and lazy segments.
///
/// Cloning is O(1). `List` is single-threaded: segments are shared through
/// `Rc` and lazy producers are `Rc<dyn Fn>`.
///
/// # Examples
///
/// ```rust
/// use seglist::persistent::{List, RoundRobin};
///
/// let list = List::from_vec(vec![1, 2]).append(3);
/// assert_eq!(list.heads().len(), 2);
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// assert_eq!(list.to_iterable(&RoundRobin).collect::<Vec<_>>(), vec![1, 3, 2]);
/// ```
pub struct List<T> {
    head: Option<Head<T>>,
}

static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);
static_assertions::assert_impl_all!(List<i32>: Clone, Default);

impl<T> List<T> {
    /// The list with no segments.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { head: None }
    }

    const fn from_head(head: Head<T>) -> Self {
        Self { head: Some(head) }
    }

    fn static_node(items: Rc<[T]>, next: Self) -> Self {
        Self::from_head(Head::Static(Rc::new(StaticHead { items, next })))
    }

    /// Prepends a static segment holding `items`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyStaticHead`] if `items` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::persistent::{List, ListError};
    ///
    /// assert_eq!(
    ///     List::<i32>::try_static_head(vec![], List::empty()).err(),
    ///     Some(ListError::EmptyStaticHead)
    /// );
    /// ```
    pub fn try_static_head(items: Vec<T>, next: Self) -> Result<Self, ListError> {
        if items.is_empty() {
            return Err(ListError::EmptyStaticHead);
        }
        Ok(Self::static_node(items.into(), next))
    }

    /// Prepends a static segment holding `items`.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty. Use [`try_static_head`](Self::try_static_head)
    /// for unchecked input.
    #[must_use]
    pub fn static_head(items: Vec<T>, next: Self) -> Self {
        match Self::try_static_head(items, next) {
            Ok(list) => list,
            Err(error) => panic!("{error}"),
        }
    }

    /// Builds a list of at most one static segment.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::empty()
        } else {
            Self::static_node(items.into(), Self::empty())
        }
    }

    /// Returns a list with `value` first. O(1); `self` is shared, not copied.
    #[must_use]
    pub fn prepend(&self, value: T) -> Self {
        Self::static_node(Rc::from(vec![value]), self.clone())
    }

    /// Returns a list with `value` after the last segment.
    ///
    /// Every segment is re-linked to a new continuation; their items are
    /// reused unchanged. Cost is proportional to the number of segments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::persistent::List;
    ///
    /// let list = List::from_vec(vec![1, 2, 3]);
    /// let appended = list.append(4);
    /// assert_eq!(appended.to_vec(), vec![1, 2, 3, 4]);
    ///
    /// let (before, after) = (&list.heads()[0], &appended.heads()[0]);
    /// assert!(!before.ptr_eq(after));
    /// assert!(before.shares_items_with(after));
    /// ```
    #[must_use]
    pub fn append(&self, value: T) -> Self {
        let heads = self.heads();
        let end = Self::static_node(Rc::from(vec![value]), Self::empty());
        let appended = heads
            .iter()
            .rev()
            .fold(end, |next, head| Self::from_head(head.with_next(next)));
        debug!(rebuilt = heads.len(), "re-linked segments for append");
        appended
    }

    /// The segments from the front to the end, excluding the terminal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::persistent::List;
    ///
    /// let list = List::static_head(vec!['a'], List::static_head(vec!['b'], List::empty()));
    /// let heads = list.heads();
    /// assert_eq!(heads.len(), 2);
    /// assert!(heads[1].ptr_eq(heads[0].next().head_segment().unwrap()));
    /// ```
    pub fn heads(&self) -> Vec<Head<T>> {
        let mut heads = Vec::new();
        let mut current = self;
        while let Some(head) = &current.head {
            heads.push(head.clone());
            current = head.next();
        }
        heads
    }

    /// Returns `true` if the list has no segments.
    #[inline]
    pub const fn is_empty_list(&self) -> bool {
        self.head.is_none()
    }

    /// The first segment, if any.
    #[inline]
    pub const fn head_segment(&self) -> Option<&Head<T>> {
        self.head.as_ref()
    }

    /// The continuation after the first segment, if any.
    #[inline]
    pub fn next(&self) -> Option<&Self> {
        self.head.as_ref().map(Head::next)
    }

    /// Returns `true` if both lists start at the same segment instance,
    /// or both are empty.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (None, None) => true,
            (Some(left), Some(right)) => left.ptr_eq(right),
            _ => false,
        }
    }

    /// Returns `true` if some segment's producer never completes.
    pub fn is_provably_infinite(&self) -> bool {
        self.heads().iter().any(Head::is_provably_infinite)
    }

    /// Returns `true` if some segment is guaranteed to yield an element:
    /// a static segment, or an infinite lazy one.
    pub fn is_provably_non_empty(&self) -> bool {
        self.heads()
            .iter()
            .any(|head| head.is_static() || head.is_provably_infinite())
    }
}

impl<T: 'static> List<T> {
    /// Prepends a lazy segment driven by `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::InfiniteGeneratorFunction;
    /// use seglist::persistent::List;
    ///
    /// let ones = List::lazy_head(InfiniteGeneratorFunction::repeat(1), List::empty());
    /// assert!(ones.is_provably_infinite());
    /// assert_eq!(ones.take_left(3).to_vec(), vec![1, 1, 1]);
    /// ```
    #[must_use]
    pub fn lazy_head<I>(items: I, next: Self) -> Self
    where
        I: Into<LazyItems<T>>,
    {
        Self::from_head(Head::Lazy(Rc::new(LazyHead {
            items: items.into(),
            next,
        })))
    }
}

impl<T: Clone + 'static> List<T> {
    /// A single lazy segment yielding at most the first `count` elements of
    /// the linear view.
    #[must_use]
    pub fn take_left(&self, count: usize) -> Self {
        trace!(count, "wrapping list prefix in a lazy segment");
        let source = self.clone();
        Self::lazy_head(
            GeneratorFunction::from_fn(move || boxed(source.to_iterable(&Linear).take(count))),
            Self::empty(),
        )
    }

    /// A fresh iteration per segment, in segment order.
    pub fn to_iterables(&self) -> Vec<Iteration<T>> {
        self.heads().iter().map(Head::iterate).collect()
    }

    /// One fresh iteration over every segment, flattened by `strategy`.
    pub fn to_iterable<S: Strategy>(&self, strategy: &S) -> Iteration<T> {
        strategy.flatten(self.to_iterables())
    }

    /// Collects the linear view.
    ///
    /// Does not terminate if a segment is infinite; see
    /// [`FiniteList`](super::FiniteList) for a version that rules this out.
    pub fn to_vec(&self) -> Vec<T> {
        self.to_iterable(&Linear).collect()
    }

    /// Rebuilds every segment as a lazy one yielding `function(index, item)`.
    ///
    /// `index.root` is the original segment the item came from. Infinite
    /// segments stay infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::persistent::List;
    ///
    /// let list = List::static_head(vec!['a', 'b'], List::static_head(vec!['c'], List::empty()));
    /// let offsets = list.map_with_index(|index, item| (item, index.offset));
    /// assert_eq!(offsets.to_vec(), vec![('a', 0), ('b', 1), ('c', 0)]);
    /// ```
    pub fn map_with_index<B, F>(&self, function: F) -> List<B>
    where
        B: 'static,
        F: Fn(Index<T>, T) -> B + 'static,
    {
        let function = Rc::new(function);
        let heads = self.heads();
        let mapped = heads.iter().rev().fold(List::empty(), |next, head| {
            let root = head.clone();
            let function = Rc::clone(&function);
            let generator = GeneratorFunction::from_fn(move || {
                let function = Rc::clone(&function);
                let index_root = root.clone();
                boxed(root.iterate().enumerate().map(move |(offset, item)| {
                    let index = Index {
                        root: index_root.clone(),
                        offset,
                    };
                    function(index, item)
                }))
            });
            let items = if head.is_provably_infinite() {
                LazyItems::Infinite(InfiniteGeneratorFunction::from_generator_unchecked(generator))
            } else {
                LazyItems::Finite(generator)
            };
            List::from_head(Head::Lazy(Rc::new(LazyHead { items, next })))
        });
        debug!(rebuilt = heads.len(), "rebuilt segments for map_with_index");
        mapped
    }

    /// Searches for elements equal to `target`.
    ///
    /// The result is a single lazy segment of [`Pointer`]s in round-robin
    /// order. Each iteration of it replays the search from scratch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    /// use seglist::persistent::List;
    ///
    /// let tail = List::static_head(vec![2], List::empty());
    /// let list = List::lazy_head(GeneratorFunction::new(|| [1]), tail.clone());
    ///
    /// let found = list.find(2).to_vec();
    /// assert_eq!(found.len(), 1);
    /// assert!(found[0].index.root.ptr_eq(tail.head_segment().unwrap()));
    /// assert_eq!(found[0].index.offset, 0);
    /// ```
    pub fn find(&self, target: T) -> List<Pointer<T>>
    where
        T: PartialEq,
    {
        self.find_by(move |item| *item == target)
    }

    /// Searches for elements satisfying `predicate`.
    ///
    /// The result is infinite when `self` has an infinite segment: the
    /// round-robin traversal under it never completes.
    pub fn find_by<P>(&self, predicate: P) -> List<Pointer<T>>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let list = self.clone();
        let pointers = self.map_with_index(move |index, item| Pointer {
            list: list.clone(),
            index,
            item,
        });
        let infinite = self.is_provably_infinite();
        debug!(infinite, "search prepared");
        let predicate = Rc::new(predicate);
        let search = GeneratorFunction::from_fn(move || {
            trace!("replaying search");
            let predicate = Rc::clone(&predicate);
            boxed(
                pointers
                    .to_iterable(&RoundRobin)
                    .filter(move |pointer| predicate(&pointer.item)),
            )
        });
        if infinite {
            List::lazy_head(
                InfiniteGeneratorFunction::from_generator_unchecked(search),
                List::empty(),
            )
        } else {
            List::lazy_head(search, List::empty())
        }
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

// Long chains would otherwise drop recursively, one stack frame per segment.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(head) = current {
            current = match head {
                Head::Static(node) => {
                    Rc::try_unwrap(node).ok().and_then(|mut node| node.next.head.take())
                }
                Head::Lazy(node) => {
                    Rc::try_unwrap(node).ok().and_then(|mut node| node.next.head.take())
                }
            };
        }
    }
}

impl<T: Clone + 'static> Restartable for List<T> {
    type Item = T;

    fn iterate(&self) -> Iteration<T> {
        self.to_iterable(&Linear)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_vec(iterable.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.heads()).finish()
    }
}
