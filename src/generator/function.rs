//! The general restartable sequence.
//!
//! [`GeneratorFunction`] wraps a zero-argument producer of iterations. It may
//! be empty, finite or infinite; the type makes no promise. Every combinator
//! returns a new `GeneratorFunction` whose producer re-invokes its sources,
//! so building a pipeline never runs it.
//!
//! # Examples
//!
//! ```rust
//! use seglist::generator::GeneratorFunction;
//!
//! let squares = GeneratorFunction::new(|| 1..=4).map(|n| n * n);
//! assert_eq!(squares.to_vec(), vec![1, 4, 9, 16]);
//! assert_eq!(squares.head(), Some(1));
//! assert_eq!(squares.last(), Some(16));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::infinite::InfiniteGeneratorFunction;
use super::non_empty::NonEmptyGeneratorFunction;
use super::{Iteration, Restartable, boxed, replay_slice};
use crate::typeclass::{Monoid, Semigroup};

/// A restartable, possibly-empty, possibly-infinite lazy sequence.
///
/// Cloning is O(1): clones share the producer.
///
/// # Examples
///
/// ```rust
/// use seglist::generator::GeneratorFunction;
///
/// let sequence = GeneratorFunction::from_vec(vec![3, 1, 2]);
/// assert_eq!(sequence.sort().to_vec(), vec![1, 2, 3]);
/// assert_eq!(sequence.to_vec(), vec![3, 1, 2]); // the source is unchanged
/// ```
pub struct GeneratorFunction<T> {
    producer: Rc<dyn Fn() -> Iteration<T>>,
}

static_assertions::assert_not_impl_any!(GeneratorFunction<i32>: Send, Sync);
static_assertions::assert_impl_all!(GeneratorFunction<i32>: Clone);

impl<T> Clone for GeneratorFunction<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for GeneratorFunction<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GeneratorFunction")
            .finish_non_exhaustive()
    }
}

impl<T: 'static> GeneratorFunction<T> {
    /// Creates a sequence from a producer of iterables.
    ///
    /// The producer is called once per iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let digits = GeneratorFunction::new(|| 0..3);
    /// assert_eq!(digits.to_vec(), vec![0, 1, 2]);
    /// ```
    pub fn new<F, I>(producer: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_fn(move || boxed(producer().into_iter()))
    }

    /// Creates a sequence from a producer of boxed iterations.
    pub(crate) fn from_fn<F>(producer: F) -> Self
    where
        F: Fn() -> Iteration<T> + 'static,
    {
        Self {
            producer: Rc::new(producer),
        }
    }

    /// Creates a sequence that yields nothing.
    pub fn empty() -> Self {
        Self::from_fn(|| boxed(std::iter::empty()))
    }

    /// Creates a sequence yielding `value` once.
    pub fn of(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(move || boxed(std::iter::once(value.clone())))
    }

    /// Creates a sequence replaying the elements of `items` in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let sequence = GeneratorFunction::from_vec(vec!['a', 'b']);
    /// assert_eq!(sequence.to_vec(), vec!['a', 'b']);
    /// ```
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Clone,
    {
        let items: Rc<[T]> = items.into();
        Self::from_fn(move || replay_slice(&items))
    }

    /// Creates a sequence replaying a cloneable iterable.
    ///
    /// The iterable is cloned for every iteration.
    pub fn from_iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
        I::IntoIter: 'static,
    {
        Self::from_fn(move || boxed(iterable.clone().into_iter()))
    }

    /// Adapts any [`Restartable`] into a `GeneratorFunction`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    /// use seglist::persistent::List;
    ///
    /// let list = List::from_vec(vec![1, 2, 3]);
    /// let doubled = GeneratorFunction::from_restartable(list).map(|n| n * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn from_restartable<R>(restartable: R) -> Self
    where
        R: Restartable<Item = T> + 'static,
    {
        Self::from_fn(move || restartable.iterate())
    }

    /// Creates a sequence of `count` copies of `value`.
    pub fn replicate(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        InfiniteGeneratorFunction::repeat(value).take_left(count)
    }

    /// Builds a sequence by repeatedly applying `step` to a seed.
    ///
    /// The sequence ends the first time `step` returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let countdown = GeneratorFunction::unfold(3, |n| (n > 0).then(|| (n, n - 1)));
    /// assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn unfold<S, F>(seed: S, step: F) -> Self
    where
        S: Clone + 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        let step = Rc::new(step);
        Self::from_fn(move || {
            let step = Rc::clone(&step);
            let mut state = Some(seed.clone());
            boxed(std::iter::from_fn(move || {
                let (element, next) = step(state.take()?)?;
                state = Some(next);
                Some(element)
            }))
        })
    }

    /// Starts a fresh iteration.
    #[inline]
    pub fn iterate(&self) -> Iteration<T> {
        (self.producer)()
    }

    /// Returns `true` if both handles share one producer.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.producer, &other.producer)
    }

    /// Drives one full iteration into a `Vec`.
    ///
    /// Does not terminate on an infinite sequence.
    pub fn to_vec(&self) -> Vec<T> {
        self.iterate().collect()
    }

    /// Returns a new sequence with `head` yielded first.
    pub fn prepend(&self, head: T) -> NonEmptyGeneratorFunction<T>
    where
        T: Clone,
    {
        let tail = self.clone();
        NonEmptyGeneratorFunction::from_generator_unchecked(Self::from_fn(move || {
            boxed(std::iter::once(head.clone()).chain(tail.iterate()))
        }))
    }

    /// Returns a new sequence with `end` yielded last.
    pub fn append(&self, end: T) -> NonEmptyGeneratorFunction<T>
    where
        T: Clone,
    {
        let init = self.clone();
        NonEmptyGeneratorFunction::from_generator_unchecked(Self::from_fn(move || {
            boxed(init.iterate().chain(std::iter::once(end.clone())))
        }))
    }

    /// Yields all of `self`, then all of `other`.
    pub fn concat(&self, other: &Self) -> Self {
        let first = self.clone();
        let second = other.clone();
        Self::from_fn(move || boxed(first.iterate().chain(second.iterate())))
    }

    /// Concatenates with a sequence built on demand.
    ///
    /// `that` is evaluated once, when `alt` is called.
    pub fn alt<F>(&self, that: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.concat(&that())
    }

    /// Returns `true` if the sequence yields nothing.
    pub fn is_empty(&self) -> bool {
        self.iterate().next().is_none()
    }

    /// Returns `true` if the sequence yields at least one element.
    pub fn is_non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the first element.
    pub fn head(&self) -> Option<T> {
        self.iterate().next()
    }

    /// Returns the final element. Does not terminate on an infinite sequence.
    pub fn last(&self) -> Option<T> {
        self.iterate().last()
    }

    /// Returns everything after the first element, or `None` if empty.
    pub fn tail(&self) -> Option<Self> {
        if self.is_empty() {
            return None;
        }
        let source = self.clone();
        Some(Self::from_fn(move || boxed(source.iterate().skip(1))))
    }

    /// Returns everything before the final element, or `None` if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let init = GeneratorFunction::from_vec(vec![1, 2, 3]).init();
    /// assert_eq!(init.map(|sequence| sequence.to_vec()), Some(vec![1, 2]));
    /// ```
    pub fn init(&self) -> Option<Self> {
        if self.is_empty() {
            return None;
        }
        let source = self.clone();
        Some(Self::from_fn(move || {
            let mut iteration = source.iterate().peekable();
            boxed(std::iter::from_fn(move || {
                let element = iteration.next()?;
                iteration.peek().is_some().then_some(element)
            }))
        }))
    }

    /// Returns the element at `index`.
    pub fn lookup(&self, index: usize) -> Option<T> {
        self.iterate().nth(index)
    }

    /// Returns the number of elements. Does not terminate on an infinite sequence.
    pub fn length(&self) -> usize {
        self.iterate().count()
    }

    /// Returns `true` if an element equal to `value` under `equals` is present.
    pub fn elem_by<E>(&self, value: &T, equals: E) -> bool
    where
        E: Fn(&T, &T) -> bool,
    {
        self.iterate().any(|element| equals(&element, value))
    }

    /// Returns `true` if an element equal to `value` is present.
    pub fn elem(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.elem_by(value, T::eq)
    }

    /// Returns `true` if every element satisfies `predicate`.
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        self.iterate().all(predicate)
    }

    /// Returns `true` if some element satisfies `predicate`.
    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        self.iterate().any(predicate)
    }

    /// Returns the first element satisfying `predicate`.
    pub fn find_first<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iterate().find(|element| predicate(element))
    }

    /// Returns the position of the first element satisfying `predicate`.
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(T) -> bool,
    {
        self.iterate().position(predicate)
    }

    /// Returns the first minimum under `compare`, or `None` if empty.
    pub fn min_by<C>(&self, compare: C) -> Option<T>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        self.iterate().reduce(|minimum, element| {
            if compare(&element, &minimum) == Ordering::Less {
                element
            } else {
                minimum
            }
        })
    }

    /// Returns the first maximum under `compare`, or `None` if empty.
    pub fn max_by<C>(&self, compare: C) -> Option<T>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        self.iterate().reduce(|maximum, element| {
            if compare(&element, &maximum) == Ordering::Greater {
                element
            } else {
                maximum
            }
        })
    }

    /// Returns the first minimum, or `None` if empty.
    pub fn min(&self) -> Option<T>
    where
        T: Ord,
    {
        self.min_by(T::cmp)
    }

    /// Returns the first maximum, or `None` if empty.
    pub fn max(&self) -> Option<T>
    where
        T: Ord,
    {
        self.max_by(T::cmp)
    }
}

impl<T: 'static> Restartable for GeneratorFunction<T> {
    type Item = T;

    fn iterate(&self) -> Iteration<T> {
        Self::iterate(self)
    }
}

impl<T: 'static> Default for GeneratorFunction<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: 'static> Semigroup for GeneratorFunction<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(&other)
    }
}

impl<T: 'static> Monoid for GeneratorFunction<T> {
    fn empty() -> Self {
        Self::empty()
    }
}

impl<T: Clone + 'static> From<Vec<T>> for GeneratorFunction<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Clone + 'static> FromIterator<T> for GeneratorFunction<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_vec(iterable.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn empty_yields_nothing() {
        let sequence = GeneratorFunction::<i32>::empty();
        assert!(sequence.is_empty());
        assert_eq!(sequence.to_vec(), Vec::<i32>::new());
    }

    #[rstest]
    fn of_yields_once_per_iteration() {
        let sequence = GeneratorFunction::of(7);
        assert_eq!(sequence.to_vec(), vec![7]);
        assert_eq!(sequence.to_vec(), vec![7]);
    }

    #[rstest]
    fn producer_runs_once_per_iteration() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sequence = GeneratorFunction::new(move || {
            counter.set(counter.get() + 1);
            0..2
        });
        assert_eq!(calls.get(), 0);
        let _ = sequence.to_vec();
        let _ = sequence.to_vec();
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn iterations_are_independent() {
        let sequence = GeneratorFunction::from_vec(vec![1, 2, 3]);
        let mut first = sequence.iterate();
        let mut second = sequence.iterate();
        assert_eq!(first.next(), Some(1));
        assert_eq!(first.next(), Some(2));
        assert_eq!(second.next(), Some(1));
        assert_eq!(first.next(), Some(3));
        assert_eq!(second.next(), Some(2));
    }

    #[rstest]
    fn prepend_and_append() {
        let sequence = GeneratorFunction::from_vec(vec![1, 2]);
        assert_eq!(sequence.prepend(0).to_vec(), vec![0, 1, 2]);
        assert_eq!(sequence.append(3).to_vec(), vec![1, 2, 3]);
        assert_eq!(GeneratorFunction::empty().append(4).to_vec(), vec![4]);
    }

    #[rstest]
    fn replicate_repeats_value() {
        assert_eq!(GeneratorFunction::replicate(3, 'a').to_vec(), vec!['a'; 3]);
        assert!(GeneratorFunction::replicate(0, 'a').is_empty());
    }

    #[rstest]
    fn unfold_stops_on_first_none() {
        let sequence = GeneratorFunction::unfold(1, |n| (n <= 8).then(|| (n, n * 2)));
        assert_eq!(sequence.to_vec(), vec![1, 2, 4, 8]);
    }

    #[rstest]
    fn from_iterable_replays_clone() {
        let sequence = GeneratorFunction::from_iterable(vec!["x", "y"]);
        assert_eq!(sequence.to_vec(), vec!["x", "y"]);
        assert_eq!(sequence.length(), 2);
    }

    #[rstest]
    #[case(vec![], None, None)]
    #[case(vec![5], Some(5), Some(5))]
    #[case(vec![1, 2, 3], Some(1), Some(3))]
    fn head_and_last(#[case] items: Vec<i32>, #[case] head: Option<i32>, #[case] last: Option<i32>) {
        let sequence = GeneratorFunction::from_vec(items);
        assert_eq!(sequence.head(), head);
        assert_eq!(sequence.last(), last);
    }

    #[rstest]
    fn tail_and_init() {
        let sequence = GeneratorFunction::from_vec(vec![1, 2, 3]);
        assert_eq!(sequence.tail().map(|tail| tail.to_vec()), Some(vec![2, 3]));
        assert_eq!(sequence.init().map(|init| init.to_vec()), Some(vec![1, 2]));
        assert!(GeneratorFunction::<i32>::empty().tail().is_none());
        assert!(GeneratorFunction::<i32>::empty().init().is_none());
        assert_eq!(
            GeneratorFunction::of(1).init().map(|init| init.to_vec()),
            Some(vec![])
        );
    }

    #[rstest]
    fn lookup_and_elem() {
        let sequence = GeneratorFunction::from_vec(vec![10, 20, 30]);
        assert_eq!(sequence.lookup(1), Some(20));
        assert_eq!(sequence.lookup(3), None);
        assert!(sequence.elem(&30));
        assert!(!sequence.elem(&40));
        assert!(sequence.elem_by(&31, |left, right| left / 10 == right / 10));
    }

    #[rstest]
    fn every_and_some() {
        let sequence = GeneratorFunction::from_vec(vec![2, 4, 5]);
        assert!(!sequence.every(|n| n % 2 == 0));
        assert!(sequence.some(|n| n % 2 == 1));
        assert!(GeneratorFunction::<i32>::empty().every(|_| false));
    }

    #[rstest]
    fn find_first_and_index() {
        let sequence = GeneratorFunction::from_vec(vec![1, 4, 6]);
        assert_eq!(sequence.find_first(|n| n % 2 == 0), Some(4));
        assert_eq!(sequence.find_index(|n| n > 5), Some(2));
        assert_eq!(sequence.find_index(|n| n > 6), None);
    }

    #[rstest]
    fn min_and_max_keep_first_of_equals() {
        let sequence = GeneratorFunction::from_vec(vec![(2, 'a'), (1, 'b'), (1, 'c'), (2, 'd')]);
        assert_eq!(sequence.min_by(|l, r| l.0.cmp(&r.0)), Some((1, 'b')));
        assert_eq!(sequence.max_by(|l, r| l.0.cmp(&r.0)), Some((2, 'a')));
        assert_eq!(GeneratorFunction::<i32>::empty().min(), None);
    }

    #[rstest]
    fn semigroup_and_monoid() {
        let left = GeneratorFunction::from_vec(vec![1]);
        let right = GeneratorFunction::from_vec(vec![2]);
        assert_eq!(left.clone().combine(right).to_vec(), vec![1, 2]);
        assert_eq!(
            <GeneratorFunction<i32> as Monoid>::empty().combine(left).to_vec(),
            vec![1]
        );
    }

    #[rstest]
    fn alt_appends_lazily_built_sequence() {
        let sequence = GeneratorFunction::from_vec(vec![1]).alt(|| GeneratorFunction::of(2));
        assert_eq!(sequence.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn collects_from_iterator() {
        let sequence: GeneratorFunction<i32> = (1..=3).collect();
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    }
}
