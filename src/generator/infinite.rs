//! Restartable sequences known never to complete.
//!
//! An [`InfiniteGeneratorFunction`] has no `to_vec`, `last` or `length`.
//! Materializing one is rejected by the type checker instead of hanging at
//! run time. [`take_left`](InfiniteGeneratorFunction::take_left) is the way
//! back to a finite [`GeneratorFunction`].

use std::fmt;
use std::rc::Rc;

use super::error::{SequenceError, broken_contract};
use super::function::GeneratorFunction;
use super::non_empty::NonEmptyGeneratorFunction;
use super::{Iteration, Restartable, boxed};

/// A restartable sequence that never completes.
///
/// # Examples
///
/// ```rust
/// use seglist::generator::{InfiniteGeneratorFunction, NonEmptyGeneratorFunction};
///
/// let digits = NonEmptyGeneratorFunction::from_first_and_rest(1, vec![2, 3]);
/// let cycled = InfiniteGeneratorFunction::cycle(&digits);
/// assert_eq!(cycled.take_left(7).to_vec(), vec![1, 2, 3, 1, 2, 3, 1]);
/// ```
pub struct InfiniteGeneratorFunction<T> {
    inner: GeneratorFunction<T>,
}

impl<T> Clone for InfiniteGeneratorFunction<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for InfiniteGeneratorFunction<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InfiniteGeneratorFunction")
            .finish_non_exhaustive()
    }
}

impl<T: 'static> InfiniteGeneratorFunction<T> {
    /// Wraps a generator whose producer is known never to complete.
    pub(crate) const fn from_generator_unchecked(inner: GeneratorFunction<T>) -> Self {
        Self { inner }
    }

    /// Creates a sequence from a producer whose iterations never end.
    ///
    /// The producer is trusted. An iteration that does end panics when
    /// driven past its final element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::InfiniteGeneratorFunction;
    ///
    /// let naturals = InfiniteGeneratorFunction::new(|| 0..);
    /// assert_eq!(naturals.nth(10), 10);
    /// ```
    pub fn new<F, I>(producer: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_generator_unchecked(GeneratorFunction::from_fn(move || {
            let exhausted =
                std::iter::from_fn(|| -> Option<T> { broken_contract(SequenceError::Exhausted) });
            boxed(producer().into_iter().chain(exhausted))
        }))
    }

    /// Yields `value` forever.
    pub fn repeat(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_generator_unchecked(GeneratorFunction::from_fn(move || {
            boxed(std::iter::repeat(value.clone()))
        }))
    }

    /// Replays `source` back to back forever.
    ///
    /// # Panics
    ///
    /// Panics if a replay of `source` completes without yielding.
    pub fn cycle(source: &NonEmptyGeneratorFunction<T>) -> Self {
        let source = source.clone();
        Self::from_generator_unchecked(GeneratorFunction::from_fn(move || {
            let source = source.clone();
            let mut pass = source.iterate();
            boxed(std::iter::from_fn(move || {
                loop {
                    if let Some(element) = pass.next() {
                        return Some(element);
                    }
                    if matches!(pass.report(), Err(SequenceError::EmptyReplay)) {
                        broken_contract(SequenceError::EmptyReplay);
                    }
                    pass = source.iterate();
                }
            }))
        }))
    }

    /// Yields `seed`, then `step(seed)`, then `step(step(seed))`, and so on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::InfiniteGeneratorFunction;
    ///
    /// let powers = InfiniteGeneratorFunction::successors(1_u64, |n| n * 2);
    /// assert_eq!(powers.take_left(5).to_vec(), vec![1, 2, 4, 8, 16]);
    /// ```
    pub fn successors<F>(seed: T, step: F) -> Self
    where
        T: Clone,
        F: Fn(&T) -> T + 'static,
    {
        let step = Rc::new(step);
        Self::from_generator_unchecked(GeneratorFunction::from_fn(move || {
            let step = Rc::clone(&step);
            boxed(std::iter::successors(Some(seed.clone()), move |previous| {
                Some(step(previous))
            }))
        }))
    }

    /// Starts a fresh iteration.
    #[inline]
    pub fn iterate(&self) -> Iteration<T> {
        self.inner.iterate()
    }

    /// Returns a new sequence with `head` yielded first.
    pub fn prepend(&self, head: T) -> Self
    where
        T: Clone,
    {
        Self::from_generator_unchecked(self.inner.prepend(head).into_generator())
    }

    /// Returns an unchanged copy: the end of an infinite sequence is never
    /// reached, so nothing placed there can be observed.
    #[must_use]
    pub fn append(&self, _end: T) -> Self {
        self.clone()
    }

    /// Applies `function` to every element.
    pub fn map<B, F>(&self, function: F) -> InfiniteGeneratorFunction<B>
    where
        B: 'static,
        F: Fn(T) -> B + 'static,
    {
        InfiniteGeneratorFunction::from_generator_unchecked(self.inner.map(function))
    }

    /// Combines elements pairwise. Both sides are infinite, so the result is.
    pub fn zip_with<B, C, F>(
        &self,
        other: &InfiniteGeneratorFunction<B>,
        function: F,
    ) -> InfiniteGeneratorFunction<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(T, B) -> C + 'static,
    {
        InfiniteGeneratorFunction::from_generator_unchecked(
            self.inner.zip_with(&other.inner, function),
        )
    }

    /// Keeps the elements satisfying `predicate`.
    ///
    /// The result is only infinite if `predicate` keeps accepting elements;
    /// pulling from a filter that never accepts again does not return.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::from_generator_unchecked(self.inner.filter(predicate))
    }

    /// Keeps the first `count` elements as a finite sequence.
    pub fn take_left(&self, count: usize) -> GeneratorFunction<T> {
        self.inner.take_left(count)
    }

    /// Skips the first `count` elements.
    pub fn drop_left(&self, count: usize) -> Self {
        Self::from_generator_unchecked(self.inner.drop_left(count))
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if a replay of the producer completes.
    pub fn head(&self) -> T {
        self.nth(0)
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if a replay of the producer completes before `index`.
    pub fn nth(&self, index: usize) -> T {
        self.inner
            .lookup(index)
            .unwrap_or_else(|| broken_contract(SequenceError::Exhausted))
    }

    /// Borrows the sequence as a general [`GeneratorFunction`].
    pub const fn as_generator(&self) -> &GeneratorFunction<T> {
        &self.inner
    }
}

impl<T: 'static> Restartable for InfiniteGeneratorFunction<T> {
    type Item = T;

    fn iterate(&self) -> Iteration<T> {
        Self::iterate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn repeat_yields_the_value() {
        assert_eq!(
            InfiniteGeneratorFunction::repeat('a').take_left(3).to_vec(),
            vec!['a', 'a', 'a']
        );
    }

    #[rstest]
    fn cycle_restarts_the_source() {
        let source = NonEmptyGeneratorFunction::from_first_and_rest(1, vec![2, 3]);
        let cycled = InfiniteGeneratorFunction::cycle(&source);
        assert_eq!(cycled.take_left(7).to_vec(), vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[rstest]
    #[should_panic(expected = "yielded nothing on replay")]
    fn cycle_panics_when_a_replay_is_empty() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let fading = GeneratorFunction::new(move || {
            let call = counter.get();
            counter.set(call + 1);
            if call < 2 { vec![1] } else { Vec::new() }
        });
        let source = match NonEmptyGeneratorFunction::try_from_generator(fading) {
            Ok(source) => source,
            Err(error) => panic!("{error}"),
        };
        let _ = InfiniteGeneratorFunction::cycle(&source).take_left(3).to_vec();
    }

    #[rstest]
    fn prepend_comes_first() {
        let sequence = InfiniteGeneratorFunction::repeat(0).prepend(1);
        assert_eq!(sequence.take_left(4).to_vec(), vec![1, 0, 0, 0]);
    }

    #[rstest]
    fn append_is_unobservable() {
        let sequence = InfiniteGeneratorFunction::repeat(0).append(1);
        assert_eq!(sequence.take_left(4).to_vec(), vec![0, 0, 0, 0]);
    }

    #[rstest]
    fn map_zip_and_drop() {
        let naturals = InfiniteGeneratorFunction::successors(0, |n| n + 1);
        let doubled = naturals.map(|n| n * 2);
        let sums = naturals.zip_with(&doubled, |a, b| a + b);
        assert_eq!(sums.drop_left(1).take_left(3).to_vec(), vec![3, 6, 9]);
        assert_eq!(naturals.filter(|n| n % 5 == 0).nth(2), 10);
        assert_eq!(naturals.head(), 0);
    }

    #[rstest]
    #[should_panic(expected = "infinite producer completed")]
    fn finite_producer_panics_when_exhausted() {
        let lying = InfiniteGeneratorFunction::new(|| 0..2);
        let _ = lying.take_left(3).to_vec();
    }
}
