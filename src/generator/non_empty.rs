//! Restartable sequences known to yield at least one element.
//!
//! A [`NonEmptyGeneratorFunction`] can only be built from something with
//! content, so `head`, `last`, `min` and `max` are total. Its iterations end
//! with a [`Report`] that witnesses the first and final elements without
//! holding on to them.

use std::cmp::Ordering;
use std::fmt;

use super::error::{SequenceError, broken_contract};
use super::function::GeneratorFunction;
use super::{Iteration, Restartable};
use crate::marker::{Sighting, Tombstone};

/// Completion record of a [`NonEmptyIteration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report<T> {
    /// Witness of the first element the iteration yielded.
    pub sample: Sighting<T>,
    /// Witness of the final element the iteration yielded.
    pub last: Tombstone<T>,
}

/// One pass over a [`NonEmptyGeneratorFunction`].
///
/// Behaves as a plain iterator. Once it has returned `None`,
/// [`report`](NonEmptyIteration::report) describes what was seen.
///
/// # Examples
///
/// ```rust
/// use seglist::generator::{NonEmptyGeneratorFunction, SequenceError};
///
/// let sequence = NonEmptyGeneratorFunction::from_first_and_rest(1, vec![2]);
/// let mut iteration = sequence.iterate();
/// assert_eq!(iteration.report().err(), Some(SequenceError::Unfinished));
///
/// assert_eq!(iteration.by_ref().collect::<Vec<_>>(), vec![1, 2]);
/// assert!(iteration.report().is_ok());
/// ```
pub struct NonEmptyIteration<T> {
    inner: Iteration<T>,
    sample: Option<Sighting<T>>,
    last: Option<Tombstone<T>>,
    finished: bool,
}

impl<T> NonEmptyIteration<T> {
    /// Returns the completion record.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::Unfinished`] while elements may remain
    /// - [`SequenceError::EmptyReplay`] if the producer completed without
    ///   yielding anything
    pub fn report(&self) -> Result<Report<T>, SequenceError> {
        if !self.finished {
            return Err(SequenceError::Unfinished);
        }
        match (self.sample, self.last) {
            (Some(sample), Some(last)) => Ok(Report { sample, last }),
            _ => Err(SequenceError::EmptyReplay),
        }
    }
}

impl<T> Iterator for NonEmptyIteration<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.finished {
            return None;
        }
        match self.inner.next() {
            Some(element) => {
                if self.sample.is_none() {
                    self.sample = Some(Sighting::of(&element));
                }
                self.last = Some(Tombstone::of(&element));
                Some(element)
            }
            None => {
                self.finished = true;
                None
            }
        }
    }
}

impl<T> fmt::Debug for NonEmptyIteration<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NonEmptyIteration")
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

/// A restartable sequence that yields at least one element.
///
/// # Examples
///
/// ```rust
/// use seglist::generator::NonEmptyGeneratorFunction;
///
/// let sequence = NonEmptyGeneratorFunction::from_first_and_rest(3, vec![1, 2]);
/// assert_eq!(sequence.head(), 3);
/// assert_eq!(sequence.min(), 1);
/// assert_eq!(sequence.sort().to_vec(), vec![1, 2, 3]);
/// ```
pub struct NonEmptyGeneratorFunction<T> {
    inner: GeneratorFunction<T>,
}

impl<T> Clone for NonEmptyGeneratorFunction<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for NonEmptyGeneratorFunction<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NonEmptyGeneratorFunction")
            .finish_non_exhaustive()
    }
}

impl<T: 'static> NonEmptyGeneratorFunction<T> {
    /// Wraps a generator whose producer is known to yield.
    pub(crate) const fn from_generator_unchecked(inner: GeneratorFunction<T>) -> Self {
        Self { inner }
    }

    /// Creates a sequence yielding `value` once.
    pub fn of(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_generator_unchecked(GeneratorFunction::of(value))
    }

    /// Creates a sequence yielding `first`, then every element of `rest`.
    pub fn from_first_and_rest(first: T, rest: Vec<T>) -> Self
    where
        T: Clone,
    {
        GeneratorFunction::from_vec(rest).prepend(first)
    }

    /// Creates a sequence replaying `items`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if `items` is empty.
    pub fn try_from_vec(items: Vec<T>) -> Result<Self, SequenceError>
    where
        T: Clone,
    {
        if items.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self::from_generator_unchecked(GeneratorFunction::from_vec(
            items,
        )))
    }

    /// Narrows a general sequence, checking one replay for content.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if `generator` yields nothing.
    pub fn try_from_generator(generator: GeneratorFunction<T>) -> Result<Self, SequenceError> {
        if generator.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self::from_generator_unchecked(generator))
    }

    /// Starts a fresh, reporting iteration.
    pub fn iterate(&self) -> NonEmptyIteration<T> {
        NonEmptyIteration {
            inner: self.inner.iterate(),
            sample: None,
            last: None,
            finished: false,
        }
    }

    /// Drives one full iteration into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.to_vec()
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if a replay of the producer yields nothing.
    pub fn head(&self) -> T {
        self.inner
            .head()
            .unwrap_or_else(|| broken_contract(SequenceError::EmptyReplay))
    }

    /// Returns the final element.
    ///
    /// # Panics
    ///
    /// Panics if a replay of the producer yields nothing.
    pub fn last(&self) -> T {
        self.inner
            .last()
            .unwrap_or_else(|| broken_contract(SequenceError::EmptyReplay))
    }

    /// Combines all elements from the left, seeded by the first.
    ///
    /// # Panics
    ///
    /// Panics if a replay of the producer yields nothing.
    pub fn reduce1<F>(&self, function: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.inner
            .iterate()
            .reduce(function)
            .unwrap_or_else(|| broken_contract(SequenceError::EmptyReplay))
    }

    /// Returns the first minimum under `compare`.
    ///
    /// # Panics
    ///
    /// Panics if a replay of the producer yields nothing.
    pub fn min_by<C>(&self, compare: C) -> T
    where
        C: Fn(&T, &T) -> Ordering,
    {
        self.inner
            .min_by(compare)
            .unwrap_or_else(|| broken_contract(SequenceError::EmptyReplay))
    }

    /// Returns the first maximum under `compare`.
    ///
    /// # Panics
    ///
    /// Panics if a replay of the producer yields nothing.
    pub fn max_by<C>(&self, compare: C) -> T
    where
        C: Fn(&T, &T) -> Ordering,
    {
        self.inner
            .max_by(compare)
            .unwrap_or_else(|| broken_contract(SequenceError::EmptyReplay))
    }

    /// Returns the first minimum.
    pub fn min(&self) -> T
    where
        T: Ord,
    {
        self.min_by(T::cmp)
    }

    /// Returns the first maximum.
    pub fn max(&self) -> T
    where
        T: Ord,
    {
        self.max_by(T::cmp)
    }

    /// Applies `function` to every element.
    pub fn map<B, F>(&self, function: F) -> NonEmptyGeneratorFunction<B>
    where
        B: 'static,
        F: Fn(T) -> B + 'static,
    {
        NonEmptyGeneratorFunction::from_generator_unchecked(self.inner.map(function))
    }

    /// Returns a new sequence with `head` yielded first.
    pub fn prepend(&self, head: T) -> Self
    where
        T: Clone,
    {
        self.inner.prepend(head)
    }

    /// Returns a new sequence with `end` yielded last.
    pub fn append(&self, end: T) -> Self
    where
        T: Clone,
    {
        self.inner.append(end)
    }

    /// Yields all of `self`, then all of `other`.
    pub fn concat(&self, other: &GeneratorFunction<T>) -> Self {
        Self::from_generator_unchecked(self.inner.concat(other))
    }

    /// Sorts stably under `compare`.
    ///
    /// See [`GeneratorFunction::sort_by`] for the replay cost.
    pub fn sort_by<C>(&self, compare: C) -> Self
    where
        T: Clone,
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::from_generator_unchecked(self.inner.sort_by(compare))
    }

    /// Sorts stably by `Ord`.
    pub fn sort(&self) -> Self
    where
        T: Ord + Clone,
    {
        self.sort_by(T::cmp)
    }

    /// Borrows the sequence as a general [`GeneratorFunction`].
    pub const fn as_generator(&self) -> &GeneratorFunction<T> {
        &self.inner
    }

    /// Forgets non-emptiness.
    pub fn into_generator(self) -> GeneratorFunction<T> {
        self.inner
    }
}

impl<T: 'static> Restartable for NonEmptyGeneratorFunction<T> {
    type Item = T;

    fn iterate(&self) -> Iteration<T> {
        Box::new(Self::iterate(self))
    }
}

impl<T: 'static> TryFrom<GeneratorFunction<T>> for NonEmptyGeneratorFunction<T> {
    type Error = SequenceError;

    fn try_from(generator: GeneratorFunction<T>) -> Result<Self, Self::Error> {
        Self::try_from_generator(generator)
    }
}

impl<T: 'static> From<NonEmptyGeneratorFunction<T>> for GeneratorFunction<T> {
    fn from(sequence: NonEmptyGeneratorFunction<T>) -> Self {
        sequence.into_generator()
    }
}
