//! Restartable lazy sequences.
//!
//! A restartable sequence is a producer that hands out a fresh, independent
//! iteration over the same logical sequence every time it is asked. Nothing
//! is cached between iterations: each call to [`Restartable::iterate`] runs
//! the producer from the top, and two iterations never share a cursor.
//!
//! This module provides:
//!
//! - [`Restartable`]: the capability itself
//! - [`GeneratorFunction`]: a possibly-empty, possibly-infinite sequence with
//!   the full combinator set (map, filter, fold, traverse, zip, sort, ...)
//! - [`NonEmptyGeneratorFunction`]: a sequence known to yield at least one
//!   element, with total `head`/`min`/`max` and a completion [`Report`]
//! - [`InfiniteGeneratorFunction`]: a sequence known never to complete
//!
//! # The Restartability Contract
//!
//! A producer must yield the same logical output on every replay. Producer
//! closures may capture external mutable state (a counter, a cache), but
//! keeping the output identical across replays is the caller's
//! responsibility; the sequences here cannot check it.
//!
//! # Examples
//!
//! ```rust
//! use seglist::generator::GeneratorFunction;
//!
//! let evens = GeneratorFunction::new(|| 0..10).filter(|n| n % 2 == 0);
//!
//! // Every iteration starts from scratch.
//! assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
//! assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
//! ```

mod error;
mod fold;
mod function;
mod infinite;
mod non_empty;
mod transform;

use std::rc::Rc;

pub(crate) use error::broken_contract;
pub use error::SequenceError;
pub use function::GeneratorFunction;
pub use infinite::InfiniteGeneratorFunction;
pub use non_empty::{NonEmptyGeneratorFunction, NonEmptyIteration, Report};
pub use transform::Spanned;

/// A single, stateful pass over a restartable sequence.
pub type Iteration<T> = Box<dyn Iterator<Item = T>>;

/// A producer of fresh iterations over the same logical sequence.
///
/// Implementors must return a brand-new iteration from every call to
/// [`iterate`](Restartable::iterate). Driving one iteration must never be
/// observable through another.
///
/// # Examples
///
/// ```rust
/// use seglist::generator::{GeneratorFunction, Restartable};
///
/// fn twice<R: Restartable<Item = i32>>(sequence: &R) -> Vec<i32> {
///     sequence.iterate().chain(sequence.iterate()).collect()
/// }
///
/// let sequence = GeneratorFunction::from_vec(vec![1, 2]);
/// assert_eq!(twice(&sequence), vec![1, 2, 1, 2]);
/// ```
pub trait Restartable {
    /// The element type.
    type Item;

    /// Starts a fresh iteration from the beginning of the sequence.
    fn iterate(&self) -> Iteration<Self::Item>;
}

/// Boxes an iterator as an [`Iteration`].
pub(crate) fn boxed<I>(iterator: I) -> Iteration<I::Item>
where
    I: Iterator + 'static,
{
    Box::new(iterator)
}

/// Replays a shared slice by cloning its elements in order.
pub(crate) fn replay_slice<T>(items: &Rc<[T]>) -> Iteration<T>
where
    T: Clone + 'static,
{
    let items = Rc::clone(items);
    boxed((0..items.len()).map(move |index| items[index].clone()))
}
