//! Persistent (immutable) segmented lists.
//!
//! This module provides [`List`], a persistent chain of segments where each
//! segment is either a fixed block of values or a restartable lazy producer:
//!
//! - [`List`], [`Head`], [`StaticHead`], [`LazyHead`]: the chain and its nodes
//! - [`Strategy`], [`Linear`], [`RoundRobin`]: how segments are flattened
//! - [`Pointer`], [`Index`]: located results of [`List::find`]
//! - [`FiniteList`], [`InfiniteList`], [`NonEmptyList`]: checked shapes
//!
//! # Structural Sharing
//!
//! Segments are reference counted and never mutated. Prepending shares the
//! whole existing chain; appending re-links segments but reuses their items.
//!
//! # Examples
//!
//! ```rust
//! use seglist::generator::InfiniteGeneratorFunction;
//! use seglist::persistent::{Linear, List, RoundRobin};
//!
//! let evens = List::lazy_head(
//!     InfiniteGeneratorFunction::successors(0, |n| n + 2),
//!     List::static_head(vec![-1, -3], List::empty()),
//! );
//!
//! // Linear order never leaves the infinite segment...
//! let linear: Vec<i32> = evens.to_iterable(&Linear).take(3).collect();
//! assert_eq!(linear, vec![0, 2, 4]);
//!
//! // ...round-robin order reaches every segment.
//! let interleaved: Vec<i32> = evens.to_iterable(&RoundRobin).take(4).collect();
//! assert_eq!(interleaved, vec![0, -1, 2, -3]);
//!
//! let found = evens.find(-3).take_left(1).to_vec();
//! assert_eq!(found[0].index.offset, 1);
//! ```

mod error;
mod list;
mod pointer;
mod strategy;
mod typed;

pub use error::ListError;
pub use list::{Head, LazyHead, LazyItems, List, StaticHead};
pub use pointer::{Index, Pointer};
pub use strategy::{Linear, RoundRobin, RoundRobinIter, Strategy};
pub use typed::{FiniteList, InfiniteList, NonEmptyList};
