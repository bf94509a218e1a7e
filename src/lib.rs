//! # seglist
//!
//! Restartable lazy sequences and a persistent list of mixed static and lazy
//! segments.
//!
//! ## Overview
//!
//! - **Restartable Sequences**: `GeneratorFunction` and its non-empty and
//!   infinite refinements; every iteration replays the producer from scratch
//! - **Segmented List**: a persistent chain whose segments are either fixed
//!   blocks of values or restartable producers, traversable linearly or
//!   round-robin, with a search that reports where each match was found
//! - **Type Classes**: `Semigroup` and `Monoid`, used by `fold_map`
//! - **Control Structures**: `Either` and `Separated`, used by partitions
//! - **Markers**: zero-sized witnesses of values that are not retained
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup`, `Monoid`, `Sum`, `Product`
//! - `control`: `Either`, `Separated`
//! - `marker`: `Sighting`, `Tombstone`
//! - `generator`: restartable sequences (enables the three above)
//! - `persistent`: the segmented list (enables `generator`)
//!
//! All of them are on by default.
//!
//! ## Logging
//!
//! Structural events (segment rebuilds, search replays, round-robin
//! progress) are emitted through `tracing` at `debug` and `trace` level. The
//! crate installs no subscriber.
//!
//! ## Example
//!
//! ```rust
//! use seglist::prelude::*;
//!
//! let list = List::lazy_head(
//!     InfiniteGeneratorFunction::successors(1, |n| n * 3),
//!     List::from_vec(vec![2, 4]),
//! );
//!
//! let found = list.find(4).take_left(1).to_vec();
//! assert_eq!(found[0].item, 4);
//! assert_eq!(found[0].index.offset, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seglist::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "marker")]
    pub use crate::marker::*;

    #[cfg(feature = "generator")]
    pub use crate::generator::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "marker")]
pub mod marker;

#[cfg(feature = "generator")]
pub mod generator;

#[cfg(feature = "persistent")]
pub mod persistent;
