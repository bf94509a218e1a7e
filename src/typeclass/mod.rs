//! Algebraic structures used by the folding combinators.
//!
//! Generator functions fold their elements into summary values through
//! these traits:
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! [`Sum`] and [`Product`] let the same numeric type fold two different ways.
//!
//! # Examples
//!
//! ```rust
//! use seglist::typeclass::{Monoid, Semigroup, Sum};
//!
//! let hello = String::from("Hello, ");
//! assert_eq!(hello.combine(String::from("World!")), "Hello, World!");
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
