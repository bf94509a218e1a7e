//! Sum and product types shared by the sequence combinators.
//!
//! - [`Either`]: A value that can be one of two types
//! - [`Separated`]: Two structures produced by splitting one
//!
//! # Examples
//!
//! ```rust
//! use seglist::control::{Either, Separated};
//!
//! let values = vec![Either::Left(1), Either::Right("a"), Either::Left(2)];
//! let mut separated = Separated::new(Vec::new(), Vec::new());
//! for value in values {
//!     match value {
//!         Either::Left(number) => separated.left.push(number),
//!         Either::Right(text) => separated.right.push(text),
//!     }
//! }
//! assert_eq!(separated.left, vec![1, 2]);
//! assert_eq!(separated.right, vec!["a"]);
//! ```

mod either;
mod separated;

pub use either::Either;
pub use separated::Separated;
