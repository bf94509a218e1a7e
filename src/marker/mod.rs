//! Zero-payload witnesses for values that are not retained.
//!
//! - [`Sighting`]: a value of type `T` was observed here
//! - [`Tombstone`]: a value of type `T` existed here and has been consumed
//!
//! Both are zero-sized. They record the type of a value for the type checker
//! without holding a reference to it, so they never keep anything alive and
//! cannot be used to compare or observe the value.
//!
//! # Examples
//!
//! ```rust
//! use seglist::marker::{Sighting, Tombstone};
//!
//! struct Example {
//!     id: u32,
//! }
//!
//! let sighting: Sighting<Example> = {
//!     let example = Example { id: 123 };
//!     Sighting::of(&example)
//! };
//! assert_eq!(sighting.to_string(), "Sighting {}");
//! assert_eq!(std::mem::size_of::<Tombstone<Example>>(), 0);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

macro_rules! marker_type {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        pub struct $name<T> {
            phantom: PhantomData<fn() -> T>,
        }

        impl<T> $name<T> {
            /// Creates a marker for `_value` without retaining it.
            #[inline]
            #[must_use]
            pub const fn of(_value: &T) -> Self {
                Self::new()
            }

            /// Creates a marker with no value at hand.
            #[inline]
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    phantom: PhantomData,
                }
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        // All markers of one type are indistinguishable.
        impl<T> PartialEq for $name<T> {
            fn eq(&self, _other: &Self) -> bool {
                true
            }
        }

        impl<T> Eq for $name<T> {}

        impl<T> Hash for $name<T> {
            fn hash<H: Hasher>(&self, _state: &mut H) {}
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(concat!(stringify!($name), " {}"))
            }
        }

        impl<T> fmt::Display for $name<T> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(concat!(stringify!($name), " {}"))
            }
        }
    };
}

marker_type!(
    /// `Sighting<T>` represents a value of type `T` that was observed,
    /// without providing a reference to that value.
    Sighting
);

marker_type!(
    /// `Tombstone<T>` represents a value of type `T` that has been consumed,
    /// without providing a reference to that value.
    Tombstone
);

/// Creates a sighting to represent `value`.
#[inline]
#[must_use]
pub const fn sighting<T>(value: &T) -> Sighting<T> {
    Sighting::of(value)
}

/// Creates a tombstone to represent `value`.
#[inline]
#[must_use]
pub const fn tombstone<T>(value: &T) -> Tombstone<T> {
    Tombstone::of(value)
}
