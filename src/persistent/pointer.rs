//! Located search results.

use std::fmt;

use super::list::{Head, List};

/// Where an element came from: its originating segment and the element's
/// offset within one iteration of that segment.
///
/// Two indices are equal when they name the same segment instance and the
/// same offset.
pub struct Index<T> {
    /// The segment the element was observed in.
    pub root: Head<T>,
    /// Zero-based position inside the segment's iteration.
    pub offset: usize,
}

impl<T> Clone for Index<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            offset: self.offset,
        }
    }
}

impl<T> PartialEq for Index<T> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.root.ptr_eq(&other.root)
    }
}

impl<T> Eq for Index<T> {}

impl<T> fmt::Debug for Index<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Index")
            .field("root", &self.root.kind())
            .field("offset", &self.offset)
            .finish()
    }
}

/// A snapshot pairing a found element with its location.
///
/// A pointer is a label, not a cursor: reading the element again means
/// traversing the list again.
///
/// # Examples
///
/// ```rust
/// use seglist::persistent::List;
///
/// let list = List::from_vec(vec![4, 2, 4]);
/// let found = list.find(4).to_vec();
///
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[1].index.offset, 2);
/// assert!(found[1].list.ptr_eq(&list));
/// ```
pub struct Pointer<T> {
    /// The list the search ran over.
    pub list: List<T>,
    /// Segment and offset the element was observed at.
    pub index: Index<T>,
    /// The observed element.
    pub item: T,
}

impl<T: Clone> Clone for Pointer<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            index: self.index.clone(),
            item: self.item.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Pointer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item && self.index == other.index && self.list.ptr_eq(&other.list)
    }
}

impl<T: Eq> Eq for Pointer<T> {}

impl<T: fmt::Debug> fmt::Debug for Pointer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pointer")
            .field("index", &self.index)
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}
