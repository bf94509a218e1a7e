//! The result of splitting one structure into two.

/// A pair of structures produced by a partitioning operation.
///
/// By convention `left` holds the elements that were rejected (or mapped to
/// `Either::Left`) and `right` holds the accepted ones.
///
/// # Examples
///
/// ```rust
/// use seglist::control::Separated;
///
/// let separated = Separated::new(vec![1, 3], vec![2, 4]);
/// let (odd, even) = separated.into_parts();
/// assert_eq!(odd, vec![1, 3]);
/// assert_eq!(even, vec![2, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Separated<L, R> {
    /// The rejected side.
    pub left: L,
    /// The accepted side.
    pub right: R,
}

impl<L, R> Separated<L, R> {
    /// Creates a new pair.
    #[inline]
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Splits into `(left, right)`.
    #[inline]
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}
