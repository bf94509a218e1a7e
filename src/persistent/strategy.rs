//! Ways of flattening per-segment iterations into one.
//!
//! A [`Strategy`] receives one iteration per segment, in segment order, and
//! decides how their elements interleave:
//!
//! - [`Linear`]: every element of segment 0, then segment 1, and so on
//! - [`RoundRobin`]: one element from each live segment per round
//!
//! Round-robin is what lets a search over several infinite segments reach
//! matches near the front of any of them.
//!
//! # Examples
//!
//! ```rust
//! use seglist::persistent::{Linear, List, RoundRobin};
//!
//! let list = List::static_head(vec![1, 2], List::static_head(vec![3, 4], List::empty()));
//! assert_eq!(list.to_iterable(&Linear).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! assert_eq!(list.to_iterable(&RoundRobin).collect::<Vec<_>>(), vec![1, 3, 2, 4]);
//! ```

use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

use crate::generator::Iteration;

/// Inline capacity for round-robin cursors; most lists have few segments.
const INLINE_SEGMENTS: usize = 4;

/// Flattens an ordered collection of segment iterations.
///
/// Implement this to traverse a [`List`](super::List) in a custom order.
pub trait Strategy {
    /// Combines `iterations` into a single iteration.
    fn flatten<T: 'static>(&self, iterations: Vec<Iteration<T>>) -> Iteration<T>;
}

/// Concatenates segments in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Linear;

impl Strategy for Linear {
    fn flatten<T: 'static>(&self, iterations: Vec<Iteration<T>>) -> Iteration<T> {
        Box::new(iterations.into_iter().flatten())
    }
}

/// Interleaves segments one element at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoundRobin;

impl Strategy for RoundRobin {
    fn flatten<T: 'static>(&self, iterations: Vec<Iteration<T>>) -> Iteration<T> {
        Box::new(RoundRobinIter::new(iterations))
    }
}

/// Iterator that advances each live source by one step per round.
///
/// A source that completes is dropped and skipped in later rounds. The
/// iterator ends once every source has completed, so a single infinite
/// source keeps it going forever.
///
/// # Examples
///
/// ```rust
/// use seglist::persistent::RoundRobinIter;
///
/// let sources = vec![vec![1, 2, 3].into_iter(), vec![].into_iter(), vec![10].into_iter()];
/// let interleaved: Vec<i32> = RoundRobinIter::new(sources).collect();
/// assert_eq!(interleaved, vec![1, 10, 2, 3]);
/// ```
pub struct RoundRobinIter<I> {
    sources: SmallVec<[Option<I>; INLINE_SEGMENTS]>,
    position: usize,
    live: usize,
}

impl<I: Iterator> RoundRobinIter<I> {
    /// Starts a traversal with every source live.
    pub fn new<S>(sources: S) -> Self
    where
        S: IntoIterator<Item = I>,
    {
        let sources: SmallVec<[Option<I>; INLINE_SEGMENTS]> =
            sources.into_iter().map(Some).collect();
        let live = sources.len();
        trace!(live, "round-robin traversal started");
        Self {
            sources,
            position: 0,
            live,
        }
    }

    /// Returns the number of sources that have not completed.
    #[must_use]
    pub const fn live(&self) -> usize {
        self.live
    }
}

impl<I: Iterator> Iterator for RoundRobinIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.live > 0 {
            let position = self.position;
            self.position = (position + 1) % self.sources.len();
            if let Some(source) = &mut self.sources[position] {
                match source.next() {
                    Some(element) => return Some(element),
                    None => {
                        self.sources[position] = None;
                        self.live -= 1;
                        trace!(segment = position, remaining = self.live, "segment exhausted");
                    }
                }
            }
        }
        None
    }
}

impl<I> fmt::Debug for RoundRobinIter<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RoundRobinIter")
            .field("sources", &self.sources.len())
            .field("position", &self.position)
            .field("live", &self.live)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorFunction;
    use rstest::rstest;

    fn iterations(segments: Vec<Vec<i32>>) -> Vec<Iteration<i32>> {
        segments
            .into_iter()
            .map(|segment| GeneratorFunction::from_vec(segment).iterate())
            .collect()
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![vec![1, 2]], vec![1, 2])]
    #[case(vec![vec![1, 2], vec![3, 4]], vec![1, 2, 3, 4])]
    #[case(vec![vec![], vec![5]], vec![5])]
    fn linear_concatenates(#[case] segments: Vec<Vec<i32>>, #[case] expected: Vec<i32>) {
        assert_eq!(Linear.flatten(iterations(segments)).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![vec![1, 2], vec![3, 4]], vec![1, 3, 2, 4])]
    #[case(vec![vec![1], vec![2, 3, 4], vec![5, 6]], vec![1, 2, 5, 3, 6, 4])]
    #[case(vec![vec![], vec![], vec![7]], vec![7])]
    fn round_robin_interleaves(#[case] segments: Vec<Vec<i32>>, #[case] expected: Vec<i32>) {
        assert_eq!(RoundRobin.flatten(iterations(segments)).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn round_robin_reaches_every_infinite_source() {
        let zeros = GeneratorFunction::new(|| std::iter::repeat(0)).iterate();
        let ones = GeneratorFunction::new(|| std::iter::repeat(1)).iterate();
        let first: Vec<i32> = RoundRobin.flatten(vec![zeros, ones]).take(4).collect();
        assert_eq!(first, vec![0, 1, 0, 1]);
    }

    #[rstest]
    fn live_count_drops_as_sources_finish() {
        let mut traversal = RoundRobinIter::new(vec![vec![1].into_iter(), vec![2, 3].into_iter()]);
        assert_eq!(traversal.live(), 2);
        assert_eq!(traversal.next(), Some(1));
        assert_eq!(traversal.next(), Some(2));
        assert_eq!(traversal.next(), Some(3));
        assert_eq!(traversal.live(), 1);
        assert_eq!(traversal.next(), None);
        assert_eq!(traversal.live(), 0);
        assert_eq!(traversal.next(), None);
    }
}
