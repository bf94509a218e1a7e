//! Integration tests for the segmented List.
//!
//! Each section exercises the public API the way a caller would, through
//! the prelude where possible.

use rstest::rstest;
use seglist::prelude::{
    FiniteList, GeneratorFunction, InfiniteGeneratorFunction, InfiniteList, Linear, List,
    ListError, NonEmptyGeneratorFunction, NonEmptyList, RoundRobin,
};
use std::cell::Cell;
use std::rc::Rc;

fn one_two_three() -> List<i32> {
    List::from_vec(vec![1, 2, 3])
}

// =============================================================================
// Construction and Structure
// =============================================================================

#[rstest]
fn test_heads_lists_segments_in_order() {
    let list = List::static_head(vec!['a'], List::static_head(vec!['b'], List::empty()));
    let heads = list.heads();
    assert_eq!(heads.len(), 2);
    let items: Vec<Vec<char>> = heads
        .iter()
        .map(|head| head.iterate().collect())
        .collect();
    assert_eq!(items, vec![vec!['a'], vec!['b']]);
    assert!(heads.iter().all(|head| head.is_static()));
}

#[rstest]
fn test_empty_static_segment_is_rejected() {
    assert_eq!(
        List::<i32>::try_static_head(Vec::new(), List::empty()).err(),
        Some(ListError::EmptyStaticHead)
    );
}

#[rstest]
#[should_panic(expected = "static segment requires at least one item")]
fn test_static_head_panics_on_empty_items() {
    let _ = List::<i32>::static_head(Vec::new(), List::empty());
}

#[rstest]
fn test_from_iterator_builds_one_static_segment() {
    let list: List<i32> = (1..=3).collect();
    assert_eq!(list.heads().len(), 1);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    let empty: List<i32> = std::iter::empty().collect();
    assert!(empty.is_empty_list());
}

// =============================================================================
// Persistent Updates
// =============================================================================

#[rstest]
fn test_append_places_value_last() {
    let original = one_two_three();
    let appended = original.append(4);
    assert_eq!(appended.to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(original.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_prepend_places_value_first_and_shares_the_rest() {
    let original = one_two_three();
    let prepended = original.prepend(0);
    assert_eq!(prepended.to_vec(), vec![0, 1, 2, 3]);
    assert!(prepended.next().is_some_and(|next| next.ptr_eq(&original)));
}

#[rstest]
fn test_append_reuses_lazy_items() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let lazy = List::lazy_head(
        GeneratorFunction::new(move || {
            counter.set(counter.get() + 1);
            vec![1, 2]
        }),
        List::empty(),
    );
    let appended = lazy.append(3);
    assert_eq!(calls.get(), 0);
    assert!(lazy.heads()[0].shares_items_with(&appended.heads()[0]));
    assert_eq!(appended.to_vec(), vec![1, 2, 3]);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_long_prepend_chain_drops_without_overflow() {
    let list = (0..100_000).fold(List::empty(), |list, n| list.prepend(n));
    assert_eq!(list.heads().len(), 100_000);
    drop(list);
}

// =============================================================================
// Traversal
// =============================================================================

#[rstest]
#[case(0, vec![])]
#[case(2, vec![1, 2])]
#[case(3, vec![1, 2, 3])]
#[case(10, vec![1, 2, 3])]
fn test_take_left(#[case] count: usize, #[case] expected: Vec<i32>) {
    assert_eq!(one_two_three().take_left(count).to_vec(), expected);
}

#[rstest]
fn test_round_robin_interleaves_while_linear_concatenates() {
    let list = List::static_head(vec![1, 2], List::static_head(vec![3, 4], List::empty()));
    let linear: Vec<i32> = list.to_iterable(&Linear).collect();
    let interleaved: Vec<i32> = list.to_iterable(&RoundRobin).collect();
    assert_eq!(linear, vec![1, 2, 3, 4]);
    assert_eq!(interleaved, vec![1, 3, 2, 4]);
}

#[rstest]
fn test_lazy_segments_restart_on_every_traversal() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let list = List::lazy_head(
        GeneratorFunction::new(move || {
            counter.set(counter.get() + 1);
            0..3
        }),
        List::empty(),
    );
    assert_eq!(list.to_vec(), list.to_vec());
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn test_round_robin_reaches_segments_behind_an_infinite_one() {
    let naturals = InfiniteGeneratorFunction::successors(0_u64, |n| n + 1);
    let list = List::lazy_head(naturals, List::from_vec(vec![100, 200]));
    let interleaved: Vec<u64> = list.to_iterable(&RoundRobin).take(5).collect();
    assert_eq!(interleaved, vec![0, 100, 1, 200, 2]);
}

// =============================================================================
// Search
// =============================================================================

#[rstest]
fn test_find_in_single_static_segment() {
    let list = List::from_vec(vec![2]);
    assert!(list.find(0).to_vec().is_empty());

    let found = list.find(2).to_vec();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].item, 2);
    assert_eq!(found[0].index.offset, 0);
    assert!(list
        .head_segment()
        .is_some_and(|head| head.ptr_eq(&found[0].index.root)));
}

#[rstest]
#[case(1, 0)]
#[case(2, 1)]
fn test_find_reports_the_owning_segment(#[case] target: i32, #[case] segment: usize) {
    let list = List::lazy_head(GeneratorFunction::new(|| [1]), List::from_vec(vec![2]));
    let found = list.find(target).to_vec();
    assert_eq!(found.len(), 1);
    assert!(found[0].index.root.ptr_eq(&list.heads()[segment]));
    assert_eq!(found[0].index.offset, 0);
}

#[rstest]
fn test_find_is_restartable() {
    let list = List::from_vec(vec![1, 2, 1]).append(1);
    let found = list.find(1);
    assert_eq!(found.to_vec(), found.to_vec());
    assert_eq!(found.to_vec().len(), 3);
}

#[rstest]
fn test_find_over_infinite_list_is_infinite() {
    let list = List::lazy_head(InfiniteGeneratorFunction::repeat(7), List::from_vec(vec![7]));
    let found = list.find(7);
    assert!(found.is_provably_infinite());
    let offsets: Vec<usize> = found
        .take_left(4)
        .to_vec()
        .into_iter()
        .map(|pointer| pointer.index.offset)
        .collect();
    assert_eq!(offsets, vec![0, 0, 1, 2]);
}

#[rstest]
fn test_find_by_predicate() {
    let list = List::from_vec(vec![1, 2, 3, 4]).append(6);
    let evens: Vec<i32> = list
        .find_by(|n| n % 2 == 0)
        .to_vec()
        .into_iter()
        .map(|pointer| pointer.item)
        .collect();
    assert_eq!(evens, vec![6, 2, 4]);
}

// =============================================================================
// Checked Shapes
// =============================================================================

#[rstest]
fn test_cycled_non_empty_sequence_forms_infinite_list() {
    let pattern = NonEmptyGeneratorFunction::from_first_and_rest('x', vec!['y']);
    let list = List::lazy_head(InfiniteGeneratorFunction::cycle(&pattern), List::empty());
    let infinite = InfiniteList::try_from(list);
    let prefix = infinite.map(|list| list.take_left(5).to_vec());
    assert_eq!(prefix, Ok(vec!['x', 'y', 'x', 'y', 'x']));
}

#[rstest]
fn test_shape_checks_reject_mismatches() {
    let finite = one_two_three();
    let infinite = List::lazy_head(InfiniteGeneratorFunction::repeat(0), List::empty());
    assert_eq!(
        InfiniteList::try_from(finite.clone()).err(),
        Some(ListError::NotInfinite)
    );
    assert_eq!(
        FiniteList::try_from(infinite).err(),
        Some(ListError::NotFinite)
    );
    assert_eq!(
        NonEmptyList::try_from(List::<i32>::empty()).err(),
        Some(ListError::Empty)
    );
    assert!(NonEmptyList::try_from(finite).is_ok_and(|list| list.head() == 1));
}
