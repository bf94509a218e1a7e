//! Property-based tests for GeneratorFunction.
//!
//! Every combinator is checked against the equivalent `Vec` computation.

use proptest::prelude::*;
use seglist::generator::{GeneratorFunction, NonEmptyGeneratorFunction};
use seglist::typeclass::Sum;

/// Generates a restartable sequence along with its contents.
fn sequence(max_size: usize) -> impl Strategy<Value = (GeneratorFunction<i32>, Vec<i32>)> {
    prop::collection::vec(-10..10_i32, 0..max_size)
        .prop_map(|items| (GeneratorFunction::from_vec(items.clone()), items))
}

fn small_sequence() -> impl Strategy<Value = (GeneratorFunction<i32>, Vec<i32>)> {
    sequence(20)
}

proptest! {
    // =========================================================================
    // Restartability
    // =========================================================================

    #[test]
    fn prop_every_iteration_replays_identically((sequence, items) in small_sequence()) {
        let pipeline = sequence.map(|n| n * 3).filter(|n| n % 2 == 0);
        prop_assert_eq!(pipeline.to_vec(), pipeline.to_vec());
        prop_assert_eq!(sequence.to_vec(), items);
    }

    // =========================================================================
    // Functor Laws
    // =========================================================================

    #[test]
    fn prop_map_identity((sequence, items) in small_sequence()) {
        prop_assert_eq!(sequence.map(|n| n).to_vec(), items);
    }

    #[test]
    fn prop_map_composition((sequence, _items) in small_sequence()) {
        let composed = sequence.map(|n| (n + 1) * 2).to_vec();
        let chained = sequence.map(|n| n + 1).map(|n| n * 2).to_vec();
        prop_assert_eq!(composed, chained);
    }

    // =========================================================================
    // Filtering and Slicing
    // =========================================================================

    #[test]
    fn prop_filter_matches_vec((sequence, items) in small_sequence()) {
        let expected: Vec<i32> = items.into_iter().filter(|n| *n > 0).collect();
        prop_assert_eq!(sequence.filter(|n| *n > 0).to_vec(), expected);
    }

    #[test]
    fn prop_partition_splits_exactly((sequence, items) in small_sequence()) {
        let split = sequence.partition(|n| n % 3 == 0);
        let (rejected, accepted): (Vec<i32>, Vec<i32>) = items.iter().copied().partition(|n| n % 3 != 0);
        prop_assert_eq!(split.left.to_vec(), rejected);
        prop_assert_eq!(split.right.to_vec(), accepted);
    }

    #[test]
    fn prop_take_and_drop_partition((sequence, items) in small_sequence(), count in 0..25_usize) {
        let mut joined = sequence.take_left(count).to_vec();
        joined.extend(sequence.drop_left(count).to_vec());
        prop_assert_eq!(joined, items.clone());

        let split = items.len().saturating_sub(count);
        prop_assert_eq!(sequence.take_right(count).to_vec(), items[split..].to_vec());
        prop_assert_eq!(sequence.drop_right(count).to_vec(), items[..split].to_vec());
    }

    #[test]
    fn prop_span_left_splits_at_first_failure((sequence, items) in small_sequence()) {
        let spanned = sequence.span_left(|n| *n < 0);
        let boundary = items.iter().position(|n| *n >= 0).unwrap_or(items.len());
        prop_assert_eq!(spanned.init.to_vec(), items[..boundary].to_vec());
        prop_assert_eq!(spanned.rest.to_vec(), items[boundary..].to_vec());
    }

    // =========================================================================
    // Combining
    // =========================================================================

    #[test]
    fn prop_zip_stops_at_shorter((left, left_items) in small_sequence(), (right, right_items) in small_sequence()) {
        prop_assert_eq!(left.zip(&right).length(), left_items.len().min(right_items.len()));
    }

    #[test]
    fn prop_set_operations_match_vec((left, left_items) in small_sequence(), (right, right_items) in small_sequence()) {
        let intersection: Vec<i32> = left_items.iter().copied().filter(|n| right_items.contains(n)).collect();
        let difference: Vec<i32> = left_items.iter().copied().filter(|n| !right_items.contains(n)).collect();
        let mut union = left_items.clone();
        union.extend(right_items.iter().copied().filter(|n| !left_items.contains(n)));

        prop_assert_eq!(left.intersection(&right).to_vec(), intersection);
        prop_assert_eq!(left.difference(&right).to_vec(), difference);
        prop_assert_eq!(left.union(&right).to_vec(), union);
    }

    #[test]
    fn prop_concat_is_associative((a, _) in small_sequence(), (b, _) in small_sequence(), (c, _) in small_sequence()) {
        prop_assert_eq!(a.concat(&b).concat(&c).to_vec(), a.concat(&b.concat(&c)).to_vec());
    }

    // =========================================================================
    // Folds
    // =========================================================================

    #[test]
    fn prop_fold_map_sum_matches_iterator_sum((sequence, items) in small_sequence()) {
        let total = sequence.fold_map(|n| Sum::new(i64::from(n))).into_inner();
        prop_assert_eq!(total, items.iter().copied().map(i64::from).sum::<i64>());
    }

    #[test]
    fn prop_reduce_right_reverses((sequence, items) in small_sequence()) {
        let reversed = sequence.reduce_right(Vec::new(), |n, mut acc| {
            acc.push(n);
            acc
        });
        let mut expected = items;
        expected.reverse();
        prop_assert_eq!(reversed, expected);
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    #[test]
    fn prop_sort_by_is_stable(pairs in prop::collection::vec((0..4_i32, any::<u8>()), 0..20)) {
        let sequence = GeneratorFunction::from_vec(pairs.clone());
        let sorted = sequence.sort_by(|left, right| left.0.cmp(&right.0)).to_vec();
        let mut expected = pairs;
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_non_empty_min_max_match_vec(first in -10..10_i32, rest in prop::collection::vec(-10..10_i32, 0..10)) {
        let sequence = NonEmptyGeneratorFunction::from_first_and_rest(first, rest.clone());
        let mut all = rest;
        all.insert(0, first);
        prop_assert_eq!(Some(sequence.min()), all.iter().copied().min());
        prop_assert_eq!(Some(sequence.max()), all.iter().copied().max());
        prop_assert_eq!(sequence.head(), first);
    }
}
