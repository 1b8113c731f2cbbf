//! Integration tests for the `Sequence` combinators through the public API.
//!
//! Grouped the same way as the operations themselves: construction,
//! transformation, selection, query, ordering, combination and folding.

use listcomb::{Entry, NaturalOrder, Order, Sequence, SequenceError, TotalFloatOrder};
use rstest::rstest;

fn sequence<T>(elements: impl Into<Vec<T>>) -> Sequence<T> {
    Sequence::from(elements.into())
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(1, 5, vec![1, 2, 3, 4, 5])]
#[case(-2, 1, vec![-2, -1, 0, 1])]
#[case(3, 3, vec![3])]
#[case(4, 3, vec![])]
fn range_is_inclusive_on_both_ends(
    #[case] start: i64,
    #[case] stop: i64,
    #[case] expected: Vec<i64>,
) {
    assert_eq!(Sequence::range(start, stop).to_vec(), expected);
}

#[rstest]
fn empty_is_shared_constant() {
    const EMPTY: Sequence<u8> = Sequence::empty();
    assert!(EMPTY.is_empty());
    assert_eq!(EMPTY, Sequence::default());
}

#[rstest]
fn repeat_and_try_repeat() {
    assert_eq!(Sequence::repeat(3, 'x').to_vec(), vec!['x', 'x', 'x']);
    assert!(Sequence::repeat(0, 'x').is_empty());
    assert_eq!(Sequence::try_repeat(2, 0).map(|s| s.to_vec()), Ok(vec![0, 0]));
    assert_eq!(
        Sequence::try_repeat(-1, 0),
        Err(SequenceError::NegativeCount {
            operation: "repeat",
            count: -1
        })
    );
}

#[rstest]
fn unfold_counts_up_to_three() {
    let counted = Sequence::unfold(|n: i32| if n > 3 { None } else { Some((n + 1, n)) }, 1);
    assert_eq!(counted.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn unfold_with_immediate_absence_is_empty() {
    let nothing: Sequence<i32> = Sequence::unfold(|_: ()| None, ());
    assert!(nothing.is_empty());
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn flat_map_equals_flatten_of_map() {
    let xs = sequence([1, 2, 3]);
    let expand = |x: &i32| Sequence::repeat(usize::try_from(*x).unwrap_or(0), *x);
    assert_eq!(xs.flat_map(expand), xs.map(expand).flatten());
    assert_eq!(xs.then(expand).to_vec(), vec![1, 2, 2, 3, 3, 3]);
}

#[rstest]
fn filter_keeps_order() {
    let xs = sequence([5, 1, 4, 2, 3]);
    assert_eq!(xs.filter(|x| *x > 2).to_vec(), vec![5, 4, 3]);
}

#[rstest]
fn reverse_does_not_mutate_input() {
    let xs = sequence([1, 2, 3]);
    let reversed = xs.reverse();
    assert_eq!(reversed.to_vec(), vec![3, 2, 1]);
    assert_eq!(xs.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn with_keys_and_keys_use_zero_based_positions() {
    let xs = sequence(["a", "b"]);
    assert_eq!(
        xs.with_keys().to_vec(),
        vec![Entry::new(0, "a"), Entry::new(1, "b")]
    );
    assert_eq!(xs.keys().to_vec(), vec![0, 1]);
}

#[rstest]
fn keys_are_relative_to_a_window() {
    let xs = sequence([9, 8, 7, 6]).drop(2);
    assert_eq!(xs.keys().to_vec(), vec![0, 1]);
    assert_eq!(xs.with_keys().to_vec(), vec![Entry::new(0, 7), Entry::new(1, 6)]);
}

// =============================================================================
// Selection
// =============================================================================

#[rstest]
#[case(0, Some(10))]
#[case(2, Some(30))]
#[case(3, None)]
#[case(-1, None)]
fn at_does_not_wrap_negative_indices(#[case] index: i64, #[case] expected: Option<i32>) {
    assert_eq!(sequence([10, 20, 30]).at(index).copied(), expected);
}

#[rstest]
#[case(-1, vec![], vec![1, 2, 3])]
#[case(0, vec![], vec![1, 2, 3])]
#[case(2, vec![1, 2], vec![3])]
#[case(7, vec![1, 2, 3], vec![])]
fn take_and_drop_clamp(#[case] count: i64, #[case] taken: Vec<i32>, #[case] dropped: Vec<i32>) {
    let xs = sequence([1, 2, 3]);
    assert_eq!(xs.take(count).to_vec(), taken);
    assert_eq!(xs.drop(count).to_vec(), dropped);
}

#[rstest]
#[case(-1, vec![], vec![1, 2, 3])]
#[case(0, vec![], vec![1, 2, 3])]
#[case(1, vec![3], vec![1, 2])]
#[case(9, vec![1, 2, 3], vec![])]
fn take_last_and_drop_last_clamp(
    #[case] count: i64,
    #[case] taken: Vec<i32>,
    #[case] dropped: Vec<i32>,
) {
    let xs = sequence([1, 2, 3]);
    assert_eq!(xs.take_last(count).to_vec(), taken);
    assert_eq!(xs.drop_last(count).to_vec(), dropped);
}

#[rstest]
fn while_variants_split_at_first_failure() {
    let xs = sequence([1, 2, 3, 1]);
    assert_eq!(xs.take_while(|x| *x < 3).to_vec(), vec![1, 2]);
    assert_eq!(xs.drop_while(|x| *x < 3).to_vec(), vec![3, 1]);
    assert_eq!(xs.take_last_while(|x| *x < 3).to_vec(), vec![1]);
    assert_eq!(xs.drop_last_while(|x| *x < 3).to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn selections_on_selections_compose() {
    let xs = Sequence::range(1, 10);
    let middle = xs.drop(2).take(5).drop_last(1).take_last(2);
    assert_eq!(middle.to_vec(), vec![5, 6]);
    assert_eq!(middle.at(0), Some(&5));
    assert_eq!(middle.at(2), None);
}

// =============================================================================
// Query
// =============================================================================

#[rstest]
fn queries_on_empty() {
    let xs: Sequence<i32> = Sequence::empty();
    assert_eq!(xs.size(), 0);
    assert!(xs.is_empty());
    assert_eq!(xs.head(), None);
    assert_eq!(xs.find(|_| true), None);
    assert!(xs.all(|_| false));
    assert!(!xs.any(|_| true));
    assert!(xs.tail().is_empty());
}

#[rstest]
fn head_and_tail_partition() {
    let xs = sequence(["a", "b", "c"]);
    assert_eq!(xs.head(), Some(&"a"));
    assert_eq!(xs.tail().to_vec(), vec!["b", "c"]);
}

// =============================================================================
// Ordering
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Keyed {
    k: i32,
    tag: &'static str,
}

#[rstest]
fn sort_by_keeps_equal_keys_in_input_order() {
    let xs = sequence([Keyed { k: 1, tag: "a" }, Keyed { k: 1, tag: "b" }]);
    let sorted = xs.sort_by(|left, right| left.k < right.k);
    let tags: Vec<_> = sorted.iter().map(|item| item.tag).collect();
    assert_eq!(tags, vec!["a", "b"]);
}

#[rstest]
fn sort_on_derives_comparator_from_key() {
    let xs = sequence(["ccc", "a", "bb"]);
    assert_eq!(xs.sort_on(|word| word.len()).to_vec(), vec!["a", "bb", "ccc"]);
}

#[rstest]
fn sort_uses_natural_order() {
    let xs = sequence([3, -1, 2]);
    assert_eq!(xs.sort(), xs.sort_with(&NaturalOrder));
    assert_eq!(xs.sort().to_vec(), vec![-1, 2, 3]);
}

#[rstest]
fn injected_order_replaces_default() {
    struct ByMagnitude;

    impl Order<i32> for ByMagnitude {
        fn less(&self, left: &i32, right: &i32) -> bool {
            left.abs() < right.abs()
        }
    }

    let xs = sequence([-3, 1, -2, 2]);
    assert_eq!(xs.sort_with(&ByMagnitude).to_vec(), vec![1, -2, 2, -3]);
}

#[rstest]
fn floats_sort_with_total_order() {
    let xs = sequence([0.5_f32, -2.0, 1.5]);
    assert_eq!(xs.sort_with(&TotalFloatOrder).to_vec(), vec![-2.0, 0.5, 1.5]);
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
fn zip_truncates_to_shortest() {
    let result = sequence([1, 2, 3]).zip(&sequence([10, 20]), |a, b| (*a, *b));
    assert_eq!(result.to_vec(), vec![(1, 10), (2, 20)]);
}

#[rstest]
fn transpose_three_by_two() {
    let rows = sequence([sequence([1, 2]), sequence([3, 4]), sequence([5, 6])]);
    let columns = rows.transpose().expect("three rows");
    let nested: Vec<Vec<i32>> = columns.iter().map(Sequence::to_vec).collect();
    assert_eq!(nested, vec![vec![1, 3, 5], vec![2, 4, 6]]);
}

#[rstest]
fn transpose_of_no_rows_is_rejected() {
    let rows: Sequence<Sequence<i32>> = Sequence::empty();
    let error = rows.transpose().expect_err("no rows");
    assert_eq!(error, SequenceError::EmptyMatrix);
    assert!(error.to_string().contains("at least one row"));
}

#[rstest]
fn unzip_reads_keys_into_both_parts() {
    let entries = sequence([Entry::new('x', 1.0), Entry::new('y', 2.0)]);
    let Entry { key, value } = entries.unzip();
    assert_eq!(key.to_vec(), vec!['x', 'y']);
    assert_eq!(value.to_vec(), vec!['x', 'y']);
}

// =============================================================================
// Folding
// =============================================================================

#[rstest]
fn fold_left_sums_range() {
    assert_eq!(Sequence::range(1, 5).fold_left(0, |acc, x| acc + x), 15);
}

#[rstest]
fn scans_emit_without_seed() {
    let xs = sequence([1, 2, 3]);
    assert_eq!(xs.scan_left(|acc, x| acc + x, 0).to_vec(), vec![1, 3, 6]);
    assert_eq!(xs.scan_right(|x, acc| x + acc, 0).to_vec(), vec![6, 5, 3]);
}

#[rstest]
fn folds_run_over_windows_only() {
    let xs = Sequence::range(1, 10).drop(8);
    assert_eq!(xs.fold_left(0, |acc, x| acc + x), 19);
    assert_eq!(xs.fold_right(0, |x, acc| x + acc), 19);
}

// =============================================================================
// Value semantics
// =============================================================================

#[rstest]
fn equality_and_hash_ignore_buffer_layout() {
    use std::collections::HashSet;

    let whole = sequence([0, 1, 2, 3]);
    let window = whole.drop(1).take(2);
    let fresh = sequence([1, 2]);
    assert_eq!(window, fresh);

    let set: HashSet<Sequence<i32>> = [window, fresh].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[rstest]
fn display_renders_brackets() {
    assert_eq!(sequence([1, 2, 3]).to_string(), "[1, 2, 3]");
    assert_eq!(Sequence::<i32>::empty().to_string(), "[]");
}

#[rstest]
fn owned_iteration_is_double_ended() {
    let xs = sequence([1, 2, 3, 4]).drop(1);
    let mut iterator = xs.into_iter();
    assert_eq!(iterator.len(), 3);
    assert_eq!(iterator.next_back(), Some(4));
    assert_eq!(iterator.next(), Some(2));
    assert_eq!(iterator.collect::<Vec<_>>(), vec![3]);
}
