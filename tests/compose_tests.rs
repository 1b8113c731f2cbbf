//! Tests for the curried combinators together with `pipe!` and `compose!`.
//!
//! The documented example properties, written as pipelines.

#![cfg(feature = "compose")]

use listcomb::combinator::{
    all, any, at, drop, drop_last, drop_last_while, drop_while, empty, filter, find, flat_map,
    flatten, fold_left, fold_right, head, is_empty, keys, map, range, repeat, reverse, scan_left,
    scan_right, size, sort, sort_by, sort_on, sort_with, tail, take, take_last, take_last_while,
    take_while, then, transpose, unfold, unzip, with_keys, zip, zipped,
};
use listcomb::compose::{constant, flip, identity};
use listcomb::{Entry, Sequence, SequenceError, TotalFloatOrder, compose, pipe};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_constructors() {
    assert_eq!(range(1, 3).to_vec(), vec![1, 2, 3]);
    assert_eq!(repeat(2, "v").to_vec(), vec!["v", "v"]);
    assert!(empty::<u8>().is_empty());
    let counted = unfold(|n: u32| (n <= 3).then_some((n + 1, n)), 1);
    assert_eq!(counted.to_vec(), vec![1, 2, 3]);
}

// =============================================================================
// Pipelines
// =============================================================================

#[rstest]
fn test_pipe_fold_left_of_range() {
    let sum = pipe!(range(1, 5), fold_left(0, |acc, x: &i64| acc + x));
    assert_eq!(sum, 15);
}

#[rstest]
fn test_pipe_transformations() {
    let result = pipe!(
        range(1, 6),
        filter(|x: &i64| x % 2 == 1),
        flat_map(|x: &i64| repeat(2, *x)),
        map(|x: &i64| x * 10),
    );
    assert_eq!(result.to_vec(), vec![10, 10, 30, 30, 50, 50]);
}

#[rstest]
fn test_then_is_flat_map() {
    let xs = Sequence::from(vec![1, 2]);
    let pairs = |x: &i32| Sequence::from(vec![*x, -x]);
    assert_eq!(then(pairs)(xs.clone()), flat_map(pairs)(xs));
}

#[rstest]
fn test_flatten_reverse_keys() {
    let nested = Sequence::from(vec![Sequence::from(vec![1]), Sequence::from(vec![2, 3])]);
    assert_eq!(pipe!(nested.clone(), flatten, reverse).to_vec(), vec![3, 2, 1]);
    assert_eq!(pipe!(nested, flatten, keys).to_vec(), vec![0, 1, 2]);
}

#[rstest]
fn test_with_keys_then_unzip() {
    let unzipped = pipe!(Sequence::from(vec!['a', 'b']), with_keys, unzip);
    assert_eq!(unzipped.key.to_vec(), vec![0, 1]);
    assert_eq!(unzipped.value.to_vec(), vec![0, 1]);
}

#[rstest]
#[case(-1, vec![], vec![1, 2, 3])]
#[case(1, vec![1], vec![2, 3])]
#[case(5, vec![1, 2, 3], vec![])]
fn test_take_and_drop(#[case] count: i64, #[case] taken: Vec<i32>, #[case] dropped: Vec<i32>) {
    let xs = Sequence::from(vec![1, 2, 3]);
    assert_eq!(take(count)(xs.clone()).to_vec(), taken);
    assert_eq!(drop(count)(xs).to_vec(), dropped);
}

#[rstest]
fn test_last_variants() {
    let xs = Sequence::from(vec![1, 2, 3, 1]);
    assert_eq!(take_last(1)(xs.clone()).to_vec(), vec![1]);
    assert_eq!(drop_last(0)(xs.clone()), xs);
    assert_eq!(take_last_while(|x: &i32| *x < 3)(xs.clone()).to_vec(), vec![1]);
    assert_eq!(
        drop_last_while(|x: &i32| *x < 3)(xs).to_vec(),
        vec![1, 2, 3]
    );
}

#[rstest]
fn test_while_variants() {
    let xs = Sequence::from(vec![1, 2, 3, 1]);
    assert_eq!(take_while(|x: &i32| *x < 3)(xs.clone()).to_vec(), vec![1, 2]);
    assert_eq!(drop_while(|x: &i32| *x < 3)(xs).to_vec(), vec![3, 1]);
}

#[rstest]
fn test_queries() {
    let xs = Sequence::from(vec![4, 5, 6]);
    assert_eq!(size(xs.clone()), 3);
    assert!(!is_empty(xs.clone()));
    assert_eq!(at(2)(xs.clone()), Some(6));
    assert_eq!(at(-1)(xs.clone()), None);
    assert_eq!(find(|x: &i32| x % 5 == 0)(xs.clone()), Some(5));
    assert!(any(|x: &i32| *x > 5)(xs.clone()));
    assert!(all(|x: &i32| *x > 3)(xs.clone()));
    assert_eq!(head(xs.clone()), Some(4));
    assert_eq!(pipe!(xs, tail, head), Some(5));
}

#[rstest]
fn test_ordering() {
    let xs = Sequence::from(vec![3, 1, 2]);
    assert_eq!(sort(xs.clone()).to_vec(), vec![1, 2, 3]);
    assert_eq!(sort_by(|a: &i32, b: &i32| a > b)(xs.clone()).to_vec(), vec![3, 2, 1]);
    assert_eq!(sort_on(|x: &i32| (x - 2).abs())(xs).to_vec(), vec![2, 3, 1]);

    let floats = Sequence::from(vec![1.5_f64, -0.5]);
    assert_eq!(sort_with(TotalFloatOrder)(floats).to_vec(), vec![-0.5, 1.5]);
}

#[rstest]
fn test_combination() {
    let added = zip(|a: &i32, b: &i32| a + b)(Sequence::from(vec![1, 2, 3]), Sequence::from(vec![10, 20]));
    assert_eq!(added.to_vec(), vec![11, 22]);

    let rows = zipped((Sequence::from(vec![1, 2]), Sequence::from(vec!["a", "b"])));
    assert_eq!(rows.to_vec(), vec![(1, "a"), (2, "b")]);

    let matrix = Sequence::from(vec![Sequence::from(vec![1, 2]), Sequence::from(vec![3, 4])]);
    let columns = transpose(matrix).expect("two rows");
    assert_eq!(columns.at(0).map(Sequence::to_vec), Some(vec![1, 3]));
    assert_eq!(
        transpose(Sequence::<Sequence<i32>>::empty()),
        Err(SequenceError::EmptyMatrix)
    );
}

#[rstest]
fn test_folds_and_scans() {
    let xs = Sequence::from(vec![1, 2, 3]);
    let digits = fold_right(String::new(), |x: &i32, acc: String| format!("{acc}{x}"));
    assert_eq!(digits(xs.clone()), "321");
    assert_eq!(scan_left(|acc, x: &i32| acc + x, 0)(xs.clone()).to_vec(), vec![1, 3, 6]);
    assert_eq!(scan_right(|x: &i32, acc| x + acc, 0)(xs).to_vec(), vec![6, 5, 3]);
}

// =============================================================================
// compose!
// =============================================================================

#[rstest]
fn test_compose_matches_pipe() {
    let pipeline = compose!(reverse, take(2), sort);
    let xs = Sequence::from(vec![5, 3, 9, 1]);
    assert_eq!(pipeline(xs.clone()), pipe!(xs, sort, take(2), reverse));
}

#[rstest]
fn test_compose_identity_laws() {
    let xs = Sequence::from(vec![2, 1]);
    let left = compose!(identity, sort);
    let right = compose!(sort, identity);
    assert_eq!(left(xs.clone()), sort(xs.clone()));
    assert_eq!(right(xs.clone()), sort(xs));
}

#[rstest]
fn test_constant_and_flip_helpers() {
    let zeros = Sequence::tabulate(3, constant(0));
    assert_eq!(zeros.to_vec(), vec![0, 0, 0]);

    let pair = |first: i32, second: &str| format!("{first}{second}");
    assert_eq!(flip(pair)("a", 1), "1a");
}

#[rstest]
fn test_entry_pipeline() {
    let entries = Sequence::from(vec![Entry::new("b", 2), Entry::new("a", 1)]);
    let first_key = pipe!(entries, sort_on(|entry: &Entry<&str, i32>| entry.value), head)
        .map(|entry| entry.key);
    assert_eq!(first_key, Some("a"));
}
