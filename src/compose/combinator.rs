//! Curried, pipeline-friendly forms of every [`Sequence`] operation.
//!
//! Each function takes the non-sequence arguments of an operation and
//! returns a closure over the sequence, so operations chain with
//! [`pipe!`](crate::pipe!) and [`compose!`](crate::compose!). Operations
//! without extra arguments (`reverse`, `head`, `sort`, ...) are plain
//! functions of the sequence. Closures take sequences by value; cloning a
//! [`Sequence`] only bumps a reference count.
//!
//! Lookups return owned `Option<T>` rather than a borrow of the consumed
//! sequence.
//!
//! # Examples
//!
//! ```
//! use listcomb::combinator::{drop_while, fold_left, map};
//! use listcomb::{Sequence, pipe};
//!
//! let total = pipe!(
//!     Sequence::from(vec![0, 0, 3, 4]),
//!     drop_while(|x: &i32| *x == 0),
//!     map(|x: &i32| x * x),
//!     fold_left(0, |accumulator, x: &i32| accumulator + x)
//! );
//! assert_eq!(total, 25);
//! ```

// Sequences are taken by value so the functions slot into pipelines.
#![allow(clippy::needless_pass_by_value)]

use crate::error::Result;
use crate::sequence::{Entry, Order, Sequence, Zipped};

// =============================================================================
// Construction
// =============================================================================

/// See [`Sequence::empty`].
#[must_use]
pub const fn empty<T>() -> Sequence<T> {
    Sequence::empty()
}

/// See [`Sequence::range`].
#[must_use]
pub fn range(start: i64, stop: i64) -> Sequence<i64> {
    Sequence::range(start, stop)
}

/// See [`Sequence::repeat`].
pub fn repeat<T: Clone>(count: usize, value: T) -> Sequence<T> {
    Sequence::repeat(count, value)
}

/// See [`Sequence::unfold`].
pub fn unfold<S, T, F>(step: F, seed: S) -> Sequence<T>
where
    F: FnMut(S) -> Option<(S, T)>,
{
    Sequence::unfold(step, seed)
}

// =============================================================================
// Transformation
// =============================================================================

/// `map(f)(xs)`: see [`Sequence::map`].
pub fn map<T, B, F>(function: F) -> impl Fn(Sequence<T>) -> Sequence<B>
where
    F: Fn(&T) -> B,
{
    move |sequence| sequence.map(&function)
}

/// `flat_map(f)(xs)`: see [`Sequence::flat_map`].
pub fn flat_map<T, B, F>(function: F) -> impl Fn(Sequence<T>) -> Sequence<B>
where
    B: Clone,
    F: Fn(&T) -> Sequence<B>,
{
    move |sequence| sequence.flat_map(&function)
}

/// Alias for [`flat_map`].
pub fn then<T, B, F>(function: F) -> impl Fn(Sequence<T>) -> Sequence<B>
where
    B: Clone,
    F: Fn(&T) -> Sequence<B>,
{
    flat_map(function)
}

/// `filter(p)(xs)`: see [`Sequence::filter`].
pub fn filter<T, P>(predicate: P) -> impl Fn(Sequence<T>) -> Sequence<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |sequence| sequence.filter(&predicate)
}

/// See [`Sequence::flatten`].
pub fn flatten<T: Clone>(sequence: Sequence<Sequence<T>>) -> Sequence<T> {
    sequence.flatten()
}

/// See [`Sequence::reverse`].
pub fn reverse<T: Clone>(sequence: Sequence<T>) -> Sequence<T> {
    sequence.reverse()
}

/// See [`Sequence::with_keys`].
pub fn with_keys<T: Clone>(sequence: Sequence<T>) -> Sequence<Entry<usize, T>> {
    sequence.with_keys()
}

/// See [`Sequence::keys`].
pub fn keys<T>(sequence: Sequence<T>) -> Sequence<usize> {
    sequence.keys()
}

// =============================================================================
// Selection
// =============================================================================

/// `at(i)(xs)`: see [`Sequence::at`].
pub fn at<T: Clone>(index: i64) -> impl Fn(Sequence<T>) -> Option<T> {
    move |sequence| sequence.at(index).cloned()
}

/// `take(n)(xs)`: see [`Sequence::take`].
pub fn take<T>(count: i64) -> impl Fn(Sequence<T>) -> Sequence<T> {
    move |sequence| sequence.take(count)
}

/// `drop(n)(xs)`: see [`Sequence::drop`].
pub fn drop<T>(count: i64) -> impl Fn(Sequence<T>) -> Sequence<T> {
    move |sequence| sequence.drop(count)
}

/// `take_last(n)(xs)`: see [`Sequence::take_last`].
pub fn take_last<T>(count: i64) -> impl Fn(Sequence<T>) -> Sequence<T> {
    move |sequence| sequence.take_last(count)
}

/// `drop_last(n)(xs)`: see [`Sequence::drop_last`].
pub fn drop_last<T>(count: i64) -> impl Fn(Sequence<T>) -> Sequence<T> {
    move |sequence| sequence.drop_last(count)
}

/// `take_while(p)(xs)`: see [`Sequence::take_while`].
pub fn take_while<T, P>(predicate: P) -> impl Fn(Sequence<T>) -> Sequence<T>
where
    P: Fn(&T) -> bool,
{
    move |sequence| sequence.take_while(&predicate)
}

/// `drop_while(p)(xs)`: see [`Sequence::drop_while`].
pub fn drop_while<T, P>(predicate: P) -> impl Fn(Sequence<T>) -> Sequence<T>
where
    P: Fn(&T) -> bool,
{
    move |sequence| sequence.drop_while(&predicate)
}

/// `take_last_while(p)(xs)`: see [`Sequence::take_last_while`].
pub fn take_last_while<T, P>(predicate: P) -> impl Fn(Sequence<T>) -> Sequence<T>
where
    P: Fn(&T) -> bool,
{
    move |sequence| sequence.take_last_while(&predicate)
}

/// `drop_last_while(p)(xs)`: see [`Sequence::drop_last_while`].
pub fn drop_last_while<T, P>(predicate: P) -> impl Fn(Sequence<T>) -> Sequence<T>
where
    P: Fn(&T) -> bool,
{
    move |sequence| sequence.drop_last_while(&predicate)
}

// =============================================================================
// Query
// =============================================================================

/// See [`Sequence::size`].
pub fn size<T>(sequence: Sequence<T>) -> usize {
    sequence.size()
}

/// See [`Sequence::is_empty`].
pub fn is_empty<T>(sequence: Sequence<T>) -> bool {
    sequence.is_empty()
}

/// `find(p)(xs)`: see [`Sequence::find`].
pub fn find<T, P>(predicate: P) -> impl Fn(Sequence<T>) -> Option<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |sequence| sequence.find(&predicate).cloned()
}

/// `any(p)(xs)`: see [`Sequence::any`].
pub fn any<T, P>(predicate: P) -> impl Fn(Sequence<T>) -> bool
where
    P: Fn(&T) -> bool,
{
    move |sequence| sequence.any(&predicate)
}

/// `all(p)(xs)`: see [`Sequence::all`].
pub fn all<T, P>(predicate: P) -> impl Fn(Sequence<T>) -> bool
where
    P: Fn(&T) -> bool,
{
    move |sequence| sequence.all(&predicate)
}

/// See [`Sequence::head`].
pub fn head<T: Clone>(sequence: Sequence<T>) -> Option<T> {
    sequence.head().cloned()
}

/// See [`Sequence::tail`].
pub fn tail<T>(sequence: Sequence<T>) -> Sequence<T> {
    sequence.tail()
}

// =============================================================================
// Ordering
// =============================================================================

/// See [`Sequence::sort`].
pub fn sort<T: Ord + Clone>(sequence: Sequence<T>) -> Sequence<T> {
    sequence.sort()
}

/// `sort_on(key)(xs)`: see [`Sequence::sort_on`].
pub fn sort_on<T, K, F>(key: F) -> impl Fn(Sequence<T>) -> Sequence<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    move |sequence| sequence.sort_on(&key)
}

/// `sort_by(less)(xs)`: see [`Sequence::sort_by`].
pub fn sort_by<T, F>(less: F) -> impl Fn(Sequence<T>) -> Sequence<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    move |sequence| sequence.sort_by(&less)
}

/// `sort_with(order)(xs)`: see [`Sequence::sort_with`].
pub fn sort_with<T, O>(order: O) -> impl Fn(Sequence<T>) -> Sequence<T>
where
    T: Clone,
    O: Order<T>,
{
    move |sequence| sequence.sort_with(&order)
}

// =============================================================================
// Combination
// =============================================================================

/// `zip(f)(a, b)`: see [`Sequence::zip`].
pub fn zip<A, B, R, F>(function: F) -> impl Fn(Sequence<A>, Sequence<B>) -> Sequence<R>
where
    F: Fn(&A, &B) -> R,
{
    move |left, right| left.zip(&right, &function)
}

/// See [`Zipped::zipped`].
pub fn zipped<S: Zipped>(structure: S) -> Sequence<S::Record> {
    structure.zipped()
}

/// See [`Sequence::transpose`].
///
/// # Errors
///
/// Returns [`SequenceError::EmptyMatrix`](crate::SequenceError::EmptyMatrix)
/// when there are no rows.
pub fn transpose<T: Clone>(rows: Sequence<Sequence<T>>) -> Result<Sequence<Sequence<T>>> {
    rows.transpose()
}

/// See [`Sequence::unzip`].
pub fn unzip<K: Clone, V>(entries: Sequence<Entry<K, V>>) -> Entry<Sequence<K>, Sequence<K>> {
    entries.unzip()
}

// =============================================================================
// Folding
// =============================================================================

/// `fold_left(seed, combine)(xs)`: see [`Sequence::fold_left`].
pub fn fold_left<T, B, F>(seed: B, combine: F) -> impl Fn(Sequence<T>) -> B
where
    B: Clone,
    F: Fn(B, &T) -> B,
{
    move |sequence| sequence.fold_left(seed.clone(), &combine)
}

/// `fold_right(seed, combine)(xs)`: see [`Sequence::fold_right`].
pub fn fold_right<T, B, F>(seed: B, combine: F) -> impl Fn(Sequence<T>) -> B
where
    B: Clone,
    F: Fn(&T, B) -> B,
{
    move |sequence| sequence.fold_right(seed.clone(), &combine)
}

/// `scan_left(combine, seed)(xs)`: see [`Sequence::scan_left`].
pub fn scan_left<T, B, F>(combine: F, seed: B) -> impl Fn(Sequence<T>) -> Sequence<B>
where
    B: Clone,
    F: Fn(B, &T) -> B,
{
    move |sequence| sequence.scan_left(&combine, seed.clone())
}

/// `scan_right(combine, seed)(xs)`: see [`Sequence::scan_right`].
pub fn scan_right<T, B, F>(combine: F, seed: B) -> impl Fn(Sequence<T>) -> Sequence<B>
where
    B: Clone,
    F: Fn(&T, B) -> B,
{
    move |sequence| sequence.scan_right(&combine, seed.clone())
}
