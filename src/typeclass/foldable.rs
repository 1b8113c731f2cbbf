//! Foldable type class - folding over data structures.
//!
//! The type-class methods consume the structure and hand elements over by
//! value. [`Sequence`] also has inherent `fold_left`/`fold_right` methods
//! that borrow; call the trait versions with UFCS (`Foldable::fold_left(..)`)
//! when both are in scope.
//!
//! # Consistency between `fold_left` and `fold_right`
//!
//! For associative operations, both folds produce the same result:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::sequence::Sequence;

/// A type class for data structures that can be folded to a summary value.
///
/// Its `fold_left`, `fold_right` and `find` consume `self`; with the trait
/// in scope they shadow the borrowing methods of [`Sequence`], so call
/// them as `Foldable::fold_left(xs, ..)` when both are meant.
///
/// # Examples
///
/// ```rust
/// use listcomb::Sequence;
/// use listcomb::typeclass::{Foldable, Sum};
///
/// let total: Sum<i32> = Foldable::fold_map(Sequence::from(vec![1, 2, 3]), Sum);
/// assert_eq!(total, Sum(6));
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns the first element satisfying `predicate`, by value.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone()
            .fold_left(true, |holds, element| holds && predicate(&element))
    }
}

impl<T: Clone> Foldable for Sequence<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn find<P>(self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.into_iter().find(|element| predicate(element))
    }

    #[inline]
    fn length(&self) -> usize {
        self.size()
    }

    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.any(predicate)
    }

    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.all(predicate)
    }
}
