//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! For [`Sequence`], `combine` is concatenation.

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};
use crate::sequence::Sequence;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use listcomb::Sequence;
/// use listcomb::typeclass::Semigroup;
///
/// let joined = Sequence::from(vec![1, 2]).combine(Sequence::from(vec![3]));
/// assert_eq!(joined.to_vec(), vec![1, 2, 3]);
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

impl<T: Clone> Semigroup for Sequence<T> {
    fn combine(self, other: Self) -> Self {
        self.combine_ref(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let mut elements = Vec::with_capacity(self.size() + other.size());
        elements.extend_from_slice(self.as_slice());
        elements.extend_from_slice(other.as_slice());
        Self::from(elements)
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sequence_combine_concatenates() {
        let left = Sequence::from(vec![1, 2]);
        let right = Sequence::from(vec![3, 4]);
        assert_eq!(left.combine(right).to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn sequence_combine_ref_keeps_operands() {
        let left = Sequence::from(vec![1]);
        let right = Sequence::from(vec![2]);
        let joined = left.combine_ref(&right);
        assert_eq!(joined.to_vec(), vec![1, 2]);
        assert_eq!(left.to_vec(), vec![1]);
        assert_eq!(right.to_vec(), vec![2]);
    }

    #[rstest]
    #[case(vec![], vec![1], vec![1])]
    #[case(vec![1], vec![], vec![1])]
    #[case(vec![], vec![], vec![])]
    fn sequence_combine_with_empty(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let joined = Sequence::from(left).combine(Sequence::from(right));
        assert_eq!(joined.to_vec(), expected);
    }

    #[rstest]
    fn sequence_combine_is_associative() {
        let a = Sequence::from(vec![1]);
        let b = Sequence::from(vec![2, 3]);
        let c = Sequence::from(vec![4]);
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[rstest]
    fn sum_and_product_combine() {
        assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
        assert_eq!(Product(2).combine(Product(3)), Product(6));
    }
}
