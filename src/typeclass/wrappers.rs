//! Newtype wrappers selecting a monoid for numeric types.
//!
//! A number forms a monoid both under addition and under multiplication, so
//! [`Foldable::fold_map`](super::Foldable::fold_map) needs to be told which
//! one to use.

/// A wrapper combining values by addition.
///
/// # Examples
///
/// ```rust
/// use listcomb::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// A wrapper combining values by multiplication.
///
/// # Examples
///
/// ```rust
/// use listcomb::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i64>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}
