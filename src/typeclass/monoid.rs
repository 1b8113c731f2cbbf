//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! M::empty().combine(a) == a
//! a.combine(M::empty()) == a
//! ```
//!
//! For [`Sequence`], the identity is the empty sequence, and
//! [`Monoid::combine_all`] over sequences is `flatten`.

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};
use crate::sequence::Sequence;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use listcomb::Sequence;
/// use listcomb::typeclass::Monoid;
///
/// let parts = vec![Sequence::from(vec![1]), Sequence::from(vec![2, 3])];
/// assert_eq!(Sequence::combine_all(parts).to_vec(), vec![1, 2, 3]);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity
    /// element. An empty iterator yields the identity.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl<T: Clone> Monoid for Sequence<T> {
    fn empty() -> Self {
        Self::empty()
    }

    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().collect::<Sequence<Self>>().flatten()
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($($numeric:ty => $one:expr),+ $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )+
    };
}

impl_product_monoid!(
    i8 => 1,
    i16 => 1,
    i32 => 1,
    i64 => 1,
    i128 => 1,
    isize => 1,
    u8 => 1,
    u16 => 1,
    u32 => 1,
    u64 => 1,
    u128 => 1,
    usize => 1,
    f32 => 1.0,
    f64 => 1.0,
);
