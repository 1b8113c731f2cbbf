//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! A sequence holds many elements, so the mapping function is `FnMut`
//! rather than `FnOnce`.

use super::higher::TypeConstructor;
use crate::sequence::Sequence;

/// A type class for types that can be mapped over.
///
/// # Examples
///
/// ```rust
/// use listcomb::Sequence;
/// use listcomb::typeclass::Functor;
///
/// let lengths = Sequence::from(vec!["a", "bb"]).fmap(str::len);
/// assert_eq!(lengths.to_vec(), vec![1, 2]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every value, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to every value by reference.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every value with `value`.
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards every value, keeping only the shape.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<T: Clone> Functor for Sequence<T> {
    fn fmap<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}
