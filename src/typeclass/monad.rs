//! Monad type class - sequencing computations with dependency.
//!
//! For [`Sequence`], `flat_map` is the list monad's bind: every element
//! produces a sequence, and the results are concatenated in order. This is
//! the type-class form of [`Sequence::flat_map`] / [`Sequence::then`].
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::functor::Functor;
use crate::sequence::Sequence;

/// A type class for types supporting monadic bind.
///
/// With this trait in scope, `sequence.flat_map(f)` resolves to the
/// by-value [`Monad::flat_map`]; see the module docs on method resolution.
///
/// `B: Clone` because results are copied out of the (possibly shared)
/// buffers returned by `function`.
///
/// # Examples
///
/// ```rust
/// use listcomb::Sequence;
/// use listcomb::typeclass::Monad;
///
/// let pairs = Monad::flat_map(Sequence::from(vec![1, 2]), |x| {
///     Sequence::from(vec![(x, 'a'), (x, 'b')])
/// });
/// assert_eq!(pairs.to_vec(), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
/// ```
pub trait Monad: Functor {
    /// Lifts a single value into the monad.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies `function` to every value and flattens the results.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone,
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Flattens one level of nesting.
    fn flatten<B>(self) -> Self::WithType<B>
    where
        B: Clone,
        Self::Inner: IntoIterator<Item = B>;
}

impl<T: Clone> Monad for Sequence<T> {
    fn pure<B>(value: B) -> Sequence<B> {
        Sequence::singleton(value)
    }

    fn flat_map<B, F>(self, mut function: F) -> Sequence<B>
    where
        B: Clone,
        F: FnMut(T) -> Sequence<B>,
    {
        let mut elements = Vec::new();
        for element in self {
            elements.extend_from_slice(function(element).as_slice());
        }
        Sequence::from(elements)
    }

    fn flatten<B>(self) -> Sequence<B>
    where
        B: Clone,
        T: IntoIterator<Item = B>,
    {
        self.into_iter().flat_map(IntoIterator::into_iter).collect()
    }
}
