//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//!
//! `flip` is handy for moving between the two fold directions, whose
//! combining functions take the accumulator on opposite sides.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition.
///
/// # Examples
///
/// ```
/// use listcomb::compose::identity;
/// use listcomb::Sequence;
///
/// let sequence = Sequence::from(vec![1, 2, 3]);
/// assert_eq!(identity(sequence.clone()), sequence);
/// assert_eq!(sequence.map(|x| identity(*x)), sequence);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use listcomb::compose::constant;
/// use listcomb::Sequence;
///
/// let zeros = Sequence::tabulate(2, constant(0));
/// assert_eq!(zeros.to_vec(), vec![0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use listcomb::compose::flip;
/// use listcomb::Sequence;
/// use listcomb::typeclass::Foldable;
///
/// let push = |mut accumulator: Vec<i32>, element: i32| {
///     accumulator.push(element);
///     accumulator
/// };
///
/// let sequence = Sequence::from(vec![1, 2, 3]);
/// assert_eq!(Foldable::fold_right(sequence, Vec::new(), flip(push)), vec![3, 2, 1]);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
