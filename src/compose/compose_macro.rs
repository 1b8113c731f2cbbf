//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, following the mathematical notation for function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged (identity composition)
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ## Building a reusable sequence transformation
///
/// ```
/// use listcomb::combinator::{drop_while, sort, take};
/// use listcomb::{Sequence, compose};
///
/// let two_smallest_positive = compose!(take(2), drop_while(|x: &i32| *x <= 0), sort);
///
/// let result = two_smallest_positive(Sequence::from(vec![5, -1, 3, 0, 8]));
/// assert_eq!(result.to_vec(), vec![3, 5]);
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use listcomb::combinator::{map, reverse, tail};
/// use listcomb::{Sequence, compose};
///
/// let left = compose!(tail, compose!(reverse, map(|x: &i32| x + 1)));
/// let right = compose!(compose!(tail, reverse), map(|x: &i32| x + 1));
///
/// let input = Sequence::from(vec![1, 2, 3]);
/// assert_eq!(left(input.clone()), right(input));
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: identity composition
    ($function:expr) => {
        $function
    };

    // Two functions: compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // Three or more functions: compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
