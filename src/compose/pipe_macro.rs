//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// Combined with [`combinator`](crate::combinator), a pipeline reads like
/// the data flow it describes.
///
/// # Relationship with compose!
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(h, g, f)(x)`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// Each function only needs to implement [`FnOnce`].
///
/// # Examples
///
/// ## Sequence pipeline
///
/// ```
/// use listcomb::combinator::{filter, map, take};
/// use listcomb::{Sequence, pipe};
///
/// let result = pipe!(
///     Sequence::range(1, 10),
///     filter(|x: &i64| x % 2 == 1),
///     map(|x: &i64| x * x),
///     take(3)
/// );
/// assert_eq!(result.to_vec(), vec![1, 9, 25]);
/// ```
///
/// ## Ending in a summary value
///
/// ```
/// use listcomb::combinator::{fold_left, reverse};
/// use listcomb::{Sequence, pipe};
///
/// let digits = pipe!(
///     Sequence::from(vec![1, 2, 3]),
///     reverse,
///     fold_left(0, |accumulator, digit: &i32| accumulator * 10 + digit)
/// );
/// assert_eq!(digits, 321);
/// ```
///
/// ## Plain functions
///
/// ```
/// use listcomb::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// assert_eq!(pipe!(3, square, add_one), 10);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
