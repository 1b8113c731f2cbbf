//! Function composition utilities for sequence pipelines.
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`pipe!`]: Apply functions left-to-right (data flow style)
//! - [`combinator`](crate::combinator): curried forms of every
//!   [`Sequence`](crate::Sequence) operation, the natural arguments of both
//!   macros
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ```
//! use listcomb::combinator::{filter, map, reverse};
//! use listcomb::{Sequence, compose, pipe};
//!
//! let odd_squares_descending = compose!(
//!     reverse,
//!     map(|x: &i64| x * x),
//!     filter(|x: &i64| x % 2 == 1)
//! );
//! let result = odd_squares_descending(Sequence::range(1, 6));
//! assert_eq!(result.to_vec(), vec![25, 9, 1]);
//!
//! let same = pipe!(
//!     Sequence::range(1, 6),
//!     filter(|x: &i64| x % 2 == 1),
//!     map(|x: &i64| x * x),
//!     reverse
//! );
//! assert_eq!(same, result);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Pipe/compose duality**: `pipe!(x, f, g) == compose!(g, f)(x)`

pub mod combinator;
mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
