//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes that [`Sequence`](crate::Sequence)
//! is an instance of:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Monad`]: Sequencing computations with dependency (`flat_map` is the
//!   list monad's bind)
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Semigroup`]: Associative binary operations (concatenation)
//! - [`Monoid`]: Semigroup with identity element (the empty sequence)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing Functor and Monad to be defined generically.
//!
//! ## Method resolution
//!
//! [`Sequence`](crate::Sequence) has borrowing inherent methods named
//! `flat_map`, `flatten`, `fold_left`, `fold_right` and `find`. The trait
//! methods of the same names take `self` by value, and method-call syntax
//! picks the by-value candidate first. With [`Monad`] or [`Foldable`] in
//! scope, `xs.flat_map(f)` therefore calls the trait method and `f`
//! receives owned elements. Prefer the fully qualified form for either:
//!
//! ```rust
//! use listcomb::Sequence;
//! use listcomb::typeclass::Monad;
//!
//! let xs = Sequence::from(vec![1, 2]);
//! let borrowed = Sequence::flat_map(&xs, |x| Sequence::from(vec![*x, *x]));
//! let bound = Monad::flat_map(xs, |x| Sequence::from(vec![x, x]));
//! assert_eq!(borrowed, bound);
//! ```
//!
//! ## Wrapper Types
//!
//! - [`Sum`], [`Product`]: Numeric wrappers selecting a monoid for
//!   [`Foldable::fold_map`]
//!
//! # Examples
//!
//! ```rust
//! use listcomb::Sequence;
//! use listcomb::typeclass::{Foldable, Monoid, Semigroup, Sum};
//!
//! let parts = vec![Sequence::from(vec![1, 2]), Sequence::from(vec![3])];
//! let whole = Sequence::combine_all(parts);
//! assert_eq!(whole.to_vec(), vec![1, 2, 3]);
//!
//! let total: Sum<i32> = Foldable::fold_map(whole, Sum);
//! assert_eq!(total.into_inner(), 6);
//! ```

mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
