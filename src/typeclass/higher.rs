//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Sequence<_>`
//! directly. [`TypeConstructor`] uses a GAT to name "the same constructor
//! applied to another type", which is all the type classes in this module
//! need.
//!
//! # Example
//!
//! ```rust
//! use listcomb::Sequence;
//! use listcomb::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let strings: Sequence<String> = reset(Sequence::from(vec![1, 2, 3]));
//! assert!(strings.is_empty());
//! ```

use crate::sequence::Sequence;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Sequence<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Sequence<T> {
    type Inner = T;
    type WithType<B> = Sequence<B>;
}
