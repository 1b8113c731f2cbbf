//! # listcomb
//!
//! Immutable sequence combinators for Rust.
//!
//! ## Overview
//!
//! [`Sequence<T>`] is a finite, ordered, immutable sequence with value
//! semantics. Every operation returns a new sequence (or a summary value)
//! and leaves its input untouched; prefix and suffix selections share the
//! input's buffer instead of copying it.
//!
//! - **Construction**: `empty`, `range`, `repeat`, `unfold`, `tabulate`
//! - **Transformation**: `map`, `flat_map`/`then`, `filter`, `flatten`,
//!   `reverse`, `with_keys`, `keys`
//! - **Selection**: `at`, `take`, `drop`, `take_last`, `drop_last` and the
//!   `*_while` variants, all clamping instead of failing
//! - **Query**: `size`, `is_empty`, `find`, `any`, `all`, `head`, `tail`
//! - **Ordering**: stable `sort`, `sort_on`, `sort_by` with an injectable
//!   [`Order`]
//! - **Combination**: `zip`, [`Zipped`] over tuples, arrays, maps and
//!   derived record structs, `transpose`, `unzip`
//! - **Folding**: `fold_left`, `fold_right`, `scan_left`, `scan_right`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor, Monad, Foldable, Semigroup and Monoid instances
//! - `compose`: `pipe!`, `compose!` and the curried [`combinator`] surface
//! - `derive`: `#[derive(Zipped)]` for structs of sequences
//! - `arc`: share buffers through `Arc` so sequences are `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` for [`Sequence`] and [`Entry`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use listcomb::prelude::*;
//!
//! #[derive(Zipped)]
//! struct Columns {
//!     names: Sequence<&'static str>,
//!     ages: Sequence<u32>,
//! }
//!
//! let columns = Columns {
//!     names: Sequence::from(vec!["amy", "bob", "cat"]),
//!     ages: Sequence::from(vec![31, 25]),
//! };
//!
//! let rows = columns.zipped();
//! assert_eq!(rows.size(), 2);
//!
//! let youngest = rows.sort_on(|row| row.ages).head().map(|row| row.names);
//! assert_eq!(youngest, Some("bob"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence type and its companions. The type-class traits
/// are not included: their by-value `fold_left`/`flat_map` would
/// take precedence over the borrowing inherent methods of [`Sequence`].
///
/// # Usage
///
/// ```rust
/// use listcomb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, SequenceError};
    pub use crate::sequence::{
        Entry, NaturalOrder, Order, Record, Sequence, Shape, TotalFloatOrder, Zipped, zipped,
    };

    #[cfg(feature = "compose")]
    pub use crate::compose::{compose, constant, flip, identity, pipe};

    #[cfg(feature = "derive")]
    pub use listcomb_derive::Zipped;
}

mod error;
pub mod sequence;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "compose")]
pub use compose::combinator;

pub use error::{Result, SequenceError};
pub use sequence::{
    Entry, NaturalOrder, Order, Record, Sequence, SequenceIntoIterator, Shape, TotalFloatOrder,
    Zipped, zipped,
};

#[cfg(feature = "derive")]
pub use listcomb_derive::Zipped;

/// Items used by generated code. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::sequence::zip_members;
}
