//! Derive macro for listcomb's `Zipped` trait.
//!
//! `#[derive(Zipped)]` turns a struct whose named fields are all
//! `Sequence<_>` into a field-shaped zippable structure: it generates a
//! record struct with the same field names holding one element each, and
//! an implementation of `listcomb::Zipped` producing the sequence of those
//! records.
//!
//! # Example
//!
//! ```rust,ignore
//! use listcomb::{Sequence, Zipped};
//!
//! #[derive(Zipped)]
//! struct Columns {
//!     xs: Sequence<i32>,
//!     ys: Sequence<&'static str>,
//! }
//!
//! // Generated:
//! // #[derive(Debug, Clone, PartialEq)]
//! // struct ColumnsRecord { xs: i32, ys: &'static str }
//! // impl Zipped for Columns { type Record = ColumnsRecord; ... }
//!
//! let columns = Columns {
//!     xs: Sequence::from(vec![1, 2, 3]),
//!     ys: Sequence::from(vec!["a", "b", "c"]),
//! };
//! let rows = columns.zipped();
//! assert_eq!(rows.at(1), Some(&ColumnsRecord { xs: 2, ys: "b" }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod zipped;

use proc_macro::TokenStream;

/// Derive macro for zipping a struct of parallel sequences.
///
/// # Requirements
///
/// - The type must be a struct with named fields (not a tuple or unit
///   struct, not an enum or union)
/// - Every field must have type `Sequence<T>` for some element type `T`
///   that implements `Clone`
///
/// # Generated Code
///
/// For `struct Name { a: Sequence<A>, b: Sequence<B> }`, generates:
///
/// ```rust,ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct NameRecord { a: A, b: B }
///
/// impl listcomb::Zipped for Name {
///     type Record = NameRecord;
///     fn zipped(&self) -> listcomb::Sequence<NameRecord> { ... }
/// }
/// ```
///
/// The record has the visibility of the annotated struct, and each record
/// field the visibility of its source field. The record is as long as the
/// shortest field; a struct with no fields zips to the empty sequence.
///
/// # Attributes
///
/// `#[zipped(record = "Row")]` names the generated record struct `Row`
/// instead of `<Name>Record`.
///
/// # Generics
///
/// Generic parameters and where clauses are carried over to the record.
///
/// ```rust,ignore
/// #[derive(Zipped)]
/// #[zipped(record = "Pair")]
/// struct Parallel<A, B> {
///     left: Sequence<A>,
///     right: Sequence<B>,
/// }
///
/// // struct Pair<A, B> { left: A, right: B }
/// ```
#[proc_macro_derive(Zipped, attributes(zipped))]
pub fn derive_zipped(input: TokenStream) -> TokenStream {
    zipped::derive_zipped_impl(input)
}
