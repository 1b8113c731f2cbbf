//! Immutable ordered sequences and their combinators.
//!
//! This module provides [`Sequence`], a finite, zero-indexed, immutable
//! sequence with value semantics, together with the full combinator set:
//!
//! - **Construction**: [`Sequence::empty`], [`Sequence::range`],
//!   [`Sequence::repeat`], [`Sequence::unfold`]
//! - **Transformation**: [`Sequence::map`], [`Sequence::flat_map`] /
//!   [`Sequence::then`], [`Sequence::filter`], [`Sequence::flatten`],
//!   [`Sequence::reverse`], [`Sequence::with_keys`], [`Sequence::keys`]
//! - **Selection**: [`Sequence::at`], [`Sequence::take`], [`Sequence::drop`],
//!   the `*_last` and `*_while` variants
//! - **Query**: [`Sequence::size`], [`Sequence::is_empty`], [`Sequence::find`],
//!   [`Sequence::any`], [`Sequence::all`], [`Sequence::head`], [`Sequence::tail`]
//! - **Ordering**: [`Sequence::sort`], [`Sequence::sort_on`], [`Sequence::sort_by`]
//! - **Combination**: [`Sequence::zip`], [`Zipped`], [`Sequence::transpose`],
//!   [`Sequence::unzip`]
//! - **Folding**: [`Sequence::fold_left`], [`Sequence::fold_right`],
//!   [`Sequence::scan_left`], [`Sequence::scan_right`]
//!
//! # Structural Sharing
//!
//! A `Sequence` is a window `[start, end)` over a reference-counted buffer.
//! Cloning is O(1), and every prefix/suffix selection (`take`, `drop`,
//! `tail`, the `*_while` family) returns a new window over the same buffer
//! without copying elements:
//!
//! ```text
//! buffer: [1, 2, 3, 4, 5]
//! xs            = [1, 2, 3, 4, 5]   window 0..5
//! xs.drop(1)    =    [2, 3, 4, 5]   window 1..5  (same buffer)
//! xs.take(2)    = [1, 2]            window 0..2  (same buffer)
//! ```
//!
//! Operations that produce new elements (`map`, `filter`, `sort_by`, ...)
//! allocate a fresh buffer. No operation ever mutates its input.
//!
//! # Examples
//!
//! ```rust
//! use listcomb::Sequence;
//!
//! let numbers = Sequence::range(1, 5);
//! let evens = numbers.filter(|number| number % 2 == 0);
//!
//! assert_eq!(evens, Sequence::from(vec![2, 4]));
//! assert_eq!(numbers.fold_left(0, |sum, number| sum + number), 15);
//! assert_eq!(numbers.size(), 5); // Original unchanged
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

mod combination;
mod construction;
mod entry;
mod folding;
mod ordering;
mod query;
mod selection;
mod transformation;
mod zipped;

pub use entry::Entry;
pub use ordering::{NaturalOrder, Order, TotalFloatOrder};
pub use zipped::{Record, Shape, Zipped, zipped};

#[doc(hidden)]
pub use zipped::zip_members;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type for element buffers.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, so sequences
/// of `Send + Sync` elements can cross threads.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// An immutable, finite, ordered sequence.
///
/// Every combinator returns a new `Sequence`; the receiver is never
/// modified. Equality, ordering and hashing are defined by the visible
/// elements only, never by buffer identity.
///
/// # Time Complexity
///
/// | Operation                         | Complexity |
/// |-----------------------------------|------------|
/// | `clone`                           | O(1)       |
/// | `size` / `is_empty` / `at`        | O(1)       |
/// | `take` / `drop` / `tail`          | O(1)       |
/// | `take_while` / `drop_while`       | O(k)       |
/// | `map` / `filter` / `reverse`      | O(n)       |
/// | `sort` / `sort_on` / `sort_by`    | O(n log n) |
///
/// # Examples
///
/// ```rust
/// use listcomb::Sequence;
///
/// let sequence: Sequence<i32> = (1..=3).collect();
/// assert_eq!(sequence.head(), Some(&1));
/// assert_eq!(format!("{sequence}"), "[1, 2, 3]");
/// ```
pub struct Sequence<T> {
    /// Shared element storage; `None` for the empty sequence.
    buffer: Option<ReferenceCounter<[T]>>,
    /// First visible index into `buffer`.
    start: usize,
    /// One past the last visible index into `buffer`.
    end: usize,
}

impl<T> Sequence<T> {
    /// Takes ownership of `elements` as a new buffer.
    pub(crate) fn from_vec(elements: Vec<T>) -> Self {
        if elements.is_empty() {
            return Self::empty();
        }
        let end = elements.len();
        Self {
            buffer: Some(ReferenceCounter::from(elements)),
            start: 0,
            end,
        }
    }

    /// Returns the sub-window `[from, to)` relative to this sequence.
    ///
    /// Callers guarantee `from <= to <= self.size()`.
    pub(crate) fn window(&self, from: usize, to: usize) -> Self {
        debug_assert!(from <= to && to <= self.size());
        if from == to {
            return Self::empty();
        }
        Self {
            buffer: self.buffer.clone(),
            start: self.start + from,
            end: self.start + to,
        }
    }

    /// Returns the visible elements as a slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]).drop(1);
    /// assert_eq!(sequence.as_slice(), &[2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match &self.buffer {
            Some(buffer) => &buffer[self.start..self.end],
            None => &[],
        }
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Copies the elements into a new `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// assert_eq!(Sequence::range(1, 3).to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialOrd> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Sequence<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    /// Panics when `index` is out of bounds, like slice indexing.
    /// Use [`Sequence::at`] for the non-panicking lookup.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(elements: &[T]) -> Self {
        Self::from_vec(elements.to_vec())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`Sequence`].
///
/// The buffer may be shared with other sequences, so elements are cloned
/// out of it as they are yielded.
pub struct SequenceIntoIterator<T> {
    sequence: Sequence<T>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for SequenceIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let element = self.sequence.as_slice().get(self.front).cloned();
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for SequenceIntoIterator<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.as_slice().get(self.back).cloned()
    }
}

impl<T: Clone> ExactSizeIterator for SequenceIntoIterator<T> {}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.size();
        SequenceIntoIterator {
            sequence: self,
            front: 0,
            back,
        }
    }
}

static_assertions::assert_impl_all!(
    Sequence<i32>: Clone,
    Default,
    fmt::Debug,
    Eq,
    Ord,
    Hash
);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Sequence<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Sequence::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
