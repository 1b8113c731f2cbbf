//! Shape-preserving N-ary zip.
//!
//! [`Zipped`] turns a container whose members are all sequences into a
//! sequence of containers of the same shape, one per index. Iteration stops
//! at the first index where any member is exhausted, exactly like
//! [`Sequence::zip`]; a container with no members zips to the empty
//! sequence.
//!
//! Supported shapes:
//!
//! | Structure                         | Record               |
//! |-----------------------------------|----------------------|
//! | `(Sequence<A>, Sequence<B>, ..)`  | `(A, B, ..)`         |
//! | `[Sequence<T>; N]`                | `[T; N]`             |
//! | `Vec<Sequence<T>>`                | `Vec<T>`             |
//! | `Sequence<Sequence<T>>`           | `Sequence<T>`        |
//! | `BTreeMap<K, Sequence<T>>`        | `BTreeMap<K, T>`     |
//! | [`Shape<K, T>`]                   | [`Record<K, T>`]     |
//! | `#[derive(Zipped)]` struct        | generated record     |
//!
//! # Examples
//!
//! ```rust
//! use listcomb::{Sequence, Zipped};
//!
//! let columns = (Sequence::from(vec![1, 2, 3]), Sequence::from(vec!["a", "b", "c"]));
//! assert_eq!(columns.zipped().to_vec(), vec![(1, "a"), (2, "b"), (3, "c")]);
//! ```

use std::collections::BTreeMap;

use super::Sequence;

/// A container of parallel sequences that can be zipped into a sequence of
/// records with the same shape.
pub trait Zipped {
    /// The per-index record: the container shape with each member
    /// sequence replaced by one of its elements.
    type Record;

    /// Returns the records at indices `0..shortest member length`.
    fn zipped(&self) -> Sequence<Self::Record>;
}

/// Free-function form of [`Zipped::zipped`].
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use listcomb::{Sequence, zipped};
///
/// let mut structure = BTreeMap::new();
/// structure.insert("xs", Sequence::from(vec![1, 2, 3]));
/// structure.insert("ys", Sequence::from(vec![4, 5]));
///
/// let records = zipped(&structure);
/// assert_eq!(records.size(), 2);
/// assert_eq!(records.at(1).and_then(|record| record.get("ys")), Some(&5));
/// ```
pub fn zipped<S>(structure: &S) -> Sequence<S::Record>
where
    S: Zipped + ?Sized,
{
    structure.zipped()
}

/// Zips the members of a derived record-of-sequences; used by the code
/// `#[derive(Zipped)]` expands to.
#[doc(hidden)]
pub fn zip_members<R, F>(lengths: &[usize], record_at: F) -> Sequence<R>
where
    F: FnMut(usize) -> R,
{
    collect_records(lengths.len(), shortest(lengths.iter().copied()), record_at)
}

/// Builds `length` records with `record_at` and logs the outcome.
fn collect_records<R, F>(members: usize, length: usize, record_at: F) -> Sequence<R>
where
    F: FnMut(usize) -> R,
{
    let records = Sequence::tabulate(length, record_at);
    tracing::trace!(members, records = records.size(), "zipped parallel sequences");
    records
}

/// Shortest member length; zero when there are no members.
fn shortest<I>(lengths: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    lengths.into_iter().min().unwrap_or(0)
}

// =============================================================================
// Array-shaped structures
// =============================================================================

macro_rules! impl_zipped_for_tuple {
    ($($member:ident . $index:tt),+) => {
        impl<$($member: Clone),+> Zipped for ($(Sequence<$member>,)+) {
            type Record = ($($member,)+);

            fn zipped(&self) -> Sequence<Self::Record> {
                let lengths = [$(self.$index.size()),+];
                let length = shortest(lengths);
                collect_records(lengths.len(), length, |index| {
                    ($(self.$index[index].clone(),)+)
                })
            }
        }
    };
}

impl_zipped_for_tuple!(A.0);
impl_zipped_for_tuple!(A.0, B.1);
impl_zipped_for_tuple!(A.0, B.1, C.2);
impl_zipped_for_tuple!(A.0, B.1, C.2, D.3);
impl_zipped_for_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_zipped_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_zipped_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_zipped_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);

impl<T: Clone, const N: usize> Zipped for [Sequence<T>; N] {
    type Record = [T; N];

    fn zipped(&self) -> Sequence<Self::Record> {
        let length = shortest(self.iter().map(Sequence::size));
        collect_records(N, length, |index| {
            std::array::from_fn(|member| self[member][index].clone())
        })
    }
}

impl<T: Clone> Zipped for [Sequence<T>] {
    type Record = Vec<T>;

    fn zipped(&self) -> Sequence<Self::Record> {
        let length = shortest(self.iter().map(Sequence::size));
        collect_records(self.len(), length, |index| {
            self.iter().map(|member| member[index].clone()).collect()
        })
    }
}

impl<T: Clone> Zipped for Vec<Sequence<T>> {
    type Record = Vec<T>;

    fn zipped(&self) -> Sequence<Self::Record> {
        self.as_slice().zipped()
    }
}

impl<T: Clone> Zipped for Sequence<Sequence<T>> {
    type Record = Sequence<T>;

    fn zipped(&self) -> Sequence<Self::Record> {
        let length = shortest(self.iter().map(Sequence::size));
        collect_records(self.size(), length, |index| {
            self.iter().map(|member| member[index].clone()).collect()
        })
    }
}

// =============================================================================
// Keyed structures
// =============================================================================

impl<K: Ord + Clone, T: Clone> Zipped for BTreeMap<K, Sequence<T>> {
    type Record = BTreeMap<K, T>;

    fn zipped(&self) -> Sequence<Self::Record> {
        let length = shortest(self.values().map(Sequence::size));
        collect_records(self.len(), length, |index| {
            self.iter()
                .map(|(key, member)| (key.clone(), member[index].clone()))
                .collect()
        })
    }
}

/// A container of parallel sequences whose shape is chosen at runtime.
///
/// `Positional` members are identified by their position, `Keyed` members
/// by their key. Member order is preserved in every emitted [`Record`].
///
/// # Examples
///
/// ```rust
/// use listcomb::{Record, Sequence, Shape, Zipped};
///
/// let structure = Shape::Keyed(vec![
///     ("xs", Sequence::from(vec![1, 2])),
///     ("ys", Sequence::from(vec![3, 4])),
/// ]);
/// assert_eq!(
///     structure.zipped().to_vec(),
///     vec![
///         Record::Keyed(vec![("xs", 1), ("ys", 3)]),
///         Record::Keyed(vec![("xs", 2), ("ys", 4)]),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<K, T> {
    /// Members identified by position.
    Positional(Vec<Sequence<T>>),
    /// Members identified by key, in the given order.
    Keyed(Vec<(K, Sequence<T>)>),
}

/// One record emitted by zipping a [`Shape`]; same variant as its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<K, T> {
    /// One element per positional member.
    Positional(Vec<T>),
    /// One `(key, element)` per keyed member.
    Keyed(Vec<(K, T)>),
}

impl<K, T> Record<K, T> {
    /// Returns the element for `key` in a keyed record.
    ///
    /// Always `None` for a positional record.
    pub fn get(&self, key: &K) -> Option<&T>
    where
        K: PartialEq,
    {
        match self {
            Self::Positional(_) => None,
            Self::Keyed(members) => members
                .iter()
                .find(|(member_key, _)| member_key == key)
                .map(|(_, element)| element),
        }
    }

    /// Returns the element at `position`, for either variant.
    pub fn at(&self, position: usize) -> Option<&T> {
        match self {
            Self::Positional(elements) => elements.get(position),
            Self::Keyed(members) => members.get(position).map(|(_, element)| element),
        }
    }
}

impl<K: Clone, T: Clone> Zipped for Shape<K, T> {
    type Record = Record<K, T>;

    fn zipped(&self) -> Sequence<Self::Record> {
        match self {
            Self::Positional(members) => members
                .zipped()
                .map(|elements| Record::Positional(elements.clone())),
            Self::Keyed(members) => {
                let length = shortest(members.iter().map(|(_, member)| member.size()));
                collect_records(members.len(), length, |index| {
                    Record::Keyed(
                        members
                            .iter()
                            .map(|(key, member)| (key.clone(), member[index].clone()))
                            .collect(),
                    )
                })
            }
        }
    }
}
