//! The `{key, value}` record shared by `with_keys` and `unzip`.

/// A key paired with a value.
///
/// [`Sequence::with_keys`](super::Sequence::with_keys) produces entries keyed
/// by position, and [`Sequence::unzip`](super::Sequence::unzip) consumes a
/// sequence of entries.
///
/// With the `serde` feature, an entry serializes as `{"key": .., "value": ..}`.
///
/// # Examples
///
/// ```rust
/// use listcomb::Entry;
///
/// let entry = Entry::new("answer", 42);
/// assert_eq!(entry.key, "answer");
/// assert_eq!(entry.into_pair(), ("answer", 42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, V> {
    /// The key (for `with_keys`, the zero-based index).
    pub key: K,
    /// The value.
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into a `(key, value)` tuple.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
