//! Questions about a sequence that do not transform it.

use super::Sequence;

impl<T> Sequence<T> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.end - self.start
    }

    /// Alias for [`Sequence::size`].
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the first element satisfying `predicate`, scanning from the
    /// front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 4, 6, 7]);
    /// assert_eq!(sequence.find(|x| x % 2 == 0), Some(&4));
    /// assert_eq!(sequence.find(|&x| x > 10), None);
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    ///
    /// Stops at the first match; `false` for the empty sequence.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first failure; `true` for the empty sequence.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns every element but the first; the tail of the empty sequence
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// assert_eq!(Sequence::from(vec![1, 2, 3]).tail().to_vec(), vec![2, 3]);
    /// assert!(Sequence::<i32>::empty().tail().is_empty());
    /// ```
    #[must_use]
    pub fn tail(&self) -> Self {
        let length = self.size();
        self.window(length.min(1), length)
    }
}
