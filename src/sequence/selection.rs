//! Positional and predicate-bounded sub-sequence extraction.
//!
//! Counts are signed so that the clamping rules are expressible: a count
//! past the end clamps to the whole sequence, a count `<= 0` selects
//! nothing. Every operation here returns a window over the receiver's
//! buffer; no element is copied.

use super::Sequence;

/// Clamps a signed count into `0..=length`.
fn clamp_count(count: i64, length: usize) -> usize {
    usize::try_from(count).map_or(0, |count| count.min(length))
}

impl<T> Sequence<T> {
    /// Returns the element at `index`, or `None` when `index` is outside
    /// `0..size`.
    ///
    /// Negative indices are not wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![10, 20, 30]);
    /// assert_eq!(sequence.at(1), Some(&20));
    /// assert_eq!(sequence.at(3), None);
    /// assert_eq!(sequence.at(-1), None);
    /// ```
    #[must_use]
    pub fn at(&self, index: i64) -> Option<&T> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.as_slice().get(index))
    }

    /// Returns the first `count` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    /// assert_eq!(sequence.take(2).to_vec(), vec![1, 2]);
    /// assert_eq!(sequence.take(10).to_vec(), vec![1, 2, 3]);
    /// assert!(sequence.take(-1).is_empty());
    /// ```
    #[must_use]
    pub fn take(&self, count: i64) -> Self {
        self.window(0, clamp_count(count, self.size()))
    }

    /// Returns everything but the first `count` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    /// assert_eq!(sequence.drop(1).to_vec(), vec![2, 3]);
    /// assert!(sequence.drop(10).is_empty());
    /// assert_eq!(sequence.drop(-1), sequence);
    /// ```
    #[must_use]
    pub fn drop(&self, count: i64) -> Self {
        let length = self.size();
        self.window(clamp_count(count, length), length)
    }

    /// Returns the last `count` elements; `take_last(0)` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    /// assert_eq!(sequence.take_last(2).to_vec(), vec![2, 3]);
    /// assert!(sequence.take_last(0).is_empty());
    /// ```
    #[must_use]
    pub fn take_last(&self, count: i64) -> Self {
        let length = self.size();
        self.window(length - clamp_count(count, length), length)
    }

    /// Returns everything but the last `count` elements; `drop_last(0)` is
    /// the receiver unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    /// assert_eq!(sequence.drop_last(1).to_vec(), vec![1, 2]);
    /// assert_eq!(sequence.drop_last(0), sequence);
    /// ```
    #[must_use]
    pub fn drop_last(&self, count: i64) -> Self {
        let length = self.size();
        self.window(0, length - clamp_count(count, length))
    }

    /// Returns the longest prefix whose elements all satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3, 1]);
    /// assert_eq!(sequence.take_while(|&x| x < 3).to_vec(), vec![1, 2]);
    /// ```
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.window(0, self.prefix_length(predicate))
    }

    /// Drops the longest prefix whose elements all satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3, 1]);
    /// assert_eq!(sequence.drop_while(|&x| x < 3).to_vec(), vec![3, 1]);
    /// ```
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.window(self.prefix_length(predicate), self.size())
    }

    /// Returns the longest suffix whose elements all satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![3, 1, 2, 5]);
    /// assert_eq!(sequence.take_last_while(|&x| x != 1).to_vec(), vec![2, 5]);
    /// ```
    pub fn take_last_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.window(self.suffix_start(predicate), self.size())
    }

    /// Drops the longest suffix whose elements all satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![3, 1, 2, 5]);
    /// assert_eq!(sequence.drop_last_while(|&x| x != 1).to_vec(), vec![3, 1]);
    /// ```
    pub fn drop_last_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.window(0, self.suffix_start(predicate))
    }

    /// Length of the prefix satisfying `predicate`, scanning from the front.
    fn prefix_length<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .position(|element| !predicate(element))
            .unwrap_or_else(|| self.size())
    }

    /// Index where the suffix satisfying `predicate` begins, scanning from
    /// the back.
    fn suffix_start<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .rposition(|element| !predicate(element))
            .map_or(0, |index| index + 1)
    }
}
