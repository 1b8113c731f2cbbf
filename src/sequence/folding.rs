//! Folds and running-accumulation scans.
//!
//! All four operations iterate; the right-to-left variants walk the
//! buffer backwards instead of recursing, so sequence length is bounded by
//! memory, not stack depth.

use super::Sequence;

impl<T> Sequence<T> {
    /// Accumulates left to right: `accumulator = combine(accumulator, element)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sum = Sequence::range(1, 5).fold_left(0, |accumulator, x| accumulator + x);
    /// assert_eq!(sum, 15);
    /// ```
    pub fn fold_left<B, F>(&self, seed: B, combine: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(seed, combine)
    }

    /// Accumulates right to left: `accumulator = combine(element, accumulator)`,
    /// starting from the last element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let digits = Sequence::from(vec![1, 2, 3]);
    /// let text = digits.fold_right(String::new(), |digit, accumulator| {
    ///     format!("{digit}{accumulator}")
    /// });
    /// assert_eq!(text, "123");
    /// ```
    pub fn fold_right<B, F>(&self, seed: B, mut combine: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        self.iter()
            .rev()
            .fold(seed, |accumulator, element| combine(element, accumulator))
    }

    /// Like [`Sequence::fold_left`], but emits the accumulator after every
    /// step. The seed itself is not emitted, so the output has the same
    /// length as the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let running = Sequence::from(vec![1, 2, 3]).scan_left(|sum, x| sum + x, 0);
    /// assert_eq!(running.to_vec(), vec![1, 3, 6]);
    /// ```
    pub fn scan_left<B, F>(&self, mut combine: F, seed: B) -> Sequence<B>
    where
        B: Clone,
        F: FnMut(B, &T) -> B,
    {
        let mut elements = Vec::with_capacity(self.size());
        let mut accumulator = seed;
        for element in self {
            accumulator = combine(accumulator, element);
            elements.push(accumulator.clone());
        }
        Sequence::from_vec(elements)
    }

    /// Like [`Sequence::fold_right`], but emits the accumulator after every
    /// step. Output position `i` holds the accumulation of elements `i..`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let suffix_sums = Sequence::from(vec![1, 2, 3]).scan_right(|x, sum| x + sum, 0);
    /// assert_eq!(suffix_sums.to_vec(), vec![6, 5, 3]);
    /// ```
    pub fn scan_right<B, F>(&self, mut combine: F, seed: B) -> Sequence<B>
    where
        B: Clone,
        F: FnMut(&T, B) -> B,
    {
        let mut elements = Vec::with_capacity(self.size());
        let mut accumulator = seed;
        for element in self.iter().rev() {
            accumulator = combine(element, accumulator);
            elements.push(accumulator.clone());
        }
        elements.reverse();
        Sequence::from_vec(elements)
    }
}
