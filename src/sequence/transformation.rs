//! Element-wise and expanding transformations.

use super::{Entry, Sequence};

impl<T> Sequence<T> {
    /// Applies `function` to every element, preserving length and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let doubled = Sequence::from(vec![1, 2, 3]).map(|x| x * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn map<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&T) -> B,
    {
        Sequence::from_vec(self.iter().map(function).collect())
    }

    /// Applies `function` to every element and concatenates the resulting
    /// sequences in order.
    ///
    /// This is the monadic bind for `Sequence`; it is equivalent to
    /// `self.map(function).flatten()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2]);
    /// let expanded = sequence.flat_map(|&x| Sequence::from(vec![x, x * 10]));
    /// assert_eq!(expanded.to_vec(), vec![1, 10, 2, 20]);
    /// ```
    pub fn flat_map<B, F>(&self, mut function: F) -> Sequence<B>
    where
        B: Clone,
        F: FnMut(&T) -> Sequence<B>,
    {
        let mut elements = Vec::new();
        for element in self {
            elements.extend_from_slice(function(element).as_slice());
        }
        Sequence::from_vec(elements)
    }

    /// Alias for [`Sequence::flat_map`].
    #[inline]
    pub fn then<B, F>(&self, function: F) -> Sequence<B>
    where
        B: Clone,
        F: FnMut(&T) -> Sequence<B>,
    {
        self.flat_map(function)
    }

    /// Keeps, in order, the elements satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let odd = Sequence::range(1, 6).filter(|x| x % 2 == 1);
    /// assert_eq!(odd.to_vec(), vec![1, 3, 5]);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// Returns the elements in reverse order.
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        Self::from_vec(self.iter().rev().cloned().collect())
    }

    /// Pairs every element with its zero-based index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::{Entry, Sequence};
    ///
    /// let keyed = Sequence::from(vec!["a", "b"]).with_keys();
    /// assert_eq!(keyed.to_vec(), vec![Entry::new(0, "a"), Entry::new(1, "b")]);
    /// ```
    pub fn with_keys(&self) -> Sequence<Entry<usize, T>>
    where
        T: Clone,
    {
        Sequence::from_vec(
            self.iter()
                .enumerate()
                .map(|(index, element)| Entry::new(index, element.clone()))
                .collect(),
        )
    }

    /// Returns the indices `0..size`.
    pub fn keys(&self) -> Sequence<usize> {
        Sequence::from_vec((0..self.size()).collect())
    }
}

impl<T: Clone> Sequence<Sequence<T>> {
    /// Concatenates a sequence of sequences, outer order first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let nested = Sequence::from(vec![
    ///     Sequence::from(vec![1, 2]),
    ///     Sequence::empty(),
    ///     Sequence::from(vec![3]),
    /// ]);
    /// assert_eq!(nested.flatten().to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn flatten(&self) -> Sequence<T> {
        let capacity = self.iter().map(Sequence::size).sum();
        let mut elements = Vec::with_capacity(capacity);
        for inner in self {
            elements.extend_from_slice(inner.as_slice());
        }
        Sequence::from_vec(elements)
    }
}
