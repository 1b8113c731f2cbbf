//! Building sequences from scratch.

use super::Sequence;
use crate::error::{Result, SequenceError};

impl<T> Sequence<T> {
    /// Returns the empty sequence.
    ///
    /// The empty sequence holds no buffer, so this is a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::empty();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            buffer: None,
            start: 0,
            end: 0,
        }
    }

    /// Returns a sequence containing exactly one element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::from_vec(vec![element])
    }

    /// Returns a sequence of `count` copies of `value`.
    ///
    /// `count == 0` yields the empty sequence. Use [`Sequence::try_repeat`]
    /// when the count comes from a signed source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// assert_eq!(Sequence::repeat(3, 'x').to_vec(), vec!['x', 'x', 'x']);
    /// assert!(Sequence::repeat(0, 'x').is_empty());
    /// ```
    #[must_use]
    pub fn repeat(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_vec(vec![value; count])
    }

    /// Signed variant of [`Sequence::repeat`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NegativeCount`] when `count < 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::{Sequence, SequenceError};
    ///
    /// assert_eq!(Sequence::try_repeat(2, 7).map(|s| s.to_vec()), Ok(vec![7, 7]));
    /// assert_eq!(
    ///     Sequence::try_repeat(-1, 7),
    ///     Err(SequenceError::NegativeCount { operation: "repeat", count: -1 })
    /// );
    /// ```
    pub fn try_repeat(count: i64, value: T) -> Result<Self>
    where
        T: Clone,
    {
        let count = usize::try_from(count).map_err(|_| SequenceError::NegativeCount {
            operation: "repeat",
            count,
        })?;
        Ok(Self::repeat(count, value))
    }

    /// Builds a sequence by repeatedly applying `step` to a state.
    ///
    /// Starting from `seed`, `step(state)` returns either
    /// `Some((next_state, emitted_value))`, in which case `emitted_value` is
    /// appended and iteration continues with `next_state`, or `None`, which
    /// ends the sequence.
    ///
    /// The caller must guarantee that `step` eventually returns `None`.
    /// There is no iteration cap: a step that always returns `Some` loops
    /// forever and grows memory without bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sequence = Sequence::unfold(|n| (n <= 3).then_some((n + 1, n)), 1);
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn unfold<S, F>(mut step: F, seed: S) -> Self
    where
        F: FnMut(S) -> Option<(S, T)>,
    {
        let mut elements = Vec::new();
        let mut state = seed;
        while let Some((next_state, element)) = step(state) {
            elements.push(element);
            state = next_state;
        }
        tracing::trace!(emitted = elements.len(), "unfold step signalled completion");
        Self::from_vec(elements)
    }

    /// Builds a sequence of `length` elements where element `i` is
    /// `function(i)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let squares = Sequence::tabulate(4, |index| index * index);
    /// assert_eq!(squares.to_vec(), vec![0, 1, 4, 9]);
    /// ```
    pub fn tabulate<F>(length: usize, function: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        (0..length).map(function).collect()
    }
}

impl Sequence<i64> {
    /// Returns the consecutive integers from `start` to `stop`, both
    /// inclusive.
    ///
    /// When `start > stop` the result is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// assert_eq!(Sequence::range(1, 4).to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(Sequence::range(3, 3).to_vec(), vec![3]);
    /// assert!(Sequence::range(5, 1).is_empty());
    /// ```
    #[must_use]
    pub fn range(start: i64, stop: i64) -> Self {
        (start..=stop).collect()
    }
}
