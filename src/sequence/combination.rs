//! Merging several sequences: `zip`, `transpose`, `unzip`.
//!
//! The N-ary, shape-preserving generalisation of `zip` lives in
//! [`zipped`](super::zipped).

use super::{Entry, Sequence};
use crate::error::{Result, SequenceError};

impl<T> Sequence<T> {
    /// Combines the elements of `self` and `other` pairwise with `function`.
    ///
    /// The result is as long as the shorter input; trailing elements of the
    /// longer input are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let left = Sequence::from(vec![1, 2, 3]);
    /// let right = Sequence::from(vec![10, 20]);
    /// assert_eq!(left.zip(&right, |a, b| a + b).to_vec(), vec![11, 22]);
    /// ```
    pub fn zip<U, R, F>(&self, other: &Sequence<U>, mut function: F) -> Sequence<R>
    where
        F: FnMut(&T, &U) -> R,
    {
        Sequence::from_vec(
            self.iter()
                .zip(other.iter())
                .map(|(left, right)| function(left, right))
                .collect(),
        )
    }
}

impl<T: Clone> Sequence<Sequence<T>> {
    /// Turns a sequence of rows into the sequence of its columns.
    ///
    /// The column count is the length of the first row. A row shorter than
    /// that simply contributes nothing to the columns it lacks.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyMatrix`] when there are no rows, since
    /// the column count is then undefined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let rows = Sequence::from(vec![
    ///     Sequence::from(vec![1, 2]),
    ///     Sequence::from(vec![3, 4]),
    ///     Sequence::from(vec![5, 6]),
    /// ]);
    /// let columns = rows.transpose()?;
    /// assert_eq!(columns.at(0).map(Sequence::to_vec), Some(vec![1, 3, 5]));
    /// assert_eq!(columns.at(1).map(Sequence::to_vec), Some(vec![2, 4, 6]));
    /// # Ok::<(), listcomb::SequenceError>(())
    /// ```
    pub fn transpose(&self) -> Result<Self> {
        let Some(first_row) = self.head() else {
            tracing::debug!("transpose rejected a matrix with zero rows");
            return Err(SequenceError::EmptyMatrix);
        };
        Ok(Sequence::tabulate(first_row.size(), |column| {
            self.iter()
                .filter_map(|row| row.as_slice().get(column).cloned())
                .collect()
        }))
    }
}

impl<K: Clone, V> Sequence<Entry<K, V>> {
    /// Splits a sequence of entries into a `{key, value}` pair of sequences.
    ///
    /// **Both** output sequences are filled from the entries' *keys*; the
    /// values are not read. This reproduces long-standing observed behavior
    /// that callers may depend on.
    ///
    /// The splitting most callers expect would instead fill `value` from
    /// each entry's value, with the signature
    /// `fn unzip(&self) -> Entry<Sequence<K>, Sequence<V>>`. Switching to it
    /// changes the return type, so it is not done here. For that result
    /// today, use `(entries.map(|e| e.key.clone()), entries.map(|e| e.value.clone()))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::{Entry, Sequence};
    ///
    /// let entries = Sequence::from(vec![Entry::new(1, 'a'), Entry::new(2, 'b')]);
    /// let unzipped = entries.unzip();
    /// assert_eq!(unzipped.key.to_vec(), vec![1, 2]);
    /// assert_eq!(unzipped.value.to_vec(), vec![1, 2]);
    /// ```
    pub fn unzip(&self) -> Entry<Sequence<K>, Sequence<K>> {
        let mut keys = Vec::with_capacity(self.size());
        let mut values = Vec::with_capacity(self.size());
        for entry in self {
            keys.push(entry.key.clone());
            values.push(entry.key.clone());
        }
        Entry::new(Sequence::from_vec(keys), Sequence::from_vec(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn matrix(rows: Vec<Vec<i32>>) -> Sequence<Sequence<i32>> {
        rows.into_iter().map(Sequence::from).collect()
    }

    fn to_nested(sequence: &Sequence<Sequence<i32>>) -> Vec<Vec<i32>> {
        sequence.iter().map(Sequence::to_vec).collect()
    }

    #[rstest]
    fn test_zip_truncates_to_shorter() {
        let left = Sequence::from(vec![1, 2, 3]);
        let right = Sequence::from(vec![10, 20]);
        let zipped = left.zip(&right, |&a, &b| (a, b));
        assert_eq!(zipped.to_vec(), vec![(1, 10), (2, 20)]);
    }

    #[rstest]
    fn test_zip_with_empty_is_empty() {
        let left = Sequence::from(vec![1, 2, 3]);
        let right: Sequence<i32> = Sequence::empty();
        assert!(left.zip(&right, |a, b| a + b).is_empty());
        assert!(right.zip(&left, |a, b| a + b).is_empty());
    }

    #[rstest]
    #[case(vec![vec![1, 2], vec![3, 4], vec![5, 6]], vec![vec![1, 3, 5], vec![2, 4, 6]])]
    #[case(vec![vec![1, 2, 3]], vec![vec![1], vec![2], vec![3]])]
    #[case(vec![vec![]], vec![])]
    #[case(vec![vec![1, 2], vec![3]], vec![vec![1, 3], vec![2]])]
    #[case(vec![vec![1], vec![2, 3]], vec![vec![1, 2]])]
    fn test_transpose(#[case] rows: Vec<Vec<i32>>, #[case] expected: Vec<Vec<i32>>) {
        let columns = matrix(rows).transpose().expect("at least one row");
        assert_eq!(to_nested(&columns), expected);
    }

    #[rstest]
    fn test_transpose_zero_rows_is_an_error() {
        assert_eq!(matrix(vec![]).transpose(), Err(SequenceError::EmptyMatrix));
    }

    #[rstest]
    fn test_transpose_twice_restores_rectangular_matrix() {
        let rows = matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let restored = rows
            .transpose()
            .and_then(|columns| columns.transpose())
            .expect("non-empty");
        assert_eq!(restored, rows);
    }

    #[rstest]
    fn test_unzip_fills_both_sides_with_keys() {
        let entries = Sequence::from(vec![Entry::new("a", 1), Entry::new("b", 2)]);
        let unzipped = entries.unzip();
        assert_eq!(unzipped.key.to_vec(), vec!["a", "b"]);
        assert_eq!(unzipped.value.to_vec(), vec!["a", "b"]);
    }

    #[rstest]
    fn test_unzip_empty() {
        let entries: Sequence<Entry<i32, i32>> = Sequence::empty();
        let unzipped = entries.unzip();
        assert!(unzipped.key.is_empty());
        assert!(unzipped.value.is_empty());
    }
}
