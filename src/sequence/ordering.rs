//! Stable sorting with an injectable strict-less relation.
//!
//! The default order of an element type is not a global: it is a value
//! implementing [`Order`], passed to [`Sequence::sort_with`] and
//! [`Sequence::sort_on_with`]. [`Sequence::sort`] and [`Sequence::sort_on`]
//! use [`NaturalOrder`], i.e. the type's `Ord` instance.
//!
//! Sorting is a bottom-up merge sort over element indices that consults
//! nothing but `less`. An inconsistent relation yields some permutation of
//! the input rather than a panic.

use std::cmp::Ordering;

use super::Sequence;

/// A strict-less relation over `T`: `less(a, b)` means `a` sorts before `b`.
///
/// Any `Fn(&T, &T) -> bool` closure is an `Order`.
///
/// # Examples
///
/// ```rust
/// use listcomb::{NaturalOrder, Order};
///
/// assert!(NaturalOrder.less(&1, &2));
/// assert!(!NaturalOrder.less(&2, &2));
///
/// let descending = |left: &i32, right: &i32| left > right;
/// assert!(descending.less(&2, &1));
/// ```
pub trait Order<T: ?Sized> {
    /// Returns `true` if `left` sorts strictly before `right`.
    fn less(&self, left: &T, right: &T) -> bool;

    /// Three-way comparison derived from two one-directional `less` calls.
    fn compare(&self, left: &T, right: &T) -> Ordering {
        if self.less(left, right) {
            Ordering::Less
        } else if self.less(right, left) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// The order given by a type's `Ord` instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Order<T> for NaturalOrder {
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        left < right
    }
}

/// IEEE 754 `totalOrder` for floating point numbers.
///
/// `-0.0` sorts before `+0.0` and NaNs sort to the ends by sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalFloatOrder;

impl Order<f64> for TotalFloatOrder {
    #[inline]
    fn less(&self, left: &f64, right: &f64) -> bool {
        left.total_cmp(right) == Ordering::Less
    }
}

impl Order<f32> for TotalFloatOrder {
    #[inline]
    fn less(&self, left: &f32, right: &f32) -> bool {
        left.total_cmp(right) == Ordering::Less
    }
}

impl<T: ?Sized, F> Order<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

impl<T: Clone> Sequence<T> {
    /// Stable sort by a caller-supplied strict-less relation.
    ///
    /// Elements for which neither `less(a, b)` nor `less(b, a)` holds keep
    /// their relative input order.
    ///
    /// `less` should be a strict weak order. When it is not, the result is
    /// still a permutation of the input, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let words = Sequence::from(vec!["pear", "fig", "apple", "kiwi"]);
    /// let by_length = words.sort_by(|a, b| a.len() < b.len());
    /// assert_eq!(by_length.to_vec(), vec!["fig", "pear", "kiwi", "apple"]);
    /// ```
    pub fn sort_by<F>(&self, less: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        self.sort_with(&less)
    }

    /// Stable sort by an injected [`Order`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::{Sequence, TotalFloatOrder};
    ///
    /// let sorted = Sequence::from(vec![2.5, -1.0, 0.0]).sort_with(&TotalFloatOrder);
    /// assert_eq!(sorted.to_vec(), vec![-1.0, 0.0, 2.5]);
    /// ```
    pub fn sort_with<O>(&self, order: &O) -> Self
    where
        O: Order<T> + ?Sized,
    {
        let elements = self.as_slice();
        let permutation = stable_permutation(elements.len(), |left, right| {
            order.less(&elements[left], &elements[right])
        });
        permutation
            .into_iter()
            .map(|index| elements[index].clone())
            .collect()
    }

    /// Stable sort by the natural order of the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let sorted = Sequence::from(vec![3, 1, 2]).sort();
    /// assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn sort(&self) -> Self
    where
        T: Ord,
    {
        self.sort_with(&NaturalOrder)
    }

    /// Stable sort comparing `key(element)` by its natural order.
    ///
    /// `key` is evaluated on both sides of every comparison.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listcomb::Sequence;
    ///
    /// let people = Sequence::from(vec![("bob", 31), ("amy", 25), ("cat", 31)]);
    /// let by_age = people.sort_on(|&(_, age)| age);
    /// assert_eq!(by_age.to_vec(), vec![("amy", 25), ("bob", 31), ("cat", 31)]);
    /// ```
    pub fn sort_on<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.sort_on_with(&NaturalOrder, key)
    }

    /// Stable sort comparing `key(element)` with an injected [`Order`].
    pub fn sort_on_with<K, O, F>(&self, order: &O, key: F) -> Self
    where
        O: Order<K> + ?Sized,
        F: Fn(&T) -> K,
    {
        self.sort_with(&|left: &T, right: &T| order.less(&key(left), &key(right)))
    }
}

/// Returns the indices `0..length` in stably sorted order.
///
/// A right-run index is taken only when `less(right, left)` holds, so ties
/// keep input order.
fn stable_permutation<F>(length: usize, less: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> bool,
{
    let mut source: Vec<usize> = (0..length).collect();
    let mut target = Vec::with_capacity(length);
    let mut width = 1;
    while width < length {
        target.clear();
        for low in (0..length).step_by(width * 2) {
            let middle = (low + width).min(length);
            let high = (low + width * 2).min(length);
            merge_runs(&source[low..middle], &source[middle..high], &less, &mut target);
        }
        std::mem::swap(&mut source, &mut target);
        width *= 2;
    }
    source
}

fn merge_runs<F>(left: &[usize], right: &[usize], less: &F, output: &mut Vec<usize>)
where
    F: Fn(usize, usize) -> bool,
{
    let (mut left_position, mut right_position) = (0, 0);
    while let (Some(&left_index), Some(&right_index)) =
        (left.get(left_position), right.get(right_position))
    {
        if less(right_index, left_index) {
            output.push(right_index);
            right_position += 1;
        } else {
            output.push(left_index);
            left_position += 1;
        }
    }
    output.extend_from_slice(&left[left_position..]);
    output.extend_from_slice(&right[right_position..]);
}
