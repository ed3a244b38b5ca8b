//! Immutable zipper list: an ordered sequence with a cursor.
//!
//! This module provides [`ZipperList`], a non-empty sequence split into the
//! elements before the cursor, the element at the cursor, and the elements
//! after it.
//!
//! # Overview
//!
//! ```text
//! sequence:  a  b  c  d  e
//!                  ^
//! first   = [a, b]
//! current =  c
//! rest    = [d, e]
//! ```
//!
//! Concatenating `first`, `[current]` and `rest` always gives back the whole
//! sequence. Every operation returns a new `ZipperList`; the receiver is
//! never changed.
//!
//! - Out-of-range cursor positions are clamped, never rejected.
//! - Navigation saturates at both ends.
//! - `map` keeps the cursor at the same index.
//! - `filter` keeps the cursor at the same *index* of the filtered sequence,
//!   which may be a different element than before.
//!
//! # Examples
//!
//! ```rust
//! use zipper_list::persistent::ZipperList;
//!
//! let zipper = ZipperList::from_indexed(0, vec!['a', 'b', 'c']).unwrap();
//! let moved = zipper.next();
//! assert_eq!(moved.current(), &'b');
//! assert_eq!(moved.first(), &['a']);
//! assert_eq!(moved.rest(), &['c']);
//!
//! // The original is untouched
//! assert_eq!(zipper.current(), &'a');
//! ```

use std::fmt;
use std::iter::{Chain, FusedIterator, Once};

use super::EmptySequenceError;
use crate::typeclass::{Equality, Foldable, Functor, PartialEqEquality, TypeConstructor};

/// An immutable, non-empty sequence with a distinguished cursor element.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `current`      | O(1)       |
/// | `cursor_index` | O(1)       |
/// | `len`          | O(1)       |
/// | `from_indexed` | O(n)       |
/// | `next`         | O(n)       |
/// | `previous`     | O(n)       |
/// | `map`          | O(n)       |
/// | `filter`       | O(n)       |
/// | `includes`     | O(n)       |
///
/// # Examples
///
/// ```rust
/// use zipper_list::persistent::ZipperList;
///
/// let zipper = ZipperList::new(vec![1, 2], 3, vec![4]);
/// assert_eq!(zipper.cursor_index(), 2);
/// assert_eq!(zipper.to_vec(), vec![1, 2, 3, 4]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZipperList<T> {
    /// Elements strictly before the cursor, in order.
    first: Vec<T>,
    /// The element at the cursor.
    current: T,
    /// Elements strictly after the cursor, in order.
    rest: Vec<T>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> ZipperList<T> {
    /// Creates a zipper list directly from its three parts.
    ///
    /// No validation is performed: the cursor sits at `first.len()` and the
    /// sequence is `first ++ [current] ++ rest`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::new(vec!["a"], "b", vec!["c"]);
    /// assert_eq!(zipper.current(), &"b");
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(first: Vec<T>, current: T, rest: Vec<T>) -> Self {
        Self {
            first,
            current,
            rest,
        }
    }

    /// Creates a zipper list holding a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::singleton(42);
    /// assert_eq!(zipper.len(), 1);
    /// assert!(zipper.is_at_start() && zipper.is_at_end());
    /// ```
    #[inline]
    #[must_use]
    pub const fn singleton(element: T) -> Self {
        Self::new(Vec::new(), element, Vec::new())
    }

    /// Splits `elements` around `index`, clamping the index into range.
    ///
    /// An `index` past the end selects the last element; a negative `index`
    /// selects the first. The only failure is an empty `elements`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if `elements` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::from_indexed(1, vec![1, 2, 3]).unwrap();
    /// assert_eq!(zipper.first(), &[1]);
    /// assert_eq!(zipper.current(), &2);
    /// assert_eq!(zipper.rest(), &[3]);
    ///
    /// // Clamped at both ends
    /// assert_eq!(ZipperList::from_indexed(-5, vec![1, 2, 3]).unwrap().current(), &1);
    /// assert_eq!(ZipperList::from_indexed(99, vec![1, 2, 3]).unwrap().current(), &3);
    /// ```
    pub fn from_indexed(index: isize, elements: Vec<T>) -> Result<Self, EmptySequenceError> {
        Self::from_position(usize::try_from(index).unwrap_or(0), elements)
    }

    /// Splits `elements` at a non-negative `position`, clamped to the last
    /// element.
    fn from_position(position: usize, elements: Vec<T>) -> Result<Self, EmptySequenceError> {
        let mut elements = elements.into_iter();
        let head = elements.next().ok_or(EmptySequenceError)?;
        Ok(Self::split_clamped(position, head, elements.collect()))
    }

    /// Builds the zipper for the sequence `[head] ++ tail` with the cursor at
    /// `position`, clamped to `tail.len()`.
    fn split_clamped(position: usize, head: T, mut tail: Vec<T>) -> Self {
        let position = position.min(tail.len());
        if position == 0 {
            return Self::new(Vec::new(), head, tail);
        }

        let rest = tail.split_off(position);
        // `tail` now holds exactly `position` elements and ends with the cursor
        let current = tail.remove(position - 1);
        let mut first = Vec::with_capacity(position);
        first.push(head);
        first.extend(tail);
        Self::new(first, current, rest)
    }

    /// Splits the linearized sequence into its first element and the rest.
    fn into_head_tail(self) -> (T, Vec<T>) {
        let Self {
            first,
            current,
            rest,
        } = self;
        let mut before = first.into_iter();
        match before.next() {
            Some(head) => {
                let tail = before
                    .chain(std::iter::once(current))
                    .chain(rest)
                    .collect();
                (head, tail)
            }
            None => (current, rest),
        }
    }

    /// Returns the elements before the cursor.
    #[inline]
    #[must_use]
    pub fn first(&self) -> &[T] {
        &self.first
    }

    /// Returns the element at the cursor.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> &T {
        &self.current
    }

    /// Returns the elements after the cursor.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> &[T] {
        &self.rest
    }

    /// Returns the zero-based position of the cursor in the whole sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::from_indexed(2, vec!['a', 'b', 'c', 'd']).unwrap();
    /// assert_eq!(zipper.cursor_index(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn cursor_index(&self) -> usize {
        self.first.len()
    }

    /// Returns the number of elements, the cursor included.
    ///
    /// Always at least 1; there is no `is_empty`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.first.len() + 1 + self.rest.len()
    }

    /// Returns `true` if the cursor is on the first element.
    #[inline]
    #[must_use]
    pub const fn is_at_start(&self) -> bool {
        self.first.is_empty()
    }

    /// Returns `true` if the cursor is on the last element.
    #[inline]
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Returns an iterator over the whole sequence, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::new(vec![1], 2, vec![3]);
    /// let collected: Vec<&i32> = zipper.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> ZipperListIterator<'_, T> {
        ZipperListIterator {
            inner: self
                .first
                .iter()
                .chain(std::iter::once(&self.current))
                .chain(self.rest.iter()),
        }
    }

    /// Consumes the zipper and returns the whole sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::new(vec![1], 2, vec![3, 4]);
    /// assert_eq!(zipper.into_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let Self {
            mut first,
            current,
            rest,
        } = self;
        first.reserve(rest.len() + 1);
        first.push(current);
        first.extend(rest);
        first
    }

    /// Applies `function` to every element by reference, keeping the cursor
    /// at the same index.
    ///
    /// Elements are visited front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::from_indexed(1, vec![1, 2, 3]).unwrap();
    /// let labels = zipper.map(|n| format!("#{n}"));
    /// assert_eq!(labels.current(), "#2");
    /// assert_eq!(labels.cursor_index(), 1);
    /// ```
    pub fn map<B, F>(&self, mut function: F) -> ZipperList<B>
    where
        F: FnMut(&T) -> B,
    {
        let first = self.first.iter().map(&mut function).collect();
        let current = function(&self.current);
        let rest = self.rest.iter().map(&mut function).collect();
        ZipperList::new(first, current, rest)
    }

    /// Consuming variant of [`map`](Self::map); needs no `Clone` on `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::new(vec![String::from("a")], String::from("b"), vec![]);
    /// let lengths = zipper.map_into(|text| text.len());
    /// assert_eq!(lengths.into_vec(), vec![1, 1]);
    /// ```
    pub fn map_into<B, F>(self, mut function: F) -> ZipperList<B>
    where
        F: FnMut(T) -> B,
    {
        let first = self.first.into_iter().map(&mut function).collect();
        let current = function(self.current);
        let rest = self.rest.into_iter().map(&mut function).collect();
        ZipperList::new(first, current, rest)
    }

    /// Returns `true` if some element is equivalent to `element` under
    /// `equality`.
    ///
    /// The predicate is called as `equality.equals(element, candidate)` and
    /// the scan stops at the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::from_indexed(0, vec![1, 2, 3]).unwrap();
    /// let same_parity = |left: &i32, right: &i32| left % 2 == right % 2;
    /// assert!(zipper.includes(&same_parity, &8));
    /// ```
    pub fn includes<E>(&self, equality: &E, element: &T) -> bool
    where
        E: Equality<T> + ?Sized,
    {
        self.iter()
            .any(|candidate| equality.equals(element, candidate))
    }

    /// Returns `true` if some element is `==` to `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::from_indexed(0, vec![1, 2, 3]).unwrap();
    /// assert!(zipper.contains(&2));
    /// assert!(!zipper.contains(&9));
    /// ```
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.includes(&PartialEqEquality, element)
    }
}

impl<T: Clone> ZipperList<T> {
    /// Returns the whole sequence as a new `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::new(vec!['a'], 'b', vec!['c']);
    /// assert_eq!(zipper.to_vec(), vec!['a', 'b', 'c']);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.clone().into_vec()
    }

    /// Moves the cursor one element forward.
    ///
    /// On the last element the cursor stays where it is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::from_indexed(1, vec![1, 2, 3]).unwrap();
    /// assert_eq!(zipper.next().current(), &3);
    /// assert_eq!(zipper.next().next(), zipper.next());
    /// ```
    #[must_use]
    pub fn next(&self) -> Self {
        let position = self.cursor_index() + 1;
        let (head, tail) = self.clone().into_head_tail();
        Self::split_clamped(position, head, tail)
    }

    /// Moves the cursor one element backward.
    ///
    /// On the first element the cursor stays where it is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::from_indexed(1, vec![1, 2, 3]).unwrap();
    /// assert_eq!(zipper.previous().current(), &1);
    /// assert_eq!(zipper.previous().previous(), zipper.previous());
    /// ```
    #[must_use]
    pub fn previous(&self) -> Self {
        let position = self.cursor_index().saturating_sub(1);
        let (head, tail) = self.clone().into_head_tail();
        Self::split_clamped(position, head, tail)
    }

    /// Keeps the elements satisfying `predicate`, with the cursor at the
    /// same index of the filtered sequence.
    ///
    /// The cursor follows the position, not the element: if elements before
    /// the cursor are removed, a later element moves into that slot. When
    /// the filtered sequence is shorter than the old cursor index, the
    /// cursor is clamped to its last element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if no element satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::persistent::ZipperList;
    ///
    /// let zipper = ZipperList::from_indexed(1, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(zipper.current(), &2);
    ///
    /// let evens = zipper.filter(|n| n % 2 == 0).unwrap();
    /// assert_eq!(evens.first(), &[2]);
    /// assert_eq!(evens.current(), &4);
    /// assert!(evens.rest().is_empty());
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Result<Self, EmptySequenceError>
    where
        P: FnMut(&T) -> bool,
    {
        let retained = self
            .iter()
            .filter(|element| predicate(*element))
            .cloned()
            .collect();
        Self::from_position(self.cursor_index(), retained)
    }
}

// =============================================================================
// Curried Combinators
// =============================================================================

/// Lifts `function` to a transformation of whole zipper lists.
///
/// The returned closure behaves like [`ZipperList::map`].
///
/// # Examples
///
/// ```rust
/// use zipper_list::persistent::{ZipperList, mapping};
///
/// let mut double = mapping(|n: &i32| n * 2);
/// let zipper = ZipperList::from_indexed(1, vec![1, 2, 3]).unwrap();
/// assert_eq!(double(&zipper).to_vec(), vec![2, 4, 6]);
/// ```
pub fn mapping<T, B, F>(mut function: F) -> impl FnMut(&ZipperList<T>) -> ZipperList<B>
where
    F: FnMut(&T) -> B,
{
    move |zipper| zipper.map(&mut function)
}

/// Lifts `predicate` to a filter over whole zipper lists.
///
/// The returned closure behaves like [`ZipperList::filter`].
///
/// # Examples
///
/// ```rust
/// use zipper_list::persistent::{EmptySequenceError, ZipperList, filtering};
///
/// let mut positive = filtering(|n: &i32| *n > 0);
/// let zipper = ZipperList::from_indexed(0, vec![-1, -2]).unwrap();
/// assert_eq!(positive(&zipper), Err(EmptySequenceError));
/// ```
pub fn filtering<T, P>(
    mut predicate: P,
) -> impl FnMut(&ZipperList<T>) -> Result<ZipperList<T>, EmptySequenceError>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    move |zipper| zipper.filter(&mut predicate)
}

/// Fixes the equality used by membership queries.
///
/// The returned closure behaves like [`ZipperList::includes`].
///
/// # Examples
///
/// ```rust
/// use zipper_list::persistent::{ZipperList, including};
/// use zipper_list::typeclass::PartialEqEquality;
///
/// let includes = including(PartialEqEquality);
/// let zipper = ZipperList::from_indexed(0, vec![1, 2, 3]).unwrap();
/// assert!(includes(&zipper, &2));
/// assert!(!includes(&zipper, &9));
/// ```
pub fn including<T, E>(equality: E) -> impl Fn(&ZipperList<T>, &T) -> bool
where
    E: Equality<T>,
{
    move |zipper, element| zipper.includes(&equality, element)
}

// =============================================================================
// Iterator Implementation
// =============================================================================

type BorrowedChain<'a, T> =
    Chain<Chain<std::slice::Iter<'a, T>, Once<&'a T>>, std::slice::Iter<'a, T>>;

type OwnedChain<T> = Chain<Chain<std::vec::IntoIter<T>, Once<T>>, std::vec::IntoIter<T>>;

/// An iterator over references to the elements of a [`ZipperList`].
pub struct ZipperListIterator<'a, T> {
    inner: BorrowedChain<'a, T>,
}

impl<'a, T> Iterator for ZipperListIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for ZipperListIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ZipperListIterator<'_, T> {}

impl<T> FusedIterator for ZipperListIterator<'_, T> {}

/// An owning iterator over the elements of a [`ZipperList`].
pub struct ZipperListIntoIterator<T> {
    inner: OwnedChain<T>,
}

impl<T> Iterator for ZipperListIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for ZipperListIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ZipperListIntoIterator<T> {}

impl<T> FusedIterator for ZipperListIntoIterator<T> {}

impl<T> IntoIterator for ZipperList<T> {
    type Item = T;
    type IntoIter = ZipperListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        ZipperListIntoIterator {
            inner: self
                .first
                .into_iter()
                .chain(std::iter::once(self.current))
                .chain(self.rest),
        }
    }
}

impl<'a, T> IntoIterator for &'a ZipperList<T> {
    type Item = &'a T;
    type IntoIter = ZipperListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> TryFrom<Vec<T>> for ZipperList<T> {
    type Error = EmptySequenceError;

    /// Builds a zipper list with the cursor on the first element.
    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_position(0, elements)
    }
}

impl<T> From<ZipperList<T>> for Vec<T> {
    fn from(zipper: ZipperList<T>) -> Self {
        zipper.into_vec()
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: fmt::Display> fmt::Display for ZipperList<T> {
    /// Formats as `[a, <b>, c]`, with the cursor element in angle brackets.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            if index == self.cursor_index() {
                write!(formatter, "<{element}>")?;
            } else {
                write!(formatter, "{element}")?;
            }
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for ZipperList<T> {
    type Inner = T;
    type WithType<B> = ZipperList<B>;
}

impl<T> Functor for ZipperList<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> ZipperList<B>
    where
        F: FnMut(T) -> B,
    {
        self.map_into(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> ZipperList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> Foldable for ZipperList<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Vec<T> {
        self.into_vec()
    }

    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }
}

static_assertions::assert_impl_all!(ZipperList<i32>: Send, Sync);
static_assertions::assert_impl_all!(ZipperListIterator<'static, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(ZipperList<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn letters() -> Vec<char> {
        vec!['a', 'b', 'c']
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    #[case(0, vec![], 'a', vec!['b', 'c'])]
    #[case(1, vec!['a'], 'b', vec!['c'])]
    #[case(2, vec!['a', 'b'], 'c', vec![])]
    fn test_from_indexed_splits_around_index(
        #[case] index: isize,
        #[case] first: Vec<char>,
        #[case] current: char,
        #[case] rest: Vec<char>,
    ) {
        let zipper = ZipperList::from_indexed(index, letters()).unwrap();
        assert_eq!(zipper, ZipperList::new(first, current, rest));
    }

    #[rstest]
    #[case(-5, 0)]
    #[case(-1, 0)]
    #[case(3, 2)]
    #[case(99, 2)]
    #[case(isize::MAX, 2)]
    #[case(isize::MIN, 0)]
    fn test_from_indexed_clamps(#[case] index: isize, #[case] clamped: isize) {
        assert_eq!(
            ZipperList::from_indexed(index, letters()),
            ZipperList::from_indexed(clamped, letters())
        );
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(10)]
    fn test_from_indexed_empty_fails(#[case] index: isize) {
        assert_eq!(
            ZipperList::<i32>::from_indexed(index, Vec::new()),
            Err(EmptySequenceError)
        );
    }

    #[rstest]
    fn test_split_clamped_keeps_head_in_first() {
        let zipper = ZipperList::split_clamped(3, 1, vec![2, 3, 4, 5]);
        assert_eq!(zipper.first(), &[1, 2, 3]);
        assert_eq!(zipper.current(), &4);
        assert_eq!(zipper.rest(), &[5]);
    }

    #[rstest]
    #[case(ZipperList::new(vec![], 1, vec![2, 3]), 1, vec![2, 3])]
    #[case(ZipperList::new(vec![1, 2], 3, vec![]), 1, vec![2, 3])]
    #[case(ZipperList::singleton(1), 1, vec![])]
    fn test_into_head_tail(
        #[case] zipper: ZipperList<i32>,
        #[case] head: i32,
        #[case] tail: Vec<i32>,
    ) {
        assert_eq!(zipper.into_head_tail(), (head, tail));
    }

    // =========================================================================
    // Navigation Tests
    // =========================================================================

    #[rstest]
    fn test_next_moves_forward() {
        let zipper = ZipperList::from_indexed(0, letters()).unwrap().next();
        assert_eq!(zipper, ZipperList::new(vec!['a'], 'b', vec!['c']));
    }

    #[rstest]
    fn test_next_saturates_at_end() {
        let zipper = ZipperList::from_indexed(2, letters()).unwrap();
        assert_eq!(zipper.next(), zipper);
    }

    #[rstest]
    fn test_previous_saturates_at_start() {
        let zipper = ZipperList::from_indexed(0, letters()).unwrap();
        assert_eq!(zipper.previous(), zipper);
    }

    #[rstest]
    fn test_navigation_on_singleton() {
        let zipper = ZipperList::singleton('x');
        assert_eq!(zipper.next(), zipper);
        assert_eq!(zipper.previous(), zipper);
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_marks_cursor() {
        let zipper = ZipperList::new(vec![1], 2, vec![3]);
        assert_eq!(format!("{zipper}"), "[1, <2>, 3]");
    }

    #[rstest]
    fn test_display_singleton() {
        assert_eq!(format!("{}", ZipperList::singleton("only")), "[<only>]");
    }

    // =========================================================================
    // Iterator Tests
    // =========================================================================

    #[rstest]
    fn test_iter_is_exact_size() {
        let zipper = ZipperList::new(vec![1, 2], 3, vec![4, 5]);
        let mut iterator = zipper.iter();
        assert_eq!(iterator.len(), 5);
        let _ = iterator.next();
        assert_eq!(iterator.len(), 4);
    }

    #[rstest]
    fn test_into_iter_reverse() {
        let zipper = ZipperList::new(vec![1], 2, vec![3]);
        let reversed: Vec<i32> = zipper.into_iter().rev().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }
}
