//! Error types for the persistent data structures.

/// Represents an attempt to build a [`ZipperList`](super::ZipperList) from
/// zero elements.
///
/// A zipper list always has exactly one current element, so it cannot
/// represent an empty sequence. Returned by
/// [`ZipperList::from_indexed`](super::ZipperList::from_indexed), by
/// [`ZipperList::filter`](super::ZipperList::filter) when the predicate
/// rejects every element, and by `TryFrom<Vec<T>>`.
///
/// # Examples
///
/// ```rust
/// use zipper_list::persistent::{EmptySequenceError, ZipperList};
///
/// let result = ZipperList::<i32>::from_indexed(0, vec![]);
/// assert_eq!(result, Err(EmptySequenceError));
/// assert_eq!(
///     format!("{EmptySequenceError}"),
///     "cannot construct a ZipperList from an empty sequence"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptySequenceError;

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "cannot construct a ZipperList from an empty sequence")
    }
}

impl std::error::Error for EmptySequenceError {}
