//! Persistent (immutable) data structures.
//!
//! - [`ZipperList`]: a non-empty sequence with a cursor, supporting
//!   cursor-relative navigation, position-preserving `map` and `filter`,
//!   and membership queries under a caller-supplied [`Equality`].
//!
//! Every operation returns a new value and leaves its receiver unchanged,
//! so a `ZipperList` can be shared by reference across threads whenever its
//! elements can.
//!
//! [`Equality`]: crate::typeclass::Equality
//!
//! # Examples
//!
//! ```rust
//! use zipper_list::persistent::ZipperList;
//!
//! let zipper = ZipperList::from_indexed(0, vec![1, 2, 3, 4]).unwrap();
//! let moved = zipper.next().next();
//! assert_eq!(moved.current(), &3);
//!
//! let squared = moved.map(|n| n * n);
//! assert_eq!(squared.current(), &9);
//! assert_eq!(squared.cursor_index(), 2);
//!
//! // The original is untouched
//! assert_eq!(zipper.current(), &1);
//! ```
//!
//! Filtering keeps the cursor's *index*, so the current element may change:
//!
//! ```rust
//! use zipper_list::persistent::ZipperList;
//!
//! let zipper = ZipperList::from_indexed(1, vec![1, 2, 3, 4]).unwrap();
//! let evens = zipper.filter(|n| n % 2 == 0).unwrap();
//! assert_eq!(evens.current(), &4);
//! ```

mod error;
mod zipper_list;

pub use error::EmptySequenceError;
pub use zipper_list::ZipperList;
pub use zipper_list::ZipperListIntoIterator;
pub use zipper_list::ZipperListIterator;
pub use zipper_list::{filtering, including, mapping};
