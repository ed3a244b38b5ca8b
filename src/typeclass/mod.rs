//! Type class traits the zipper list plugs into.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation via GAT
//! - [`Functor`]: Mapping over every element of a container
//! - [`Foldable`]: Folding a structure into a summary value
//! - [`Equality`]: Caller-supplied equivalence between two values
//!
//! # Examples
//!
//! ```rust
//! use zipper_list::typeclass::{Foldable, Functor};
//!
//! let doubled = vec![1, 2, 3].fmap(|n| n * 2);
//! assert_eq!(doubled.fold_left(0, |sum, n| sum + n), 12);
//! ```

mod equality;
mod foldable;
mod functor;
mod higher;

pub use equality::{Equality, PartialEqEquality};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
