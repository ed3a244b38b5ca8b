//! # zipper-list
//!
//! An immutable zipper list for Rust: an ordered, non-empty sequence with a
//! distinguished cursor element, cursor-relative navigation, and
//! transformations that keep the cursor's position.
//!
//! ## Overview
//!
//! - **Persistent Data Structures**: [`ZipperList`](persistent::ZipperList)
//!   with clamped construction, saturating navigation, position-preserving
//!   `map` and `filter`, and membership queries
//! - **Type Classes**: `Functor`, `Foldable`, and `Equality`, the last one
//!   letting callers decide what "equal elements" means
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (`Functor`, `Foldable`, `Equality`)
//! - `persistent`: The `ZipperList` data structure
//! - `serde`: `Serialize`/`Deserialize` for `ZipperList`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use zipper_list::prelude::*;
//!
//! let zipper = ZipperList::from_indexed(0, vec!["intro", "body", "outro"]).unwrap();
//! let zipper = zipper.next();
//! assert_eq!(zipper.current(), &"body");
//!
//! let shouting = zipper.fmap(str::to_uppercase);
//! assert_eq!(shouting.current(), "BODY");
//! assert_eq!(shouting.cursor_index(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use zipper_list::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
