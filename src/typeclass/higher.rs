//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over type constructors such as `Vec<_>` or
//! `ZipperList<_>` directly. [`TypeConstructor`] names the constructor's
//! current element type and the same constructor applied to another type,
//! which is enough to state [`Functor`](super::Functor) and
//! [`Foldable`](super::Foldable) once for every container in this crate.
//!
//! # Example
//!
//! ```rust
//! use zipper_list::typeclass::TypeConstructor;
//!
//! fn rewrap<T: TypeConstructor>(_value: &T) -> Option<T::WithType<String>> {
//!     None
//! }
//!
//! let numbers = vec![1, 2, 3];
//! let strings: Option<Vec<String>> = rewrap(&numbers);
//! assert_eq!(strings, None);
//! ```

/// A type constructor applied to some element type.
///
/// # Associated Types
///
/// - `Inner`: The element type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The element type, e.g. `i32` for `Vec<i32>`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn swap_inner<T: TypeConstructor>(_value: T) -> T::WithType<String>
    where
        T::WithType<String>: Default,
    {
        Default::default()
    }

    #[rstest]
    fn vec_with_type_changes_inner() {
        let empty: Vec<String> = swap_inner(vec![1, 2, 3]);
        assert!(empty.is_empty());
    }
}
