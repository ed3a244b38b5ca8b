//! Functor type class - mapping over container values.
//!
//! A [`Functor`] applies a function to every element of a container while
//! keeping the container's shape: the same number of elements, in the same
//! positions. For a [`ZipperList`](crate::persistent::ZipperList) the shape
//! includes the cursor, so mapping never moves it.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use zipper_list::typeclass::Functor;
//!
//! let numbers = vec![1, 2, 3];
//! let doubled: Vec<i32> = numbers.fmap(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use super::TypeConstructor;

/// A type class for containers whose elements can be transformed.
///
/// Every container in this crate may hold several elements, so the mapping
/// function is `FnMut` and is called once per element, front to back.
pub trait Functor: TypeConstructor {
    /// Applies `function` to each element, consuming the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::typeclass::Functor;
    ///
    /// let lengths: Vec<usize> = vec!["a", "bb"].fmap(str::len);
    /// assert_eq!(lengths, vec![1, 2]);
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to a reference of each element.
    ///
    /// Useful when the container is still needed afterwards, or when the
    /// element type does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper_list::typeclass::Functor;
    ///
    /// let words = vec!["hello".to_string()];
    /// let lengths: Vec<usize> = words.fmap_ref(|word| word.len());
    /// assert_eq!(lengths, vec![5]);
    /// assert_eq!(words.len(), 1);
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}
