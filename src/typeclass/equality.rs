//! Equality as a capability passed by the caller.
//!
//! Elements stored in a container do not always have a meaningful
//! `PartialEq`: closures, handles compared by identity, or records compared
//! by a single key. [`Equality`] lets the caller decide what "the same
//! element" means at the call site, instead of the container assuming
//! structural equality.
//!
//! Any `Fn(&T, &T) -> bool` is an [`Equality<T>`]. [`PartialEqEquality`]
//! recovers the ordinary `==` for types that have it.
//!
//! # Examples
//!
//! ```rust
//! use zipper_list::typeclass::{Equality, PartialEqEquality};
//!
//! let case_insensitive = |left: &&str, right: &&str| left.eq_ignore_ascii_case(right);
//! assert!(case_insensitive.equals(&"Rust", &"rust"));
//! assert!(!PartialEqEquality.equals(&"Rust", &"rust"));
//! ```

/// A binary predicate deciding whether two values of `T` are equivalent.
///
/// # Laws
///
/// Implementations used for membership queries are expected to be an
/// equivalence relation:
///
/// ```text
/// equals(a, a)                              // reflexive
/// equals(a, b) == equals(b, a)              // symmetric
/// equals(a, b) && equals(b, c) => equals(a, c)  // transitive
/// ```
///
/// Nothing in this crate relies on the laws for memory safety; a predicate
/// that breaks them only produces surprising query results.
pub trait Equality<T: ?Sized> {
    /// Returns `true` if `left` and `right` are equivalent.
    fn equals(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, F> Equality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// The [`Equality`] given by a type's own `PartialEq` implementation.
///
/// # Examples
///
/// ```rust
/// use zipper_list::typeclass::{Equality, PartialEqEquality};
///
/// assert!(PartialEqEquality.equals(&1, &1));
/// assert!(!PartialEqEquality.equals(&1, &2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PartialEqEquality;

impl<T: PartialEq + ?Sized> Equality<T> for PartialEqEquality {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct Account {
        identifier: u32,
        balance: i64,
    }

    fn same_account(left: &Account, right: &Account) -> bool {
        left.identifier == right.identifier
    }

    #[rstest]
    fn function_item_is_equality() {
        let before = Account {
            identifier: 7,
            balance: 100,
        };
        let after = Account {
            identifier: 7,
            balance: 250,
        };
        assert!(same_account.equals(&before, &after));
        assert_ne!(before.balance, after.balance);
    }

    #[rstest]
    fn closure_is_equality() {
        let within_one = |left: &i32, right: &i32| (left - right).abs() <= 1;
        assert!(within_one.equals(&3, &4));
        assert!(!within_one.equals(&3, &5));
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    fn partial_eq_equality(#[case] left: i32, #[case] right: i32, #[case] expected: bool) {
        assert_eq!(PartialEqEquality.equals(&left, &right), expected);
    }

    #[rstest]
    fn partial_eq_equality_on_unsized() {
        assert!(PartialEqEquality.equals("abc", "abc"));
    }
}
