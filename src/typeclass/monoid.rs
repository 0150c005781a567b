//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element. In other words, a type `T`
//! is a monoid if it has:
//!
//! 1. An associative binary operation `combine: (T, T) -> T` (from Semigroup)
//! 2. An identity element `empty: T` such that for all `a`:
//!    - `empty.combine(a) == a` (left identity)
//!    - `a.combine(empty) == a` (right identity)
//!
//! The identity element is what the identity morphism of the Writer
//! embellishment logs: nothing.
//!
//! # Examples
//!
//! ```rust
//! use embellish::typeclass::{Semigroup, Monoid};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(String::from("hello").combine(String::empty()), "hello");
//!
//! let vec: Vec<i32> = Vec::empty();
//! assert!(vec.is_empty());
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// ```text
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::typeclass::Monoid;
    ///
    /// let logs = vec![String::from("toUpper "), String::from("toWords ")];
    /// assert_eq!(String::combine_all(logs), "toUpper toWords ");
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(empty), String::empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::typeclass::Monoid;
    ///
    /// assert!(String::empty().is_empty_value());
    /// assert!(!String::from("hello").is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}
