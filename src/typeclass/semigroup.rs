//! Semigroup type class - types with an associative binary operation.
//!
//! The log of a [`Writer`](crate::effect::Writer) is only ever touched
//! through `combine`, so associativity of `combine` is exactly what makes
//! composition of logging functions associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use embellish::typeclass::Semigroup;
//!
//! let hello = String::from("toUpper ");
//! let world = String::from("toWords ");
//! assert_eq!(hello.combine(world), "toUpper toWords ");
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
///
/// `combine` is not required to be commutative: `a.combine(b)` keeps `a`
/// in front of `b`, which is how logs stay in execution order.
///
/// # Examples
///
/// ```rust
/// use embellish::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns the identity element for empty iterators,
    /// see [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::typeclass::Semigroup;
    ///
    /// let strings = vec![
    ///     String::from("a"),
    ///     String::from("b"),
    ///     String::from("c"),
    /// ];
    /// assert_eq!(String::reduce_all(strings), Some(String::from("abc")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

/// The unit type forms a trivial semigroup; a `Writer<(), A>` carries no log.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}
