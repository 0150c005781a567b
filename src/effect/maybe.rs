//! Maybe embellishment - a value that may be absent.
//!
//! A partial function such as a square root that is undefined for negative
//! inputs becomes total once its result is embellished with `Maybe`: it
//! returns [`Maybe::Present`] where it is defined and [`Maybe::Absent`]
//! everywhere else. Composition of such functions short-circuits on the
//! first `Absent`.
//!
//! Taking the payload out of an `Absent` is never silent: [`Maybe::unwrap`]
//! returns an [`EmptyValueError`] the caller must handle.
//!
//! # Examples
//!
//! ```rust
//! use embellish::effect::Maybe;
//!
//! fn safe_root(x: f64) -> Maybe<f64> {
//!     if x >= 0.0 { Maybe::present(x.sqrt()) } else { Maybe::absent() }
//! }
//!
//! assert_eq!(safe_root(4.0), Maybe::Present(2.0));
//! assert!(safe_root(-1.0).is_absent());
//! assert!(safe_root(-1.0).unwrap().is_err());
//! ```

use super::error::EmptyValueError;
use crate::typeclass::TypeConstructor;

/// Either a present value of type `A` or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A value is present.
    Present(A),
    /// No value.
    #[default]
    Absent,
}

impl<A> Maybe<A> {
    /// Wraps a value. Always succeeds.
    #[inline]
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    /// Returns the absent value. Always succeeds.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Takes the payload out.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::{EmptyValueError, Maybe};
    ///
    /// assert_eq!(Maybe::present(2.0).unwrap(), Ok(2.0));
    /// assert_eq!(Maybe::<f64>::absent().unwrap(), Err(EmptyValueError::new()));
    /// ```
    pub fn unwrap(self) -> Result<A, EmptyValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(EmptyValueError::new()),
        }
    }

    /// Takes the payload out, tagging a failure with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] carrying `context` if the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Maybe;
    ///
    /// let error = Maybe::<f64>::absent().expect_present("reciprocal").unwrap_err();
    /// assert_eq!(error.context(), Some("reciprocal"));
    /// ```
    pub fn expect_present(self, context: &'static str) -> Result<A, EmptyValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(EmptyValueError::with_context(context)),
        }
    }

    /// Returns the payload or `default`.
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Borrows the payload.
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Maps a function over a present value.
    pub fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Feeds a present value to `function`; an absent value stays absent
    /// and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Maybe;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::absent() };
    /// assert_eq!(Maybe::present(8).flat_map(halve), Maybe::Present(4));
    /// assert_eq!(Maybe::present(3).flat_map(halve), Maybe::Absent);
    /// assert_eq!(Maybe::absent().flat_map(halve), Maybe::Absent);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.flat_map(function)
    }
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        match value {
            Maybe::Present(inner) => Some(inner),
            Maybe::Absent => None,
        }
    }
}
