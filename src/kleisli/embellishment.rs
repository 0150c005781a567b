//! The capability shared by every embellishment.
//!
//! An embellishment is a type constructor `F` such that functions
//! `A -> F<B>` can be composed. All it needs to provide is a way to lift a
//! plain value ([`Embellishment::identity`]) and a way to feed a carried
//! value to the next function ([`Embellishment::flat_map`]). Composition is
//! written once, on top of those two.

use crate::effect::{Maybe, Writer};
use crate::typeclass::{Monoid, TypeConstructor};

/// A return-type decoration under which functions compose.
///
/// # Laws
///
/// For every `a`, `m` and embellished `f`, `g`:
///
/// ```text
/// Self::identity(a).flat_map(f) == f(a)
/// m.flat_map(Self::identity) == m
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// These are what make [`compose`](super::compose) associative with
/// [`identity`](super::identity) as its unit.
///
/// # Examples
///
/// ```rust
/// use embellish::effect::{Maybe, Writer};
/// use embellish::kleisli::Embellishment;
///
/// let logged: Writer<String, i32> = Writer::identity(42);
/// assert_eq!(logged.into_parts(), (42, String::new()));
///
/// let present: Maybe<i32> = Maybe::identity(42);
/// assert_eq!(present, Maybe::Present(42));
/// ```
pub trait Embellishment: TypeConstructor + Sized {
    /// Lifts a plain value without adding anything to it.
    fn identity(value: Self::Inner) -> Self;

    /// Feeds the carried value to `function` and merges the embellishments.
    ///
    /// For [`Writer`] this appends the second log after the first; for
    /// [`Maybe`] it skips `function` entirely when there is no value.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Composes `first: A -> Self` with `second: Self::Inner -> Self::WithType<C>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Writer;
    /// use embellish::kleisli::Embellishment;
    ///
    /// let shout = |text: String| Writer::new(text.to_uppercase(), "A ".to_string());
    /// let count = |text: String| Writer::new(text.len(), "B ".to_string());
    ///
    /// let composed = Writer::compose(shout, count);
    /// assert_eq!(composed("hey".to_string()).into_parts(), (3, "A B ".to_string()));
    /// ```
    fn compose<A, C, F, G>(first: F, second: G) -> impl Fn(A) -> Self::WithType<C>
    where
        F: Fn(A) -> Self,
        G: Fn(Self::Inner) -> Self::WithType<C>,
    {
        super::compose::<Self, A, C, F, G>(first, second)
    }
}

// =============================================================================
// Writer Implementation
// =============================================================================

impl<W: Monoid, A> Embellishment for Writer<W, A> {
    #[inline]
    fn identity(value: A) -> Self {
        Self::pure(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!("writer: appending continuation log");
        Self::and_then(self, function)
    }
}

// =============================================================================
// Maybe Implementation
// =============================================================================

impl<A> Embellishment for Maybe<A> {
    #[inline]
    fn identity(value: A) -> Self {
        Self::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => {
                #[cfg(feature = "tracing")]
                tracing::trace!("maybe: absent value, continuation skipped");
                Maybe::Absent
            }
        }
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

impl<A> Embellishment for Option<A> {
    #[inline]
    fn identity(value: A) -> Self {
        Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Some(value) => function(value),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("option: none, continuation skipped");
                None
            }
        }
    }
}
