//! A named, shareable Kleisli morphism.
//!
//! [`compose`](super::compose) returns an anonymous closure, which is fine
//! for local pipelines but cannot be stored in a struct field or sent to
//! another thread without naming its type. [`Kleisli`] boxes the embellished
//! function behind an `Arc`, so a morphism can be cloned cheaply, stored,
//! and invoked concurrently.

use std::fmt;
use std::sync::Arc;

use super::Embellishment;
use crate::typeclass::TypeConstructor;

/// An embellished function `A -> M` as a first-class value.
///
/// # Examples
///
/// ```rust
/// use embellish::effect::Writer;
/// use embellish::kleisli::Kleisli;
///
/// let to_upper = Kleisli::new(|text: String| {
///     Writer::new(text.to_uppercase(), "toUpper ".to_string())
/// });
/// let to_words = Kleisli::new(|text: String| {
///     Writer::new(
///         text.split_whitespace().map(str::to_string).collect::<Vec<_>>(),
///         "toWords ".to_string(),
///     )
/// });
///
/// let process = to_upper.and_then(to_words);
/// let (words, log) = process.run("Hello World".to_string()).into_parts();
/// assert_eq!(words, vec!["HELLO", "WORLD"]);
/// assert_eq!(log, "toUpper toWords ");
/// ```
pub struct Kleisli<A, M> {
    function: Arc<dyn Fn(A) -> M + Send + Sync>,
}

impl<A, M> Kleisli<A, M>
where
    A: 'static,
    M: Embellishment + 'static,
{
    /// Wraps an embellished function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> M + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// The identity morphism on `A`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Maybe;
    /// use embellish::kleisli::Kleisli;
    ///
    /// let identity: Kleisli<i32, Maybe<i32>> = Kleisli::identity();
    /// assert_eq!(identity.run(3), Maybe::Present(3));
    /// ```
    #[must_use]
    pub fn identity() -> Self
    where
        M: TypeConstructor<Inner = A>,
    {
        Self::new(M::identity)
    }

    /// Applies the morphism.
    pub fn run(&self, input: A) -> M {
        (self.function)(input)
    }

    /// Composes this morphism with `next`, which runs second.
    #[must_use]
    pub fn and_then<C>(self, next: Kleisli<M::Inner, M::WithType<C>>) -> Kleisli<A, M::WithType<C>>
    where
        M::Inner: 'static,
        M::WithType<C>: Embellishment + 'static,
    {
        let first = self.function;
        let second = next.function;
        Kleisli::new(move |input| first(input).flat_map::<C, _>(|value| second(value)))
    }
}

impl<A, M> Clone for Kleisli<A, M> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<A, M> fmt::Debug for Kleisli<A, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Kleisli")
            .field("input", &std::any::type_name::<A>())
            .field("output", &std::any::type_name::<M>())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Kleisli<String, crate::effect::Writer<String, String>>: Send, Sync, Clone);
