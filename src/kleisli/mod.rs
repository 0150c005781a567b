//! Kleisli composition of embellished functions.
//!
//! An embellished function returns its result wrapped in an
//! [`Embellishment`]: a [`Writer`](crate::effect::Writer) that carries a
//! log, a [`Maybe`](crate::effect::Maybe) that may carry nothing. Ordinary
//! composition `g(f(x))` does not type-check for these, because `f` returns
//! `F<B>` while `g` wants a `B`. [`compose`] fixes that by unpacking,
//! calling, and merging the embellishments:
//!
//! - Writer: `(y, s1) = f(x)`, `(z, s2) = g(y)`, result `(z, s1.combine(s2))`
//! - Maybe: `f(x)`; if absent, absent, and `g` is never called;
//!   otherwise `g(y)` as is
//!
//! Together with [`identity`] this forms a category whose objects are Rust
//! types and whose morphisms are embellished functions (the Kleisli
//! category of the embellishment).
//!
//! # Laws
//!
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//!
//! # Examples
//!
//! ```rust
//! use embellish::effect::Writer;
//! use embellish::kleisli::compose;
//!
//! fn to_upper(text: String) -> Writer<String, String> {
//!     Writer::new(text.to_uppercase(), "toUpper ".to_string())
//! }
//!
//! fn to_words(text: String) -> Writer<String, Vec<String>> {
//!     Writer::new(
//!         text.split_whitespace().map(str::to_string).collect(),
//!         "toWords ".to_string(),
//!     )
//! }
//!
//! let process = compose(to_upper, to_words);
//! let (words, log) = process("Hello World".to_string()).into_parts();
//! assert_eq!(words, vec!["HELLO", "WORLD"]);
//! assert_eq!(log, "toUpper toWords ");
//! ```
//!
//! Partial functions:
//!
//! ```rust
//! use embellish::effect::Maybe;
//! use embellish::kleisli;
//!
//! let safe_reciprocal = |x: f64| if x == 0.0 { Maybe::absent() } else { Maybe::present(1.0 / x) };
//! let safe_root = |x: f64| if x < 0.0 { Maybe::absent() } else { Maybe::present(x.sqrt()) };
//!
//! let root_reciprocal = kleisli!(safe_reciprocal, safe_root);
//! assert_eq!(root_reciprocal(4.0), Maybe::Present(0.5));
//! assert_eq!(root_reciprocal(0.0), Maybe::Absent);
//! ```

mod embellishment;
mod kleisli_macro;
mod morphism;

pub use embellishment::Embellishment;
pub use morphism::Kleisli;

/// Composes two embellished functions, running `first` then `second`.
///
/// `compose(first, second)(x)` feeds the value carried by `first(x)` to
/// `second` and merges the two embellishments with
/// [`Embellishment::flat_map`]. The returned closure owns both functions
/// and can be called any number of times.
///
/// Composition never fails. For [`Maybe`](crate::effect::Maybe) a missing
/// value is returned as `Absent`, it is not raised.
///
/// # Examples
///
/// ```rust
/// use embellish::effect::Writer;
/// use embellish::kleisli::compose;
///
/// let first = |n: i32| Writer::new(n + 1, "A ".to_string());
/// let second = |n: i32| Writer::new(n * 2, "B ".to_string());
///
/// let composed = compose(first, second);
/// assert_eq!(composed(1).into_parts(), (4, "A B ".to_string()));
/// ```
pub fn compose<M, A, C, F, G>(first: F, second: G) -> impl Fn(A) -> M::WithType<C>
where
    M: Embellishment,
    F: Fn(A) -> M,
    G: Fn(M::Inner) -> M::WithType<C>,
{
    move |input| first(input).flat_map::<C, _>(&second)
}

/// The identity morphism: lifts a value into `M` without embellishing it.
///
/// `identity::<M>` can be passed wherever an embellished function is
/// expected.
///
/// # Examples
///
/// ```rust
/// use embellish::effect::{Maybe, Writer};
/// use embellish::kleisli::{compose, identity};
///
/// let logged = |n: i32| Writer::new(n + 1, "inc ".to_string());
/// let composed = compose(identity::<Writer<String, i32>>, logged);
/// assert_eq!(composed(1), logged(1));
///
/// assert_eq!(identity::<Maybe<i32>>(5), Maybe::Present(5));
/// ```
#[inline]
pub fn identity<M: Embellishment>(value: M::Inner) -> M {
    M::identity(value)
}
