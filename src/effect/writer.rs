//! Writer embellishment - a value paired with an accumulated log.
//!
//! A `Writer<W, A>` is the pair `(value: A, log: W)`. An embellished
//! function `A -> Writer<W, B>` returns its result together with whatever
//! it wants to record, instead of appending to a shared logger. When two
//! such functions are composed the logs are joined with
//! [`Semigroup::combine`], first function's log first.
//!
//! The log is never inspected by the composition machinery; it is only
//! combined. The value is never inspected either, only handed on.
//!
//! # Laws
//!
//! With `W: Monoid`:
//!
//! - Left Identity: `Writer::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Writer::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - Tell: `tell(w1).then(tell(w2)) == tell(w1.combine(w2))`
//!
//! # Examples
//!
//! ```rust
//! use embellish::effect::Writer;
//!
//! fn to_upper(text: String) -> Writer<String, String> {
//!     Writer::new(text.to_uppercase(), "toUpper ".to_string())
//! }
//!
//! let writer = to_upper("Hello World".to_string());
//! assert_eq!(writer.value(), "HELLO WORLD");
//! assert_eq!(writer.log(), "toUpper ");
//! ```

#![forbid(unsafe_code)]

use crate::typeclass::{Monoid, Semigroup, TypeConstructor};

/// A value of type `A` together with a log of type `W`.
///
/// # Type Parameters
///
/// - `W`: The log type; composition requires `W: Monoid`
/// - `A`: The carried value type
///
/// # Examples
///
/// ```rust
/// use embellish::effect::Writer;
///
/// let computation: Writer<Vec<String>, i32> = Writer::tell(vec!["log".to_string()])
///     .then(Writer::pure(42));
///
/// let (value, log) = computation.into_parts();
/// assert_eq!(value, 42);
/// assert_eq!(log, vec!["log"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<W, A> {
    value: A,
    log: W,
}

impl<W, A> Writer<W, A> {
    /// Creates a new Writer with the given value and log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::new(42, "answer ".to_string());
    /// assert_eq!(*writer.value(), 42);
    /// ```
    pub const fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// Returns a reference to the carried value.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Returns a reference to the accumulated log.
    pub const fn log(&self) -> &W {
        &self.log
    }

    /// Consumes the Writer, returning `(value, log)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Writer;
    ///
    /// let writer: Writer<String, bool> = Writer::new(true, "isEven ".to_string());
    /// assert_eq!(writer.into_parts(), (true, "isEven ".to_string()));
    /// ```
    pub fn into_parts(self) -> (A, W) {
        (self.value, self.log)
    }

    /// Returns clones of `(value, log)`, leaving the Writer in place.
    pub fn run(&self) -> (A, W)
    where
        A: Clone,
        W: Clone,
    {
        (self.value.clone(), self.log.clone())
    }

    /// Maps a function over the value, keeping the log untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::new(21, "log ".to_string());
    /// let mapped = writer.fmap(|value| value * 2);
    /// assert_eq!(mapped.into_parts(), (42, "log ".to_string()));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer {
            value: function(self.value),
            log: self.log,
        }
    }
}

impl<W, A> Writer<W, A>
where
    W: Monoid,
{
    /// Creates a Writer carrying `value` with an empty log.
    ///
    /// This is the identity morphism of the Writer embellishment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::pure(42);
    /// assert_eq!(writer.into_parts(), (42, String::new()));
    /// ```
    pub fn pure(value: A) -> Self {
        Self {
            value,
            log: W::empty(),
        }
    }

    /// Feeds the value to `function` and appends its log after this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::new(10, "first ".to_string());
    /// let chained = writer.flat_map(|value| Writer::new(value * 2, "second ".to_string()));
    /// assert_eq!(chained.into_parts(), (20, "first second ".to_string()));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = function(self.value);
        Writer {
            value: next.value,
            log: self.log.combine(next.log),
        }
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        self.flat_map(function)
    }

    /// Sequences two Writers, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Writer;
    ///
    /// let first: Writer<String, i32> = Writer::new(1, "A ".to_string());
    /// let second: Writer<String, &str> = Writer::new("done", "B ".to_string());
    /// assert_eq!(first.then(second).into_parts(), ("done", "A B ".to_string()));
    /// ```
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B> {
        Writer {
            value: next.value,
            log: self.log.combine(next.log),
        }
    }
}

impl<W> Writer<W, ()>
where
    W: Monoid,
{
    /// Creates a Writer that only records `log`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::Writer;
    ///
    /// let writer: Writer<String, ()> = Writer::tell("note ".to_string());
    /// assert_eq!(writer.log(), "note ");
    /// ```
    pub const fn tell(log: W) -> Self {
        Self { value: (), log }
    }
}

impl<W, A> TypeConstructor for Writer<W, A> {
    type Inner = A;
    type WithType<B> = Writer<W, B>;
}

impl<W: Monoid, A: Default> Default for Writer<W, A> {
    fn default() -> Self {
        Self::pure(A::default())
    }
}
