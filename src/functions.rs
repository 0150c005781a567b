//! Ready-made embellished functions.
//!
//! Each function here does one small job and reports it through its return
//! type instead of through a shared logger or a panic. They exist to show
//! (and test) how embellished functions compose.
//!
//! Logging functions append their own name followed by a space, so a
//! composed log reads like a trace of the calls that produced it.
//!
//! # Examples
//!
//! ```rust
//! use embellish::effect::Maybe;
//! use embellish::functions::{process, safe_root_reciprocal};
//!
//! let (words, log) = process("Hello World".to_string()).into_parts();
//! assert_eq!(words, vec!["HELLO", "WORLD"]);
//! assert_eq!(log, "toUpper toWords ");
//!
//! assert_eq!(safe_root_reciprocal(4.0), Maybe::Present(0.5));
//! assert_eq!(safe_root_reciprocal(0.0), Maybe::Absent);
//! ```

use crate::effect::{Maybe, Writer};

/// A function whose result carries a `String` log.
pub type Logged<T> = Writer<String, T>;

/// Upper-cases `text`, logging `"toUpper "`.
pub fn to_upper(text: String) -> Logged<String> {
    Writer::new(text.to_uppercase(), "toUpper ".to_string())
}

/// Splits `text` on whitespace, logging `"toWords "`.
pub fn to_words(text: String) -> Logged<Vec<String>> {
    let words = text.split_whitespace().map(str::to_string).collect();
    Writer::new(words, "toWords ".to_string())
}

/// `to_upper` followed by `to_words`.
pub fn process(text: String) -> Logged<Vec<String>> {
    crate::kleisli!(to_upper, to_words)(text)
}

/// Logical negation, logging `"not so! "`.
pub fn negate(value: bool) -> Logged<bool> {
    Writer::new(!value, "not so! ".to_string())
}

/// Parity test, logging `"isEven "`.
pub fn is_even(n: i64) -> Logged<bool> {
    Writer::new(n % 2 == 0, "isEven ".to_string())
}

/// `is_even` followed by `negate`.
///
/// ```rust
/// use embellish::functions::is_odd;
///
/// assert_eq!(is_odd(3).into_parts(), (true, "isEven not so! ".to_string()));
/// ```
pub fn is_odd(n: i64) -> Logged<bool> {
    crate::kleisli!(is_even, negate)(n)
}

/// Square root, absent for negative input.
pub fn safe_root(x: f64) -> Maybe<f64> {
    if x >= 0.0 {
        Maybe::present(x.sqrt())
    } else {
        Maybe::absent()
    }
}

/// Reciprocal, absent for zero.
pub fn safe_reciprocal(x: f64) -> Maybe<f64> {
    if x == 0.0 {
        Maybe::absent()
    } else {
        Maybe::present(1.0 / x)
    }
}

/// `safe_reciprocal` followed by `safe_root`: defined for positive input only.
pub fn safe_root_reciprocal(x: f64) -> Maybe<f64> {
    crate::kleisli!(safe_reciprocal, safe_root)(x)
}
