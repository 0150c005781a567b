//! Error types for the embellishments.
//!
//! Composition itself never fails: absence is carried inside
//! [`Maybe::Absent`](super::Maybe::Absent). The only error is asking an
//! absent value for its payload.

/// Represents an attempt to take the value out of an absent [`Maybe`](super::Maybe).
///
/// # Examples
///
/// ```rust
/// use embellish::effect::{EmptyValueError, Maybe};
///
/// let absent: Maybe<f64> = Maybe::absent();
/// assert_eq!(absent.unwrap(), Err(EmptyValueError::new()));
/// assert_eq!(
///     format!("{}", EmptyValueError::new()),
///     "attempted to unwrap an absent value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyValueError {
    /// Where the unwrap happened, if the caller said so.
    context: Option<&'static str>,
}

impl EmptyValueError {
    /// Creates an error without context.
    #[must_use]
    pub const fn new() -> Self {
        Self { context: None }
    }

    /// Creates an error naming the operation that expected a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use embellish::effect::EmptyValueError;
    ///
    /// let error = EmptyValueError::with_context("safe_root");
    /// assert_eq!(error.context(), Some("safe_root"));
    /// assert_eq!(format!("{error}"), "safe_root: attempted to unwrap an absent value");
    /// ```
    #[must_use]
    pub const fn with_context(context: &'static str) -> Self {
        Self {
            context: Some(context),
        }
    }

    /// Returns the context message, if any.
    #[must_use]
    pub const fn context(&self) -> Option<&'static str> {
        self.context
    }
}

impl std::fmt::Display for EmptyValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.context {
            Some(context) => write!(formatter, "{context}: attempted to unwrap an absent value"),
            None => write!(formatter, "attempted to unwrap an absent value"),
        }
    }
}

impl std::error::Error for EmptyValueError {}
