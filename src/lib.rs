//! # embellish
//!
//! Composition of embellished functions.
//!
//! An embellished function is an ordinary function whose return value is
//! decorated with something extra: a log of what happened, or the
//! possibility that there is no value at all. This crate makes such
//! functions compose as easily as plain ones, and associatively.
//!
//! ## Overview
//!
//! - **Type Classes**: [`TypeConstructor`](typeclass::TypeConstructor),
//!   [`Semigroup`](typeclass::Semigroup), [`Monoid`](typeclass::Monoid)
//! - **Embellishments**: [`Writer`](effect::Writer) for logs,
//!   [`Maybe`](effect::Maybe) for partial functions
//! - **Kleisli Composition**: [`compose`](kleisli::compose),
//!   [`identity`](kleisli::identity), [`Kleisli`](kleisli::Kleisli) and
//!   the [`kleisli!`] macro
//! - **Sample Functions**: [`functions`] (`to_upper`, `to_words`, `safe_root`, ...)
//!
//! No global state is involved anywhere: a Writer's log travels with its
//! value instead of being appended to a shared logger.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `effect`: Writer and Maybe
//! - `kleisli`: The composer and the sample functions
//! - `serde`: Serialization of Writer and Maybe
//! - `tracing`: Trace events from the composer
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use embellish::prelude::*;
//!
//! let process = compose(to_upper, to_words);
//! let (words, log) = process("Hello World".to_string()).into_parts();
//! assert_eq!(words, vec!["HELLO", "WORLD"]);
//! assert_eq!(log, "toUpper toWords ");
//!
//! let root_reciprocal = compose(safe_reciprocal, safe_root);
//! assert_eq!(root_reciprocal(4.0), Maybe::Present(0.5));
//! assert!(root_reciprocal(0.0).unwrap().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use embellish::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "kleisli")]
    pub use crate::kleisli::*;

    #[cfg(feature = "kleisli")]
    pub use crate::functions::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "kleisli")]
pub mod kleisli;

#[cfg(feature = "kleisli")]
pub mod functions;
