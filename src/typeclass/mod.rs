//! Type class traits underlying the embellishments.
//!
//! - [`TypeConstructor`]: Emulates higher-kinded types so an embellishment
//!   can be named with a different carried type
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! # Examples
//!
//! ```rust
//! use embellish::typeclass::{Monoid, Semigroup};
//!
//! let log = String::from("toUpper ");
//! assert_eq!(String::empty().combine(log.clone()), log);
//! assert_eq!(String::combine_all(vec![log, String::from("toWords ")]), "toUpper toWords ");
//! ```

mod higher;
mod monoid;
mod semigroup;

pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
