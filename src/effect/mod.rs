//! Embellishments: return types that carry something besides the value.
//!
//! - [`Writer`]: the value plus an accumulated log
//! - [`Maybe`]: the value, or nothing (partial functions)
//!
//! Neither type does anything by itself. They become interesting when
//! embellished functions returning them are chained with the
//! [`kleisli`](crate::kleisli) composer.
//!
//! # Examples
//!
//! ```rust
//! use embellish::effect::{Maybe, Writer};
//!
//! let logged: Writer<String, i32> = Writer::new(1, "one ".to_string());
//! assert_eq!(logged.log(), "one ");
//!
//! let missing: Maybe<i32> = Maybe::absent();
//! assert!(missing.unwrap().is_err());
//! ```

mod error;
mod maybe;
mod writer;

pub use error::EmptyValueError;
pub use maybe::Maybe;
pub use writer::Writer;

static_assertions::assert_impl_all!(Writer<String, String>: Send, Sync);
static_assertions::assert_impl_all!(Maybe<f64>: Send, Sync);
static_assertions::assert_impl_all!(EmptyValueError: Send, Sync, std::error::Error);
