//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Composing embellished functions needs to talk about "the same
//! embellishment, carrying a different type": composing `A -> Writer<W, B>`
//! with `B -> Writer<W, C>` yields `A -> Writer<W, C>`. Rust has no native
//! higher-kinded types, so this module uses a Generic Associated Type to
//! name the embellishment with its carried type swapped out.
//!
//! # Example
//!
//! ```rust
//! use embellish::typeclass::TypeConstructor;
//!
//! fn absent_of<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = absent_of(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor applied to a carried type.
///
/// # Associated Types
///
/// - `Inner`: The carried type, e.g. `i32` for `Option<i32>`.
/// - `WithType<B>`: The same constructor carrying `B` instead.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// For embellishments with extra parameters, only the carried type changes:
/// the log type of a `Writer<W, A>` is preserved by `WithType`.
pub trait TypeConstructor {
    /// The carried type.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a valid type constructor so that
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn option_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Option<String> = transform(Some(42));
        assert_eq!(result, None);
    }

    #[rstest]
    #[case(Some(42))]
    #[case(None)]
    fn option_with_type_inner_roundtrip(#[case] original: Option<i32>) {
        fn roundtrip<T: TypeConstructor>(value: T) -> T::WithType<T::Inner>
        where
            T: Into<T::WithType<T::Inner>>,
        {
            value.into()
        }

        let result: Option<i32> = roundtrip(original);
        assert_eq!(result, original);
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_option_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_option_bool::<Step2>();
    }
}
