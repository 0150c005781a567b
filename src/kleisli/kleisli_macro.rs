//! The `kleisli!` macro for composing embellished functions.
//!
//! Unlike mathematical composition, `kleisli!` reads left to right: the
//! leftmost function runs first. This mirrors the "fish" operator `>=>`.

/// Composes embellished functions from left to right.
///
/// `kleisli!(f, g, h)` is `f >=> g >=> h`: run `f`, feed its value to `g`,
/// then to `h`, merging the embellishments along the way.
///
/// # Syntax
///
/// - `kleisli!(f)` - Returns `f` unchanged
/// - `kleisli!(f, g)` - Returns [`compose(f, g)`](crate::kleisli::compose)
/// - `kleisli!(f, g, h, ...)` - Returns `compose(f, kleisli!(g, h, ...))`
///
/// Because composition is associative, the right-nested expansion is
/// observationally the same as the left-nested one.
///
/// # Examples
///
/// ```
/// use embellish::effect::Writer;
/// use embellish::kleisli;
///
/// let add_one = |n: i32| Writer::new(n + 1, "add_one ".to_string());
/// let double = |n: i32| Writer::new(n * 2, "double ".to_string());
/// let describe = |n: i32| Writer::new(format!("n = {n}"), "describe ".to_string());
///
/// let pipeline = kleisli!(add_one, double, describe);
/// let (value, log) = pipeline(4).into_parts();
/// assert_eq!(value, "n = 10");
/// assert_eq!(log, "add_one double describe ");
/// ```
#[macro_export]
macro_rules! kleisli {
    // Single function: nothing to compose
    ($function:expr) => {
        $function
    };

    // Two functions: first runs, then second
    ($first_function:expr, $second_function:expr $(,)?) => {
        $crate::kleisli::compose($first_function, $second_function)
    };

    // Three or more functions: kleisli!(f, g, h, ...) = compose(f, kleisli!(g, h, ...))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::kleisli::compose(
            $first_function,
            $crate::kleisli!($($remaining_functions),+),
        )
    };
}
