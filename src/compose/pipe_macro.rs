//! The `pipe!` macro for n-ary left-to-right composition.

/// Composes functions from left to right.
///
/// `pipe!(f, g, h)(x)` is equivalent to `h(g(f(x)))`; it is the n-ary form
/// of [`pipe`](crate::compose::pipe).
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `f` unchanged
/// - `pipe!(f, g)` - Returns `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use lensbox::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square(3)=9 -> double(9)=18 -> add_one(18)=19
/// let pipeline = pipe!(square, double, add_one);
/// assert_eq!(pipeline(3), 19);
/// ```
#[macro_export]
macro_rules! pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::pipe!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
