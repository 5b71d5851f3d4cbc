//! Combinators for plain functions.

/// Returns the value unchanged.
///
/// The unit of [`pipe`]: `pipe(identity, f)` and `pipe(f, identity)` both
/// behave like `f`.
///
/// # Examples
///
/// ```
/// use lensbox::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes two functions left to right: `pipe(first, second)(x) == second(first(x))`.
///
/// # Examples
///
/// ```
/// use lensbox::compose::pipe;
///
/// let length_of_number = pipe(|n: i32| n.to_string(), |s: String| s.len());
/// assert_eq!(length_of_number(12345), 5);
/// ```
#[inline]
pub fn pipe<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}
