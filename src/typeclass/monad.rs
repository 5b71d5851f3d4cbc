//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! Kleisli composition (`kleisli(f, g) = |a| f(a).flat_map(g)`) inherits
//! associativity from the last law.

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use lensbox::typeclass::{Maybe, Monad};
///
/// fn parse_positive(s: &str) -> Maybe<i32> {
///     s.parse::<i32>().ok().filter(|&n| n > 0).into()
/// }
///
/// let result = Monad::flat_map(Maybe::value("42"), parse_positive);
/// assert_eq!(result, Maybe::value(42));
/// ```
pub trait Monad: Applicative {
    /// Applies a container-returning function and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// A failed `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

/// Kleisli composition of two container-returning functions.
///
/// `kleisli(first, second)(a) == first(a).flat_map(second)`. The result is
/// itself a container-returning function, so compositions nest, and
/// `kleisli(kleisli(f, g), h)` behaves exactly like `kleisli(f, kleisli(g, h))`.
///
/// # Examples
///
/// ```rust
/// use lensbox::typeclass::{Maybe, kleisli};
///
/// let half = |n: i32| if n % 2 == 0 { Maybe::value(n / 2) } else { Maybe::empty() };
/// let describe = |n: i32| Maybe::value(format!("{n}"));
///
/// let half_then_describe = kleisli(half, describe);
/// assert_eq!(half_then_describe(8), Maybe::value("4".to_string()));
/// assert_eq!(half_then_describe(7), Maybe::empty());
/// ```
pub fn kleisli<A, B, C, M, F, G>(first: F, second: G) -> impl Fn(A) -> M::WithType<C>
where
    F: Fn(A) -> M,
    M: Monad<Inner = B>,
    G: Fn(B) -> M::WithType<C>,
{
    move |input| first(input).flat_map::<C, _>(&second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Maybe;
    use rstest::rstest;

    fn half(number: i32) -> Maybe<i32> {
        if number % 2 == 0 {
            Maybe::value(number / 2)
        } else {
            Maybe::empty()
        }
    }

    fn non_negative(number: i32) -> Maybe<u32> {
        u32::try_from(number).ok().into()
    }

    #[rstest]
    #[case(8, Maybe::value(4))]
    #[case(-8, Maybe::empty())]
    #[case(7, Maybe::empty())]
    fn kleisli_chains_two_steps(#[case] input: i32, #[case] expected: Maybe<u32>) {
        let half_non_negative = kleisli(half, non_negative);
        assert_eq!(half_non_negative(input), expected);
    }

    #[test]
    fn kleisli_works_for_option() {
        let checked_half = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
        let quarter = kleisli(checked_half, checked_half);
        assert_eq!(quarter(12), Some(3));
        assert_eq!(quarter(6), None);
    }

    #[test]
    fn then_propagates_failure() {
        assert_eq!(Monad::then(Maybe::value(1), Maybe::value("next")), Maybe::value("next"));
        assert_eq!(Monad::then(Maybe::<i32>::Empty, Maybe::value("next")), Maybe::Empty);
    }

    #[test]
    fn and_then_is_flat_map() {
        assert_eq!(Monad::and_then(Maybe::value(20), half), Maybe::value(10));
        assert_eq!(Monad::and_then(Some(4), |n| if n > 5 { Some(n) } else { None }), None);
    }
}
