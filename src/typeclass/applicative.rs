//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure`: lift a plain value into the context
//! - `apply`: apply a wrapped function to a wrapped value
//! - `map2` / `map3`: combine independent wrapped values
//!
//! # Laws
//!
//! ```text
//! v.apply(pure(|x| x)) == v                        (identity)
//! pure(x).apply(pure(f)) == pure(f(x))             (homomorphism)
//! pure(y).apply(u) == u.apply(pure(|f| f(y)))      (interchange)
//! ```
//!
//! Note the argument order: `apply` is called on the value container and
//! receives the function container.
//!
//! # Examples
//!
//! ```rust
//! use lensbox::typeclass::{Applicative, Maybe};
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::value(42));
//!
//! let pair = Maybe::value(1).product(Maybe::value("one"));
//! assert_eq!(pair, Maybe::value((1, "one")));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// # Examples
///
/// ```rust
/// use lensbox::typeclass::{Applicative, Maybe};
///
/// let sum = Applicative::map2(Maybe::value(3), Maybe::value(4), |x, y| x + y);
/// assert_eq!(sum, Maybe::value(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a wrapped function to the value inside `self`.
    ///
    /// Fails (in the sense of the specific applicative) when either side
    /// fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lensbox::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(Applicative::apply(Some(5), function), Some(6));
    /// ```
    fn apply<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn apply<B, F>(self, function: Option<F>) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        match (function, self) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }
}
