//! The `Maybe` container - an explicit absence/presence sum type.
//!
//! `Maybe<A>` is either `Empty` or `Value(A)`. It is the container the
//! `Functor`, `Applicative` and `Monad` type classes are demonstrated on, and
//! it is the failure model of this crate: an `Empty` anywhere in a chain of
//! `map` / `apply` / `flat_map` makes the whole chain `Empty`, without the
//! caller checking anything in between.
//!
//! # Laws
//!
//! ```text
//! m.map(|x| x) == m
//! m.map(f).map(g) == m.map(pipe(f, g))
//! Maybe::value(a).flat_map(f) == f(a)
//! m.flat_map(Maybe::value) == m
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lensbox::typeclass::Maybe;
//!
//! let add = |x: i32| move |y: i32| x + y;
//!
//! // Lift a binary function over two containers with map + apply.
//! let sum = Maybe::value(2).apply(Maybe::value(40).map(add));
//! assert_eq!(sum, Maybe::value(42));
//!
//! let missing = Maybe::<i32>::empty().apply(Maybe::value(40).map(add));
//! assert_eq!(missing, Maybe::empty());
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use super::monad::Monad;

/// A value that is either absent (`Empty`) or present (`Value`).
///
/// Every operation returns a new `Maybe`; no instance changes variant after
/// construction.
///
/// # Examples
///
/// ```rust
/// use lensbox::typeclass::Maybe;
///
/// let present = Maybe::value(3);
/// assert!(present.is_value());
/// assert_eq!(present.map(|n| n * 2), Maybe::value(6));
///
/// let absent: Maybe<i32> = Maybe::empty();
/// assert_eq!(absent.map(|n| n * 2), Maybe::Empty);
/// ```
#[doc(alias = "Box")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// No value. Propagates through every combinator.
    Empty,
    /// A present value.
    Value(A),
}

impl<A> Maybe<A> {
    /// Creates an empty container.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Wraps a value.
    #[inline]
    pub const fn value(value: A) -> Self {
        Self::Value(value)
    }

    /// Returns `true` for `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` for `Value`.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Borrows the contents, producing a `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Empty => Maybe::Empty,
            Self::Value(value) => Maybe::Value(value),
        }
    }

    /// Applies `function` to the contained value.
    ///
    /// `Empty` maps to `Empty`; `Value(a)` maps to `Value(function(a))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lensbox::typeclass::Maybe;
    ///
    /// assert_eq!(Maybe::value("four").map(str::len), Maybe::value(4));
    /// assert_eq!(Maybe::<&str>::Empty.map(str::len), Maybe::Empty);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Empty => Maybe::Empty,
            Self::Value(value) => Maybe::Value(function(value)),
        }
    }

    /// Applies a wrapped function to the wrapped value.
    ///
    /// The result is `Empty` when either the function container or `self` is
    /// `Empty`. Together with [`map`](Self::map) this lifts functions of any
    /// arity: map a curried function over the first container, then `apply`
    /// the result to each following container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lensbox::typeclass::Maybe;
    ///
    /// let increment = Maybe::value(|n: i32| n + 1);
    /// assert_eq!(Maybe::value(41).apply(increment), Maybe::value(42));
    ///
    /// let nothing: Maybe<fn(i32) -> i32> = Maybe::empty();
    /// assert_eq!(Maybe::value(41).apply(nothing), Maybe::empty());
    /// ```
    #[inline]
    pub fn apply<B, F>(self, function: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (function, self) {
            (Maybe::Value(function), Self::Value(value)) => Maybe::Value(function(value)),
            _ => Maybe::Empty,
        }
    }

    /// Chains a container-returning computation.
    ///
    /// `Empty` stays `Empty`; `Value(a)` becomes `function(a)` as-is, so no
    /// nested `Maybe<Maybe<_>>` is ever produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lensbox::typeclass::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::value(n / 2) } else { Maybe::empty() };
    ///
    /// assert_eq!(Maybe::value(20).flat_map(half).flat_map(half), Maybe::value(5));
    /// assert_eq!(Maybe::value(3).flat_map(half), Maybe::empty());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Empty => Maybe::Empty,
            Self::Value(value) => function(value),
        }
    }

    /// Combines two containers with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lensbox::typeclass::Maybe;
    ///
    /// assert_eq!(Maybe::value(1).map2(Maybe::value(2), |x, y| x + y), Maybe::value(3));
    /// assert_eq!(Maybe::value(1).map2(Maybe::<i32>::Empty, |x, y| x + y), Maybe::Empty);
    /// ```
    #[inline]
    pub fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Value(first), Maybe::Value(second)) => Maybe::Value(function(first, second)),
            _ => Maybe::Empty,
        }
    }

    /// Combines three containers with a ternary function.
    #[inline]
    pub fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Value(first), Maybe::Value(second), Maybe::Value(third)) => {
                Maybe::Value(function(first, second, third))
            }
            _ => Maybe::Empty,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Value(value) => {
                if predicate(&value) {
                    Self::Value(value)
                } else {
                    Self::Empty
                }
            }
            Self::Empty => Self::Empty,
        }
    }

    /// Returns `self` if it holds a value, otherwise `alternative`.
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Value(_) => self,
            Self::Empty => alternative,
        }
    }

    /// Extracts the value, falling back to `default` for `Empty`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Value(value) => value,
            Self::Empty => default,
        }
    }

    /// Extracts the value, computing a fallback for `Empty`.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Value(value) => value,
            Self::Empty => default(),
        }
    }

    /// Converts to a `Result`, mapping `Empty` to `Err(error)`.
    ///
    /// This is the boundary where callers that need an error payload leave
    /// the two-valued failure model.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when `self` is `Empty`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<A, E> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Empty => Err(error),
        }
    }

    /// Converts to a `Result`, computing the error for `Empty`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` when `self` is `Empty`.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<A, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Value(value) => Ok(value),
            Self::Empty => Err(error()),
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.into()
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    ///
    /// ```rust
    /// use lensbox::typeclass::Maybe;
    ///
    /// assert_eq!(Maybe::value(Maybe::value(1)).flatten(), Maybe::value(1));
    /// assert_eq!(Maybe::value(Maybe::<i32>::Empty).flatten(), Maybe::Empty);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.flat_map(|inner| inner)
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Empty, Self::Value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Value(value) => Some(value),
            Maybe::Empty => None,
        }
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Value(value)
    }

    #[inline]
    fn apply<B, F>(self, function: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::apply(self, function)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Self::map3(self, second, third, function)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Serialization
// =============================================================================

/// Serialized exactly like `Option<A>`: `Empty` becomes `null`.
#[cfg(feature = "serde")]
impl<A> serde::Serialize for Maybe<A>
where
    A: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_some(value),
        }
    }
}

/// Deserialized exactly like `Option<A>`.
///
/// Unlike `Option`, a missing struct field is not implied to be `Empty`;
/// mark such fields `#[serde(default)]`.
#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for Maybe<A>
where
    A: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<A> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
