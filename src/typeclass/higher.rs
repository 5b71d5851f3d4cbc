//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Option<_>` as type constructors
//! directly. [`TypeConstructor`] records the applied type (`Inner`) and how
//! to re-apply the constructor to another type (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use lensbox::typeclass::{Maybe, TypeConstructor};
//!
//! fn forget<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Maybe<String> = forget(Maybe::value(42));
//! assert_eq!(emptied, Maybe::Empty);
//! ```

use super::maybe::Maybe;

/// A trait representing a type constructor.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is the same type as `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
