//! Type class traits and the `Maybe` container.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying wrapped functions to wrapped values
//! - [`Monad`]: Sequencing container-returning computations
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types so that `Functor`, `Applicative` and `Monad` can talk
//! about "the same container holding a different type".
//!
//! ## Maybe
//!
//! [`Maybe`] is a two-variant container, `Empty` or `Value(A)`. `Empty` is
//! the failure signal: it short-circuits every `map`, `apply` and
//! `flat_map` that follows it.
//!
//! # Examples
//!
//! ```rust
//! use lensbox::typeclass::{Maybe, kleisli};
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::value(n / 2) } else { Maybe::empty() }
//! }
//!
//! let quarter = kleisli(half, half);
//! assert_eq!(quarter(20), Maybe::value(5));
//! assert_eq!(quarter(6), Maybe::empty());
//! ```

mod applicative;
mod functor;
mod higher;
mod maybe;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use maybe::Maybe;
pub use monad::{Monad, kleisli};
