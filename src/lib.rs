//! # lensbox
//!
//! Composable, law-abiding access to immutable data, and a small
//! Functor / Applicative / Monad container for chaining fallible steps.
//!
//! ## Overview
//!
//! - **Optics**: [`Lens`](optics::Lens) with [`compose`](optics::compose),
//!   [`over`](optics::over), [`zip`](optics::zip) and [`zip_n`](optics::zip_n)
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative), [`Monad`](typeclass::Monad)
//!   and the [`Maybe`](typeclass::Maybe) container with
//!   [`kleisli`](typeclass::kleisli) composition
//! - **Function Composition**: [`pipe`](compose::pipe) and the `pipe!` macro
//!
//! Every operation is pure: combinators consume existing lenses or
//! containers and return new ones, nothing is mutated in place.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the `Maybe` container
//! - `compose`: Function composition utilities
//! - `optics`: Lens and its combinators
//! - `derive`: `#[derive(Lenses)]` re-exported from `lensbox-derive`
//! - `serde`: `Serialize` / `Deserialize` for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lensbox::prelude::*;
//! use lensbox::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_city = compose(lens!(Person, address), lens!(Address, city));
//!
//! let me = Person {
//!     name: "Me".to_string(),
//!     address: Address { street: "Street 01".to_string(), city: "NY".to_string() },
//! };
//! assert_eq!(person_city.get(&me), "NY");
//!
//! let moved = person_city.set("new york city".to_string(), me);
//! assert_eq!(moved.address.city, "new york city");
//!
//! let half = |n: i32| if n % 2 == 0 { Maybe::value(n / 2) } else { Maybe::empty() };
//! assert_eq!(Maybe::value(20).flat_map(half).flat_map(half), Maybe::value(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use lensbox::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "optics")]
pub mod optics;
