//! Optics for immutable data manipulation.
//!
//! A [`Lens`] focuses on one part of a whole and offers `get` / `set`
//! access to it. Lenses are values: the combinators below consume lenses and
//! return new ones, so deep accessors are built once from small pieces
//! instead of being hand-written for every path.
//!
//! # Combinators
//!
//! - [`compose`]: chain `Lens<A, B>` and `Lens<B, C>` into `Lens<A, C>`
//! - [`over`]: lift `P -> P` into `W -> W`
//! - [`zip`]: pair two lenses on the same whole into `Lens<W, (B, C)>`
//! - [`zip_n`]: the same for 2 to 8 lenses, focusing on a flat tuple
//!
//! # Example
//!
//! ```
//! use lensbox::optics::{Lens, compose, zip};
//! use lensbox::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let me = Person {
//!     name: "Me".to_string(),
//!     address: Address { street: "Street 01".to_string(), city: "NY".to_string() },
//! };
//!
//! let name_and_city = zip(
//!     lens!(Person, name),
//!     compose(lens!(Person, address), lens!(Address, city)),
//! );
//!
//! assert_eq!(name_and_city.get(&me), ("Me".to_string(), "NY".to_string()));
//!
//! let updated = name_and_city.set(("mini Me".to_string(), "LA".to_string()), me);
//! assert_eq!(updated.name, "mini Me");
//! assert_eq!(updated.address.city, "LA");
//! assert_eq!(updated.address.street, "Street 01");
//! ```
//!
//! # Lens Laws
//!
//! 1. **GetSet**: `lens.get(&lens.set(part, whole)) == part`
//! 2. **SetGet**: `lens.set(lens.get(&whole), whole) == whole`
//! 3. **SetSet**: `lens.set(p2, lens.set(p1, whole)) == lens.set(p2, whole)`
//!
//! # Optional foci
//!
//! A lens is total: every whole has its part. A part that may be absent is
//! modeled by focusing on a [`Maybe`](crate::typeclass::Maybe), i.e. a
//! `Lens<W, Maybe<P>>`, and chaining the container operations on the result.

mod combinators;
mod lens;
mod zip;

pub use combinators::{compose, over, zip, zip_n};
pub use lens::{ComposedLens, FunctionLens, Lens};
pub use zip::{LensTuple, ZippedLens};

#[cfg(feature = "derive")]
pub use lensbox_derive::Lenses;
