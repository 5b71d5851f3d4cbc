//! Derive macro for lensbox field lenses.
//!
//! # Example
//!
//! ```rust,ignore
//! use lensbox::optics::Lens;
//! use lensbox_derive::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32> + Clone
//! // - Point::y_lens() -> impl Lens<Point, i32> + Clone
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().get(&point), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating one lens per named struct field.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl lensbox::optics::Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// The getter clones the field, so a field needs a `Clone` type to get a
/// lens. For fields whose type mentions a type parameter of the struct, the
/// `Clone` bound sits on the generated method, so `Tagged<NotClone>` still
/// compiles as long as that lens is not requested. Fields with a concrete
/// non-`Clone` type must opt out with `#[lens(skip)]`:
///
/// ```rust,ignore
/// #[derive(Lenses)]
/// struct Holder {
///     id: u32,
///     #[lens(skip)]
///     handle: std::fs::File,
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use lensbox::optics::Lens;
/// use lensbox_derive::Lenses;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person { name: "Me".to_string(), age: 30 };
/// let updated = Person::name_lens().set("mini Me".to_string(), person);
/// assert_eq!(updated.name, "mini Me");
/// ```
#[proc_macro_derive(Lenses, attributes(lens))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
