//! Function composition utilities.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`pipe`]: composes two functions left to right
//! - [`pipe!`]: composes any number of functions left to right
//!
//! `pipe` is plain function composition. It is distinct from
//! [`optics::compose`](crate::optics::compose), which chains lenses.
//!
//! # Laws
//!
//! - **Associativity**: `pipe(pipe(f, g), h) == pipe(f, pipe(g, h))`
//! - **Left Identity**: `pipe(identity, f) == f`
//! - **Right Identity**: `pipe(f, identity) == f`
//!
//! # Examples
//!
//! ```
//! use lensbox::compose::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe(f, g)(x) = g(f(x))
//! let piped = pipe(double, add_one);
//! assert_eq!(piped(5), 11);
//! ```

mod pipe_macro;
mod utils;

pub use utils::{identity, pipe};

// The pipe! macro shares its name with the function; macros live in their
// own namespace.
pub use crate::pipe;
