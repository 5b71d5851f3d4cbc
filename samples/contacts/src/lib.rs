//! Contact record editor.
//!
//! Loads a [`Person`](domain::Person) record from JSON, edits it through
//! derived lenses and prints the result. Absent edits are carried as
//! `Maybe::Empty` and leave the record untouched.
//!
//! # Modules
//!
//! - [`domain`]: The record types and their lenses
//! - [`edit`]: Lens-based edits and the halving chain
//! - [`config`]: Command line configuration
//! - [`error`]: Error types

pub mod config;
pub mod domain;
pub mod edit;
pub mod error;

pub use config::Cli;
pub use domain::{Address, Person};
pub use edit::{EditPlan, halve_twice, quarter};
pub use error::ContactsError;
