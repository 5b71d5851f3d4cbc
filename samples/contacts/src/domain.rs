//! Contact record types.

use std::path::Path;

use lensbox::optics::Lenses;
use serde::{Deserialize, Serialize};

use crate::error::ContactsError;

/// A postal address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Lenses)]
pub struct Address {
    /// Street line
    pub street: String,
    /// City name
    pub city: String,
}

/// A contact record.
///
/// # Examples
///
/// ```
/// use contacts::Person;
/// use lensbox::optics::Lens;
///
/// let me = Person::sample();
/// let renamed = Person::name_lens().set("mini Me".to_string(), me.clone());
///
/// assert_eq!(renamed.name, "mini Me");
/// assert_eq!(renamed.address, me.address);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Lenses)]
pub struct Person {
    /// Display name
    pub name: String,
    /// Home address
    pub address: Address,
}

impl Person {
    /// The record used when no `--record` file is given.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: "Me".to_string(),
            address: Address {
                street: "Street 01".to_string(),
                city: "NY".to_string(),
            },
        }
    }

    /// Reads a record from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ContactsError::Read`] if the file cannot be read and
    /// [`ContactsError::Parse`] if it is not a valid record.
    pub fn load(path: &Path) -> Result<Self, ContactsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ContactsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parses a record from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ContactsError::Parse`] if `json` is not a valid record.
    pub fn from_json(json: &str) -> Result<Self, ContactsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the record as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ContactsError::Parse`] if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, ContactsError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(rendered)
    }
}
