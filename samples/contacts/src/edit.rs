//! Lens-based edits of a contact record.
//!
//! Every requested field change is a `Maybe<String>`: `Value` overwrites the
//! field, `Empty` keeps it. The street and city are edited together through a
//! zipped lens so both writes land in a single pass over the address.

use lensbox::optics::{Lens, compose, over, zip};
use lensbox::typeclass::{Maybe, kleisli};

use crate::domain::{Address, Person};
use crate::error::ContactsError;

/// The set of field changes to apply to a record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditPlan {
    /// New name
    pub name: Maybe<String>,
    /// New street
    pub street: Maybe<String>,
    /// New city
    pub city: Maybe<String>,
}

impl EditPlan {
    /// Returns `true` if the plan changes nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.name.is_empty() && self.street.is_empty() && self.city.is_empty()
    }

    /// Applies every requested change to `person`.
    ///
    /// # Examples
    ///
    /// ```
    /// use contacts::{EditPlan, Person};
    /// use lensbox::typeclass::Maybe;
    ///
    /// let plan = EditPlan {
    ///     city: Maybe::value("new york city".to_string()),
    ///     ..EditPlan::default()
    /// };
    ///
    /// let moved = plan.apply(Person::sample());
    /// assert_eq!(moved.address.city, "new york city");
    /// assert_eq!(moved.address.street, "Street 01");
    /// ```
    #[must_use]
    pub fn apply(&self, person: Person) -> Person {
        let person = match &self.name {
            Maybe::Value(name) => {
                tracing::info!(field = "name", value = %name, "editing contact");
                Person::name_lens().set(name.clone(), person)
            }
            Maybe::Empty => person,
        };

        if self.street.is_empty() && self.city.is_empty() {
            return person;
        }

        let street_and_city = compose(
            Person::address_lens(),
            zip(Address::street_lens(), Address::city_lens()),
        );
        let relocate = over(street_and_city, |(street, city): (String, String)| {
            let street = self.street.clone().unwrap_or(street);
            let city = self.city.clone().unwrap_or(city);
            tracing::info!(%street, %city, "editing address");
            (street, city)
        });
        relocate(person)
    }
}

fn half(number: i64) -> Maybe<i64> {
    if number % 2 == 0 {
        Maybe::value(number / 2)
    } else {
        Maybe::empty()
    }
}

/// Halves `number` twice, or `Empty` if an odd number shows up on the way.
///
/// # Examples
///
/// ```
/// use contacts::quarter;
/// use lensbox::typeclass::Maybe;
///
/// assert_eq!(quarter(20), Maybe::value(5));
/// assert_eq!(quarter(6), Maybe::empty());
/// ```
pub fn quarter(number: i64) -> Maybe<i64> {
    kleisli(half, half)(number)
}

/// [`quarter`], with `Empty` turned into an error.
///
/// # Errors
///
/// Returns [`ContactsError::NotHalvable`] if `number` is not divisible by 4.
pub fn halve_twice(number: i64) -> Result<i64, ContactsError> {
    let result = quarter(number).ok_or(ContactsError::NotHalvable { input: number });
    tracing::debug!(number, ok = result.is_ok(), "halved twice");
    result
}
