//! Tests for `#[derive(Lenses)]`.
//!
//! Every named field `f` of a deriving struct gets an associated function
//! `f_lens()` returning a lawful lens onto that field.

use lensbox::optics::{Lens, Lenses, compose, zip_n};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Person {
    name: String,
    age: u32,
    address: Address,
}

/// Generic struct
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Tagged<T> {
    tag: String,
    payload: T,
}

/// Not `Clone`
#[derive(PartialEq, Debug)]
struct Handle(u8);

/// Struct with a field that cannot be cloned
#[derive(PartialEq, Debug, Lenses)]
struct Holder {
    id: u32,
    #[lens(skip)]
    handle: Handle,
}

fn alice() -> Person {
    Person {
        name: "Alice".to_string(),
        age: 30,
        address: Address {
            street: "Main St".to_string(),
            city: "Tokyo".to_string(),
        },
    }
}

// =============================================================================
// Field Lenses
// =============================================================================

#[rstest]
fn test_derived_lens_get() {
    let person = alice();
    assert_eq!(Person::name_lens().get(&person), "Alice");
    assert_eq!(Person::age_lens().get(&person), 30);
}

#[rstest]
fn test_derived_lens_set() {
    let updated = Person::age_lens().set(31, alice());
    assert_eq!(updated.age, 31);
    assert_eq!(updated.name, "Alice");
}

#[rstest]
fn test_derived_lens_modify() {
    let updated = Person::name_lens().modify(alice(), |name| name.to_uppercase());
    assert_eq!(updated.name, "ALICE");
}

#[rstest]
fn test_derived_lenses_compose() {
    let city = compose(Person::address_lens(), Address::city_lens());

    assert_eq!(city.get(&alice()), "Tokyo");

    let moved = city.set("Osaka".to_string(), alice());
    assert_eq!(moved.address.city, "Osaka");
    assert_eq!(moved.address.street, "Main St");
}

#[rstest]
fn test_derived_lenses_compose_by_method() {
    let street = Person::address_lens().compose(Address::street_lens());
    let moved = street.set("Side St".to_string(), alice());
    assert_eq!(moved.address.street, "Side St");
}

#[rstest]
fn test_derived_lenses_zip_n() {
    let summary = zip_n((
        Person::name_lens(),
        Person::age_lens(),
        compose(Person::address_lens(), Address::city_lens()),
    ));

    assert_eq!(
        summary.get(&alice()),
        ("Alice".to_string(), 30, "Tokyo".to_string())
    );

    let updated = summary.set(("Bob".to_string(), 25, "Kyoto".to_string()), alice());
    assert_eq!(updated.name, "Bob");
    assert_eq!(updated.age, 25);
    assert_eq!(updated.address.city, "Kyoto");
}

#[rstest]
fn test_derived_lens_is_clone() {
    let name = Person::name_lens();
    let copy = name.clone();
    assert_eq!(name.get(&alice()), copy.get(&alice()));
}

// =============================================================================
// Generic Structs
// =============================================================================

#[rstest]
#[case(1)]
#[case(-5)]
fn test_generic_struct_lens(#[case] payload: i64) {
    let tagged = Tagged {
        tag: "number".to_string(),
        payload,
    };

    assert_eq!(Tagged::<i64>::payload_lens().get(&tagged), payload);

    let doubled = Tagged::<i64>::payload_lens().modify(tagged, |value| value * 2);
    assert_eq!(doubled.payload, payload * 2);
    assert_eq!(doubled.tag, "number");
}

#[rstest]
fn test_generic_struct_nested_payload() {
    let tagged = Tagged {
        tag: "home".to_string(),
        payload: alice().address,
    };

    let city = compose(Tagged::<Address>::payload_lens(), Address::city_lens());
    assert_eq!(city.get(&tagged), "Tokyo");
    assert_eq!(city.set("Nara".to_string(), tagged).payload.city, "Nara");
}

#[rstest]
fn test_generic_struct_with_non_clone_parameter() {
    let tagged = Tagged {
        tag: "handle".to_string(),
        payload: Handle(3),
    };

    let renamed = Tagged::<Handle>::tag_lens().set("renamed".to_string(), tagged);
    assert_eq!(renamed.tag, "renamed");
    assert_eq!(renamed.payload, Handle(3));
}

// =============================================================================
// Skipped Fields
// =============================================================================

#[rstest]
#[case(0)]
#[case(7)]
fn test_skipped_field_leaves_other_lenses(#[case] id: u32) {
    let holder = Holder {
        id: 1,
        handle: Handle(9),
    };

    assert_eq!(Holder::id_lens().get(&holder), 1);

    let updated = Holder::id_lens().set(id, holder);
    assert_eq!(updated, Holder { id, handle: Handle(9) });
}

// =============================================================================
// Laws
// =============================================================================

#[rstest]
#[case("Charlie")]
#[case("")]
fn test_derived_lens_laws(#[case] name: &str) {
    let lens = Person::name_lens();
    let person = alice();

    // GetSet
    assert_eq!(lens.get(&lens.set(name.to_string(), person.clone())), name);
    // SetGet
    assert_eq!(lens.set(lens.get(&person), person.clone()), person);
    // SetSet
    assert_eq!(
        lens.set(name.to_string(), lens.set("Dave".to_string(), person.clone())),
        lens.set(name.to_string(), person)
    );
}
