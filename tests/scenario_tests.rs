//! End-to-end tests combining lenses and `Maybe` on a small record.

use lensbox::optics::{Lens, compose, over, zip};
use lensbox::typeclass::{Maybe, kleisli};
use rstest::{fixture, rstest};

#[derive(Clone, PartialEq, Eq, Debug)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
struct Person {
    name: String,
    address: Address,
}

#[fixture]
fn me() -> Person {
    Person {
        name: "Me".to_string(),
        address: Address {
            street: "Street 01".to_string(),
            city: "NY".to_string(),
        },
    }
}

fn half(number: i32) -> Maybe<i32> {
    if number % 2 == 0 {
        Maybe::value(number / 2)
    } else {
        Maybe::empty()
    }
}

// =============================================================================
// Lenses
// =============================================================================

#[rstest]
fn test_name_lens_leaves_address_untouched(me: Person) {
    let name_lens = lensbox::lens!(Person, name);
    let original_address = me.address.clone();

    let renamed = name_lens.set("mini Me".to_string(), me);

    assert_eq!(
        renamed,
        Person {
            name: "mini Me".to_string(),
            address: original_address,
        }
    );
}

#[rstest]
fn test_composed_city_lens_changes_only_city(me: Person) {
    let city_lens = compose(lensbox::lens!(Person, address), lensbox::lens!(Address, city));

    assert_eq!(city_lens.get(&me), "NY");

    let moved = city_lens.set("new york city".to_string(), me.clone());
    assert_eq!(moved.name, me.name);
    assert_eq!(moved.address.street, me.address.street);
    assert_eq!(moved.address.city, "new york city");
}

#[rstest]
fn test_zip_updates_both_fields_like_sequential_sets(me: Person) {
    let name_lens = lensbox::lens!(Person, name);
    let address_lens = lensbox::lens!(Person, address);
    let name_and_address = zip(&name_lens, &address_lens);

    let new_address = Address {
        street: "Avenue 9".to_string(),
        city: "LA".to_string(),
    };

    let zipped = name_and_address.set(("new name".to_string(), new_address.clone()), me.clone());
    let sequential = address_lens.set(
        new_address.clone(),
        name_lens.set("new name".to_string(), me),
    );

    assert_eq!(zipped, sequential);
    assert_eq!(zipped.name, "new name");
    assert_eq!(zipped.address, new_address);
}

#[rstest]
fn test_over_uppercases_city(me: Person) {
    let shout_city = over(
        compose(lensbox::lens!(Person, address), lensbox::lens!(Address, city)),
        |city: String| city.to_uppercase(),
    );

    let moved = lensbox::lens!(Person, address)
        .compose(lensbox::lens!(Address, city))
        .set("new york city".to_string(), me);

    assert_eq!(shout_city(moved).address.city, "NEW YORK CITY");
}

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
fn test_halving_twice() {
    assert_eq!(Maybe::value(20).flat_map(half).flat_map(half), Maybe::value(5));
}

#[rstest]
#[case(3)]
#[case(5)]
#[case(-7)]
fn test_halving_odd_is_empty(#[case] input: i32) {
    assert_eq!(Maybe::value(input).flat_map(half), Maybe::empty());
}

#[rstest]
#[case(40, Maybe::value(5))]
#[case(20, Maybe::empty())]
#[case(6, Maybe::empty())]
fn test_halving_three_times_through_kleisli(#[case] input: i32, #[case] expected: Maybe<i32>) {
    let eighth = kleisli(kleisli(half, half), half);
    assert_eq!(eighth(input), expected);
}

/// An optional focus is a lens onto a `Maybe` part; absence flows on through `flat_map`.
#[rstest]
fn test_lens_onto_optional_part() {
    #[derive(Clone, PartialEq, Debug)]
    struct Profile {
        nickname: Maybe<String>,
    }

    let nickname_lens = lensbox::lens!(Profile, nickname);
    let first_letter = |profile: &Profile| {
        nickname_lens
            .get(profile)
            .flat_map(|nickname| Maybe::from(nickname.chars().next()))
    };

    let anonymous = Profile {
        nickname: Maybe::empty(),
    };
    assert_eq!(first_letter(&anonymous), Maybe::empty());

    let named = nickname_lens.set(Maybe::value("Zed".to_string()), anonymous);
    assert_eq!(first_letter(&named), Maybe::value('Z'));
}
