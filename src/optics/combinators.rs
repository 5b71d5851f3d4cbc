//! Free-function lens combinators.

use super::lens::{ComposedLens, Lens};
use super::zip::{LensTuple, ZippedLens};

/// Chains `lhs: Lens<A, B>` and `rhs: Lens<B, C>` into a `Lens<A, C>`.
///
/// - `get = a ↦ rhs.get(lhs.get(a))`
/// - `set = (c, a) ↦ lhs.set(rhs.set(c, lhs.get(a)), a)`
///
/// Composition is associative, and the result obeys the lens laws whenever
/// both operands do.
///
/// # Example
///
/// ```
/// use lensbox::optics::{Lens, compose};
/// use lensbox::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Address { street: String, city: String }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, address: Address }
///
/// let city = compose(lens!(Person, address), lens!(Address, city));
///
/// let me = Person {
///     name: "Me".to_string(),
///     address: Address { street: "Street 01".to_string(), city: "NY".to_string() },
/// };
/// assert_eq!(city.get(&me), "NY");
///
/// let moved = city.set("new york city".to_string(), me);
/// assert_eq!(moved.address.street, "Street 01");
/// assert_eq!(moved.address.city, "new york city");
/// ```
pub fn compose<A, B, C, L1, L2>(lhs: L1, rhs: L2) -> ComposedLens<L1, L2, B>
where
    L1: Lens<A, B>,
    L2: Lens<B, C>,
{
    ComposedLens::new(lhs, rhs)
}

/// Lifts a part-to-part function into a whole-to-whole function.
///
/// `over(lens, f)(a) == lens.set(f(lens.get(&a)), a)`. Panics raised by `f`
/// reach the caller unchanged.
///
/// # Example
///
/// ```
/// use lensbox::optics::over;
/// use lensbox::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Account { owner: String, balance: i64 }
///
/// let deposit_ten = over(lens!(Account, balance), |balance| balance + 10);
///
/// let account = Account { owner: "Me".to_string(), balance: 5 };
/// assert_eq!(deposit_ten(account).balance, 15);
/// ```
pub fn over<W, P, L, F>(lens: L, function: F) -> impl Fn(W) -> W
where
    L: Lens<W, P>,
    F: Fn(P) -> P,
{
    move |whole| lens.modify(whole, &function)
}

/// Merges two lenses over the same whole into a lens onto the pair of parts.
///
/// - `get = a ↦ (lhs.get(a), rhs.get(a))`
/// - `set = ((b, c), a) ↦ rhs.set(c, lhs.set(b, a))`
///
/// `lhs` writes first and `rhs` writes on the already-updated whole.
///
/// # Example
///
/// ```
/// use lensbox::optics::{Lens, zip};
/// use lensbox::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let both = zip(lens!(Point, x), lens!(Point, y));
/// assert_eq!(both.set((3, 4), Point { x: 0, y: 0 }), Point { x: 3, y: 4 });
/// ```
pub fn zip<A, B, C, L1, L2>(lhs: L1, rhs: L2) -> ZippedLens<(L1, L2)>
where
    L1: Lens<A, B>,
    L2: Lens<A, C>,
{
    ZippedLens::new((lhs, rhs))
}

/// Merges a tuple of 2 to 8 lenses over the same whole into a lens onto the
/// flat tuple of their parts.
///
/// Setters run left to right, exactly as repeated pairwise [`zip`] would run
/// them, but the part shape is `(P0, P1, P2)` rather than `(P0, (P1, P2))`.
///
/// Only tuples of 2 to 8 elements are accepted:
///
/// ```compile_fail
/// use lensbox::optics::zip_n;
///
/// let not_lenses = zip_n(42);
/// ```
///
/// # Example
///
/// ```
/// use lensbox::optics::{Lens, zip_n};
/// use lensbox::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Version { major: u32, minor: u32, patch: u32 }
///
/// let version = zip_n((lens!(Version, major), lens!(Version, minor), lens!(Version, patch)));
/// let bumped = version.set((2, 0, 0), Version { major: 1, minor: 4, patch: 2 });
/// assert_eq!(version.get(&bumped), (2, 0, 0));
/// ```
pub fn zip_n<T>(lenses: T) -> ZippedLens<T>
where
    T: LensTuple,
{
    ZippedLens::new(lenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::identity;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[rstest]
    #[case(Point { x: 1, y: 2 }, Point { x: 2, y: 2 })]
    #[case(Point { x: -4, y: 0 }, Point { x: -3, y: 0 })]
    fn over_transforms_only_the_focus(#[case] input: Point, #[case] expected: Point) {
        let increment_x = over(crate::lens!(Point, x), |x| x + 1);
        assert_eq!(increment_x(input), expected);
    }

    #[test]
    fn over_identity_is_identity() {
        let unchanged = over(crate::lens!(Point, y), identity);
        assert_eq!(unchanged(Point { x: 7, y: 9 }), Point { x: 7, y: 9 });
    }

    #[test]
    fn over_is_reusable() {
        let double_y = over(crate::lens!(Point, y), |y| y * 2);
        let once = double_y(Point { x: 0, y: 3 });
        assert_eq!(double_y(once), Point { x: 0, y: 12 });
    }

    #[test]
    fn zip_with_itself_matches_sequential_sets() {
        let x_lens = crate::lens!(Point, x);
        let twice = zip(x_lens.clone(), x_lens.clone());

        let point = Point { x: 0, y: 5 };
        let zipped = twice.set((1, 2), point.clone());
        let sequential = x_lens.set(2, x_lens.set(1, point));
        assert_eq!(zipped, sequential);
    }

    #[test]
    fn zip_n_runs_setters_left_to_right() {
        let x_lens = crate::lens!(Point, x);
        let triple = zip_n((x_lens.clone(), crate::lens!(Point, y), x_lens));

        let updated = triple.set((1, 2, 3), Point { x: 0, y: 0 });
        assert_eq!(updated, Point { x: 3, y: 2 });
    }
}
