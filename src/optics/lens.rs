//! Lens optics for focusing on a part of a whole.
//!
//! A Lens pairs a getter with a setter. Lenses compose, so one lens can reach
//! arbitrarily deep into nested immutable data.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetSet Law**: Setting then getting yields the set part.
//!    ```text
//!    lens.get(&lens.set(part, whole)) == part
//!    ```
//!
//! 2. **SetGet Law**: Setting back what was read yields the original whole.
//!    ```text
//!    lens.set(lens.get(&whole), whole) == whole
//!    ```
//!
//! 3. **SetSet Law**: Two consecutive sets equal the last set.
//!    ```text
//!    lens.set(part2, lens.set(part1, whole)) == lens.set(part2, whole)
//!    ```
//!
//! # Examples
//!
//! ```
//! use lensbox::optics::Lens;
//! use lensbox::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(100, point);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::marker::PhantomData;

use super::zip::ZippedLens;

/// A Lens focuses on a single part `P` of a whole `W`.
///
/// `get` hands back the part by value, which lets derived lenses such as
/// [`ZippedLens`] synthesize parts that do not exist as a single field.
/// `set` consumes the whole and returns the updated one.
///
/// # Laws
///
/// 1. **GetSet Law**: `lens.get(&lens.set(part, whole)) == part`
/// 2. **SetGet Law**: `lens.set(lens.get(&whole), whole) == whole`
/// 3. **SetSet Law**: `lens.set(p2, lens.set(p1, whole)) == lens.set(p2, whole)`
pub trait Lens<W, P> {
    /// Reads the focused part.
    fn get(&self, whole: &W) -> P;

    /// Replaces the focused part, returning a new whole.
    fn set(&self, part: P, whole: W) -> W;

    /// Transforms the focused part with `function`.
    ///
    /// `lens.modify(whole, f) == lens.set(f(lens.get(&whole)), whole)`.
    ///
    /// # Example
    ///
    /// ```
    /// use lensbox::optics::Lens;
    /// use lensbox::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, age: u32 }
    ///
    /// let name_lens = lens!(Person, name);
    /// let person = Person { name: "alice".to_string(), age: 30 };
    /// let upper = name_lens.modify(person, |name| name.to_uppercase());
    /// assert_eq!(upper.name, "ALICE");
    /// ```
    fn modify<F>(&self, whole: W, function: F) -> W
    where
        F: FnOnce(P) -> P,
    {
        let part = self.get(&whole);
        self.set(function(part), whole)
    }

    /// Chains this lens with one focusing inside its part.
    ///
    /// # Example
    ///
    /// ```
    /// use lensbox::optics::Lens;
    /// use lensbox::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
    /// };
    ///
    /// assert_eq!(person_street.get(&person), "Main St");
    /// ```
    fn compose<Q, L>(self, other: L) -> ComposedLens<Self, L, P>
    where
        Self: Sized,
        L: Lens<P, Q>,
    {
        ComposedLens::new(self, other)
    }

    /// Pairs this lens with another lens over the same whole.
    ///
    /// See [`zip`](crate::optics::zip) for the setter ordering.
    fn zip<Q, L>(self, other: L) -> ZippedLens<(Self, L)>
    where
        Self: Sized,
        L: Lens<W, Q>,
    {
        ZippedLens::new((self, other))
    }
}

impl<W, P, L> Lens<W, P> for &L
where
    L: Lens<W, P> + ?Sized,
{
    #[inline]
    fn get(&self, whole: &W) -> P {
        (**self).get(whole)
    }

    #[inline]
    fn set(&self, part: P, whole: W) -> W {
        (**self).set(part, whole)
    }
}

/// A lens built from a getter and a setter function.
///
/// The `lens!` macro and `#[derive(Lenses)]` generate a `FunctionLens`.
///
/// # Type Parameters
///
/// - `W`: The whole
/// - `P`: The part
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use lensbox::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |x: i32, point: Point| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<W, P, G, St>
where
    G: Fn(&W) -> P,
    St: Fn(P, W) -> W,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(W, P)>,
}

impl<W, P, G, St> FunctionLens<W, P, G, St>
where
    G: Fn(&W) -> P,
    St: Fn(P, W) -> W,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// The pair is trusted to obey the lens laws; nothing checks them at
    /// runtime.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<W, P, G, St> Lens<W, P> for FunctionLens<W, P, G, St>
where
    G: Fn(&W) -> P,
    St: Fn(P, W) -> W,
{
    fn get(&self, whole: &W) -> P {
        (self.getter)(whole)
    }

    fn set(&self, part: P, whole: W) -> W {
        (self.setter)(part, whole)
    }
}

impl<W, P, G, St> Clone for FunctionLens<W, P, G, St>
where
    G: Fn(&W) -> P + Clone,
    St: Fn(P, W) -> W + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<W, P, G, St> std::fmt::Debug for FunctionLens<W, P, G, St>
where
    G: Fn(&W) -> P,
    St: Fn(P, W) -> W,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Two lenses chained end to end.
///
/// `get` reads through `first` then `second`. `set` reads the intermediate
/// part through `first`, updates it with `second`, and writes it back through
/// `first`.
///
/// # Type Parameters
///
/// - `L1`: The outer lens
/// - `L2`: The inner lens
/// - `M`: The intermediate part (part of `L1`, whole of `L2`)
pub struct ComposedLens<L1, L2, M> {
    first: L1,
    second: L2,
    _marker: PhantomData<M>,
}

impl<L1, L2, M> ComposedLens<L1, L2, M> {
    /// Creates a new composed lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<W, M, P, L1, L2> Lens<W, P> for ComposedLens<L1, L2, M>
where
    L1: Lens<W, M>,
    L2: Lens<M, P>,
{
    fn get(&self, whole: &W) -> P {
        self.second.get(&self.first.get(whole))
    }

    fn set(&self, part: P, whole: W) -> W {
        let intermediate = self.first.get(&whole);
        let intermediate = self.second.set(part, intermediate);
        self.first.set(intermediate, whole)
    }
}

impl<L1: Clone, L2: Clone, M> Clone for ComposedLens<L1, L2, M> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, M> std::fmt::Debug for ComposedLens<L1, L2, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens for a struct field.
///
/// The getter clones the field, so the field type must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use lensbox::optics::Lens;
/// use lensbox::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let y_lens = lens!(Point, y);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(y_lens.get(&point), 20);
/// assert_eq!(y_lens.set(0, point), Point { x: 10, y: 0 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |whole: &$struct_type| ::core::clone::Clone::clone(&whole.$field),
            |part, mut whole: $struct_type| {
                whole.$field = part;
                whole
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |whole: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&whole.$field),
            |part, mut whole: $struct_type<$($generic),+>| {
                whole.$field = part;
                whole
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |whole: &$struct_type| ::core::clone::Clone::clone(&whole.$field),
            |part, mut whole: $struct_type| {
                whole.$field = part;
                whole
            },
        )
    };
}
