//! Lenses focusing on several parts of the same whole at once.
//!
//! A [`ZippedLens`] holds a tuple of lenses `(L0, L1, ..., Ln)` over one
//! whole and focuses on the flat tuple of their parts `(P0, P1, ..., Pn)`.
//! Arities 2 through 8 are supported.
//!
//! `set` runs the component setters strictly left to right, each one on the
//! whole produced by the previous one. For disjoint foci the order is
//! unobservable; for overlapping foci the rightmost lens wins.

use super::lens::Lens;

/// A lens onto a tuple of parts, built by [`zip`](crate::optics::zip) or
/// [`zip_n`](crate::optics::zip_n).
///
/// # Example
///
/// ```
/// use lensbox::optics::{Lens, zip_n};
/// use lensbox::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Rgb { red: u8, green: u8, blue: u8 }
///
/// let channels = zip_n((lens!(Rgb, red), lens!(Rgb, green), lens!(Rgb, blue)));
///
/// let teal = Rgb { red: 0, green: 128, blue: 128 };
/// assert_eq!(channels.get(&teal), (0, 128, 128));
///
/// let white = channels.set((255, 255, 255), teal);
/// assert_eq!(white, Rgb { red: 255, green: 255, blue: 255 });
/// ```
#[derive(Clone, Debug)]
pub struct ZippedLens<T> {
    lenses: T,
}

/// Tuples of 2 to 8 values, the shapes a [`ZippedLens`] can hold.
///
/// Sealed: implemented only for those tuple arities.
pub trait LensTuple: sealed::Sealed {}

mod sealed {
    pub trait Sealed {}
}

impl<T> ZippedLens<T> {
    /// Wraps a tuple of lenses sharing the same whole.
    ///
    /// ```compile_fail
    /// use lensbox::optics::ZippedLens;
    /// use lensbox::lens;
    ///
    /// #[derive(Clone)]
    /// struct Point { x: i32 }
    ///
    /// // A single lens is not a tuple of lenses.
    /// let zipped = ZippedLens::new(lens!(Point, x));
    /// ```
    #[must_use]
    pub const fn new(lenses: T) -> Self
    where
        T: LensTuple,
    {
        Self { lenses }
    }

    /// Returns the component lenses.
    pub fn into_inner(self) -> T {
        self.lenses
    }
}

macro_rules! impl_zipped_lens {
    ($(($lens:ident, $part:ident, $index:tt)),+) => {
        impl<$($lens),+> sealed::Sealed for ($($lens,)+) {}
        impl<$($lens),+> LensTuple for ($($lens,)+) {}

        impl<W, $($lens, $part),+> Lens<W, ($($part,)+)> for ZippedLens<($($lens,)+)>
        where
            $($lens: Lens<W, $part>,)+
        {
            fn get(&self, whole: &W) -> ($($part,)+) {
                ($(self.lenses.$index.get(whole),)+)
            }

            fn set(&self, parts: ($($part,)+), whole: W) -> W {
                $(let whole = self.lenses.$index.set(parts.$index, whole);)+
                whole
            }
        }
    };
}

impl_zipped_lens!((L0, P0, 0), (L1, P1, 1));
impl_zipped_lens!((L0, P0, 0), (L1, P1, 1), (L2, P2, 2));
impl_zipped_lens!((L0, P0, 0), (L1, P1, 1), (L2, P2, 2), (L3, P3, 3));
impl_zipped_lens!((L0, P0, 0), (L1, P1, 1), (L2, P2, 2), (L3, P3, 3), (L4, P4, 4));
impl_zipped_lens!(
    (L0, P0, 0),
    (L1, P1, 1),
    (L2, P2, 2),
    (L3, P3, 3),
    (L4, P4, 4),
    (L5, P5, 5)
);
impl_zipped_lens!(
    (L0, P0, 0),
    (L1, P1, 1),
    (L2, P2, 2),
    (L3, P3, 3),
    (L4, P4, 4),
    (L5, P5, 5),
    (L6, P6, 6)
);
impl_zipped_lens!(
    (L0, P0, 0),
    (L1, P1, 1),
    (L2, P2, 2),
    (L3, P3, 3),
    (L4, P4, 4),
    (L5, P5, 5),
    (L6, P6, 6),
    (L7, P7, 7)
);
