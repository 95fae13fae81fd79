use core::fmt::{self, Display, Formatter};

/// An element of some [`GaloisField`](crate::GaloisField).
///
/// The wrapped integer is the base-`p` encoding of the element's coordinates
/// in the polynomial basis `1, α, ..., α^(m-1)`. The encodings of `0` and `1`
/// are the same in every field, and so are the encodings of prime-field
/// constants, which is what lets subfield elements be compared across fields.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GfElement(pub(crate) u32);

impl GfElement {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    /// The integer encoding of this element.
    #[must_use]
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    #[inline]
    pub const fn is_one(self) -> bool {
        self.0 == 1
    }
}

impl Display for GfElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
