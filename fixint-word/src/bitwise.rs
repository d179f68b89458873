use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::core::FixedInt;
use crate::repr::Repr;

/// Bitwise operations closed over a single fixed-width type.
///
/// There is no mixed-width variant: both operands always share `Self`.
pub trait Bitwise: Copy + PartialEq {
    fn and(self, rhs: Self) -> Self;
    fn or(self, rhs: Self) -> Self;
    fn xor(self, rhs: Self) -> Self;
    fn not(self) -> Self;

    /// `true` if every bit set in `mask` is also set in `self`.
    fn has_bitmask(self, mask: Self) -> bool {
        self.and(mask) == mask
    }

    fn add_bitmask(self, mask: Self) -> Self {
        self.or(mask)
    }

    fn remove_bitmask(self, mask: Self) -> Self {
        self.and(Bitwise::not(mask))
    }
}

impl<R: Repr> Bitwise for FixedInt<R> {
    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }

    #[inline(always)]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl<R: Repr> BitAnd for FixedInt<R> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Bitwise::and(self, rhs)
    }
}

impl<R: Repr> BitOr for FixedInt<R> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitwise::or(self, rhs)
    }
}

impl<R: Repr> BitXor for FixedInt<R> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitwise::xor(self, rhs)
    }
}

impl<R: Repr> Not for FixedInt<R> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Bitwise::not(self)
    }
}
