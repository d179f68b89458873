use std::fmt;
use std::hash::Hash;

use fixint_bytes::ByteCast;
use num_traits::PrimInt;

mod private {
    pub trait Sealed {}
}

/// Native storage of a fixed-width value.
///
/// Implemented for `i8`, `u8`, `i16`, `u16`, `i32` and `u32` only. Every
/// narrowing constructor keeps the low-order `BITS` bits of its input, and
/// `widen` sign- or zero-extends the stored pattern to 64 bits, which is
/// lossless for every implementor.
pub trait Repr: private::Sealed
    + PrimInt
    + ByteCast
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + fmt::UpperHex
    + fmt::Binary
    + fmt::Octal
    + Send
    + Sync
    + 'static
{
    const BITS: u32;
    const MIN: Self;
    const MAX: Self;
    const NAME: &'static str;

    fn narrow_i8(v: i8) -> Self;
    fn narrow_i16(v: i16) -> Self;
    fn narrow_i32(v: i32) -> Self;
    fn narrow_i64(v: i64) -> Self;

    fn widen(self) -> i64;
}

/// Storage wide enough to be marshaled to and from byte arrays.
pub trait Wide: Repr {
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default + fmt::Debug + PartialEq;
}

macro_rules! impl_repr_for {
    ($t:ident, $name:literal) => {
        impl private::Sealed for $t {}

        impl Repr for $t {
            const BITS: u32 = <$t>::BITS;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const NAME: &'static str = $name;

            #[inline(always)]
            fn narrow_i8(v: i8) -> Self {
                v as $t
            }

            #[inline(always)]
            fn narrow_i16(v: i16) -> Self {
                v as $t
            }

            #[inline(always)]
            fn narrow_i32(v: i32) -> Self {
                v as $t
            }

            #[inline(always)]
            fn narrow_i64(v: i64) -> Self {
                v as $t
            }

            #[inline(always)]
            fn widen(self) -> i64 {
                self as i64
            }
        }
    };
}

macro_rules! impl_wide_for {
    ($($t:ident),*) => {
        $(
            impl Wide for $t {
                type Bytes = [u8; std::mem::size_of::<$t>()];
            }
        )*
    };
}

impl_repr_for!(i8, "Int8");
impl_repr_for!(u8, "UInt8");
impl_repr_for!(i16, "Int16");
impl_repr_for!(u16, "UInt16");
impl_repr_for!(i32, "Int32");
impl_repr_for!(u32, "UInt32");

impl_wide_for! { i16, u16, i32, u32 }
