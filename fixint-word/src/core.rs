use fixint_bytes::{ByteCast, Endian, Order, BE, LE};

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{ByteArrayError, ParseError};
use crate::numeric::Numeric;
use crate::repr::{Repr, Wide};

/// An immutable integer value stored in exactly `R::BITS` bits.
///
/// All constructors taking a wider native integer keep its low-order bits;
/// they never fail. Only byte-array input is validated.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedInt<R: Repr>(pub(crate) R);

impl<R: Repr> FixedInt<R> {
    pub const BITS: u32 = R::BITS;
    pub const BYTES: usize = R::SIZEOF;
    pub const SIGNED: bool = R::SIGNED;

    pub const MIN: Self = Self(R::MIN);
    pub const MAX: Self = Self(R::MAX);

    pub fn new(value: R) -> Self {
        Self(value)
    }

    pub fn from_i8(v: i8) -> Self {
        Self(R::narrow_i8(v))
    }

    pub fn from_i16(v: i16) -> Self {
        Self(R::narrow_i16(v))
    }

    pub fn from_i32(v: i32) -> Self {
        Self(R::narrow_i32(v))
    }

    pub fn from_i64(v: i64) -> Self {
        Self(R::narrow_i64(v))
    }

    pub fn value(&self) -> R {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == R::zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < R::zero()
    }

    /// Signed difference of the two values, or zero when they are equal.
    ///
    /// The difference is taken over 64 bits, so its sign always agrees with
    /// `cmp`, even for the far ends of the 32-bit ranges.
    pub fn compare_to(&self, other: &Self) -> i64 {
        if self == other {
            0
        } else {
            self.0.widen() - other.0.widen()
        }
    }

    pub fn hash_code(&self) -> i32 {
        self.int_value()
    }

    /// Equality against a value of unknown type; anything other than a
    /// `FixedInt<R>` holding the same value compares unequal.
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .map_or(false, |other| other == self)
    }

    pub fn eq_any_opt(&self, other: Option<&dyn Any>) -> bool {
        other.map_or(false, |other| self.eq_any(other))
    }
}

impl<R: Wide> FixedInt<R> {
    fn verify(buf: Option<&[u8]>) -> Result<&[u8], ByteArrayError> {
        let Some(buf) = buf else {
            #[cfg(feature = "extra-logging")]
            log::trace!("rejected absent byte array for {}", R::NAME);
            return Err(ByteArrayError::Absent);
        };

        if buf.len() != R::SIZEOF {
            #[cfg(feature = "extra-logging")]
            log::trace!(
                "rejected byte array of length {} for {}; expected {}",
                buf.len(),
                R::NAME,
                R::SIZEOF
            );
            return Err(ByteArrayError::InvalidLength {
                expected: R::SIZEOF,
                found: buf.len(),
            });
        }

        Ok(buf)
    }

    pub fn from_bytes<O: Order>(buf: &[u8]) -> Result<Self, ByteArrayError> {
        let buf = Self::verify(Some(buf))?;
        Ok(Self(R::from_bytes::<O>(buf)))
    }

    pub fn from_be_bytes(buf: &[u8]) -> Result<Self, ByteArrayError> {
        Self::from_bytes::<BE>(buf)
    }

    pub fn from_le_bytes(buf: &[u8]) -> Result<Self, ByteArrayError> {
        Self::from_bytes::<LE>(buf)
    }

    pub fn from_bytes_with(buf: &[u8], endian: Endian) -> Result<Self, ByteArrayError> {
        if endian.is_big() {
            Self::from_be_bytes(buf)
        } else {
            Self::from_le_bytes(buf)
        }
    }

    pub fn to_bytes<O: Order>(&self) -> R::Bytes {
        let mut bytes = R::Bytes::default();
        self.0.into_bytes::<O>(bytes.as_mut());
        bytes
    }

    pub fn to_be_bytes(&self) -> R::Bytes {
        self.to_bytes::<BE>()
    }

    pub fn to_le_bytes(&self) -> R::Bytes {
        self.to_bytes::<LE>()
    }

    pub fn to_bytes_with(&self, endian: Endian) -> Vec<u8> {
        if endian.is_big() {
            self.to_be_bytes().as_ref().to_vec()
        } else {
            self.to_le_bytes().as_ref().to_vec()
        }
    }

    pub fn write_bytes<O: Order>(&self, buf: &mut [u8]) -> Result<(), ByteArrayError> {
        if buf.len() != R::SIZEOF {
            return Err(ByteArrayError::InvalidLength {
                expected: R::SIZEOF,
                found: buf.len(),
            });
        }
        self.0.into_bytes::<O>(buf);
        Ok(())
    }
}

impl<R: Repr> From<R> for FixedInt<R> {
    fn from(value: R) -> Self {
        Self(value)
    }
}

impl<'a, R: Wide> TryFrom<&'a [u8]> for FixedInt<R> {
    type Error = ByteArrayError;

    fn try_from(buf: &'a [u8]) -> Result<Self, Self::Error> {
        Self::from_be_bytes(buf)
    }
}

impl<'a, R: Wide> TryFrom<Option<&'a [u8]>> for FixedInt<R> {
    type Error = ByteArrayError;

    fn try_from(buf: Option<&'a [u8]>) -> Result<Self, Self::Error> {
        let buf = Self::verify(buf)?;
        Ok(Self(R::from_bytes::<BE>(buf)))
    }
}

impl<R: Repr> PartialOrd for FixedInt<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Repr> Ord for FixedInt<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<R: Repr> Hash for FixedInt<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state)
    }
}

impl<R: Repr> fmt::Debug for FixedInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(R::NAME).field(&self.0).finish()
    }
}

impl<R: Repr> fmt::Display for FixedInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<R: Repr> fmt::LowerHex for FixedInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<R: Repr> fmt::UpperHex for FixedInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl<R: Repr> fmt::Binary for FixedInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl<R: Repr> fmt::Octal for FixedInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}

impl<R: Repr> FromStr for FixedInt<R> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let (neg, cst) = match s.strip_prefix('-') {
            Some(cst) => (true, cst),
            None => (false, s),
        };

        // a sign belongs in front of the radix prefix only
        if cst.starts_with(|c: char| c == '+' || c == '-') {
            return Err(ParseError::InvalidConst);
        }

        let val = if let Some(cstv) = cst.strip_prefix("0x") {
            u64::from_str_radix(cstv, 16)
        } else {
            u64::from_str_radix(cst, 10)
        }
        .map_err(|_| ParseError::InvalidConst)?;

        let val = if neg {
            (val as i64).wrapping_neg()
        } else {
            val as i64
        };

        Ok(Self::from_i64(val))
    }
}
