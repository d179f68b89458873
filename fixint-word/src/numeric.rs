use crate::core::FixedInt;
use crate::repr::Repr;

/// Conversions to the native numeric widths.
///
/// Everything derives from `long_value`, which is exact for every width up
/// to 32 bits. Narrower results keep the low-order bits; floating-point
/// results round to nearest.
pub trait Numeric: Copy {
    fn long_value(&self) -> i64;

    fn byte_value(&self) -> i8 {
        self.long_value() as i8
    }

    fn short_value(&self) -> i16 {
        self.long_value() as i16
    }

    fn int_value(&self) -> i32 {
        self.long_value() as i32
    }

    fn float_value(&self) -> f32 {
        self.long_value() as f32
    }

    fn double_value(&self) -> f64 {
        self.long_value() as f64
    }
}

impl<R: Repr> Numeric for FixedInt<R> {
    #[inline(always)]
    fn long_value(&self) -> i64 {
        self.0.widen()
    }
}
