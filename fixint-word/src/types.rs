use paste::paste;

use crate::core::FixedInt;

macro_rules! impl_fixed_for {
    ($name:ident, $t:ident, $doc:literal) => {
        #[doc = $doc]
        pub type $name = FixedInt<$t>;

        impl FixedInt<$t> {
            paste! {
                #[doc = concat!("The value as a native `", stringify!($t), "`.")]
                pub fn [<$name:lower _value>](&self) -> $t {
                    self.0
                }
            }
        }

        impl From<FixedInt<$t>> for $t {
            fn from(v: FixedInt<$t>) -> Self {
                v.0
            }
        }
    };
}

impl_fixed_for!(Int8, i8, "Signed 8-bit integer.");
impl_fixed_for!(UInt8, u8, "Unsigned 8-bit integer.");
impl_fixed_for!(Int16, i16, "Signed 16-bit integer.");
impl_fixed_for!(UInt16, u16, "Unsigned 16-bit integer.");
impl_fixed_for!(Int32, i32, "Signed 32-bit integer.");
impl_fixed_for!(UInt32, u32, "Unsigned 32-bit integer.");
