use paste::paste;

use crate::order::Order;

/// A native integer that can be read from and written to a byte buffer in
/// either byte order.
///
/// `buf` must hold at least `SIZEOF` bytes; only the first `SIZEOF` bytes
/// are touched.
pub trait ByteCast: Copy {
    const SIZEOF: usize;
    const SIGNED: bool;

    fn from_bytes<O: Order>(buf: &[u8]) -> Self;
    fn into_bytes<O: Order>(&self, buf: &mut [u8]);
}

macro_rules! impl_for {
    ($t:ident, $read:ident, $write:ident, $signed:ident) => {
        impl ByteCast for $t {
            const SIZEOF: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = $signed;

            fn from_bytes<O: Order>(buf: &[u8]) -> Self {
                O::$read(buf)
            }

            fn into_bytes<O: Order>(&self, buf: &mut [u8]) {
                O::$write(buf, *self)
            }
        }
    };
}

macro_rules! impls_for {
    ([$($tname:ident),*], $signed:ident) => {
        $(
            paste! {
                impl_for!($tname, [<read_ $tname>], [<write_ $tname>], $signed);
            }
        )*
    };
}

impls_for! { [i8, i16, i32], true }
impls_for! { [u8, u16, u32], false }
