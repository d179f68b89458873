use byteorder::ByteOrder;

use crate::{BE, LE};
use crate::endian::Endian;

/// A `ByteOrder` that also knows which `Endian` it stands for.
pub trait Order: ByteOrder + Send + Sync + 'static {
    const ENDIAN: Endian;
    const NATIVE: bool;

    fn read_i8(buf: &[u8]) -> i8 {
        if buf.is_empty() {
            0
        } else {
            buf[0] as i8
        }
    }

    fn write_i8(buf: &mut [u8], n: i8) {
        if !buf.is_empty() {
            buf[0] = n as u8;
        }
    }

    fn read_u8(buf: &[u8]) -> u8 {
        if buf.is_empty() {
            0
        } else {
            buf[0]
        }
    }

    fn write_u8(buf: &mut [u8], n: u8) {
        if !buf.is_empty() {
            buf[0] = n;
        }
    }
}

macro_rules! impl_order_for {
    ($t:ident, $endian:ident, $native:expr) => {
        impl Order for $t {
            const ENDIAN: Endian = Endian::$endian;
            const NATIVE: bool = $native;
        }
    };
}

impl_order_for!(BE, Big, cfg!(target_endian = "big"));
impl_order_for!(LE, Little, cfg!(target_endian = "little"));
