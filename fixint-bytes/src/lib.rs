pub use byteorder::{BE, LE};

pub mod endian;
pub use endian::Endian;

pub mod order;
pub use order::Order;

pub mod traits;
pub use traits::ByteCast;
