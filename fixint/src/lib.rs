pub use fixint_bytes as bytes;
pub use fixint_word as word;

pub use fixint_bytes::Endian;
pub use fixint_word::{Bitwise, ByteArrayError, FixedInt, Numeric, ParseError};
pub use fixint_word::{Int8, Int16, Int32, UInt8, UInt16, UInt32};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
