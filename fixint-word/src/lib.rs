pub mod bitwise;
pub mod core;
pub mod error;
pub mod numeric;
pub mod repr;
pub mod types;

pub use self::bitwise::Bitwise;
pub use self::core::FixedInt;
pub use self::error::{ByteArrayError, ParseError};
pub use self::numeric::Numeric;
pub use self::repr::{Repr, Wide};
pub use self::types::*;
