use std::fmt::Display;

/// Byte order of a marshaled value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endian {
    Big,
    Little,
}

impl Default for Endian {
    fn default() -> Self {
        Self::Big
    }
}

impl Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_big() { "BE" } else { "LE" })
    }
}

impl Endian {
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Self::Little)
    }

    pub fn is_native(&self) -> bool {
        *self == Self::native()
    }
}
