use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ByteArrayError {
    #[error("byte array cannot be absent")]
    Absent,
    #[error("invalid byte array length {found}; expected {expected}")]
    InvalidLength { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty integer constant")]
    Empty,
    #[error("invalid integer constant")]
    InvalidConst,
}
