use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("State error - tick out of bounds")]
    TickOutOfBounds,
    #[error("State error - tick spacing must be positive, got {0}")]
    InvalidTickSpacing(i32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A cursor, padding range or digit run does not fit the buffer, or a
    /// slot was left unwritten. Always a bug in whoever built the layout.
    #[error("Format error - invalid layout at index {index} for buffer of length {buffer_length}")]
    InvalidLayout { index: usize, buffer_length: usize },

    #[error("Format error - {digits} digits of precision, need at least 5 significant figures")]
    InsufficientPrecision { digits: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] crate::error::MathError),

    #[error(transparent)]
    StateError(#[from] crate::error::StateError),

    #[error(transparent)]
    FormatError(#[from] crate::error::FormatError),
}
