use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Number out of range: {0}. Valid numbers are 1-25")]
    NumberOutOfRange(u8),

    #[error("Duplicate number: {0}")]
    DuplicateNumber(u8),

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid game size: {0}. Must be between 15 and 20")]
    InvalidSize(usize),

    #[error("A draw must have exactly 15 numbers, got {0}")]
    InvalidDrawSize(usize),

    #[error("{fixed} fixed numbers chosen but the game only has {size}")]
    TooManyFixed { fixed: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
