use std::fmt::{self, Display};

/// A string failed to parse under one of the three external notations
/// (board position, single move, move sequence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    InvalidNotation {
        input: String,
        expected: &'static str,
    },
}

impl Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidNotation { input, expected } => {
                write!(f, "invalid notation {:?}: expected {}", input, expected)
            }
        }
    }
}

impl std::error::Error for NotationError {}
