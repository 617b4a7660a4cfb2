use std::fmt::{self, Display};

/// Engine configuration rejected at the boundary. `set_depth` never fails
/// (it clamps); only the time budget has a rejectable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidMoveTime(f64),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMoveTime(seconds) => {
                write!(f, "move time must be positive, got {}", seconds)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
