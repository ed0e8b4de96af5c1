use std::fmt;
use thiserror::Error;

/// Errors raised while interpreting configuration and zone parameters.
///
/// None of these abort the overlay; callers log them and fall back to a
/// documented default.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CursorError {
    #[error("unknown easing curve `{0}`")]
    UnknownEasing(String),
    #[error("invalid color `{0}`")]
    InvalidColor(String),
    #[error("invalid size `{0}`")]
    InvalidSize(String),
    #[error("configuration conflict: {0}")]
    Conflict(ConfigConflict),
}

pub type Result<T> = std::result::Result<T, CursorError>;

/// Modifiers that cannot run together. The later one in the list is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigConflict {
    /// Gelly deformation and size zones both drive the outer width.
    GellyWithSizeZones,
}

impl fmt::Display for ConfigConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigConflict::GellyWithSizeZones => {
                write!(f, "gelly mode cannot be combined with size zones")
            }
        }
    }
}
