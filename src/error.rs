//! Load Errors

use thiserror::Error;

/// Failure of the startup seed load, the only fallible operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Failed to fetch tasks. Please try again later.")]
    Status(u16),
    #[error("{0}")]
    Network(String),
    #[error("Unexpected task data: {0}")]
    Decode(String),
}
