use thiserror::Error;

/// Errors raised by the filter layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Unknown entity type asked from the defaults registry
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reducer input that does not satisfy the operation's contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
