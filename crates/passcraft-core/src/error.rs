use thiserror::Error;

/// Core error type shared across passcraft crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A profile field could not be interpreted.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
    /// The generation options violate internal invariants.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by passcraft crates.
pub type Result<T> = std::result::Result<T, Error>;
