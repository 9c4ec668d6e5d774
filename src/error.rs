use thiserror::Error;

/// Library error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Inconsistent data: {0}")]
    Inconsistent(String),
}
