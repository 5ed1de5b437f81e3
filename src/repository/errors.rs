use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Product source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed product data: {0}")]
    Malformed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Malformed(err.to_string())
    }
}
