use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod listing;
pub mod navigation;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unknown filter option: {0}")]
    UnknownFilter(String),

    #[error("product source error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
