//! Form definitions backing the listing routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod listing;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("custom price needs both a minimum and a maximum")]
    IncompletePriceRange,
}
