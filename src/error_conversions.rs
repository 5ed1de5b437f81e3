//! Error conversion glue between layers.
//!
//! The domain layer must not depend on form error types, so the conversions
//! live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;

impl From<TypeConstraintError> for FormError {
    fn from(val: TypeConstraintError) -> Self {
        FormError::InvalidValue(val.to_string())
    }
}
