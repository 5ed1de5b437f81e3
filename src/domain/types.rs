//! Strongly-typed value objects used by the listing domain.
//!
//! These wrappers enforce basic invariants (e.g., a page number is never zero)
//! so that once a value reaches the controller it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided page number is zero.
    #[error("page number must be greater than zero")]
    NonPositivePage,
    /// Provided category name is not one of the known filter categories.
    #[error("unknown filter category: {0}")]
    UnknownCategory(String),
    /// Provided option key is not namespaced as `<category>.<option>`.
    #[error("malformed option key: {0}")]
    MalformedOptionKey(String),
}

/// One-based page number of the listing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page; every filter change lands here.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a page number ensuring it is greater than zero.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositivePage)
        }
    }

    /// Returns the raw `u32` backing this page number.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of items preceding this page for the given page size.
    pub fn offset(self, per_page: usize) -> usize {
        (self.0 as usize - 1).saturating_mul(per_page)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(value: PageNumber) -> Self {
        value.0
    }
}
