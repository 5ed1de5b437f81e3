//! Models loaded from outside the listing domain.

pub mod config;
