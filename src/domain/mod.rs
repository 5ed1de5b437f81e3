//! Domain types shared by the codec, the listing controller and data sources.

pub mod catalog;
pub mod filter;
pub mod price;
pub mod product;
pub mod query;
pub mod types;
