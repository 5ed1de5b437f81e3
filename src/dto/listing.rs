//! Payloads returned by the listing endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::filter::SelectedOptions;
use crate::domain::price::CustomPriceRange;
use crate::domain::product::Product;
use crate::pagination::Paginated;

/// Settings of the read-only star rating shown next to each product.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RatingConfig {
    pub max: u8,
    pub readonly: bool,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            max: 5,
            readonly: true,
        }
    }
}

/// Snapshot of the listing built by the filter controller.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListingView {
    pub products: Paginated<Product>,
    /// Set when the last successful fetch matched nothing.
    pub no_results: bool,
    pub loading: bool,
    /// Set when the last fetch failed; distinct from an empty result.
    pub error: Option<String>,
    pub selected: SelectedOptions,
    pub custom_range: Option<CustomPriceRange>,
    /// Canonical query string for sharing or bookmarking this view.
    pub query: String,
}

/// Listing view together with the presentation settings it is shown with.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListingPage {
    #[serde(flatten)]
    pub listing: ListingView,
    pub rating: RatingConfig,
}
