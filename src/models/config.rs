//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::catalog::FilterCatalog;
use crate::dto::listing::RatingConfig;
use crate::services::listing::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_LISTING_PATH, ListingSettings};

fn default_listing_path() -> String {
    DEFAULT_LISTING_PATH.to_string()
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the listing server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    #[serde(default = "default_listing_path")]
    pub listing_path: String,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// JSON file holding the products served by the listing.
    pub catalog_path: String,
    #[serde(default)]
    pub filters: FilterCatalog,
    #[serde(default)]
    pub rating: RatingConfig,
}

impl ServerConfig {
    pub fn listing_settings(&self) -> ListingSettings {
        ListingSettings {
            path: self.listing_path.trim_end_matches('/').to_string(),
            items_per_page: self.items_per_page.max(1),
        }
    }
}
