//! The set of filter options the listing recognizes.

use serde::{Deserialize, Serialize};

use crate::domain::filter::FilterCategory;

/// A discrete price tier with bounds `[min, max)`; a missing bound is open.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceTier {
    pub id: String,
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
}

impl PriceTier {
    pub fn new(id: impl Into<String>, min: Option<u32>, max: Option<u32>) -> Self {
        Self {
            id: id.into(),
            min,
            max,
        }
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price < max)
    }
}

/// Option slugs accepted for each category. Keys outside this catalog are
/// dropped when a query string is parsed.
///
/// A category missing from a deserialized catalog has no options; the
/// laptop defaults only apply when no catalog is configured at all.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCatalog {
    #[serde(default)]
    pub brand: Vec<String>,
    #[serde(default)]
    pub os: Vec<String>,
    #[serde(default)]
    pub price: Vec<PriceTier>,
    #[serde(default)]
    pub processor: Vec<String>,
    #[serde(default)]
    pub ram: Vec<String>,
    #[serde(default)]
    pub storage: Vec<String>,
}

impl FilterCatalog {
    /// Option slugs of `category` in display order.
    pub fn options(&self, category: FilterCategory) -> Vec<&str> {
        let slugs = match category {
            FilterCategory::Brand => &self.brand,
            FilterCategory::OperatingSystem => &self.os,
            FilterCategory::Processor => &self.processor,
            FilterCategory::Ram => &self.ram,
            FilterCategory::Storage => &self.storage,
            FilterCategory::Price => {
                return self.price.iter().map(|tier| tier.id.as_str()).collect();
            }
        };
        slugs.iter().map(String::as_str).collect()
    }

    pub fn is_known(&self, category: FilterCategory, option: &str) -> bool {
        self.options(category).contains(&option)
    }

    /// Looks up a tier by its full option key, e.g. `price.under200`.
    pub fn price_tier(&self, key: &str) -> Option<&PriceTier> {
        let (category, option) = FilterCategory::split_key(key).ok()?;
        if category != FilterCategory::Price {
            return None;
        }
        self.price.iter().find(|tier| tier.id == option)
    }
}

fn slugs(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Default for FilterCatalog {
    fn default() -> Self {
        Self {
            brand: slugs(&["acer", "acme", "apple", "asus", "dell", "hp", "lenovo", "msi"]),
            os: slugs(&["windows", "macos", "linux", "chromeos"]),
            price: vec![
                PriceTier::new("under200", None, Some(200)),
                PriceTier::new("200to500", Some(200), Some(500)),
                PriceTier::new("500to1000", Some(500), Some(1000)),
                PriceTier::new("over1000", Some(1000), None),
            ],
            processor: slugs(&[
                "intel-i3", "intel-i5", "intel-i7", "intel-i9", "ryzen-5", "ryzen-7", "apple-m",
            ]),
            ram: slugs(&["4gb", "8gb", "16gb", "32gb"]),
            storage: slugs(&["128gb", "256gb", "512gb", "1tb"]),
        }
    }
}
