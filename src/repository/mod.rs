use std::sync::Arc;

use crate::domain::filter::SelectedOptions;
use crate::domain::price::CustomPriceRange;
use crate::domain::product::ResultPage;
use crate::domain::types::PageNumber;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use memory::InMemoryCatalog;

/// Request sent to a product source for one listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: PageNumber,
    pub per_page: usize,
    pub min_custom: Option<u32>,
    pub max_custom: Option<u32>,
    /// Selected option keys, all implicitly `true`.
    pub filters: SelectedOptions,
}

impl ProductQuery {
    pub fn new(page: PageNumber, per_page: usize) -> Self {
        Self {
            page,
            per_page,
            min_custom: None,
            max_custom: None,
            filters: SelectedOptions::new(),
        }
    }

    pub fn custom_price(mut self, range: Option<CustomPriceRange>) -> Self {
        self.min_custom = range.map(CustomPriceRange::min);
        self.max_custom = range.map(CustomPriceRange::max);
        self
    }

    pub fn filters(mut self, filters: SelectedOptions) -> Self {
        self.filters = filters;
        self
    }

    /// Custom bounds as a range when both are set.
    pub fn custom_range(&self) -> Option<CustomPriceRange> {
        Some(CustomPriceRange::new(self.min_custom?, self.max_custom?))
    }
}

pub trait ProductReader {
    fn get_results(&self, query: &ProductQuery) -> RepositoryResult<ResultPage>;
}

/// Product source shared between HTTP workers.
pub type SharedProductReader = dyn ProductReader + Send + Sync;

impl<T: ProductReader + ?Sized> ProductReader for Arc<T> {
    fn get_results(&self, query: &ProductQuery) -> RepositoryResult<ResultPage> {
        (**self).get_results(query)
    }
}

impl<T: ProductReader + ?Sized> ProductReader for &T {
    fn get_results(&self, query: &ProductQuery) -> RepositoryResult<ResultPage> {
        (**self).get_results(query)
    }
}
