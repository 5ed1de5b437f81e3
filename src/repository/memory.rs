//! Product source backed by a product list held in memory.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::domain::catalog::FilterCatalog;
use crate::domain::filter::FilterCategory;
use crate::domain::price::CustomPriceRange;
use crate::domain::product::{Product, ResultPage};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ProductQuery, ProductReader};

/// Options of one category combine with OR, categories combine with AND.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    filters: Arc<FilterCatalog>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>, filters: Arc<FilterCatalog>) -> Self {
        Self { products, filters }
    }

    /// Loads products from a JSON array file.
    pub fn from_json_file(
        path: impl AsRef<Path>,
        filters: Arc<FilterCatalog>,
    ) -> RepositoryResult<Self> {
        let raw = fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        Ok(Self::new(products, filters))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn matches(
        &self,
        product: &Product,
        facets: &FacetFilter<'_>,
        custom_range: Option<CustomPriceRange>,
    ) -> bool {
        let facets_match = facets.iter().all(|(category, keys)| match category {
            FilterCategory::Price => keys.iter().any(|key| {
                self.filters
                    .price_tier(key)
                    .is_some_and(|tier| tier.contains(product.price))
            }),
            _ => keys.iter().any(|key| product.options.contains(*key)),
        });

        facets_match && custom_range.is_none_or(|range| range.contains(product.price))
    }
}

/// Selected option keys grouped by category.
type FacetFilter<'a> = BTreeMap<FilterCategory, Vec<&'a str>>;

fn facet_filter(query: &ProductQuery) -> FacetFilter<'_> {
    let mut facets = FacetFilter::new();
    for key in &query.filters {
        match FilterCategory::split_key(key) {
            Ok((category, _)) => facets.entry(category).or_default().push(key),
            Err(err) => log::debug!("Skipping filter `{key}`: {err}"),
        }
    }
    facets
}

impl ProductReader for InMemoryCatalog {
    fn get_results(&self, query: &ProductQuery) -> RepositoryResult<ResultPage> {
        if query.per_page == 0 {
            return Err(RepositoryError::ValidationError(
                "per_page must be greater than zero".to_string(),
            ));
        }

        let facets = facet_filter(query);
        let custom_range = query.custom_range();
        let matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| self.matches(product, &facets, custom_range))
            .collect();

        let items = matching
            .iter()
            .skip(query.page.offset(query.per_page))
            .take(query.per_page)
            .map(|product| (*product).clone())
            .collect();

        Ok(ResultPage::new(items, matching.len()))
    }
}
