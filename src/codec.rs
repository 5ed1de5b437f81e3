//! Translation between listing query strings and typed filter selections.
//!
//! Both directions are pure. Parsing is total: unknown keys, falsy values and
//! malformed reserved parameters fall back to defaults instead of failing.

use std::sync::Arc;

use crate::domain::catalog::FilterCatalog;
use crate::domain::filter::{FilterCategory, FilterGroups, SelectedOptions};
use crate::domain::price::CustomPriceRange;
use crate::domain::query::{CUSTOM_PRICE_KEY, PAGE_KEY, QueryMap, SELECTED_VALUE};
use crate::domain::types::PageNumber;

/// Typed view of a listing query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub groups: FilterGroups,
    pub page: PageNumber,
    pub custom_range: Option<CustomPriceRange>,
}

#[derive(Clone, Debug)]
pub struct QueryCodec {
    catalog: Arc<FilterCatalog>,
}

impl QueryCodec {
    pub fn new(catalog: Arc<FilterCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FilterCatalog {
        &self.catalog
    }

    /// Rebuilds the filter groups, page and custom range from `query`.
    pub fn parse(&self, query: &QueryMap) -> ParsedQuery {
        let mut groups = FilterGroups::default();

        for (key, value) in query.iter() {
            if key == PAGE_KEY || key == CUSTOM_PRICE_KEY {
                continue;
            }
            let Ok((category, option)) = FilterCategory::split_key(key) else {
                log::debug!("Ignoring unrecognized query parameter `{key}`");
                continue;
            };
            if !self.catalog.is_known(category, option) {
                log::debug!("Ignoring unknown {category} option `{option}`");
                continue;
            }
            if is_truthy(value) {
                groups.group_mut(category).set(key, true);
            }
        }

        ParsedQuery {
            groups,
            page: parse_page(query.get(PAGE_KEY)),
            custom_range: query
                .get(CUSTOM_PRICE_KEY)
                .and_then(CustomPriceRange::parse_token),
        }
    }

    /// Writes `selected`, `page` and `custom_range` as a canonical query map.
    pub fn serialize(
        &self,
        selected: &SelectedOptions,
        page: PageNumber,
        custom_range: Option<CustomPriceRange>,
    ) -> QueryMap {
        let mut query: QueryMap = selected
            .iter()
            .map(|key| (key.as_str(), SELECTED_VALUE))
            .collect();
        query.insert(PAGE_KEY, page.to_string());
        if let Some(range) = custom_range {
            query.insert(CUSTOM_PRICE_KEY, range.to_string());
        }
        query
    }
}

pub(crate) fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    ["true", "1", "on", "yes"]
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}

fn parse_page(raw: Option<&str>) -> PageNumber {
    raw.and_then(|raw| raw.trim().parse::<u32>().ok())
        .and_then(|page| PageNumber::new(page).ok())
        .unwrap_or_default()
}
