//! Filter controller for the product listing.
//!
//! The controller owns the filter selections, the price constraint and the
//! page number of one listing view. Inbound query strings rebuild that state
//! through [`FilterController::on_query_changed`]; shopper interactions go
//! through [`FilterController::request_filter_change`], which resets the page,
//! keeps the price constraint single and asks the [`Navigator`] to move to the
//! new query string.

use crate::codec::{ParsedQuery, QueryCodec};
use crate::domain::filter::{FilterCategory, FilterGroups, SelectedOptions};
use crate::domain::price::{CustomPriceRange, PriceSelection};
use crate::domain::product::{Product, ResultPage};
use crate::domain::query::QueryMap;
use crate::domain::types::PageNumber;
use crate::dto::listing::ListingView;
use crate::pagination::Paginated;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ProductQuery, ProductReader};
use crate::services::navigation::{NavigationTarget, Navigator};
use crate::services::{ServiceError, ServiceResult};

pub const DEFAULT_LISTING_PATH: &str = "/laptops";
pub const DEFAULT_ITEMS_PER_PAGE: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSettings {
    /// Route the listing lives at; navigation targets point here.
    pub path: String,
    pub items_per_page: usize,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_LISTING_PATH.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// A shopper interaction with the listing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    /// A filter checkbox or price tier option was (de)selected.
    Option { key: String, selected: bool },
    /// A custom price range was applied.
    CustomPrice(CustomPriceRange),
    /// The custom price range was removed.
    ClearCustomPrice,
    /// The pagination control moved to another page.
    Page(PageNumber),
}

impl FilterChange {
    pub fn toggle(key: impl Into<String>, selected: bool) -> Self {
        FilterChange::Option {
            key: key.into(),
            selected,
        }
    }
}

/// The control a change originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangedKey {
    Category(FilterCategory),
    CustomPrice,
    /// Only the page moved; filters are untouched.
    Pagination,
}

/// Filter selections, price constraint and page of one listing view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Groups of every category except price.
    facets: FilterGroups,
    price: PriceSelection,
    page: PageNumber,
}

impl FilterState {
    fn from_parsed(mut parsed: ParsedQuery, previous: &PriceSelection) -> Self {
        let tiers = parsed.groups.take(FilterCategory::Price);
        let price = match parsed.custom_range {
            Some(range) => {
                if !tiers.is_empty() {
                    log::debug!("Custom price range {range} overrides price tiers in query");
                }
                PriceSelection::Custom(range)
            }
            None => PriceSelection::from_tiers(&tiers, previous.tier()),
        };

        Self {
            facets: parsed.groups,
            price,
            page: parsed.page,
        }
    }

    pub fn price(&self) -> &PriceSelection {
        &self.price
    }

    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Selected keys of one category, the price tier included.
    pub fn selected_in(&self, category: FilterCategory) -> Vec<&str> {
        match category {
            FilterCategory::Price => self.price.tier().into_iter().collect(),
            _ => self.facets.selected_in(category),
        }
    }

    /// Every selected option key in one flat set.
    pub fn merged(&self) -> SelectedOptions {
        let mut merged = self.facets.merged();
        merged.extend(self.price.to_group().selected().map(str::to_string));
        merged
    }

    fn apply(&mut self, change: FilterChange, category: Option<FilterCategory>) {
        match change {
            FilterChange::Option { key, selected } => match category {
                Some(FilterCategory::Price) => {
                    if selected {
                        // A tier replaces both the active tier and any custom range.
                        self.price = PriceSelection::Tier(key);
                    } else if self.price.tier() == Some(key.as_str()) {
                        self.price = PriceSelection::Unconstrained;
                    }
                }
                Some(category) => {
                    self.facets.group_mut(category).set(key, selected);
                }
                None => {}
            },
            FilterChange::CustomPrice(range) => self.price = PriceSelection::Custom(range),
            FilterChange::ClearCustomPrice => {
                if self.price.custom_range().is_some() {
                    self.price = PriceSelection::Unconstrained;
                }
            }
            FilterChange::Page(page) => self.page = page,
        }
    }
}

/// Outcome of the latest product fetch as shown to the shopper.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingResults {
    pub items: Vec<Product>,
    pub total: usize,
    pub no_results: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ListingResults {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            no_results: false,
            loading: true,
            error: None,
        }
    }
}

/// Ties a product fetch to the state that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
    query: ProductQuery,
}

impl RefreshTicket {
    pub fn query(&self) -> &ProductQuery {
        &self.query
    }
}

pub struct FilterController<R, N> {
    codec: QueryCodec,
    reader: R,
    navigator: N,
    settings: ListingSettings,
    state: FilterState,
    results: ListingResults,
    generation: u64,
}

impl<R, N> FilterController<R, N>
where
    R: ProductReader,
    N: Navigator,
{
    pub fn new(codec: QueryCodec, reader: R, navigator: N, settings: ListingSettings) -> Self {
        Self {
            codec,
            reader,
            navigator,
            settings,
            state: FilterState::default(),
            results: ListingResults::default(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn results(&self) -> &ListingResults {
        &self.results
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Rebuilds the filter state from `query` without fetching products.
    pub fn load_query(&mut self, query: &QueryMap) {
        let parsed = self.codec.parse(query);
        self.state = FilterState::from_parsed(parsed, &self.state.price);
    }

    /// Handles a new inbound query string: rebuild state, then fetch.
    pub fn on_query_changed(&mut self, query: &QueryMap) -> ServiceResult<()> {
        self.load_query(query);
        self.refresh_results()
    }

    /// Applies a shopper interaction and navigates to the resulting query.
    ///
    /// Any filter change sends the shopper back to the first page. Products
    /// are not fetched here; navigation comes back through
    /// [`Self::on_query_changed`].
    pub fn request_filter_change(&mut self, change: FilterChange) -> ServiceResult<()> {
        let changed = self.changed_key(&change)?;

        let category = match changed {
            ChangedKey::Category(category) => Some(category),
            _ => None,
        };
        self.state.apply(change, category);
        if changed != ChangedKey::Pagination {
            self.state.page = PageNumber::FIRST;
        }

        let target = NavigationTarget::new(self.settings.path.clone(), self.current_query());
        log::debug!("Navigating to {}", target.to_url());
        self.navigator.navigate(target);
        Ok(())
    }

    /// Canonical query map of the current state.
    pub fn current_query(&self) -> QueryMap {
        self.codec.serialize(
            &self.state.merged(),
            self.state.page,
            self.state.price.custom_range(),
        )
    }

    /// Marks the listing as loading and returns the fetch to perform.
    ///
    /// Only the most recently issued ticket is accepted by
    /// [`Self::complete_refresh`].
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.results.loading = true;

        let query = ProductQuery::new(self.state.page, self.settings.items_per_page)
            .custom_price(self.state.price.custom_range())
            .filters(self.state.merged());

        RefreshTicket {
            generation: self.generation,
            query,
        }
    }

    /// Stores the outcome of a fetch. Outcomes of superseded tickets are
    /// dropped.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        outcome: RepositoryResult<ResultPage>,
    ) -> ServiceResult<()> {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale results of refresh #{} (latest is #{})",
                ticket.generation,
                self.generation
            );
            return Ok(());
        }

        self.results.loading = false;
        match outcome {
            Ok(page) => {
                self.results.no_results = page.items.is_empty();
                self.results.items = page.items;
                self.results.total = page.total;
                self.results.error = None;
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to load products: {err}");
                self.results.items.clear();
                self.results.total = 0;
                self.results.no_results = false;
                self.results.error = Some(err.to_string());
                Err(ServiceError::from(err))
            }
        }
    }

    /// Fetches the current page of products from the product source.
    pub fn refresh_results(&mut self) -> ServiceResult<()> {
        let ticket = self.begin_refresh();
        let outcome = self.reader.get_results(ticket.query());
        self.complete_refresh(ticket, outcome)
    }

    pub fn listing_view(&self) -> ListingView {
        ListingView {
            products: Paginated::new(
                self.results.items.clone(),
                self.state.page,
                self.results.total,
                self.settings.items_per_page,
            ),
            no_results: self.results.no_results,
            loading: self.results.loading,
            error: self.results.error.clone(),
            selected: self.state.merged(),
            custom_range: self.state.price.custom_range(),
            query: self.current_query().to_query_string(),
        }
    }

    fn changed_key(&self, change: &FilterChange) -> ServiceResult<ChangedKey> {
        match change {
            FilterChange::Option { key, .. } => {
                let known = FilterCategory::split_key(key)
                    .ok()
                    .filter(|(category, option)| self.codec.catalog().is_known(*category, option));
                match known {
                    Some((category, _)) => Ok(ChangedKey::Category(category)),
                    None => Err(ServiceError::UnknownFilter(key.clone())),
                }
            }
            FilterChange::CustomPrice(_) | FilterChange::ClearCustomPrice => {
                Ok(ChangedKey::CustomPrice)
            }
            FilterChange::Page(_) => Ok(ChangedKey::Pagination),
        }
    }
}
