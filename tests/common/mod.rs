#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use shop_catalog::codec::QueryCodec;
use shop_catalog::domain::catalog::FilterCatalog;
use shop_catalog::domain::product::{Product, ResultPage};
use shop_catalog::domain::query::QueryMap;
use shop_catalog::repository::errors::RepositoryResult;
use shop_catalog::repository::{ProductQuery, ProductReader};
use shop_catalog::services::listing::{FilterController, ListingSettings};
use shop_catalog::services::navigation::RecordingNavigator;

/// Product source replaying queued outcomes, then empty pages.
#[derive(Default)]
pub struct ScriptedReader {
    pub queries: RefCell<Vec<ProductQuery>>,
    outcomes: RefCell<VecDeque<RepositoryResult<ResultPage>>>,
}

impl ScriptedReader {
    pub fn respond(&self, outcome: RepositoryResult<ResultPage>) {
        self.outcomes.borrow_mut().push_back(outcome);
    }

    pub fn last_query(&self) -> ProductQuery {
        self.queries
            .borrow()
            .last()
            .cloned()
            .expect("no product query was sent")
    }
}

impl ProductReader for ScriptedReader {
    fn get_results(&self, query: &ProductQuery) -> RepositoryResult<ResultPage> {
        self.queries.borrow_mut().push(query.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ResultPage::default()))
    }
}

pub type TestController<'a> = FilterController<&'a ScriptedReader, RecordingNavigator>;

pub fn codec() -> QueryCodec {
    QueryCodec::new(Arc::new(FilterCatalog::default()))
}

pub fn controller(reader: &ScriptedReader) -> TestController<'_> {
    FilterController::new(
        codec(),
        reader,
        RecordingNavigator::default(),
        ListingSettings::default(),
    )
}

pub fn query(raw: &str) -> QueryMap {
    QueryMap::from_query_string(raw)
}

/// Query string the controller last navigated to.
pub fn navigated_query(controller: &TestController<'_>) -> QueryMap {
    controller
        .navigator()
        .last()
        .expect("controller did not navigate")
        .query
}

pub fn product(id: u32, price: u32, options: &[&str]) -> Product {
    Product {
        id,
        name: format!("Laptop #{id}"),
        price,
        rating: 4.0,
        options: options.iter().map(|option| option.to_string()).collect(),
    }
}
