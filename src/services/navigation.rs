//! Outbound side of the router contract.
//!
//! The controller never navigates by itself: it hands a [`NavigationTarget`]
//! to a [`Navigator`], and the router feeds the resulting query string back
//! through `FilterController::on_query_changed`.

use std::cell::RefCell;
use std::sync::mpsc::Sender;

use serde::Serialize;

use crate::domain::query::QueryMap;

/// Listing path plus the query string to navigate to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationTarget {
    pub path: String,
    pub query: QueryMap,
}

impl NavigationTarget {
    pub fn new(path: impl Into<String>, query: QueryMap) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Relative URL, e.g. `/laptops?brand.acme=true&page=1`.
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.to_query_string())
        }
    }
}

pub trait Navigator {
    fn navigate(&self, target: NavigationTarget);
}

/// Keeps every requested target; used when the caller performs the actual
/// navigation afterwards, such as an HTTP redirect.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    targets: RefCell<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<NavigationTarget> {
        self.targets.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: NavigationTarget) {
        self.targets.borrow_mut().push(target);
    }
}

impl Navigator for Sender<NavigationTarget> {
    fn navigate(&self, target: NavigationTarget) {
        if let Err(err) = self.send(target) {
            log::error!("Router is gone, dropping navigation to {}", err.0.to_url());
        }
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, target: NavigationTarget) {
        (**self).navigate(target)
    }
}
