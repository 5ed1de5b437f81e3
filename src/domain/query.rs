//! Flat string map mirroring the listing URL query string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved key holding the one-based page number.
pub const PAGE_KEY: &str = "page";
/// Reserved key holding the `<min>,<max>` custom price token.
pub const CUSTOM_PRICE_KEY: &str = "customprice";
/// Value written for every selected option.
pub const SELECTED_VALUE: &str = "true";

/// Query parameters of the listing URL, one value per key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryMap(BTreeMap<String, String>);

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is accepted. When a key repeats, the last value wins.
    /// Undecodable input yields an empty map.
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        match serde_html_form::from_str::<Vec<(String, String)>>(raw) {
            Ok(pairs) => pairs.into_iter().collect(),
            Err(err) => {
                log::debug!("Ignoring undecodable query string `{raw}`: {err}");
                Self::default()
            }
        }
    }

    /// Encodes the map as a query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(&self.0).unwrap_or_else(|err| {
            log::error!("Failed to encode query string: {err}");
            String::new()
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
