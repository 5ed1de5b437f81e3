//! Facet categories and the groups of options selected within them.
//!
//! Option keys are namespaced on the wire as `<category>.<option>` (for
//! example `brand.acme` or `ram.16gb`), so keys of different categories can
//! never collide once merged into a single set.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Flat set of selected option keys across every category.
pub type SelectedOptions = BTreeSet<String>;

/// Independent facet a shopper can filter the listing by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Brand,
    #[serde(rename = "os")]
    OperatingSystem,
    Price,
    Processor,
    Ram,
    Storage,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 6] = [
        FilterCategory::Brand,
        FilterCategory::OperatingSystem,
        FilterCategory::Price,
        FilterCategory::Processor,
        FilterCategory::Ram,
        FilterCategory::Storage,
    ];

    /// Prefix used for the option keys of this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            FilterCategory::Brand => "brand",
            FilterCategory::OperatingSystem => "os",
            FilterCategory::Price => "price",
            FilterCategory::Processor => "processor",
            FilterCategory::Ram => "ram",
            FilterCategory::Storage => "storage",
        }
    }

    /// Splits `brand.acme` into its category and the `acme` option slug.
    pub fn split_key(key: &str) -> Result<(FilterCategory, &str), TypeConstraintError> {
        let (prefix, option) = key
            .split_once('.')
            .filter(|(_, option)| !option.is_empty())
            .ok_or_else(|| TypeConstraintError::MalformedOptionKey(key.to_string()))?;
        Ok((prefix.parse()?, option))
    }
}

impl Display for FilterCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| TypeConstraintError::UnknownCategory(s.to_string()))
    }
}

/// Options selected within one category.
///
/// Only selected options are stored: clearing an option removes it, so an
/// unselected option and an absent one are indistinguishable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterGroup {
    selected: BTreeSet<String>,
}

impl FilterGroup {
    /// Marks `key` as selected or not. Returns `true` when the group changed.
    pub fn set(&mut self, key: impl Into<String>, selected: bool) -> bool {
        let key = key.into();
        if selected {
            self.selected.insert(key)
        } else {
            self.selected.remove(&key)
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    /// Selected keys in lexical order.
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FilterGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Filter groups keyed by category. Categories without a group have nothing
/// selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterGroups(BTreeMap<FilterCategory, FilterGroup>);

impl FilterGroups {
    pub fn get(&self, category: FilterCategory) -> Option<&FilterGroup> {
        self.0.get(&category)
    }

    /// Mutable access to the group of `category`, creating it when missing.
    pub fn group_mut(&mut self, category: FilterCategory) -> &mut FilterGroup {
        self.0.entry(category).or_default()
    }

    /// Removes and returns the group of `category`.
    pub fn take(&mut self, category: FilterCategory) -> FilterGroup {
        self.0.remove(&category).unwrap_or_default()
    }

    /// Selected keys of one category, empty when nothing is selected.
    pub fn selected_in(&self, category: FilterCategory) -> Vec<&str> {
        self.get(category)
            .map(|group| group.selected().collect())
            .unwrap_or_default()
    }

    /// Collapses every group into one flat set of selected keys.
    pub fn merged(&self) -> SelectedOptions {
        self.0
            .values()
            .flat_map(|group| group.selected().map(str::to_string))
            .collect()
    }
}
