//! Price constraints: either one discrete tier or one custom range.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::domain::filter::FilterGroup;

/// Inclusive price bounds entered by the shopper.
///
/// Bounds given in reverse order are swapped, so `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CustomPriceRange {
    min: u32,
    max: u32,
}

impl CustomPriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub const fn min(self) -> u32 {
        self.min
    }

    pub const fn max(self) -> u32 {
        self.max
    }

    pub fn contains(self, price: u32) -> bool {
        (self.min..=self.max).contains(&price)
    }

    /// Parses the `<min>,<max>` wire token.
    ///
    /// Returns `None` unless the token splits into exactly two base-10
    /// non-negative integers.
    pub fn parse_token(token: &str) -> Option<Self> {
        let mut bounds = token.split(',').map(|bound| bound.trim().parse::<u32>());
        match (bounds.next(), bounds.next(), bounds.next()) {
            (Some(Ok(min)), Some(Ok(max)), None) => Some(Self::new(min, max)),
            _ => None,
        }
    }
}

impl Display for CustomPriceRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

/// The single price constraint applied to the listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PriceSelection {
    #[default]
    Unconstrained,
    /// One discrete tier, holding its option key (e.g. `price.under200`).
    Tier(String),
    Custom(CustomPriceRange),
}

impl PriceSelection {
    pub fn tier(&self) -> Option<&str> {
        match self {
            PriceSelection::Tier(key) => Some(key),
            _ => None,
        }
    }

    pub fn custom_range(&self) -> Option<CustomPriceRange> {
        match self {
            PriceSelection::Custom(range) => Some(*range),
            _ => None,
        }
    }

    /// Picks the tier to keep out of the tiers present in a query string.
    ///
    /// Tiers form a single-choice group: when several arrive together, the
    /// one replacing `previous` wins; otherwise the first one does.
    pub fn from_tiers(tiers: &FilterGroup, previous: Option<&str>) -> Self {
        let mut candidates = tiers.selected();
        let Some(first) = candidates.next() else {
            return PriceSelection::Unconstrained;
        };

        let chosen = std::iter::once(first)
            .chain(candidates)
            .find(|key| Some(*key) != previous)
            .unwrap_or(first);
        PriceSelection::Tier(chosen.to_string())
    }

    /// The per-option flag form of the discrete part of this selection.
    pub fn to_group(&self) -> FilterGroup {
        self.tier().into_iter().collect()
    }
}
