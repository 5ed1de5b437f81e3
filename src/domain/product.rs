use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Price in whole currency units.
    pub price: u32,
    /// Average review score shown by the read-only rating widget.
    #[serde(default)]
    pub rating: f32,
    /// Non-price option keys the product satisfies, e.g. `brand.acme`.
    #[serde(default)]
    pub options: BTreeSet<String>,
}

/// One page of products matching a filter, with the overall match count.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultPage {
    pub items: Vec<Product>,
    pub total: usize,
}

impl ResultPage {
    pub fn new(items: Vec<Product>, total: usize) -> Self {
        Self { items, total }
    }
}
