use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::types::PageNumber;

/// Page links kept at each edge and around the current page.
const EDGE_LINKS: usize = 2;
const LINKS_BEFORE_CURRENT: usize = 2;
const LINKS_AFTER_CURRENT: usize = 4;

/// Page links to render, `None` marking a gap between runs of pages.
///
/// A `current` page past the end is treated as the last page, so the
/// links always reach `total_pages`.
fn page_links(total_pages: usize, current: PageNumber) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let current = (current.get() as usize).min(total_pages);
    let window = current.saturating_sub(LINKS_BEFORE_CURRENT).max(1)
        ..=(current + LINKS_AFTER_CURRENT).min(total_pages);
    let shown: BTreeSet<usize> = (1..=EDGE_LINKS.min(total_pages))
        .chain(window)
        .chain(total_pages.saturating_sub(EDGE_LINKS - 1).max(1)..=total_pages)
        .collect();

    let mut links = Vec::with_capacity(shown.len() + 2);
    let mut previous = 0;
    for page in shown {
        if page > previous + 1 {
            links.push(None);
        }
        links.push(Some(page));
        previous = page;
    }
    links
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    /// Wraps one page of `items` out of `total_items` split into pages of
    /// `per_page`.
    pub fn new(items: Vec<T>, page: PageNumber, total_items: usize, per_page: usize) -> Self {
        let total_pages = total_items.div_ceil(per_page.max(1));

        Self {
            items,
            pages: page_links(total_pages, page),
            page: page.get() as usize,
            total_items,
        }
    }
}
