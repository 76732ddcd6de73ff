//! Page grouping for redaction items.
//!
//! The caller supplies a flat, ordered item list with 1-based page numbers;
//! the engine wants one pass per page. The plan partitions items by
//! zero-based page index while preserving the caller's order within each
//! page. Nothing is dropped here, items pointing past the end of the
//! document are only skipped at apply time, once the real page count is
//! known.

use std::collections::BTreeMap;

use super::item::RedactionItem;

/// Redaction items grouped by zero-based page index, apply-ready.
#[derive(Debug, Clone, Default)]
pub struct RedactionPlan {
    by_page: BTreeMap<usize, Vec<RedactionItem>>,
}

impl RedactionPlan {
    /// Groups a flat item list by page.
    ///
    /// Assumes the items have already passed validation, so every page
    /// number is at least 1.
    pub fn from_items(items: Vec<RedactionItem>) -> Self {
        let mut by_page: BTreeMap<usize, Vec<RedactionItem>> = BTreeMap::new();
        for item in items {
            let page_index = item.page as usize - 1;
            by_page.entry(page_index).or_default().push(item);
        }
        Self { by_page }
    }

    /// Iterates pages in ascending index order, items in caller order.
    pub fn pages(&self) -> impl Iterator<Item = (usize, &[RedactionItem])> {
        self.by_page.iter().map(|(idx, items)| (*idx, items.as_slice()))
    }

    /// Total number of items across all pages.
    pub fn item_count(&self) -> usize {
        self.by_page.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_page.is_empty()
    }
}
