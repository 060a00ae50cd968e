//! List response types

use serde::{Deserialize, Serialize};

/// One page of a list endpoint
///
/// ```json
/// { "list": [ ... ], "total": 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedList<T> {
    #[serde(rename = "list", alias = "data")]
    pub items: Vec<T>,
    /// Total rows matching the filters, across all pages
    #[serde(default)]
    pub total: u64,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Number of pages for the given page size (unpaged is always one page)
    pub fn total_pages(&self, limit: i32) -> u32 {
        if limit <= 0 {
            return 1;
        }
        self.total.div_ceil(limit as u64) as u32
    }
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}
