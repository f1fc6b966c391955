//! Paged list results.

use serde::{Deserialize, Serialize};

/// One page of results as the service returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: i64,
    /// Items per page.
    #[serde(default)]
    pub size: i64,
    /// Current page (1-indexed).
    #[serde(default = "first_page")]
    pub current: i64,
    /// Total number of pages.
    #[serde(default)]
    pub pages: i64,
}

fn first_page() -> i64 {
    1
}

impl<T> Page<T> {
    /// Total pages, derived from `total` and `size` when the service omits it.
    pub fn total_pages(&self) -> i64 {
        if self.pages > 0 {
            self.pages
        } else if self.size > 0 {
            (self.total + self.size - 1) / self.size
        } else {
            0
        }
    }

    /// Whether there's a next page.
    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// Whether there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Get start item number (1-indexed), 0 for an empty result.
    pub fn start_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            (self.current - 1) * self.size + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            self.start_item() + self.records.len() as i64 - 1
        }
    }
}
