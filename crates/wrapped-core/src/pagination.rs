//! Generic pagination utilities.
//!
//! Splits an item list into fixed-size, order-preserving pages. This is a pure
//! data component that knows nothing about rendering; markup and transitions
//! live in the web crate.

use std::ops::Range;
use std::str::FromStr;

use crate::{WrappedError, WrappedResult};

/// Direction of a single page step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageDirection {
    Prev,
    Next,
}

impl PageDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageDirection::Prev => "prev",
            PageDirection::Next => "next",
        }
    }
}

impl FromStr for PageDirection {
    type Err = WrappedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(PageDirection::Prev),
            "next" => Ok(PageDirection::Next),
            other => Err(WrappedError::Validation(format!(
                "unknown page direction: {other}"
            ))),
        }
    }
}

/// Information about one page of a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (0-indexed).
    pub current_page: usize,
    /// Total number of pages, never zero.
    pub total_pages: usize,
    /// Global item indices covered by this page.
    pub range: Range<usize>,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

impl PageInfo {
    /// 1-based "current / total" indicator text.
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.current_page + 1, self.total_pages)
    }
}

/// Fixed-size page partitioning of a list of `total_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    total_items: usize,
    page_size: usize,
}

impl PageLayout {
    pub fn new(total_items: usize, page_size: usize) -> WrappedResult<Self> {
        if page_size == 0 {
            return Err(WrappedError::Validation(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            total_items,
            page_size,
        })
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages. An empty list still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Global index range of `page`, clamped to the item count.
    pub fn page_range(&self, page: usize) -> Range<usize> {
        let start = (page * self.page_size).min(self.total_items);
        let end = ((page + 1) * self.page_size).min(self.total_items);
        start..end
    }

    pub fn page_info(&self, page: usize) -> PageInfo {
        let total_pages = self.total_pages();
        let current_page = page.min(total_pages - 1);
        PageInfo {
            current_page,
            total_pages,
            range: self.page_range(current_page),
            has_prev: current_page > 0,
            has_next: current_page + 1 < total_pages,
        }
    }

    /// Split `items` into pages. Always yields `total_pages()` slices, the
    /// single page of an empty list being empty.
    pub fn chunks<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        (0..self.total_pages())
            .map(|page| &items[self.page_range(page)])
            .collect()
    }

    /// The page reached by stepping once from `current`, if that step is legal.
    pub fn step(&self, current: usize, direction: PageDirection) -> Option<usize> {
        match direction {
            PageDirection::Prev => current.checked_sub(1),
            PageDirection::Next => {
                let next = current + 1;
                (next < self.total_pages()).then_some(next)
            }
        }
    }
}
