use serde::Serialize;
use tracing::warn;

/// Results per page
pub const PAGE_SIZE: u64 = 5;

pub const PAGE: &str = "page";

/// One-based window over a filtered, sorted result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self { number: 1 }
    }
}

impl Page {
    /// Pages below 1 are clamped to 1
    pub fn new(number: u64) -> Self {
        Self {
            number: number.max(1),
        }
    }

    /// Parse the `page` parameter, falling back to page 1
    pub fn from_param(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match raw.trim().parse::<u64>() {
            Ok(number) => Self::new(number),
            Err(e) => {
                warn!("Invalid page {raw:?}, using page 1: {e}");
                Self::default()
            }
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> u64 {
        PAGE_SIZE
    }

    pub fn skip(&self) -> u64 {
        (self.number - 1).saturating_mul(PAGE_SIZE)
    }
}

/// Pagination metadata returned with each page
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

impl Pagination {
    pub fn new(total: u64, page: Page) -> Self {
        Self {
            total,
            page: page.number(),
            pages: total.div_ceil(page.size()),
        }
    }
}

/// A page of items plus pagination metadata
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResult<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
