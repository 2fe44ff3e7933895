//! Pagination types for list endpoints

use serde::{Deserialize, Serialize};

/// Default page number (1-indexed)
const DEFAULT_PAGE: u64 = 1;

/// Default rows per page
const DEFAULT_LIMIT: u64 = 5;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u64,
    /// Rows per page
    pub limit: u64,
}

impl Pagination {
    /// Create pagination, falling back to defaults for zero values.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Calculate SQL OFFSET value, saturating instead of wrapping.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Wrap one page of rows with its metadata.
    pub fn paginate<T>(&self, data: Vec<T>, total: i64) -> Paginated<T> {
        Paginated {
            data,
            meta: PageMeta {
                total,
                page: self.page,
                limit: self.limit,
            },
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Rows for the current page
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Page metadata echoed back to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total row count across all pages
    pub total: i64,
    pub page: u64,
    pub limit: u64,
}

/// Query parameters for pagination.
///
/// Values are kept as raw strings so that garbage (`?page=abc`, `?limit=-3`)
/// falls back to the default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationParams {
    /// Collect `page` and `limit` from decoded query pairs.
    ///
    /// A repeated key keeps its first value; other keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            parse_positive(params.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            parse_positive(params.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
        )
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|v| *v > 0)
}
