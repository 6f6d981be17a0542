use serde::Deserialize;

use bookshelf_core::storage::Page;

/// Query parameters for list endpoints.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    /// Number of rows to pass over before the first returned row.
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of rows to return (default: 10).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

impl From<Pagination> for Page {
    fn from(pagination: Pagination) -> Self {
        Page::new(pagination.skip, pagination.limit)
    }
}
