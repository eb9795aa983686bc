//! Request types for the search service.

use serde::Serialize;

/// Sort key for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSort {
    /// Sort by relevance score
    Score,
    /// Sort by message timestamp
    Timestamp,
}

/// Sort direction for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSortDirection {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Search query with shared options
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Search query, including any modifiers (`in:#channel`, `from:@user`)
    pub query: String,
    /// Sort key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SearchSortDirection>,
    /// Wrap matched terms in highlight markers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
}

impl SearchRequest {
    /// Create a new request
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            sort: None,
            sort_dir: None,
            highlight: None,
            count: None,
            page: None,
        }
    }

    /// Set the sort key
    pub fn sort(mut self, sort: SearchSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the sort direction
    pub fn sort_dir(mut self, dir: SearchSortDirection) -> Self {
        self.sort_dir = Some(dir);
        self
    }

    /// Wrap matched terms in highlight markers
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// Set results per page
    pub fn count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the page number
    pub fn page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }
}
