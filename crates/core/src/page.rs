//! Pagination contract shared by every list endpoint.
//!
//! List endpoints accept `{ page, size, sortBy, sortDirection, search }`
//! and return `{ content, pageNumber, pageSize, totalElements,
//! totalPages, first, last, empty }`.

use serde::{Deserialize, Serialize};

use crate::envelope::EmptyState;

// ---------------------------------------------------------------------------
// Defaults and clamping
// ---------------------------------------------------------------------------

/// First page index (the backend is zero-based).
pub const FIRST_PAGE: u32 = 0;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum number of items per page accepted by the backend.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Clamp a requested page size into the backend's accepted range.
pub fn clamp_size(size: u32) -> u32 {
    size.clamp(1, MAX_PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// Request side
// ---------------------------------------------------------------------------

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Wire value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Query parameters for paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_direction: None,
            search: None,
        }
    }
}

impl PageQuery {
    /// First page with the default size.
    pub fn first() -> Self {
        Self::default()
    }

    /// Builder-style page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Builder-style page size, clamped to the accepted range.
    pub fn size(mut self, size: u32) -> Self {
        self.size = clamp_size(size);
        self
    }

    /// Builder-style sort field and direction.
    pub fn sort(mut self, by: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(by.into());
        self.sort_direction = Some(direction);
        self
    }

    /// Builder-style free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Render as query-string pairs in a stable order.
    ///
    /// Optional fields are omitted entirely rather than sent empty.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(direction) = self.sort_direction {
            pairs.push(("sortDirection", direction.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

// ---------------------------------------------------------------------------
// Response side
// ---------------------------------------------------------------------------

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> EmptyState for Page<T> {
    fn empty() -> Self {
        Self {
            content: Vec::new(),
            page_number: FIRST_PAGE,
            page_size: 0,
            total_elements: 0,
            total_pages: 0,
            first: true,
            last: true,
            empty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_size_bounds() {
        assert_eq!(clamp_size(0), 1);
        assert_eq!(clamp_size(20), 20);
        assert_eq!(clamp_size(500), MAX_PAGE_SIZE);
    }

    #[test]
    fn default_query_is_first_page() {
        let q = PageQuery::default();
        assert_eq!(q.page, FIRST_PAGE);
        assert_eq!(q.size, DEFAULT_PAGE_SIZE);
        assert!(q.sort_by.is_none());
    }

    #[test]
    fn query_pairs_omit_unset_fields() {
        let pairs = PageQuery::first().to_query_pairs();
        assert_eq!(
            pairs,
            vec![("page", "0".to_string()), ("size", "20".to_string())]
        );
    }

    #[test]
    fn query_pairs_include_sort_and_search() {
        let pairs = PageQuery::first()
            .sort("price", SortDirection::Desc)
            .search("mug")
            .to_query_pairs();
        assert!(pairs.contains(&("sortBy", "price".to_string())));
        assert!(pairs.contains(&("sortDirection", "DESC".to_string())));
        assert!(pairs.contains(&("search", "mug".to_string())));
    }

    #[test]
    fn page_uses_camel_case_on_the_wire() {
        let json = r#"{
            "content": [1, 2],
            "pageNumber": 0,
            "pageSize": 2,
            "totalElements": 5,
            "totalPages": 3,
            "first": true,
            "last": false,
            "empty": false
        }"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.total_elements, 5);
        assert!(!page.last);
    }

    #[test]
    fn empty_page_is_marked_empty() {
        let page = Page::<i32>::empty();
        assert!(page.empty);
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
    }
}
