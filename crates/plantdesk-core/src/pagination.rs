//! Page requests and the paginated response envelope.
//!
//! Every list endpoint answers with the same shape:
//!
//! ```json
//! {
//!   "data": [...],
//!   "meta": {
//!     "total": 25,
//!     "page": 2,
//!     "limit": 10,
//!     "totalPages": 3
//!   }
//! }
//! ```
//!
//! `totalPages` is always `ceil(total / limit)` and `data` never holds more
//! than `limit` items.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::AppError;
use crate::query::SortOrder;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// A validated `(page, limit)` pair.
///
/// `page >= 1` and `1 <= limit <= MAX_LIMIT` hold for every value of this
/// type, so offset and page-count arithmetic never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Result<Self, AppError> {
        if page < 1 {
            return Err(AppError::validation("page", "page must be at least 1"));
        }
        if limit < 1 {
            return Err(AppError::validation("limit", "limit must be at least 1"));
        }
        if limit > i64::from(MAX_LIMIT) {
            return Err(AppError::validation(
                "limit",
                format!("limit exceeds maximum {}", MAX_LIMIT),
            ));
        }
        let page = u32::try_from(page)
            .map_err(|_| AppError::validation("page", "page is out of range"))?;

        Ok(Self {
            page,
            limit: limit as u32,
        })
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip before this page starts.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// `ceil(total / limit)`, with a zero limit yielding zero pages.
#[must_use]
pub fn total_pages(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(u64::from(limit))
}

/// Metadata about a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Items matching the filters across all pages
    pub total: u64,
    /// Current page number (1-indexed)
    pub page: u32,
    /// Page size that was applied
    pub limit: u32,
    /// `ceil(total / limit)`
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(total: u64, page: &PageRequest) -> Self {
        Self {
            total,
            page: page.page(),
            limit: page.limit(),
            total_pages: total_pages(total, page.limit()),
        }
    }
}

/// The uniform list response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    /// Wraps one fetched page and the filtered total.
    ///
    /// Items beyond `limit` are dropped.
    pub fn new(mut data: Vec<T>, total: u64, page: &PageRequest) -> Self {
        data.truncate(page.limit() as usize);
        Self {
            data,
            meta: PaginationMeta::new(total, page),
        }
    }

    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Query parameters shared by every list endpoint.
///
/// Used for API documentation; requests are parsed by
/// [`ListQuery::from_params`](crate::query::ListQuery::from_params).
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    pub page: Option<u32>,
    /// Items per page (1-100, default: 20)
    pub limit: Option<u32>,
    /// Field to sort by (default: created_at)
    pub sort: Option<String>,
    /// Sort direction, case-insensitive (default: desc)
    pub order: Option<SortOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_page_request_default() {
        let page = PageRequest::default();
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 20);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_request_offset() {
        let page = PageRequest::new(3, 10).unwrap();
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn test_page_request_rejects_zero_page() {
        let err = PageRequest::new(0, 10).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.field.as_deref(), Some("page"));
    }

    #[test]
    fn test_page_request_limit_bounds() {
        assert!(PageRequest::new(1, 1).is_ok());
        assert!(PageRequest::new(1, 100).is_ok());

        let err = PageRequest::new(1, 0).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("limit"));

        let err = PageRequest::new(1, 101).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("limit"));
        assert_eq!(err.message(), "limit exceeds maximum 100");

        let err = PageRequest::new(1, -5).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("limit"));
    }

    #[test]
    fn test_page_request_page_overflow() {
        let err = PageRequest::new(i64::from(u32::MAX) + 1, 10).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("page"));
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let cases = vec![
            (0, 20, 0),
            (1, 20, 1),
            (20, 20, 1),
            (21, 20, 2),
            (25, 10, 3),
            (100, 100, 1),
            (101, 100, 2),
            (7, 1, 7),
        ];

        for (total, limit, expected) in cases {
            assert_eq!(total_pages(total, limit), expected, "total={total} limit={limit}");
        }
    }

    #[test]
    fn test_total_pages_zero_limit() {
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_envelope_second_page_of_twenty_five() {
        let page = PageRequest::new(2, 10).unwrap();
        let envelope = Paginated::new((11..=20).collect::<Vec<u32>>(), 25, &page);

        assert_eq!(
            envelope.meta,
            PaginationMeta {
                total: 25,
                page: 2,
                limit: 10,
                total_pages: 3,
            }
        );
        assert_eq!(envelope.data.len(), 10);
    }

    #[test]
    fn test_envelope_empty_result() {
        let envelope = Paginated::<u32>::new(vec![], 0, &PageRequest::default());

        assert!(envelope.data.is_empty());
        assert_eq!(envelope.meta.total, 0);
        assert_eq!(envelope.meta.page, 1);
        assert_eq!(envelope.meta.limit, 20);
        assert_eq!(envelope.meta.total_pages, 0);
    }

    #[test]
    fn test_envelope_truncates_to_limit() {
        let page = PageRequest::new(1, 5).unwrap();
        let envelope = Paginated::new((0..12).collect::<Vec<u32>>(), 12, &page);

        assert_eq!(envelope.data, vec![0, 1, 2, 3, 4]);
        assert_eq!(envelope.meta.total_pages, 3);
    }

    #[test]
    fn test_envelope_map_keeps_meta() {
        let page = PageRequest::new(1, 2).unwrap();
        let envelope = Paginated::new(vec![1, 2], 4, &page).map(|n| n * 10);

        assert_eq!(envelope.data, vec![10, 20]);
        assert_eq!(envelope.meta.total, 4);
        assert_eq!(envelope.meta.total_pages, 2);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = PaginationMeta::new(25, &PageRequest::new(2, 10).unwrap());
        let serialized = serde_json::to_value(&meta).unwrap();

        assert_eq!(serialized["total"], 25);
        assert_eq!(serialized["page"], 2);
        assert_eq!(serialized["limit"], 10);
        assert_eq!(serialized["totalPages"], 3);
    }
}
