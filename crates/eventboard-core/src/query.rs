//! Listing filters and pagination.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::EventWithRegistrationCount;

/// Page number used when none (or an invalid one) is supplied.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when none (or an invalid one) is supplied.
pub const DEFAULT_LIMIT: u32 = 6;
/// Largest page size a caller may request.
pub const MAX_LIMIT: u32 = 100;

/// Conjunctive filters over the event listing. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Substring matched against title or description, ignoring ASCII case.
    pub search: Option<String>,
    /// Exact location match.
    pub location: Option<String>,
    /// Inclusive lower bound on the event date.
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the event date.
    pub end_date: Option<DateTime<Utc>>,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    /// Builds a page request, substituting defaults for zero values and
    /// capping the page size at [`MAX_LIMIT`].
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        let page = if page == 0 { DEFAULT_PAGE } else { page };
        let limit = match limit {
            0 => DEFAULT_LIMIT,
            l => l.min(MAX_LIMIT),
        };
        Self { page, limit }
    }

    /// Parses raw query-string values. Missing, malformed or non-positive
    /// values fall back to the defaults instead of failing.
    #[must_use]
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| {
            raw.and_then(|value| value.trim().parse::<u32>().ok())
                .unwrap_or(0)
        };
        Self::new(parse(page), parse(limit))
    }

    /// 1-based page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Rows to skip before this page starts.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }

    /// Number of pages needed to show `total` rows.
    #[must_use]
    pub fn total_pages(&self, total: i64) -> i64 {
        let limit = i64::from(self.limit);
        (total.max(0) + limit - 1) / limit
    }
}

/// One page of the filtered listing plus the unpaginated match count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPage {
    /// Events on the requested page, ordered by date ascending.
    pub events: Vec<EventWithRegistrationCount>,
    /// Number of events matching the filter across all pages.
    pub total: i64,
}

/// Pagination block returned alongside a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

impl Pagination {
    /// Describes `request` over a result set of `total` rows.
    #[must_use]
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            total,
            page: request.page(),
            limit: request.limit(),
            total_pages: request.total_pages(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_falls_back_to_defaults() {
        assert_eq!(PageRequest::parse(None, None), PageRequest::default());
        assert_eq!(
            PageRequest::parse(Some("abc"), Some("-4")),
            PageRequest::new(1, 6)
        );
        assert_eq!(PageRequest::parse(Some("0"), Some("0")).page(), 1);
        assert_eq!(PageRequest::parse(Some("0"), Some("0")).limit(), 6);
    }

    #[test]
    fn test_parse_accepts_valid_values_and_caps_limit() {
        let request = PageRequest::parse(Some("3"), Some("10"));
        assert_eq!(request.page(), 3);
        assert_eq!(request.limit(), 10);
        assert_eq!(request.offset(), 20);

        assert_eq!(PageRequest::parse(None, Some("5000")).limit(), MAX_LIMIT);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let request = PageRequest::new(1, 6);
        assert_eq!(request.total_pages(0), 0);
        assert_eq!(request.total_pages(6), 1);
        assert_eq!(request.total_pages(7), 2);
        assert_eq!(request.total_pages(100), 17);
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let json = serde_json::to_value(Pagination::new(PageRequest::new(2, 6), 13)).unwrap();
        assert_eq!(json["total"], 13);
        assert_eq!(json["page"], 2);
        assert_eq!(json["limit"], 6);
        assert_eq!(json["totalPages"], 3);
    }
}
