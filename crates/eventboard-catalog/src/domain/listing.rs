//! Listing criteria as received from callers, and their conversion into a
//! validated filter and page request.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use eventboard_core::error::DomainError;
use eventboard_core::query::{EventFilter, PageRequest};

/// Raw listing parameters. Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct ListEvents {
    pub search: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Which end of a date range a value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Start,
    End,
}

impl ListEvents {
    /// Splits the criteria into a filter and a page request.
    ///
    /// Page and limit never fail: bad values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a date bound cannot be parsed.
    pub fn to_query(&self) -> Result<(EventFilter, PageRequest), DomainError> {
        let filter = EventFilter {
            search: present(self.search.as_deref()).map(str::to_owned),
            location: present(self.location.as_deref()).map(str::to_owned),
            start_date: parse_bound("startDate", self.start_date.as_deref(), Bound::Start)?,
            end_date: parse_bound("endDate", self.end_date.as_deref(), Bound::End)?,
        };
        let page = PageRequest::parse(self.page.as_deref(), self.limit.as_deref());
        Ok((filter, page))
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM[:SS]` (taken as
/// UTC), or a bare date. A bare date bounds the whole day.
fn parse_bound(
    name: &str,
    raw: Option<&str>,
    bound: Bound,
) -> Result<Option<DateTime<Utc>>, DomainError> {
    let Some(raw) = present(raw) else {
        return Ok(None);
    };

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(at) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Some(at.and_utc()));
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let at = match bound {
            Bound::Start => day.and_hms_opt(0, 0, 0),
            Bound::End => day.and_hms_nano_opt(23, 59, 59, 999_999_999),
        };
        if let Some(at) = at {
            return Ok(Some(at.and_utc()));
        }
    }

    Err(DomainError::Validation(format!("Invalid {name}: {raw}")))
}
