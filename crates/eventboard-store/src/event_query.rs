//! Composition of the filtered, paginated event listing.
//!
//! The page query and the count query share one `WHERE` clause and one
//! parameter list; the page query appends `LIMIT`/`OFFSET` values.

use std::fmt::Write;

use eventboard_core::query::{EventFilter, PageRequest};

use crate::accessor::SqlParam;

const EVENT_COLUMNS: &str = "e.id, e.title, e.description, e.location, e.date, e.created_at";

/// The SQL and parameters for one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    /// Page of events with registration counts.
    pub select_sql: String,
    /// Parameters for `select_sql`: filter values, then limit and offset.
    pub select_params: Vec<SqlParam>,
    /// Count of matching events, ignoring pagination.
    pub count_sql: String,
    /// Parameters for `count_sql`: filter values only.
    pub count_params: Vec<SqlParam>,
}

/// Builds the page and count queries for `filter` and `page`.
#[must_use]
pub fn build_event_query(filter: &EventFilter, page: PageRequest) -> EventQuery {
    let (where_clause, filter_params) = where_clause(filter);

    let mut select_sql = format!(
        "SELECT {EVENT_COLUMNS}, COUNT(r.id) AS registration_count \
         FROM events e \
         LEFT JOIN registrations r ON e.id = r.event_id"
    );
    select_sql.push_str(&where_clause);
    select_sql.push_str(" GROUP BY e.id ORDER BY e.date ASC, e.id ASC LIMIT ? OFFSET ?");

    let mut count_sql = String::from("SELECT COUNT(*) AS total FROM events e");
    count_sql.push_str(&where_clause);

    let mut select_params = filter_params.clone();
    select_params.push(SqlParam::Integer(i64::from(page.limit())));
    select_params.push(SqlParam::Integer(page.offset()));

    EventQuery {
        select_sql,
        select_params,
        count_sql,
        count_params: filter_params,
    }
}

/// SQL for a single event with its registration count.
pub const FIND_EVENT_SQL: &str = "SELECT e.id, e.title, e.description, e.location, e.date, \
     e.created_at, COUNT(r.id) AS registration_count \
     FROM events e \
     LEFT JOIN registrations r ON e.id = r.event_id \
     WHERE e.id = ? \
     GROUP BY e.id";

fn where_clause(filter: &EventFilter) -> (String, Vec<SqlParam>) {
    let mut conditions: Vec<&str> = Vec::new();
    let mut params = Vec::new();

    if let Some(term) = non_empty(filter.search.as_deref()) {
        let pattern = format!("%{}%", escape_like(term));
        conditions.push(r"(e.title LIKE ? ESCAPE '\' OR e.description LIKE ? ESCAPE '\')");
        params.push(SqlParam::Text(pattern.clone()));
        params.push(SqlParam::Text(pattern));
    }
    if let Some(location) = non_empty(filter.location.as_deref()) {
        conditions.push("e.location = ?");
        params.push(SqlParam::from(location));
    }
    if let Some(start) = filter.start_date {
        conditions.push("e.date >= ?");
        params.push(SqlParam::Timestamp(start));
    }
    if let Some(end) = filter.end_date {
        conditions.push("e.date <= ?");
        params.push(SqlParam::Timestamp(end));
    }

    let mut clause = String::new();
    for (i, condition) in conditions.iter().enumerate() {
        let keyword = if i == 0 { "WHERE" } else { "AND" };
        let _ = write!(clause, " {keyword} {condition}");
    }
    (clause, params)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Escapes LIKE wildcards so `term` matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
