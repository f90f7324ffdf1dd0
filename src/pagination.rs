//! Pagination primitives: offset pages with navigation links, and base64
//! timestamp cursors for keyset pagination.

use async_graphql::SimpleObject;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;

/// Hard cap on page size for offset pagination.
pub const MAX_PER_PAGE: i64 = 50;

/// Default page size for cursor pagination.
pub const DEFAULT_FIRST: i64 = 5;

/// Offset pagination metadata, shaped for the REST list envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub total: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub last_page: i64,
    pub from: i64,
    pub to: i64,
    pub first_page_url: String,
    pub last_page_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page_url: Option<String>,
}

fn page_url(base_url: &str, page: i64, per_page: i64) -> String {
    format!("{}?page={}&per_page={}", base_url, page, per_page)
}

impl Pagination {
    /// Compute page metadata for `total` rows. `page` is 1-indexed; `per_page`
    /// is clamped to `1..=MAX_PER_PAGE`. A page past the end still yields
    /// valid links, with an empty `from`/`to` range.
    pub fn new(base_url: &str, total: i64, page: i64, per_page: i64) -> Self {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        let page = page.max(1);
        let last_page = ((total + per_page - 1) / per_page).max(1);

        let (from, to) = if total == 0 || page > last_page {
            (0, 0)
        } else {
            ((page - 1) * per_page + 1, (page * per_page).min(total))
        };

        let next_page_url =
            (page < last_page).then(|| page_url(base_url, page + 1, per_page));
        let prev_page_url = (page > 1).then(|| page_url(base_url, page - 1, per_page));

        Pagination {
            total,
            per_page,
            current_page: page,
            last_page,
            from,
            to,
            first_page_url: page_url(base_url, 1, per_page),
            last_page_url: page_url(base_url, last_page, per_page),
            next_page_url,
            prev_page_url,
        }
    }

    /// LIMIT/OFFSET pair for the backing query.
    pub fn limit_offset(&self) -> (i64, i64) {
        (self.per_page, (self.current_page - 1) * self.per_page)
    }
}

/// Keyset page metadata for connection-shaped responses.
#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct PageInfo {
    pub start_cursor: String,
    pub end_cursor: String,
    pub has_next_page: bool,
}

impl PageInfo {
    pub fn empty() -> Self {
        PageInfo {
            start_cursor: String::new(),
            end_cursor: String::new(),
            has_next_page: false,
        }
    }
}

/// Encode a creation timestamp as an opaque cursor. URL-safe alphabet so the
/// cursor survives a query string unescaped.
pub fn encode_cursor(ts: DateTime<Utc>) -> String {
    URL_SAFE_NO_PAD.encode(ts.to_rfc3339())
}

/// Decode a cursor back to its timestamp. Unlike the usual "default to now"
/// shortcut, a cursor that does not decode is rejected so the caller gets a
/// 400 instead of a silently wrong page.
pub fn decode_cursor(cursor: &str) -> Result<DateTime<Utc>, AppError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|_| AppError::Validation("invalid cursor".into()))?;
    let s = std::str::from_utf8(&bytes)
        .map_err(|_| AppError::Validation("invalid cursor".into()))?;
    let ts = DateTime::parse_from_rfc3339(s)
        .map_err(|_| AppError::Validation("invalid cursor".into()))?;
    Ok(ts.with_timezone(&Utc))
}
