//! # Pagination
//!
//! Turns raw `page`/`limit` query values into a bounded window over an
//! ordered result. Bad input falls back to defaults instead of failing.

/// Page used when `page` is absent or not a positive integer
pub const DEFAULT_PAGE: usize = 1;

/// Limit used when `limit` is absent, malformed or below 1
pub const DEFAULT_LIMIT: usize = 15;

/// Largest page size ever returned
pub const MAX_LIMIT: usize = 50;

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: usize,
    /// Page size, always within `1..=MAX_LIMIT`
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Parse raw query-string values
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: page.map(parse_page).unwrap_or(DEFAULT_PAGE),
            limit: limit.map(parse_limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Index of the first record on this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// The slice of `items` covered by this page; empty past the end
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }

    /// Number of pages needed for `total` records, 0 when there are none
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.limit)
    }
}

/// Below 1 means default, above max means max
fn clamp_limit(limit: i64) -> usize {
    if limit < 1 {
        DEFAULT_LIMIT
    } else {
        usize::try_from(limit).map_or(MAX_LIMIT, |l| l.min(MAX_LIMIT))
    }
}

fn is_all_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

fn parse_page(raw: &str) -> usize {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(page) if page >= 1 => page,
        // A positive page too large for usize is past any result.
        Err(_) if is_all_digits(raw) => usize::MAX,
        _ => DEFAULT_PAGE,
    }
}

fn parse_limit(raw: &str) -> usize {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(limit) => clamp_limit(limit),
        // Too large for i64 is still "greater than the max".
        Err(_) if is_all_digits(raw) => MAX_LIMIT,
        Err(_) => DEFAULT_LIMIT,
    }
}
