//! Query parameters for listing bills: search, sort order and paging.
//!
//! Parsing is deliberately forgiving, the way query strings usually are:
//! junk page/limit values fall back to defaults instead of failing.

use recur_core::RecurringBill;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Sort keys accepted by `sortBy`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Recurrence day, latest in the month first
    #[default]
    Latest,
    /// Recurrence day, earliest first
    Oldest,
    /// Recipient name ascending
    AToZ,
    /// Recipient name descending
    ZToA,
    /// Amount descending
    Highest,
    /// Amount ascending
    Lowest,
}

impl SortBy {
    /// Unknown or missing keys sort by `latest`.
    pub fn parse(key: Option<&str>) -> Self {
        match key.map(str::trim) {
            Some("latest") => SortBy::Latest,
            Some("oldest") => SortBy::Oldest,
            Some("a_to_z") => SortBy::AToZ,
            Some("z_to_a") => SortBy::ZToA,
            Some("highest") => SortBy::Highest,
            Some("lowest") => SortBy::Lowest,
            _ => SortBy::Latest,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortBy::Latest => "latest",
            SortBy::Oldest => "oldest",
            SortBy::AToZ => "a_to_z",
            SortBy::ZToA => "z_to_a",
            SortBy::Highest => "highest",
            SortBy::Lowest => "lowest",
        }
    }

    pub fn compare(&self, a: &RecurringBill, b: &RecurringBill) -> Ordering {
        let by_day = || day_order(a.recurrence_day, b.recurrence_day);
        let by_name = || {
            a.recipient_name()
                .to_lowercase()
                .cmp(&b.recipient_name().to_lowercase())
        };
        let by_amount = || a.amount.total_cmp(&b.amount);

        match self {
            SortBy::Latest => by_day().reverse(),
            SortBy::Oldest => by_day(),
            SortBy::AToZ => by_name(),
            SortBy::ZToA => by_name().reverse(),
            SortBy::Highest => by_amount().reverse(),
            SortBy::Lowest => by_amount(),
        }
    }
}

/// A missing day sorts after every known day, so `latest` lists it first
/// and `oldest` lists it last.
fn day_order(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A request for one page of a user's bills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub user_id: String,
    /// Lower-cased recipient-name fragment, taken as given (whitespace is
    /// significant); `None` matches everything
    pub search: Option<String>,
    pub sort_by: SortBy,
    /// 1-based
    pub page: usize,
    pub limit: usize,
}

impl ListQuery {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            search: None,
            sort_by: SortBy::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Build a query from raw string parameters.
    ///
    /// `page` and `limit` read a leading integer ("3", " 3", "3abc"); anything
    /// that does not yield a positive number uses the default.
    pub fn from_params(
        user_id: impl Into<String>,
        page: Option<&str>,
        limit: Option<&str>,
        search: Option<&str>,
        sort_by: Option<&str>,
    ) -> Self {
        Self::new(user_id)
            .with_page(positive_or(page, DEFAULT_PAGE))
            .with_limit(positive_or(limit, DEFAULT_LIMIT))
            .with_search(search.unwrap_or(""))
            .with_sort(SortBy::parse(sort_by))
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = if search.is_empty() {
            None
        } else {
            Some(search.to_lowercase())
        };
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Number of matching rows before this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn matches(&self, bill: &RecurringBill) -> bool {
        match &self.search {
            Some(needle) => bill.recipient_name().to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}

/// Leading integer of `s`, like a query-string `parseInt`.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (neg, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let n: i64 = digits[..end].parse().ok()?;
    Some(if neg { -n } else { n })
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(leading_int)
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(default)
}

/// Paging metadata returned next to a page of bills
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    /// Matching bills across all pages
    pub total: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(query: &ListQuery, total: usize) -> Self {
        Self {
            page: query.page,
            limit: query.limit,
            total,
            total_pages: total.div_ceil(query.limit.max(1)),
        }
    }
}
