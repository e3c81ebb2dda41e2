//! One page of a user's recurring bills, categorized against a reference date.

use chrono::NaiveDate;
use recur_core::{categorize, CategorizationResult, RecurringBill};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ListError;
use crate::query::{ListQuery, Pagination};

/// Categorized page plus paging metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillPage {
    #[serde(flatten)]
    pub result: CategorizationResult<RecurringBill>,
    pub pagination: Pagination,
}

/// Response envelope: `{ "recurringBills": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringBillsResponse {
    pub recurring_bills: BillPage,
}

/// Filter, sort and page `store` for the query's user, then categorize the page.
///
/// A user with no bills at all is `NoBillsFound`; a search that matches
/// nothing is an ordinary empty page.
pub fn list_recurring_bills(
    store: &[RecurringBill],
    query: &ListQuery,
    today: NaiveDate,
) -> Result<RecurringBillsResponse, ListError> {
    if query.user_id.trim().is_empty() {
        return Err(ListError::MissingUser);
    }

    let owned: Vec<&RecurringBill> = store
        .iter()
        .filter(|b| b.user_id == query.user_id)
        .collect();
    if owned.is_empty() {
        return Err(ListError::NoBillsFound(query.user_id.clone()));
    }

    let mut matching: Vec<&RecurringBill> =
        owned.into_iter().filter(|b| query.matches(b)).collect();
    let total = matching.len();

    matching.sort_by(|a, b| query.sort_by.compare(a, b));

    let page: Vec<RecurringBill> = matching
        .into_iter()
        .skip(query.offset())
        .take(query.limit)
        .cloned()
        .collect();

    debug!(
        user = %query.user_id,
        total,
        page = query.page,
        returned = page.len(),
        sort = query.sort_by.key(),
        "listing recurring bills"
    );

    Ok(RecurringBillsResponse {
        recurring_bills: BillPage {
            result: categorize(today, &page),
            pagination: Pagination::new(query, total),
        },
    })
}
