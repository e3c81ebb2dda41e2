//! recur-bills: listing pipeline (search, sort, paging) over a bill store,
//! categorized into paid / due soon / upcoming.

pub mod error;
pub mod listing;
pub mod query;
pub mod summary;

pub use error::ListError;
pub use listing::{list_recurring_bills, BillPage, RecurringBillsResponse};
pub use query::{ListQuery, Pagination, SortBy, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use summary::{BucketLine, Summary};
