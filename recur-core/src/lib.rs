//! recur-core: bill types, categorization and date/currency helpers

pub mod bill;
pub mod categorizer;
pub mod currency;
pub mod time;

pub use bill::{Recipient, Recurring, RecurringBill};
pub use categorizer::{
    categorize, categorize_at, classify, AnnotatedBill, BillBucket, BillStatus,
    CategorizationResult,
};
pub use currency::format_to_dollar;
pub use time::{
    due_soon_window, effective_day, month_bounds, recurrence_date, today_in_tz, DUE_SOON_DAYS,
};
