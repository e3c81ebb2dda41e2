//! Presentation view of a categorized page: counts and dollar-formatted totals.

use recur_core::{format_to_dollar, BillStatus, CategorizationResult};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BucketLine {
    pub status: BillStatus,
    pub count: usize,
    pub total: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub buckets: Vec<BucketLine>,
    pub monthly_total: String,
}

impl Summary {
    pub fn from_result<B>(result: &CategorizationResult<B>) -> Self {
        let buckets = [BillStatus::Paid, BillStatus::DueSoon, BillStatus::Upcoming]
            .into_iter()
            .map(|status| {
                let bucket = result.bucket(status);
                BucketLine {
                    status,
                    count: bucket.bills.len(),
                    total: format_to_dollar(bucket.total),
                }
            })
            .collect();

        Self {
            buckets,
            monthly_total: format_to_dollar(result.monthly_total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use recur_core::{categorize, Recipient, RecurringBill};

    #[test]
    fn test_summary_formats_totals() {
        let bills = vec![
            RecurringBill::new("a", "u-1", Recipient::new("r", "Rent"), 1250.0, Some(1)),
            RecurringBill::new("b", "u-1", Recipient::new("r", "Gym"), 30.0, Some(20)),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let summary = Summary::from_result(&categorize(today, &bills));

        assert_eq!(summary.buckets[0].total, "$1,250.00");
        assert_eq!(summary.buckets[1].count, 0);
        assert_eq!(summary.buckets[1].total, "$0.00");
        assert_eq!(summary.buckets[2].total, "$30.00");
        assert_eq!(summary.monthly_total, "$1,280.00");
    }
}
