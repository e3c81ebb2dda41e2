//! Bill categorization: split a month's bills into paid, due soon and upcoming.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::bill::Recurring;
use crate::time::{due_soon_window, month_bounds, recurrence_date};

/// Where a bill stands relative to the reference date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BillStatus {
    #[serde(rename = "paid")]
    Paid,
    #[serde(rename = "due soon")]
    DueSoon,
    #[serde(rename = "upcoming")]
    Upcoming,
}

impl BillStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Paid => "paid",
            BillStatus::DueSoon => "due soon",
            BillStatus::Upcoming => "upcoming",
        }
    }
}

/// Bills sharing a status, in input order, with their summed amount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillBucket<B> {
    pub bills: Vec<B>,
    pub total: f64,
}

impl<B> Default for BillBucket<B> {
    fn default() -> Self {
        Self {
            bills: Vec::new(),
            total: 0.0,
        }
    }
}

impl<B: Recurring> BillBucket<B> {
    fn push(&mut self, bill: B) {
        self.total += bill.amount();
        self.bills.push(bill);
    }
}

/// A bill paired with its computed status; serializes as `{ ...bill, status }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotatedBill<B> {
    #[serde(flatten)]
    pub bill: B,
    pub status: BillStatus,
}

/// Output of [`categorize`]. Built fresh on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorizationResult<B> {
    pub paid: BillBucket<B>,
    pub due_soon: BillBucket<B>,
    pub upcoming: BillBucket<B>,
    /// Sum over bills whose recurrence date lands inside the reference month
    pub monthly_total: f64,
    pub all_bills: Vec<AnnotatedBill<B>>,
}

impl<B> Default for CategorizationResult<B> {
    fn default() -> Self {
        Self {
            paid: BillBucket::default(),
            due_soon: BillBucket::default(),
            upcoming: BillBucket::default(),
            monthly_total: 0.0,
            all_bills: Vec::new(),
        }
    }
}

impl<B> CategorizationResult<B> {
    pub fn bucket(&self, status: BillStatus) -> &BillBucket<B> {
        match status {
            BillStatus::Paid => &self.paid,
            BillStatus::DueSoon => &self.due_soon,
            BillStatus::Upcoming => &self.upcoming,
        }
    }

    pub fn len(&self) -> usize {
        self.all_bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_bills.is_empty()
    }
}

/// Classify a single recurrence date. Checks run paid → due soon → upcoming.
pub fn classify(recurs_on: NaiveDate, reference: NaiveDate) -> BillStatus {
    let (soon_start, soon_end) = due_soon_window(reference);

    if recurs_on < reference {
        BillStatus::Paid
    } else if recurs_on >= soon_start && recurs_on <= soon_end {
        BillStatus::DueSoon
    } else {
        BillStatus::Upcoming
    }
}

/// Partition bills by status relative to `reference` and total them.
///
/// Pure: the same reference date and bills always give the same result.
pub fn categorize<B>(reference: NaiveDate, bills: &[B]) -> CategorizationResult<B>
where
    B: Recurring + Clone,
{
    let (month_start, month_end) = month_bounds(reference);
    let mut result = CategorizationResult::default();

    for bill in bills {
        let recurs_on = recurrence_date(reference, bill.recurrence_day());

        if recurs_on >= month_start && recurs_on <= month_end {
            result.monthly_total += bill.amount();
        }

        let status = classify(recurs_on, reference);
        match status {
            BillStatus::Paid => result.paid.push(bill.clone()),
            BillStatus::DueSoon => result.due_soon.push(bill.clone()),
            BillStatus::Upcoming => result.upcoming.push(bill.clone()),
        }

        result.all_bills.push(AnnotatedBill {
            bill: bill.clone(),
            status,
        });
    }

    result
}

/// [`categorize`] against the calendar day of `now` in its own timezone.
pub fn categorize_at<B, Tz>(now: DateTime<Tz>, bills: &[B]) -> CategorizationResult<B>
where
    B: Recurring + Clone,
    Tz: TimeZone,
{
    categorize(now.date_naive(), bills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bill::{Recipient, RecurringBill};
    use chrono::Utc;

    #[derive(Debug, Clone, PartialEq)]
    struct Plain {
        day: Option<u32>,
        amount: f64,
    }

    impl Recurring for Plain {
        fn recurrence_day(&self) -> Option<u32> {
            self.day
        }

        fn amount(&self) -> f64 {
            self.amount
        }
    }

    fn plain(day: Option<u32>, amount: f64) -> Plain {
        Plain { day, amount }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_june_example() {
        let bills = vec![plain(Some(5), 100.0), plain(Some(12), 50.0), plain(Some(25), 75.0)];
        let result = categorize(ymd(2024, 6, 10), &bills);

        assert_eq!(result.paid.bills, vec![bills[0].clone()]);
        assert_eq!(result.paid.total, 100.0);
        assert_eq!(result.due_soon.bills, vec![bills[1].clone()]);
        assert_eq!(result.due_soon.total, 50.0);
        assert_eq!(result.upcoming.bills, vec![bills[2].clone()]);
        assert_eq!(result.upcoming.total, 75.0);
        assert_eq!(result.monthly_total, 225.0);

        let statuses: Vec<_> = result.all_bills.iter().map(|a| a.status).collect();
        assert_eq!(
            statuses,
            vec![BillStatus::Paid, BillStatus::DueSoon, BillStatus::Upcoming]
        );
    }

    #[test]
    fn test_empty_input() {
        let result = categorize::<Plain>(ymd(2024, 6, 10), &[]);
        assert!(result.is_empty());
        assert_eq!(result.paid.total, 0.0);
        assert_eq!(result.due_soon.total, 0.0);
        assert_eq!(result.upcoming.total, 0.0);
        assert_eq!(result.monthly_total, 0.0);
    }

    #[test]
    fn test_due_soon_boundaries() {
        let today = ymd(2024, 6, 10);
        assert_eq!(classify(ymd(2024, 6, 9), today), BillStatus::Paid);
        assert_eq!(classify(ymd(2024, 6, 10), today), BillStatus::DueSoon);
        assert_eq!(classify(ymd(2024, 6, 13), today), BillStatus::DueSoon);
        assert_eq!(classify(ymd(2024, 6, 14), today), BillStatus::Upcoming);
    }

    #[test]
    fn test_missing_day_is_first_of_month() {
        let result = categorize(ymd(2024, 6, 10), &[plain(None, 20.0), plain(Some(0), 5.0)]);
        assert_eq!(result.paid.total, 25.0);
        assert_eq!(result.monthly_total, 25.0);

        // On the 1st itself both are due today
        let result = categorize(ymd(2024, 6, 1), &[plain(None, 20.0)]);
        assert_eq!(result.all_bills[0].status, BillStatus::DueSoon);
    }

    #[test]
    fn test_overflow_day_leaves_month() {
        // June has 30 days, so day 31 recurs on 1 July
        let bills = [plain(Some(31), 40.0), plain(Some(30), 10.0)];

        let mid = categorize(ymd(2024, 6, 10), &bills);
        assert_eq!(mid.upcoming.total, 50.0);
        assert_eq!(mid.monthly_total, 10.0);

        let end = categorize(ymd(2024, 6, 30), &bills);
        assert_eq!(end.all_bills[0].status, BillStatus::DueSoon);
        assert_eq!(end.all_bills[1].status, BillStatus::DueSoon);
        assert_eq!(end.monthly_total, 10.0);
    }

    #[test]
    fn test_window_crosses_into_next_month() {
        // 30 June: a day-2 bill already passed this month, even though 2 July is within 3 days
        let result = categorize(ymd(2024, 6, 30), &[plain(Some(2), 60.0)]);
        assert_eq!(result.paid.total, 60.0);
    }

    #[test]
    fn test_payload_passes_through() {
        let bill = RecurringBill::new(
            "rb-9",
            "u-1",
            Recipient::new("r-9", "Aqua Flow").with_avatar("/avatars/aqua.jpg"),
            42.5,
            Some(20),
        );
        let result = categorize(ymd(2024, 6, 10), std::slice::from_ref(&bill));
        assert_eq!(result.all_bills[0].bill, bill);
        assert_eq!(result.upcoming.bills[0], bill);
    }

    #[test]
    fn test_serialized_shape() {
        let bill = RecurringBill::new("rb-1", "u-1", Recipient::new("r-1", "Rent"), 1200.0, Some(12));
        let result = categorize(ymd(2024, 6, 10), &[bill]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["dueSoon"]["total"], 1200.0);
        assert_eq!(json["monthlyTotal"], 1200.0);
        assert_eq!(json["allBills"][0]["status"], "due soon");
        assert_eq!(json["allBills"][0]["id"], "rb-1");
        assert_eq!(json["allBills"][0]["recipient"]["name"], "Rent");
    }

    #[test]
    fn test_categorize_at_uses_local_day() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 23, 59, 59).unwrap();
        let bills = [plain(Some(10), 1.0)];
        assert_eq!(categorize_at(now, &bills), categorize(ymd(2024, 6, 10), &bills));
    }

    #[test]
    fn test_bucket_lookup_matches_status() {
        let bills = [plain(Some(1), 3.0), plain(Some(28), 4.0)];
        let result = categorize(ymd(2024, 6, 10), &bills);
        for annotated in &result.all_bills {
            assert!(result.bucket(annotated.status).bills.contains(&annotated.bill));
        }
        assert_eq!(BillStatus::DueSoon.label(), "due soon");
    }
}
