//! Bill record types for tracking recurring monthly obligations

use serde::{Deserialize, Serialize};

/// Anything that recurs on a day of the month and carries an amount.
///
/// The categorizer only needs these two fields; everything else on the
/// implementing type rides along untouched.
pub trait Recurring {
    /// Day of month the bill is due, if known
    fn recurrence_day(&self) -> Option<u32>;
    /// Amount due each month
    fn amount(&self) -> f64;
}

/// Who a recurring bill is paid to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A bill owned by a user, due every month on `recurrence_day`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringBill {
    /// Unique identifier for this bill
    pub id: String,
    /// Owner of the bill
    pub user_id: String,
    pub recipient: Recipient,
    /// Monthly amount, not validated
    pub amount: f64,
    /// Day of month (1-31); missing or 0 means the 1st
    #[serde(default)]
    pub recurrence_day: Option<u32>,
}

impl Recipient {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

impl RecurringBill {
    /// Create a new RecurringBill
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        recipient: Recipient,
        amount: f64,
        recurrence_day: Option<u32>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            recipient,
            amount,
            recurrence_day,
        }
    }

    /// Recipient display name
    pub fn recipient_name(&self) -> &str {
        &self.recipient.name
    }
}

impl Recurring for RecurringBill {
    fn recurrence_day(&self) -> Option<u32> {
        self.recurrence_day
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_serializes_camel_case() {
        let bill = RecurringBill::new(
            "rb-001",
            "u-1",
            Recipient::new("r-1", "Spark Electric"),
            100.0,
            Some(5),
        );
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["userId"], "u-1");
        assert_eq!(json["recurrenceDay"], 5);
        assert_eq!(json["recipient"]["name"], "Spark Electric");
        assert!(json["recipient"].get("avatarUrl").is_none());
    }

    #[test]
    fn test_missing_recurrence_day_deserializes_as_none() {
        let bill: RecurringBill = serde_json::from_str(
            r#"{"id":"rb-2","userId":"u-1","recipient":{"id":"r","name":"Gym"},"amount":30.0}"#,
        )
        .unwrap();
        assert_eq!(bill.recurrence_day, None);
        assert_eq!(bill.recipient_name(), "Gym");
    }
}
