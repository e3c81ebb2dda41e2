//! CSV bill export parser
//!
//! Expected header (column order is free, `avatar_url` optional):
//!   id,user_id,recipient_id,recipient_name,amount,recurrence_day,avatar_url
//!   rb-01,u-1,r-07,Spark Electric,"$1,234.50",15th,

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;
use recur_core::{Recipient, RecurringBill};
use regex::Regex;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

const REQUIRED: [&str; 6] = [
    "id",
    "user_id",
    "recipient_id",
    "recipient_name",
    "amount",
    "recurrence_day",
];

struct Columns {
    id: usize,
    user_id: usize,
    recipient_id: usize,
    recipient_name: usize,
    amount: usize,
    recurrence_day: usize,
    avatar_url: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let missing: Vec<_> = REQUIRED.iter().filter(|c| find(c).is_none()).collect();
        if !missing.is_empty() {
            return Err(anyhow!("missing CSV columns: {:?}", missing));
        }

        let col = |name: &str| find(name).ok_or_else(|| anyhow!("missing CSV column: {name}"));
        Ok(Self {
            id: col("id")?,
            user_id: col("user_id")?,
            recipient_id: col("recipient_id")?,
            recipient_name: col("recipient_name")?,
            amount: col("amount")?,
            recurrence_day: col("recurrence_day")?,
            avatar_url: find("avatar_url"),
        })
    }
}

/// Cell parsers, compiled once per file.
pub struct CellParser {
    amount_re: Regex,
    day_re: Regex,
}

impl CellParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            amount_re: Regex::new(concat!(
                r"^\s*(?P<neg>-)?\s*\$?\s*",
                r"(?P<amt>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\s*$"
            ))?,
            // Whole cell: optional "Monthly -" style label, then the day
            day_re: Regex::new(concat!(
                r"^\s*(?:[A-Za-z][A-Za-z ]*-\s*)?",
                r"(?P<day>\d{1,2})(?i:st|nd|rd|th)?\s*$"
            ))?,
        })
    }

    /// "1234.50", "$1,234.50", "-$15.00"
    pub fn amount(&self, cell: &str) -> Option<f64> {
        let caps = self.amount_re.captures(cell)?;
        let value: f64 = caps["amt"].replace(',', "").parse().ok()?;
        Some(if caps.name("neg").is_some() { -value } else { value })
    }

    /// "15", "15th", "Monthly - 1st"; blank means unknown
    pub fn recurrence_day(&self, cell: &str) -> Option<u32> {
        let caps = self.day_re.captures(cell)?;
        caps["day"].parse().ok()
    }
}

fn parse_records<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<RecurringBill>> {
    let cols = Columns::from_headers(rdr.headers()?)?;
    let cells = CellParser::new()?;
    let mut bills = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        let get = |i: usize| record.get(i).unwrap_or("").trim();

        let id = get(cols.id);
        if id.is_empty() {
            continue;
        }

        let amount = match cells.amount(get(cols.amount)) {
            Some(a) => a,
            None => {
                warn!(row = line + 2, id, cell = get(cols.amount), "skipping bill with unparseable amount");
                continue;
            }
        };

        let mut recipient = Recipient::new(get(cols.recipient_id), get(cols.recipient_name));
        if let Some(url) = cols.avatar_url.map(get).filter(|u| !u.is_empty()) {
            recipient = recipient.with_avatar(url);
        }

        let day_cell = get(cols.recurrence_day);
        let recurrence_day = cells.recurrence_day(day_cell);
        if recurrence_day.is_none() && !day_cell.is_empty() {
            warn!(row = line + 2, id, cell = day_cell, "unreadable recurrence day, treating as unknown");
        }

        bills.push(RecurringBill::new(
            id,
            get(cols.user_id),
            recipient,
            amount,
            recurrence_day,
        ));
    }

    debug!(count = bills.len(), "parsed bills from CSV");
    Ok(bills)
}

/// Parse a bill CSV file.
pub fn parse_bills_csv(path: impl AsRef<Path>) -> Result<Vec<RecurringBill>> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    parse_records(rdr).with_context(|| format!("parsing {}", path.as_ref().display()))
}

/// Parse bill CSV text already in memory.
pub fn parse_bills_csv_str(text: &str) -> Result<Vec<RecurringBill>> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    parse_records(rdr)
}
