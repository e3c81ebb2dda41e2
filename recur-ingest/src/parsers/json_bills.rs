//! JSON bill export parser: a top-level array of camelCase bill records.

use anyhow::{Context, Result};
use recur_core::RecurringBill;
use std::path::Path;

pub fn parse_bills_json(text: &str) -> Result<Vec<RecurringBill>> {
    serde_json::from_str(text).context("parsing bills JSON")
}

pub fn parse_bills_json_file(path: impl AsRef<Path>) -> Result<Vec<RecurringBill>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_bills_json(&text).with_context(|| format!("parsing {}", path.display()))
}
