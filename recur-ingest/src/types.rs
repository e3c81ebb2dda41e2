use anyhow::{bail, Result};
use recur_core::RecurringBill;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::parsers::{parse_bills_csv, parse_bills_json_file};
use crate::remote::fetch_bills;

/// File formats a bill export can come in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillFormat {
    Csv,
    Json,
}

impl BillFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(BillFormat::Csv),
            "json" => Some(BillFormat::Json),
            _ => None,
        }
    }
}

/// Where the bill store is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillSource {
    File(PathBuf),
    Url(String),
}

impl BillSource {
    /// `http(s)://...` is a URL, anything else a file path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            BillSource::Url(location.to_string())
        } else {
            BillSource::File(PathBuf::from(location))
        }
    }

    pub async fn load(&self) -> Result<Vec<RecurringBill>> {
        match self {
            BillSource::File(path) => load_bills_file(path),
            BillSource::Url(url) => fetch_bills(url).await,
        }
    }
}

impl std::fmt::Display for BillSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillSource::File(path) => write!(f, "{}", path.display()),
            BillSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Load a bill export, picking the parser from the file extension.
pub fn load_bills_file(path: impl AsRef<Path>) -> Result<Vec<RecurringBill>> {
    let path = path.as_ref();
    if !path.exists() {
        bail!("bills file not found: {}", path.display());
    }
    match BillFormat::from_path(path) {
        Some(BillFormat::Csv) => parse_bills_csv(path),
        Some(BillFormat::Json) => parse_bills_json_file(path),
        None => bail!("unsupported bills file (expected .csv or .json): {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parse() {
        assert_eq!(
            BillSource::parse("https://example.test/bills"),
            BillSource::Url("https://example.test/bills".to_string())
        );
        assert_eq!(BillSource::parse(" bills.csv "), BillSource::File(PathBuf::from("bills.csv")));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(BillFormat::from_path(Path::new("a/B.CSV")), Some(BillFormat::Csv));
        assert_eq!(BillFormat::from_path(Path::new("bills.json")), Some(BillFormat::Json));
        assert_eq!(BillFormat::from_path(Path::new("bills.xlsx")), None);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = BillSource::parse("/definitely/not/here.csv").load().await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_fixture_csv() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("fixtures")
            .join("bills.csv");
        let bills = load_bills_file(path).unwrap();
        assert!(bills.len() >= 10);
    }
}
