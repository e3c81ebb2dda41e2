//! recur-ingest: loading bill records from CSV/JSON exports and remote JSON sources.

pub mod parsers;
pub mod remote;
pub mod types;

pub use parsers::{parse_bills_csv, parse_bills_csv_str, parse_bills_json};
pub use remote::fetch_bills;
pub use types::{load_bills_file, BillFormat, BillSource};
