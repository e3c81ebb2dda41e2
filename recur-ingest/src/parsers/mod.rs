pub mod csv_bills;
pub mod json_bills;

pub use csv_bills::{parse_bills_csv, parse_bills_csv_str};
pub use json_bills::{parse_bills_json, parse_bills_json_file};
