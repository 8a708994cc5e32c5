//! Export module for till-audit
//!
//! Serializes audit records to a spreadsheet-compatible CSV artifact and
//! reads such artifacts back.

pub mod csv;

pub use csv::{export_records_csv, read_records_csv, CSV_HEADERS};
