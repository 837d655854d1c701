//! CSV export naming.

use chrono::NaiveDate;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Download name for an export made on `date`: `players_<YYYY-MM-DD>.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("players_{}.csv", date.format("%Y-%m-%d"))
}
