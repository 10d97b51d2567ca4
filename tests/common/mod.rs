// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use spendio::application::TrackerService;
use tempfile::TempDir;

/// Helper to create a test service backed by a temporary data file.
pub fn test_service() -> Result<(TrackerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("spending.json");
    let (service, load_error) = TrackerService::open(path);
    assert!(load_error.is_none(), "fresh data file should load cleanly");
    Ok((service, temp_dir))
}

/// Helper to parse a date string into a NaiveDate.
pub fn date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}
