//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rozklad_mcp::{LocalStore, RozkladServerHandler, WeekType};
use tempfile::NamedTempFile;

/// Create a store backed by a temporary file
pub fn get_test_store() -> (LocalStore, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let store = LocalStore::open(temp_file.path()).unwrap();
    (store, temp_file)
}

/// Create a test handler with temporary storage and a fixed clock
pub fn get_test_handler(clock: fn() -> NaiveDateTime) -> (RozkladServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = RozkladServerHandler::with_clock(
        temp_file.path().to_str().unwrap(),
        WeekType::Numerator,
        clock,
    )
    .unwrap();
    (handler, temp_file)
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Wednesday 2025-09-03, 09:00
pub fn wednesday_nine() -> NaiveDateTime {
    at(2025, 9, 3, 9, 0)
}

/// Saturday 2025-09-06, 10:00
pub fn saturday_ten() -> NaiveDateTime {
    at(2025, 9, 6, 10, 0)
}
