//! Calendar helpers

use chrono::{Datelike, Local};

/// Today's date as YYYY-MM-DD, in the local timezone
pub fn today_string() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Current calendar year
pub fn current_year() -> i32 {
    Local::now().year()
}
