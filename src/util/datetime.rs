//! Display formatting for the API's `YYYY-MM-DD HH:MM:SS` timestamps.
//!
//! Timestamps arrive as opaque strings and stay that way in the data model;
//! this only affects how the table renders them. Parsing is strict: anything
//! that does not match the stored shape exactly is shown verbatim rather
//! than dropped or half-formatted.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::NaiveDateTime;

const STORED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `2006-01-02 15:04:05` as `Jan 2, 2006, 3:04 PM`. Unparseable
/// input is returned unchanged.
pub fn humanize_timestamp(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, STORED_FORMAT).map_or_else(
        |_| raw.to_owned(),
        |dt| dt.format("%b %-d, %Y, %-I:%M %p").to_string(),
    )
}
