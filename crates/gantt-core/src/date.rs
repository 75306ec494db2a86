// File: crates/gantt-core/src/date.rs
// Summary: Coercion of date-like inputs (date, (y, m, d) triple, ISO text) to calendar dates.

use chrono::NaiveDate;

use crate::error::{GanttError, Result};

/// Anything a caller may pass where a date is expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    Ymd(i32, u32, u32),
    /// `YYYY-MM-DD`.
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self { DateInput::Date(d) }
}

impl From<(i32, u32, u32)> for DateInput {
    fn from((y, m, d): (i32, u32, u32)) -> Self { DateInput::Ymd(y, m, d) }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self { DateInput::Text(s.to_string()) }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self { DateInput::Text(s) }
}

/// Convert a date-like value to a [`NaiveDate`], or fail with `InvalidDate`.
pub fn as_date(input: impl Into<DateInput>) -> Result<NaiveDate> {
    match input.into() {
        DateInput::Date(d) => Ok(d),
        DateInput::Ymd(y, m, d) => NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| GanttError::InvalidDate(format!("({y}, {m}, {d}) is not a valid date"))),
        DateInput::Text(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| GanttError::InvalidDate(format!("{s:?} is not a valid date: {e}"))),
    }
}
