/// Utilities for date and time formatting
///
/// Backend timestamps arrive as ISO strings ("2024-03-15T14:02:26")
use chrono::NaiveDate;

use crate::shared::list::render::NOT_AVAILABLE;

/// Format an ISO date or datetime as "Mar 15, 2024"; unparseable input is returned as is
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split(['T', ' ']).next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format ISO datetime string as "Mar 15, 2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    let Some((date_part, time_part)) = datetime_str.split_once(['T', ' ']) else {
        return format_date(datetime_str);
    };
    let time: String = time_part.chars().take(5).collect();
    format!("{} {}", format_date(date_part), time)
}

pub fn format_optional_date(date_str: Option<&str>) -> String {
    date_str
        .filter(|d| !d.is_empty())
        .map(format_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_optional_datetime(datetime_str: Option<&str>) -> String {
    datetime_str
        .filter(|d| !d.is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Value of an `<input type="date">`, empty meaning no date
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
