use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Class start times arrive as `HH:MM:SS`; only `HH:MM` is shown.
pub fn format_class_time(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.chars().take(5).collect(),
        _ => "Hora no disponible".to_string(),
    }
}
