//! Display formatting for table cells and dashboard cards

use chrono::{DateTime, NaiveDate};

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024".
/// Unparseable input is returned as is.
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// RFC 3339 timestamp -> "15.03.2024 14:02"
pub fn format_datetime(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => format_date(value),
    }
}

/// Two decimals with a space as thousands separator: 1234567.8 -> "1 234 567.80"
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
