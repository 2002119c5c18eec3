//! Display formatting for bill dates

use chrono::{Datelike, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// French abbreviated month names
const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin",
    "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];

/// Format an ISO date for the bills list: "2004-04-04" becomes "4 Avr. 04"
pub fn format_date(raw: &str) -> CoreResult<String> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidFormat {
            message: format!("Invalid bill date: {}", raw),
        })?;

    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        short_month(date.month0() as usize),
        date.year().rem_euclid(100)
    ))
}

/// Three-letter capitalised month, "févr." becomes "Fév"
fn short_month(month0: usize) -> String {
    let mut chars = MONTHS_FR[month0].chars().take(3);
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
