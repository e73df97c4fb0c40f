use chrono::{DateTime, NaiveDate};

/// Months the short US English form writes without an abbreviation dot
const MONTHS_WITHOUT_DOT: [&str; 3] = ["May", "Jun", "Jul"];

/// Format a `YYYY-MM-DD` or RFC 3339 date as e.g. `Jan. 5, 2024`.
///
/// Empty input yields an empty string; anything unparseable is returned
/// unchanged.
pub fn format_date_for_display(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let Some(date) = parse_date(input.trim()) else {
        return input.to_string();
    };

    let month = date.format("%b").to_string();
    let dot = if MONTHS_WITHOUT_DOT.contains(&month.as_str()) {
        ""
    } else {
        "."
    };
    format!("{}{} {}", month, dot, date.format("%-d, %Y"))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}
