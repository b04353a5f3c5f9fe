//! Timestamp display helpers.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`, dropping fractional
/// seconds and offsets. Input that does not look like a timestamp is returned
/// unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    let Some((date, time)) = raw.split_once('T').or_else(|| raw.split_once(' ')) else {
        return raw.to_owned();
    };
    let clock_end = time.find(['.', '+', '-', 'Z']).unwrap_or(time.len());
    let clock = &time[..clock_end];
    if date.len() != 10 || clock.is_empty() {
        return raw.to_owned();
    }
    format!("{date} {clock}")
}

/// Format an optional timestamp, with a dash for missing values.
pub fn format_optional(raw: Option<&str>) -> String {
    raw.map_or_else(|| "—".to_owned(), format_timestamp)
}
