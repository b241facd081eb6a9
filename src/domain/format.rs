use crate::domain::error::DomainError;
use crate::domain::models::parse_hhmm;
use chrono::Timelike;

/// "14:05" -> "2:05 PM", "00:30" -> "12:30 AM".
pub fn format_time_of_day(value: &str) -> Result<String, DomainError> {
    let time = parse_hhmm(value, "time")?;
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    Ok(format!("{hour}:{:02} {suffix}", time.minute()))
}

/// "m:ss" below an hour, "h:mm:ss" from an hour on.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
