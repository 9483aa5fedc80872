//! Track duration utilities

use std::time::Duration;

/// Parse a colon separated duration, most significant unit first.
///
/// `"4:37"` is 277 seconds and `"1:07:13"` is 4033 seconds. Each component
/// is read as a decimal number so a bare `"1.25"` is 1.25 seconds.
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let mut seconds = 0.0_f64;
    for part in value.split(':') {
        let part: f64 = part.trim().parse().ok()?;
        if !part.is_finite() || part < 0.0 {
            return None;
        }
        seconds = seconds * 60.0 + part;
    }

    Duration::try_from_secs_f64(seconds).ok()
}

/// Render seconds as `M:SS` or `H:MM:SS`
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
