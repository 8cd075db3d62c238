use chrono::Duration;

/// Formats an elapsed duration as `m:ss`. Negative values clamp to zero.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let seconds = value.num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::seconds(0)), "0:00");
        assert_eq!(format_elapsed(Duration::seconds(95)), "1:35");
        assert_eq!(format_elapsed(Duration::minutes(12)), "12:00");
        assert_eq!(format_elapsed(Duration::seconds(-4)), "0:00");
    }
}
