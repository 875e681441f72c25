//! Timestamp presentation.

use chrono::{DateTime, Datelike, Local, Timelike};

/// Render an instant as `D-M-YYYY at H:MM` in the viewer's local clock.
///
/// Only the minutes are zero-padded. No timezone normalization is applied
/// beyond the local conversion; the server's instant is taken as supplied.
pub(crate) fn format_local(instant: DateTime<Local>) -> String {
    format!(
        "{}-{}-{} at {}:{:02}",
        instant.day(),
        instant.month(),
        instant.year(),
        instant.hour(),
        instant.minute()
    )
}

/// Format a server-supplied timestamp for display.
///
/// Expects RFC 3339; anything unparseable is passed through verbatim rather
/// than failing the entry.
pub fn format_observed_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => format_local(instant.with_timezone(&Local)),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn day_month_hour_unpadded_minutes_padded() {
        let instant = Local.with_ymd_and_hms(2025, 1, 7, 9, 5, 0).single().unwrap();
        assert_eq!(format_local(instant), "7-1-2025 at 9:05");
    }

    #[test]
    fn double_digit_fields_render_unchanged() {
        let instant = Local
            .with_ymd_and_hms(2024, 11, 23, 18, 40, 12)
            .single()
            .unwrap();
        assert_eq!(format_local(instant), "23-11-2024 at 18:40");
    }

    #[test]
    fn rfc3339_input_matches_local_conversion() {
        let raw = "2025-01-01T10:00:00Z";
        let expected = format_local(
            DateTime::parse_from_rfc3339(raw)
                .unwrap()
                .with_timezone(&Local),
        );
        assert_eq!(format_observed_at(raw), expected);
    }

    #[test]
    fn unparseable_input_passes_through_verbatim() {
        assert_eq!(format_observed_at("around noon"), "around noon");
    }
}
