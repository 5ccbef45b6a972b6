use chrono::{DateTime, Utc};
use chrono_tz::America::Chicago;
use chrono_tz::Tz;

/// Day and time-of-day derivation is pinned to the venue's time zone, not
/// the host's.
pub(crate) fn venue_time(secs: f64) -> Option<DateTime<Tz>> {
    if !secs.is_finite() {
        return None;
    }

    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9) as u32;
    let utc = DateTime::<Utc>::from_timestamp(whole as i64, nanos)?;

    Some(utc.with_timezone(&Chicago))
}

/// English weekday name of an instant on the venue's calendar, or `None`
/// when the instant cannot be represented.
pub fn weekday_label(secs: f64) -> Option<String> {
    Some(venue_time(secs)?.format("%A").to_string())
}

/// Window label in the shape `"(Friday 9:00 AM - 10:30 AM)"`: 12-hour clock,
/// no leading zero on the hour, upper-case meridiem.
pub fn time_label(start: f64, end: f64) -> Option<String> {
    let start = venue_time(start)?;
    let end = venue_time(end)?;

    Some(format!(
        "({} - {})",
        start.format("%A %-I:%M %p"),
        end.format("%-I:%M %p")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-09-20 09:00:00 and 10:30:00 in US Central (CDT, UTC-5).
    const FRIDAY_9AM: f64 = 1726840800.0;
    const FRIDAY_1030AM: f64 = 1726846200.0;

    #[test]
    fn formats_window_label() {
        assert_eq!(
            time_label(FRIDAY_9AM, FRIDAY_1030AM).unwrap(),
            "(Friday 9:00 AM - 10:30 AM)"
        );
    }

    #[test]
    fn weekday_follows_venue_calendar() {
        assert_eq!(weekday_label(FRIDAY_9AM).unwrap(), "Friday");

        // 2024-09-21 03:00 UTC is still Friday 10:00 PM in Chicago.
        assert_eq!(weekday_label(1726887600.0).unwrap(), "Friday");
    }

    #[test]
    fn formats_standard_time_in_winter() {
        // 2024-01-20 15:00 UTC = Saturday 9:00 AM CST (UTC-6).
        assert_eq!(
            time_label(1705762800.0, 1705762800.0).unwrap(),
            "(Saturday 9:00 AM - 9:00 AM)"
        );
    }

    #[test]
    fn afternoon_uses_pm() {
        // 19:30 Central on the same Friday.
        let evening = FRIDAY_9AM + 10.5 * 3600.0;
        assert_eq!(
            time_label(FRIDAY_9AM, evening).unwrap(),
            "(Friday 9:00 AM - 7:30 PM)"
        );
    }

    #[test]
    fn fractional_seconds_do_not_shift_the_label() {
        assert_eq!(
            time_label(FRIDAY_9AM + 0.5, FRIDAY_1030AM + 0.9).unwrap(),
            "(Friday 9:00 AM - 10:30 AM)"
        );
    }

    #[test]
    fn unrepresentable_instants_have_no_label() {
        assert!(weekday_label(f64::NAN).is_none());
        assert!(weekday_label(f64::MAX).is_none());
        assert!(time_label(FRIDAY_9AM, f64::INFINITY).is_none());
    }
}
