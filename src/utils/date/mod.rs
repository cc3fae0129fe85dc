// Date utility functions

use chrono::NaiveDateTime;
use chrono_tz::Tz;

/// Wall-clock format sent to remote calendars. No offset, no `Z`.
pub const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format_wall_clock(value: NaiveDateTime) -> String {
    value.format(WALL_CLOCK_FORMAT).to_string()
}

/// IANA name of the runtime's timezone, falling back to `UTC` when the
/// platform reports nothing usable.
pub fn resolve_local_timezone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(name) => normalize_timezone(&name).unwrap_or_else(|| {
            log::warn!("Unrecognised system timezone '{}', using UTC", name);
            "UTC".to_string()
        }),
        Err(e) => {
            log::warn!("Failed to detect system timezone: {}, using UTC", e);
            "UTC".to_string()
        }
    }
}

/// Canonical IANA name if `name` is known to the tz database.
pub fn normalize_timezone(name: &str) -> Option<String> {
    name.trim()
        .parse::<Tz>()
        .ok()
        .map(|tz| tz.name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_wall_clock() {
        let value = NaiveDate::from_ymd_opt(2025, 11, 2)
            .unwrap()
            .and_hms_opt(23, 5, 9)
            .unwrap();
        assert_eq!(format_wall_clock(value), "2025-11-02T23:05:09");
    }

    #[test]
    fn test_normalize_timezone() {
        assert_eq!(
            normalize_timezone(" Australia/Brisbane ").as_deref(),
            Some("Australia/Brisbane")
        );
        assert!(normalize_timezone("Not/AZone").is_none());
    }

    #[test]
    fn test_resolve_local_timezone_is_known() {
        let name = resolve_local_timezone();
        assert!(normalize_timezone(&name).is_some());
    }
}
