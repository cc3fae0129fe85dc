// Calendar time module
// Time of day produced by the grid's pixel-to-time conversion

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Minute interval every grid conversion snaps to.
pub const SNAP_MINUTES: u32 = 15;

/// A time on the grid, snapped to [`SNAP_MINUTES`].
///
/// `hour` is not clamped to 0..=23: a click below the last rendered hour of
/// a cross-midnight grid yields 24, 25, ... and a click above midnight yields
/// a negative hour. Use [`CalendarTime::on_date`] to resolve it to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarTime {
    hour: i32,
    minute: u32,
}

impl CalendarTime {
    /// Reference point used by calibration.
    pub const MIDNIGHT: CalendarTime = CalendarTime { hour: 0, minute: 0 };

    /// Create a grid-aligned time. Returns `None` for minutes that are not a
    /// multiple of [`SNAP_MINUTES`] or are 60 and above.
    pub fn new(hour: i32, minute: u32) -> Option<Self> {
        if minute >= 60 || minute % SNAP_MINUTES != 0 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Build from a count of minutes relative to midnight, already snapped.
    pub(crate) fn from_total_minutes(total: i64) -> Self {
        Self {
            hour: total.div_euclid(60) as i32,
            minute: total.rem_euclid(60) as u32,
        }
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes since midnight of the column's day (negative before it).
    pub fn total_minutes(&self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }

    /// Shift by a signed number of minutes. Pass whole [`SNAP_MINUTES`]
    /// multiples to stay on the grid.
    pub fn plus_minutes(self, minutes: i64) -> Self {
        debug_assert_eq!(minutes.rem_euclid(SNAP_MINUTES as i64), 0);
        Self::from_total_minutes(self.total_minutes() + minutes)
    }

    /// Resolve against the column's date, carrying whole days either way.
    pub fn on_date(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + Duration::minutes(self.total_minutes())
    }
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
