// Event module
// Event write payloads for remote calendars, and cross-calendar move requests

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::date::{format_wall_clock, resolve_local_timezone};

/// Address of one calendar on a remote backend (e.g. a Google calendar id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarRef(pub String);

impl CalendarRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CalendarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Event body sent to a remote calendar.
///
/// Start and end are local wall-clock times. They are transmitted as
/// `YYYY-MM-DDTHH:MM:SS` together with an IANA zone name and are never
/// converted to UTC on this side; the backend interprets the zone.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPayload {
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub time_zone: String,
}

impl EventPayload {
    /// Create a payload in the runtime's local timezone.
    ///
    /// # Examples
    /// ```
    /// use rust_calendar_grid::models::event::EventPayload;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let payload = EventPayload::from_local("Standup", start, end).unwrap();
    /// assert!(!payload.time_zone.is_empty());
    /// ```
    pub fn from_local(
        summary: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        Self::in_zone(summary, start, end, resolve_local_timezone())
    }

    pub fn in_zone(
        summary: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        time_zone: impl Into<String>,
    ) -> Result<Self, String> {
        let payload = Self {
            summary: summary.into(),
            description: None,
            location: None,
            start,
            end,
            time_zone: time_zone.into(),
        };
        payload.validate()?;
        Ok(payload)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.summary.trim().is_empty() {
            return Err("Event summary cannot be empty".to_string());
        }

        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        if self.time_zone.parse::<chrono_tz::Tz>().is_err() {
            return Err(format!("Unknown IANA timezone '{}'", self.time_zone));
        }

        Ok(())
    }

    /// JSON body in the Google Calendar event shape.
    pub fn to_wire(&self) -> WireEvent<'_> {
        WireEvent {
            summary: &self.summary,
            description: self.description.as_deref(),
            location: self.location.as_deref(),
            start: WireDateTime {
                date_time: format_wall_clock(self.start),
                time_zone: &self.time_zone,
            },
            end: WireDateTime {
                date_time: format_wall_clock(self.end),
                time_zone: &self.time_zone,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WireEvent<'a> {
    pub summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
    pub start: WireDateTime<'a>,
    pub end: WireDateTime<'a>,
}

#[derive(Debug, Serialize)]
pub struct WireDateTime<'a> {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(rename = "timeZone")]
    pub time_zone: &'a str,
}

/// One relocation of an existing event between calendars. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    pub source: CalendarRef,
    pub target: CalendarRef,
    /// Identifier of the event in the source calendar.
    pub event_id: String,
    pub payload: EventPayload,
}
