//! Press-and-drag on the time grid.
//!
//! A drag either sweeps out a new selection or carries the current one to a
//! new time or day. Every pointer position goes through `time_at_pointer`,
//! the same conversion a plain click uses.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use egui::Pos2;

use crate::models::calendar_time::{CalendarTime, SNAP_MINUTES};
use crate::models::calibration::CalibrationOffset;
use crate::services::grid_metrics::GridMetrics;
use crate::services::time_mapper::time_at_pointer;

/// Length of a selection made with a single click.
pub const DEFAULT_EVENT_MINUTES: i64 = 60;

/// A time range picked on the grid. `end` is always after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSelection {
    pub date: NaiveDate,
    pub start: CalendarTime,
    pub end: CalendarTime,
}

impl GridSelection {
    pub fn from_click(date: NaiveDate, time: CalendarTime) -> Self {
        Self {
            date,
            start: time,
            end: time.plus_minutes(DEFAULT_EVENT_MINUTES),
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end.total_minutes() - self.start.total_minutes()
    }

    pub fn contains(&self, date: NaiveDate, time: CalendarTime) -> bool {
        self.date == date && self.start <= time && time < self.end
    }

    pub fn range(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.start.on_date(self.date);
        (start, start + Duration::minutes(self.duration_minutes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridDrag {
    /// Sweeping a new range out from `anchor`.
    Select {
        date: NaiveDate,
        anchor: CalendarTime,
        current: CalendarTime,
    },
    /// Carrying `original`, held `grab_minutes` below its start.
    Move {
        original: GridSelection,
        grab_minutes: i64,
        date: NaiveDate,
        start: CalendarTime,
    },
}

impl GridDrag {
    /// Start a drag at `pos`. Pressing inside `selection` moves it; pressing
    /// anywhere else starts a new range. `None` outside every column.
    pub fn begin(
        metrics: &dyn GridMetrics,
        pos: Pos2,
        offset: CalibrationOffset,
        selection: Option<&GridSelection>,
    ) -> Option<Self> {
        let (column, time) = time_at_pointer(metrics, pos.x, pos.y, offset).ok()?;
        let date = column.date()?;

        let drag = match selection {
            Some(selection) if selection.contains(date, time) => Self::Move {
                original: *selection,
                grab_minutes: time.total_minutes() - selection.start.total_minutes(),
                date,
                start: selection.start,
            },
            _ => Self::Select {
                date,
                anchor: time,
                current: time,
            },
        };
        log::debug!("Grid drag started at {} on {}: {:?}", time, date, drag);
        Some(drag)
    }

    /// Follow the pointer. Positions outside every column keep the last value.
    pub fn update(&mut self, metrics: &dyn GridMetrics, pos: Pos2, offset: CalibrationOffset) {
        let Ok((column, time)) = time_at_pointer(metrics, pos.x, pos.y, offset) else {
            return;
        };

        match self {
            Self::Select { current, .. } => *current = time,
            Self::Move {
                grab_minutes,
                date,
                start,
                ..
            } => {
                if let Some(hovered) = column.date() {
                    *date = hovered;
                }
                *start = time.plus_minutes(-*grab_minutes);
            }
        }
    }

    /// Selection the drag produces if released now.
    pub fn preview(&self) -> GridSelection {
        match *self {
            Self::Select {
                date,
                anchor,
                current,
            } => {
                let (start, end) = if current < anchor {
                    (current, anchor)
                } else {
                    (anchor, current)
                };
                let end = if end == start {
                    start.plus_minutes(SNAP_MINUTES as i64)
                } else {
                    end
                };
                GridSelection { date, start, end }
            }
            Self::Move {
                original,
                date,
                start,
                ..
            } => GridSelection {
                date,
                start,
                end: start.plus_minutes(original.duration_minutes()),
            },
        }
    }
}
