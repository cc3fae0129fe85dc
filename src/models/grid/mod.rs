// Grid module
// Geometry snapshot of the rendered day/week time grid

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Identifies one day column of the time grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnId(pub String);

impl From<NaiveDate> for ColumnId {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}

impl ColumnId {
    /// Date of a column created from a [`NaiveDate`].
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The pointer is not over any day column. Callers ignore the event.
    #[error("no grid column under the pointer")]
    NoTargetColumn,
    #[error("invalid grid geometry: {0}")]
    InvalidGeometry(String),
}

/// Geometry of the time grid measured in a single read.
///
/// All fields describe the same instant: the rectangle, the scroll offset
/// and the measured hour height must never come from different frames.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    pub column_id: ColumnId,
    /// Top edge of the scrollable grid viewport in client space.
    pub grid_top: f32,
    /// How far the grid content is scrolled down.
    pub grid_scroll_top: f32,
    /// Rendered height of one hour slot, measured from a real row.
    pub hour_height_px: f32,
    /// Hour shown at the top of the grid content (0..=23).
    pub visible_hour_start: u32,
}

impl GridSnapshot {
    pub fn new(
        column_id: ColumnId,
        grid_top: f32,
        grid_scroll_top: f32,
        hour_height_px: f32,
        visible_hour_start: u32,
    ) -> Result<Self, GridError> {
        let snapshot = Self {
            column_id,
            grid_top,
            grid_scroll_top,
            hour_height_px,
            visible_hour_start,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if !self.hour_height_px.is_finite() || self.hour_height_px <= 0.0 {
            return Err(GridError::InvalidGeometry(format!(
                "hour height must be positive, got {}",
                self.hour_height_px
            )));
        }

        if !self.grid_top.is_finite() || !self.grid_scroll_top.is_finite() {
            return Err(GridError::InvalidGeometry(
                "grid position must be finite".to_string(),
            ));
        }

        if self.visible_hour_start > 23 {
            return Err(GridError::InvalidGeometry(format!(
                "visible hour start must be 0-23, got {}",
                self.visible_hour_start
            )));
        }

        Ok(())
    }
}
