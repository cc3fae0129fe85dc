// Calibration service module
// Owns the grid calibration offset and its durable copy

mod session;

pub use session::{midnight_offset, CalibrationClick, CalibrationSession};

use thiserror::Error;

use crate::models::calibration::CalibrationOffset;
use crate::services::database::Database;

/// Preference row holding the offset, stored as a decimal string of pixels.
pub const CALIBRATION_OFFSET_KEY: &str = "time_grid.calibration_offset_px";

#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("calibration offset must be finite, got {0}")]
    InvalidOffset(f32),
    #[error("failed to persist calibration offset: {0:#}")]
    Storage(anyhow::Error),
}

/// Process-wide holder of the current calibration offset.
///
/// Loaded once at startup. Only [`CalibrationSession`] and [`reset`]
/// change it; every conversion reads a copy.
///
/// [`reset`]: CalibrationStore::reset
pub struct CalibrationStore<'a> {
    db: &'a Database,
    offset: CalibrationOffset,
}

impl<'a> CalibrationStore<'a> {
    /// Restore the offset from durable storage. Never fails: an absent,
    /// unreadable or non-numeric value means "uncalibrated".
    pub fn load(db: &'a Database) -> Self {
        let offset = read_offset(db);
        Self { db, offset }
    }

    pub fn offset(&self) -> CalibrationOffset {
        self.offset
    }

    /// Re-read the durable value, discarding the in-memory one.
    pub fn reload(&mut self) -> CalibrationOffset {
        self.offset = read_offset(self.db);
        self.offset
    }

    /// Validate, persist, then swap in the new offset.
    ///
    /// On any error the previous offset stays in effect both in memory and
    /// on disk.
    pub fn set(&mut self, px: f32) -> Result<CalibrationOffset, CalibrationError> {
        let offset = CalibrationOffset::new(px).ok_or(CalibrationError::InvalidOffset(px))?;

        self.db
            .set_preference(CALIBRATION_OFFSET_KEY, &offset.px().to_string())
            .map_err(CalibrationError::Storage)?;

        self.offset = offset;
        log::info!("Time grid calibration offset set to {}", offset);
        Ok(offset)
    }

    pub fn reset(&mut self) -> Result<CalibrationOffset, CalibrationError> {
        self.set(0.0)
    }
}

fn read_offset(db: &Database) -> CalibrationOffset {
    let stored = match db.get_preference(CALIBRATION_OFFSET_KEY) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Failed to load calibration offset: {:#}, using 0", e);
            return CalibrationOffset::ZERO;
        }
    };

    let Some(raw) = stored else {
        return CalibrationOffset::ZERO;
    };

    match raw.trim().parse::<f32>().ok().and_then(CalibrationOffset::new) {
        Some(offset) => offset,
        None => {
            log::warn!("Ignoring invalid stored calibration offset '{}'", raw);
            CalibrationOffset::ZERO
        }
    }
}
