use crate::models::calendar_time::CalendarTime;
use crate::models::calibration::{CalibrationOffset, CalibrationSessionState};
use crate::models::grid::{GridError, GridSnapshot};
use crate::services::grid_metrics::GridMetrics;
use crate::services::time_mapper::{raw_relative_y, time_to_pixel};

use super::CalibrationStore;

/// What happened to a grid click routed through the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationClick {
    /// No calibration in progress; the caller handles the click normally.
    NotCalibrating,
    /// The click missed every column. Still waiting for a grid click.
    Ignored,
    /// New offset committed and the session ended.
    Calibrated(CalibrationOffset),
    /// The offset could not be stored. Still waiting so the user can retry.
    CommitFailed,
}

/// Short-lived "click where midnight is" interaction.
#[derive(Debug, Default)]
pub struct CalibrationSession {
    state: CalibrationSessionState,
}

impl CalibrationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CalibrationSessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Start waiting for the calibration click. The UI shows its banner while
    /// the session is active.
    pub fn begin(&mut self) {
        if !self.is_active() {
            log::info!("Time grid calibration started");
        }
        self.state = CalibrationSessionState::Active;
    }

    /// Leave calibration without touching the stored offset.
    pub fn cancel(&mut self) {
        if self.is_active() {
            log::info!("Time grid calibration cancelled");
        }
        self.state = CalibrationSessionState::Inactive;
    }

    /// Offer a grid click to the session.
    ///
    /// While active the click is consumed: the new offset is computed from the
    /// raw, uncalibrated click position so it replaces the previous offset
    /// rather than stacking on it.
    pub fn handle_click(
        &mut self,
        metrics: &dyn GridMetrics,
        client_x: f32,
        client_y: f32,
        store: &mut CalibrationStore<'_>,
    ) -> CalibrationClick {
        if !self.is_active() {
            return CalibrationClick::NotCalibrating;
        }

        let snapshot = match metrics.snapshot(client_x, client_y) {
            Ok(snapshot) => snapshot,
            Err(GridError::NoTargetColumn) => return CalibrationClick::Ignored,
            Err(e) => {
                log::debug!("Calibration click ignored: {}", e);
                return CalibrationClick::Ignored;
            }
        };

        let new_offset = midnight_offset(client_y, &snapshot);

        match store.set(new_offset) {
            Ok(offset) => {
                self.state = CalibrationSessionState::Inactive;
                CalibrationClick::Calibrated(offset)
            }
            Err(e) => {
                log::warn!("Calibration not saved: {}", e);
                CalibrationClick::CommitFailed
            }
        }
    }
}

/// Offset that makes a click at `client_y` read as midnight.
///
/// Midnight's expected content position is negative when the grid starts
/// after 00:00.
pub fn midnight_offset(client_y: f32, snapshot: &GridSnapshot) -> f32 {
    let expected_y = time_to_pixel(CalendarTime::MIDNIGHT, snapshot) as f64;
    (expected_y - raw_relative_y(client_y, snapshot)) as f32
}
