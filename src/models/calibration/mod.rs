// Calibration module
// Pixel offset correcting grid drift, and the calibration session state

use std::fmt;

/// Signed pixel correction added to every raw grid measurement.
///
/// Always finite. Negative values are normal when midnight sits above the
/// visible viewport.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct CalibrationOffset(f32);

impl CalibrationOffset {
    pub const ZERO: CalibrationOffset = CalibrationOffset(0.0);

    /// Returns `None` for NaN or infinite values.
    pub fn new(px: f32) -> Option<Self> {
        px.is_finite().then_some(Self(px))
    }

    pub fn px(&self) -> f32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for CalibrationOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.1} px", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalibrationSessionState {
    #[default]
    Inactive,
    /// Waiting for the user to click where midnight is drawn.
    Active,
}

impl CalibrationSessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, CalibrationSessionState::Active)
    }
}
