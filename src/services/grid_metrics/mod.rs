// Grid metrics service
// Contract for reading live geometry from whatever renders the time grid

use crate::models::grid::{GridError, GridSnapshot};

#[cfg(test)]
use mockall::automock;

/// Live geometry of the rendered time grid.
///
/// Implementations read everything in one synchronous pass and never cache a
/// snapshot across interactions. The hour height is measured from a rendered
/// hour row, because zoom and styling change it.
#[cfg_attr(test, automock)]
pub trait GridMetrics {
    /// Geometry for the column under the client-space point.
    ///
    /// Fails with [`GridError::NoTargetColumn`] when the point is outside
    /// every column; callers ignore the interaction in that case.
    fn snapshot(&self, client_x: f32, client_y: f32) -> Result<GridSnapshot, GridError>;
}
