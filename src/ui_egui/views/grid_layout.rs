//! Geometry recorded while the time grid is drawn.
//!
//! egui lays the grid out every frame, so the layout captured during a frame
//! is the single consistent read the time mapper needs. It is rebuilt each
//! frame and never carried across interactions.

use egui::{Rangef, Rect};

use crate::models::grid::{ColumnId, GridError, GridSnapshot};
use crate::services::grid_metrics::GridMetrics;

#[derive(Debug, Clone)]
pub struct GridColumn {
    pub id: ColumnId,
    pub x_range: Rangef,
}

/// Frame-local measurements of the scrollable time grid.
#[derive(Debug, Clone)]
pub struct EguiGridLayout {
    /// Visible part of the scroll area in screen space.
    pub viewport: Rect,
    pub scroll_offset_y: f32,
    /// Height of a rendered hour row, or `None` if no row was drawn.
    pub measured_hour_height: Option<f32>,
    pub first_visible_hour: u32,
    pub columns: Vec<GridColumn>,
}

impl EguiGridLayout {
    pub fn column_at(&self, x: f32) -> Option<&GridColumn> {
        self.columns.iter().find(|column| column.x_range.contains(x))
    }
}

impl GridMetrics for EguiGridLayout {
    fn snapshot(&self, client_x: f32, client_y: f32) -> Result<GridSnapshot, GridError> {
        if !self.viewport.y_range().contains(client_y) {
            return Err(GridError::NoTargetColumn);
        }

        let column = self.column_at(client_x).ok_or(GridError::NoTargetColumn)?;
        let hour_height = self.measured_hour_height.ok_or_else(|| {
            GridError::InvalidGeometry("no hour row has been rendered".to_string())
        })?;

        GridSnapshot::new(
            column.id.clone(),
            self.viewport.top(),
            self.scroll_offset_y,
            hour_height,
            self.first_visible_hour,
        )
    }
}
