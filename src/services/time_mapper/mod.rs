// Time mapper service
// Pixel <-> time conversions for the time grid.
//
// Every caller (click-to-create, drag preview, drop, selection drag) goes
// through these functions so the calibration offset is applied the same way
// everywhere. Nothing here touches the stored offset.

use crate::models::calendar_time::{CalendarTime, SNAP_MINUTES};
use crate::models::calibration::CalibrationOffset;
use crate::models::grid::{ColumnId, GridError, GridSnapshot};
use crate::services::grid_metrics::GridMetrics;

/// Pointer position inside the grid content, before calibration.
pub fn raw_relative_y(client_y: f32, snapshot: &GridSnapshot) -> f64 {
    (client_y as f64 - snapshot.grid_top as f64) + snapshot.grid_scroll_top as f64
}

/// Pointer position inside the grid content with the offset applied.
pub fn relative_y(client_y: f32, snapshot: &GridSnapshot, offset: CalibrationOffset) -> f64 {
    raw_relative_y(client_y, snapshot) + offset.px() as f64
}

/// Time under `client_y`, snapped to [`SNAP_MINUTES`].
///
/// Equivalent to flooring the hour index and rounding the minute within the
/// hour (carrying 60 into the next hour), but rounds the total once so a
/// position a hair above an hour line cannot fall into the previous hour.
pub fn pixel_to_time(
    client_y: f32,
    snapshot: &GridSnapshot,
    offset: CalibrationOffset,
) -> CalendarTime {
    debug_assert!(snapshot.hour_height_px > 0.0);

    let hours_from_top = relative_y(client_y, snapshot, offset) / snapshot.hour_height_px as f64;
    let minutes_from_top = hours_from_top * 60.0;
    let snap = SNAP_MINUTES as f64;
    // Ties round up, matching a half-up round of the minute within the hour.
    let snapped = ((minutes_from_top / snap + 0.5).floor() * snap) as i64;

    CalendarTime::from_total_minutes(snapped + snapshot.visible_hour_start as i64 * 60)
}

/// Position of `time` inside the grid content, ignoring calibration.
///
/// Exact inverse of the geometry term of [`pixel_to_time`]. Negative for
/// times above the first visible hour.
pub fn time_to_pixel(time: CalendarTime, snapshot: &GridSnapshot) -> f32 {
    let hours = time.total_minutes() as f64 / 60.0 - snapshot.visible_hour_start as f64;
    (hours * snapshot.hour_height_px as f64) as f32
}

/// Client-space y at which `time` is drawn once calibration is applied.
/// Used to place drag previews.
pub fn time_to_client_y(
    time: CalendarTime,
    snapshot: &GridSnapshot,
    offset: CalibrationOffset,
) -> f32 {
    (time_to_pixel(time, snapshot) as f64 + snapshot.grid_top as f64
        - snapshot.grid_scroll_top as f64
        - offset.px() as f64) as f32
}

/// Snapshot the grid at the pointer and convert in one step.
pub fn time_at_pointer(
    metrics: &dyn GridMetrics,
    client_x: f32,
    client_y: f32,
    offset: CalibrationOffset,
) -> Result<(ColumnId, CalendarTime), GridError> {
    let snapshot = metrics.snapshot(client_x, client_y)?;
    let time = pixel_to_time(client_y, &snapshot, offset);
    log::debug!(
        "Pointer y={} in column {} -> {} (offset {})",
        client_y,
        snapshot.column_id,
        time,
        offset
    );
    Ok((snapshot.column_id, time))
}
