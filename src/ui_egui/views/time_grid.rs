//! Time grid rendering for the day view.
//!
//! Draws one row per hour for each day column inside a vertical scroll area
//! and records the geometry of what was actually drawn, so pointer math never
//! relies on assumed row heights.

use chrono::NaiveDate;
use egui::{Color32, CursorIcon, FontId, Pos2, Rangef, Sense, Stroke, Vec2};

use super::grid_layout::{EguiGridLayout, GridColumn};
use super::palette::TimeGridPalette;
use crate::models::grid::ColumnId;

pub const TIME_LABEL_WIDTH: f32 = 50.0;
pub const COLUMN_SPACING: f32 = 1.0;
const HOUR_LABEL_SIZE: f32 = 12.0;

/// Pointer interaction with a grid cell during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridPointer {
    /// Primary press and release without moving.
    Clicked(Pos2),
    DragStarted(Pos2),
    Dragged(Pos2),
    DragStopped(Pos2),
}

pub struct TimeGridOutput {
    pub layout: EguiGridLayout,
    /// Screen-space y extent of each drawn hour row, from the first hour down.
    pub hour_rows: Vec<Rangef>,
    pub pointer: Option<GridPointer>,
}

/// Render hours `first_hour..24` for each date and return the measured layout.
///
/// `hour_height` is the requested row height. Rows never shrink below the
/// hour label, so the height handed to the time mapper is the measured pitch
/// between two drawn rows rather than this value.
pub fn render_time_grid(
    ui: &mut egui::Ui,
    dates: &[NaiveDate],
    first_hour: u32,
    hour_height: f32,
    palette: &TimeGridPalette,
) -> TimeGridOutput {
    let mut columns: Vec<GridColumn> = Vec::new();
    let mut hour_rows: Vec<Rangef> = Vec::new();
    let mut pointer = None;

    let label_font = FontId::proportional(HOUR_LABEL_SIZE);
    let label_height = ui.fonts(|fonts| fonts.row_height(&label_font));
    let row_height = hour_height
        .max(label_height)
        .max(ui.spacing().interact_size.y);

    let output = egui::ScrollArea::vertical()
        .id_source("day_time_grid")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Rows must touch so the pitch is exactly one row.
            ui.spacing_mut().item_spacing.y = 0.0;

            let available = ui.available_width() - TIME_LABEL_WIDTH;
            let gaps = COLUMN_SPACING * dates.len().saturating_sub(1) as f32;
            let col_width = ((available - gaps) / dates.len().max(1) as f32).max(40.0);

            for hour in first_hour..24 {
                let row = ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;

                    ui.allocate_ui_with_layout(
                        Vec2::new(TIME_LABEL_WIDTH, row_height),
                        egui::Layout::right_to_left(egui::Align::Min),
                        |ui| {
                            ui.add_space(5.0);
                            ui.label(
                                egui::RichText::new(format!("{:02}:00", hour))
                                    .font(label_font.clone())
                                    .color(palette.label_text),
                            );
                        },
                    );

                    for (day_idx, date) in dates.iter().enumerate() {
                        let (rect, response) = ui.allocate_exact_size(
                            Vec2::new(col_width, row_height),
                            Sense::click_and_drag(),
                        );

                        if hour == first_hour {
                            columns.push(GridColumn {
                                id: ColumnId::from(*date),
                                x_range: Rangef::new(rect.left(), rect.right()),
                            });
                        }

                        let painter = ui.painter();
                        painter.rect_filled(rect, 0.0, palette.cell_bg);
                        painter.line_segment(
                            [rect.left_top(), rect.right_top()],
                            Stroke::new(1.0, palette.hour_line),
                        );
                        painter.line_segment(
                            [rect.left_center(), rect.right_center()],
                            Stroke::new(0.5, palette.half_hour_line),
                        );

                        if let Some(event) = cell_pointer(ui, &response) {
                            pointer = Some(event);
                        }

                        if day_idx < dates.len() - 1 {
                            ui.add_space(COLUMN_SPACING);
                        }
                    }
                });
                hour_rows.push(row.response.rect.y_range());
            }
        });

    let measured_hour_height = match hour_rows.as_slice() {
        [first, second, ..] => Some(second.min - first.min),
        [only] => Some(only.span()),
        [] => None,
    };

    TimeGridOutput {
        layout: EguiGridLayout {
            viewport: output.inner_rect,
            scroll_offset_y: output.state.offset.y,
            measured_hour_height,
            first_visible_hour: first_hour,
            columns,
        },
        hour_rows,
        pointer,
    }
}

fn cell_pointer(ui: &egui::Ui, response: &egui::Response) -> Option<GridPointer> {
    // A drag can leave the cell it started on, so fall back to the raw pointer.
    let pos = response
        .interact_pointer_pos()
        .or_else(|| ui.input(|i| i.pointer.latest_pos()))?;

    if response.drag_started() {
        Some(GridPointer::DragStarted(pos))
    } else if response.drag_stopped() {
        Some(GridPointer::DragStopped(pos))
    } else if response.dragged() {
        ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
        Some(GridPointer::Dragged(pos))
    } else if response.clicked() {
        Some(GridPointer::Clicked(pos))
    } else {
        None
    }
}

/// Paint a translucent block between two client-space y positions of a column.
pub fn draw_time_block(
    painter: &egui::Painter,
    column: &GridColumn,
    top: f32,
    bottom: f32,
    fill: Color32,
    label: &str,
) {
    let rect = egui::Rect::from_x_y_ranges(column.x_range, Rangef::new(top, bottom));
    painter.rect_filled(rect.shrink2(Vec2::new(2.0, 0.0)), 3.0, fill);
    painter.text(
        rect.left_top() + Vec2::new(6.0, 2.0),
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(12.0),
        Color32::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar_time::CalendarTime;
    use crate::models::calibration::CalibrationOffset;
    use crate::services::grid_metrics::GridMetrics;
    use crate::services::time_mapper::pixel_to_time;
    use test_case::test_case;

    const FIRST_HOUR: u32 = 6;

    /// Lay the grid out once in a headless 800x600 context.
    fn render_headless(hour_height: f32) -> TimeGridOutput {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            ..Default::default()
        };
        let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();

        let mut output = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let palette = TimeGridPalette::from_visuals(ui.visuals());
                output = Some(render_time_grid(ui, &[date], FIRST_HOUR, hour_height, &palette));
            });
        });
        output.expect("grid was not rendered")
    }

    #[test_case(8.0 ; "smaller than the hour label")]
    #[test_case(12.0 ; "about the hour label")]
    #[test_case(48.0 ; "default height")]
    fn test_measured_height_is_row_pitch(hour_height: f32) {
        let output = render_headless(hour_height);
        let rows = &output.hour_rows;
        assert_eq!(rows.len(), (24 - FIRST_HOUR) as usize);

        let pitch = rows[1].min - rows[0].min;
        assert_eq!(output.layout.measured_hour_height, Some(pitch));
        assert!(pitch >= hour_height);
        for pair in rows.windows(2) {
            assert!((pair[1].min - pair[0].min - pitch).abs() < 1e-3);
        }
    }

    #[test_case(8.0 ; "small rows")]
    #[test_case(48.0 ; "default rows")]
    fn test_drawn_hour_lines_read_as_their_hour(hour_height: f32) {
        let output = render_headless(hour_height);
        let layout = &output.layout;
        let x = layout.columns[0].x_range.center();

        let visible = output
            .hour_rows
            .iter()
            .enumerate()
            .filter(|(_, row)| layout.viewport.y_range().contains(row.min + 1.0));
        for (index, row) in visible {
            let y = row.min + 1.0;
            let snapshot = layout.snapshot(x, y).unwrap();
            let time = pixel_to_time(y, &snapshot, CalibrationOffset::ZERO);
            assert_eq!(
                time,
                CalendarTime::new(FIRST_HOUR as i32 + index as i32, 0).unwrap()
            );
        }
    }
}
