use chrono::{Duration, Local, NaiveDate};
use egui::{Id, LayerId, Order};

use crate::models::calendar_time::CalendarTime;
use crate::models::calibration::CalibrationOffset;
use crate::models::grid::ColumnId;
use crate::models::settings::AppConfig;
use crate::services::calibration::{CalibrationClick, CalibrationSession, CalibrationStore};
use crate::services::database::Database;
use crate::services::grid_metrics::GridMetrics;
use crate::services::time_mapper::{pixel_to_time, time_to_client_y};
use crate::ui_egui::calibration_banner::{render_calibration_banner, BannerAction};
use crate::ui_egui::drag::{GridDrag, GridSelection, DEFAULT_EVENT_MINUTES};
use crate::ui_egui::move_panel::{poll_move_result, render_move_panel, MovePanelState};
use crate::ui_egui::settings_calibration::{
    render_calibration_settings, CalibrationSettingsAction,
};
use crate::ui_egui::views::grid_layout::EguiGridLayout;
use crate::ui_egui::views::palette::TimeGridPalette;
use crate::ui_egui::views::time_grid::{draw_time_block, render_time_grid, GridPointer};

pub struct CalendarApp {
    config: AppConfig,
    calibration: CalibrationStore<'static>,
    session: CalibrationSession,
    calibration_error: Option<String>,
    current_date: NaiveDate,
    selection: Option<GridSelection>,
    drag: Option<GridDrag>,
    move_panel: MovePanelState,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        poll_move_result(ctx, &mut self.move_panel);

        if render_calibration_banner(ctx, &self.session, self.calibration_error.as_deref())
            == BannerAction::Cancel
        {
            self.session.cancel();
            self.calibration_error = None;
        }

        self.render_side_panel(ctx);
        self.render_grid(ctx);
    }
}

impl CalendarApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        database: &'static Database,
    ) -> Self {
        let calibration = CalibrationStore::load(database);
        log::info!("Loaded time grid calibration {}", calibration.offset());

        Self {
            config,
            calibration,
            session: CalibrationSession::new(),
            calibration_error: None,
            current_date: Local::now().date_naive(),
            selection: None,
            drag: None,
            move_panel: MovePanelState::new(),
        }
    }

    fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("grid_side_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("◀").clicked() {
                        self.current_date -= Duration::days(1);
                    }
                    if ui.button("Today").clicked() {
                        self.current_date = Local::now().date_naive();
                    }
                    if ui.button("▶").clicked() {
                        self.current_date += Duration::days(1);
                    }
                });
                ui.label(self.current_date.format("%A %d %B %Y").to_string());
                ui.separator();

                match render_calibration_settings(
                    ui,
                    self.calibration.offset(),
                    self.session.is_active(),
                ) {
                    CalibrationSettingsAction::Begin => {
                        self.calibration_error = None;
                        self.session.begin();
                    }
                    CalibrationSettingsAction::Reset => {
                        if let Err(e) = self.calibration.reset() {
                            log::warn!("Failed to reset calibration: {}", e);
                        }
                    }
                    CalibrationSettingsAction::None => {}
                }

                ui.separator();
                render_move_panel(
                    ui,
                    &mut self.move_panel,
                    &self.config.remote,
                    self.selection.map(|selection| selection.range()),
                );
            });
    }

    fn render_grid(&mut self, ctx: &egui::Context) {
        let palette = TimeGridPalette::from_visuals(&ctx.style().visuals);
        let dates = [self.current_date];

        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                render_time_grid(
                    ui,
                    &dates,
                    self.config.grid.first_visible_hour,
                    self.config.grid.hour_height_px,
                    &palette,
                )
            })
            .inner;

        match output.pointer {
            Some(GridPointer::Clicked(pos)) => self.handle_grid_click(&output.layout, pos),
            Some(pointer) => self.handle_grid_drag(&output.layout, pointer),
            None => {}
        }

        self.draw_overlays(ctx, &output.layout, &palette);
    }

    fn handle_grid_click(&mut self, layout: &EguiGridLayout, pos: egui::Pos2) {
        match self
            .session
            .handle_click(layout, pos.x, pos.y, &mut self.calibration)
        {
            CalibrationClick::NotCalibrating => {}
            CalibrationClick::Calibrated(offset) => {
                self.calibration_error = None;
                log::info!("Calibration complete, offset {}", offset);
                return;
            }
            CalibrationClick::CommitFailed => {
                self.calibration_error =
                    Some("Could not save the calibration. Try again.".to_string());
                return;
            }
            CalibrationClick::Ignored => return,
        }

        let Ok(snapshot) = layout.snapshot(pos.x, pos.y) else {
            return;
        };
        let Some(date) = snapshot.column_id.date() else {
            return;
        };

        let time = pixel_to_time(pos.y, &snapshot, self.calibration.offset());
        self.selection = Some(GridSelection::from_click(date, time));
    }

    fn handle_grid_drag(&mut self, layout: &EguiGridLayout, pointer: GridPointer) {
        // Calibration only listens for clicks.
        if self.session.is_active() {
            self.drag = None;
            return;
        }

        let offset = self.calibration.offset();
        match pointer {
            GridPointer::DragStarted(pos) => {
                self.drag = GridDrag::begin(layout, pos, offset, self.selection.as_ref());
            }
            GridPointer::Dragged(pos) => {
                if let Some(drag) = &mut self.drag {
                    drag.update(layout, pos, offset);
                }
            }
            GridPointer::DragStopped(pos) => {
                if let Some(mut drag) = self.drag.take() {
                    drag.update(layout, pos, offset);
                    let selection = drag.preview();
                    log::debug!(
                        "Selected {} {}-{}",
                        selection.date,
                        selection.start,
                        selection.end
                    );
                    self.selection = Some(selection);
                }
            }
            GridPointer::Clicked(_) => {}
        }
    }

    /// Hover preview, selection or drag preview, and the calibrated midnight line.
    fn draw_overlays(
        &self,
        ctx: &egui::Context,
        layout: &EguiGridLayout,
        palette: &TimeGridPalette,
    ) {
        let painter = ctx
            .layer_painter(LayerId::new(Order::Foreground, Id::new("time_grid_overlay")))
            .with_clip_rect(layout.viewport);
        let offset = self.calibration.offset();

        if let Some(drag) = &self.drag {
            draw_selection(&painter, layout, &drag.preview(), offset, palette.preview_fill);
        } else if let Some(selection) = &self.selection {
            draw_selection(&painter, layout, selection, offset, palette.selection_fill);
        }

        if self.session.is_active() {
            for column in &layout.columns {
                let probe_y = layout.viewport.center().y;
                if let Ok(snapshot) = layout.snapshot(column.x_range.center(), probe_y) {
                    let y = time_to_client_y(CalendarTime::MIDNIGHT, &snapshot, offset);
                    painter.hline(
                        column.x_range,
                        y,
                        egui::Stroke::new(2.0, palette.calibration_line),
                    );
                }
            }
            return;
        }

        if self.drag.is_some() {
            return;
        }

        let Some(pointer) = ctx.input(|i| i.pointer.hover_pos()) else {
            return;
        };
        let Ok(snapshot) = layout.snapshot(pointer.x, pointer.y) else {
            return;
        };
        let Some(column) = layout.column_at(pointer.x) else {
            return;
        };

        let start = pixel_to_time(pointer.y, &snapshot, offset);
        let end = start.plus_minutes(DEFAULT_EVENT_MINUTES);
        draw_time_block(
            &painter,
            column,
            time_to_client_y(start, &snapshot, offset),
            time_to_client_y(end, &snapshot, offset),
            palette.preview_fill,
            &start.to_string(),
        );
    }
}

fn draw_selection(
    painter: &egui::Painter,
    layout: &EguiGridLayout,
    selection: &GridSelection,
    offset: CalibrationOffset,
    fill: egui::Color32,
) {
    let column_id = ColumnId::from(selection.date);
    let Some(column) = layout.columns.iter().find(|c| c.id == column_id) else {
        return;
    };
    let Ok(snapshot) = layout.snapshot(column.x_range.center(), layout.viewport.center().y)
    else {
        return;
    };

    draw_time_block(
        painter,
        column,
        time_to_client_y(selection.start, &snapshot, offset),
        time_to_client_y(selection.end, &snapshot, offset),
        fill,
        &format!("{}-{}", selection.start, selection.end),
    );
}
