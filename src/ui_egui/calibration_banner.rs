//! Banner shown while a time grid calibration is waiting for its click.

use egui::{Color32, RichText};

use crate::services::calibration::CalibrationSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerAction {
    None,
    Cancel,
}

pub fn render_calibration_banner(
    ctx: &egui::Context,
    session: &CalibrationSession,
    last_error: Option<&str>,
) -> BannerAction {
    if !session.is_active() {
        return BannerAction::None;
    }

    let mut action = BannerAction::None;

    egui::TopBottomPanel::top("calibration_banner").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Calibrating time grid:")
                    .strong()
                    .color(Color32::from_rgb(255, 170, 60)),
            );
            ui.label("click any day column exactly where 00:00 should be. Press Esc to cancel.");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Cancel").clicked() {
                    action = BannerAction::Cancel;
                }
            });
        });

        if let Some(error) = last_error {
            ui.colored_label(Color32::RED, error);
        }
    });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = BannerAction::Cancel;
    }

    action
}
