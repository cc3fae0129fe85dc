//! Time grid calibration section of the settings panel.

use egui::RichText;

use crate::models::calibration::CalibrationOffset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationSettingsAction {
    None,
    Begin,
    Reset,
}

pub fn render_calibration_settings(
    ui: &mut egui::Ui,
    offset: CalibrationOffset,
    session_active: bool,
) -> CalibrationSettingsAction {
    let mut action = CalibrationSettingsAction::None;

    ui.heading("Time grid calibration");
    ui.add_space(4.0);

    ui.label(
        "If new events land at the wrong time when you click the grid, \
         calibrate by clicking the midnight line once.",
    );
    ui.add_space(4.0);

    let status = if offset.is_zero() {
        "Not calibrated".to_string()
    } else {
        format!("Offset: {}", offset)
    };
    ui.label(RichText::new(status).monospace());

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!session_active, egui::Button::new("Calibrate…"))
            .clicked()
        {
            action = CalibrationSettingsAction::Begin;
        }

        if ui
            .add_enabled(!offset.is_zero() && !session_active, egui::Button::new("Reset"))
            .clicked()
        {
            action = CalibrationSettingsAction::Reset;
        }
    });

    action
}
