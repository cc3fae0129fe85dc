use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub struct TimeGridPalette {
    pub cell_bg: Color32,
    pub hour_line: Color32,
    pub half_hour_line: Color32,
    pub label_text: Color32,
    pub preview_fill: Color32,
    pub selection_fill: Color32,
    pub calibration_line: Color32,
}

impl TimeGridPalette {
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        let accent = visuals.selection.bg_fill;
        Self {
            cell_bg: visuals.extreme_bg_color,
            hour_line: visuals.widgets.noninteractive.bg_stroke.color,
            half_hour_line: with_alpha(visuals.widgets.noninteractive.bg_stroke.color, 90),
            label_text: Color32::GRAY,
            preview_fill: with_alpha(accent, 110),
            selection_fill: with_alpha(accent, 200),
            calibration_line: Color32::from_rgb(255, 100, 100),
        }
    }
}
