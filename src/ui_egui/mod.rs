mod app;
mod calibration_banner;
pub mod drag;
pub mod move_panel;
mod settings_calibration;
pub mod views;

pub use app::CalendarApp;
