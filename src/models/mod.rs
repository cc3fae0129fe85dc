// Module exports for models

pub mod calendar_time;
pub mod calibration;
pub mod event;
pub mod grid;
pub mod settings;
