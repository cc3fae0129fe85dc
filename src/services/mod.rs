// Service module exports

pub mod calibration;
pub mod database;
pub mod event_move;
pub mod grid_metrics;
pub mod settings;
pub mod time_mapper;
