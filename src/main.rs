// Rust Calendar Grid
// Main entry point

use rust_calendar_grid::services::database::Database;
use rust_calendar_grid::services::settings::{default_database_path, SettingsService};
use rust_calendar_grid::ui_egui::CalendarApp;

const MIN_ROOT_WIDTH: f32 = 640.0;
const MIN_ROOT_HEIGHT: f32 = 420.0;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Calendar Grid");

    let config = match SettingsService::from_project_dirs() {
        Some(service) => {
            log::info!("Reading settings from {}", service.config_path().display());
            service.get_or_default()
        }
        None => {
            log::warn!("No config directory available, using default settings");
            Default::default()
        }
    };

    let database = initialize_database(
        config
            .database_path
            .clone()
            .unwrap_or_else(default_database_path),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rust Calendar Grid")
            .with_inner_size(egui::vec2(1000.0, 760.0))
            .with_min_inner_size(egui::vec2(MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT)),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Calendar Grid",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, config, database)))),
    )
}

fn initialize_database(path: std::path::PathBuf) -> &'static Database {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).expect("Failed to create data directory");
    }

    let db_path = path.to_string_lossy().to_string();
    let db = Database::new(&db_path).expect("Failed to create database connection");
    db.initialize_schema()
        .expect("Failed to initialize database schema");

    Box::leak(Box::new(db))
}
