// Integration tests for calibration persistence and the calibrated grid

mod fixtures;

use egui::{pos2, Rangef, Rect};
use rust_calendar_grid::models::calendar_time::CalendarTime;
use rust_calendar_grid::models::event::EventPayload;
use rust_calendar_grid::models::grid::ColumnId;
use rust_calendar_grid::services::calibration::{
    CalibrationClick, CalibrationSession, CalibrationStore, CALIBRATION_OFFSET_KEY,
};
use rust_calendar_grid::services::database::Database;
use rust_calendar_grid::services::grid_metrics::GridMetrics;
use rust_calendar_grid::services::time_mapper::{pixel_to_time, time_at_pointer};
use rust_calendar_grid::ui_egui::views::grid_layout::{EguiGridLayout, GridColumn};
use tempfile::TempDir;

fn open_database(dir: &TempDir) -> Database {
    let path = dir.path().join("calendar_grid.db");
    let db = Database::new(path.to_str().unwrap()).expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}

/// A grid drawn from 06:00 with 64px hours, where the renderer's labels sit
/// 10px below the true hour lines.
fn drifted_layout() -> EguiGridLayout {
    EguiGridLayout {
        viewport: Rect::from_min_max(pos2(0.0, 100.0), pos2(600.0, 700.0)),
        scroll_offset_y: 0.0,
        measured_hour_height: Some(64.0),
        first_visible_hour: 6,
        columns: vec![GridColumn {
            id: ColumnId("2025-02-14".to_string()),
            x_range: Rangef::new(50.0, 590.0),
        }],
    }
}

#[test]
fn test_calibration_survives_restart() {
    let dir = TempDir::new().unwrap();

    // First launch: calibrate.
    {
        let db = open_database(&dir);
        let mut store = CalibrationStore::load(&db);
        let mut session = CalibrationSession::new();

        session.begin();
        let outcome = session.handle_click(&drifted_layout(), 300.0, 110.0, &mut store);
        assert!(matches!(outcome, CalibrationClick::Calibrated(_)));
        assert!(!session.is_active());
    }

    // Second launch: the same offset is restored.
    {
        let db = open_database(&dir);
        let store = CalibrationStore::load(&db);
        assert_eq!(store.offset().px(), -394.0);
    }
}

#[test]
fn test_calibrated_clicks_map_to_expected_times() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let mut store = CalibrationStore::load(&db);
    let layout = drifted_layout();

    // Click at the top of the grid and declare it midnight.
    let mut session = CalibrationSession::new();
    session.begin();
    session.handle_click(&layout, 300.0, 100.0, &mut store);
    let offset = store.offset();

    let snapshot = layout.snapshot(300.0, 100.0).unwrap();
    assert_eq!(pixel_to_time(100.0, &snapshot, offset), CalendarTime::MIDNIGHT);

    // Two rows and a quarter further down reads 02:15.
    let (column, time) = time_at_pointer(&layout, 300.0, 100.0 + 64.0 * 2.25, offset).unwrap();
    assert_eq!(column.date(), chrono::NaiveDate::from_ymd_opt(2025, 2, 14));
    assert_eq!(time, CalendarTime::new(2, 15).unwrap());
}

#[test]
fn test_reset_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let db = open_database(&dir);
        let mut store = CalibrationStore::load(&db);
        store.set(-27.5).unwrap();
        store.reset().unwrap();
    }

    let db = open_database(&dir);
    assert!(CalibrationStore::load(&db).offset().is_zero());
    assert_eq!(
        db.get_preference(CALIBRATION_OFFSET_KEY).unwrap().as_deref(),
        Some("0")
    );
}

#[test]
fn test_clicked_time_becomes_wall_clock_payload() {
    let layout = drifted_layout();
    let snapshot = layout.snapshot(300.0, 164.0).unwrap();
    let time = pixel_to_time(164.0, &snapshot, Default::default());
    let date = snapshot.column_id.date().unwrap();

    let start = time.on_date(date);
    let payload = EventPayload::in_zone(
        "Planning",
        start,
        start + chrono::Duration::hours(1),
        "Europe/London",
    )
    .unwrap();

    let json = serde_json::to_value(payload.to_wire()).unwrap();
    assert_eq!(json["start"]["dateTime"], "2025-02-14T07:00:00");
    assert_eq!(json["end"]["dateTime"], "2025-02-14T08:00:00");
    assert_eq!(json["start"]["timeZone"], "Europe/London");
}

#[test]
fn test_dst_gap_wall_clock_is_sent_unchanged() {
    let start = fixtures::dates::uk_dst_gap_2025();
    let payload = EventPayload::in_zone(
        "Night shift",
        start,
        start + chrono::Duration::hours(2),
        "Europe/London",
    )
    .unwrap();

    let json = serde_json::to_value(payload.to_wire()).unwrap();
    assert_eq!(json["start"]["dateTime"], "2025-03-30T01:30:00");
    assert_eq!(json["end"]["dateTime"], "2025-03-30T03:30:00");
}
