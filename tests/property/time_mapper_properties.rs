// Property-based tests for grid time conversion and calibration
// Exercises the conversions with random grid geometry

use proptest::prelude::*;
use rust_calendar_grid::models::calendar_time::{CalendarTime, SNAP_MINUTES};
use rust_calendar_grid::models::calibration::CalibrationOffset;
use rust_calendar_grid::models::grid::{ColumnId, GridSnapshot};
use rust_calendar_grid::services::calibration::{midnight_offset, CalibrationStore};
use rust_calendar_grid::services::database::Database;
use rust_calendar_grid::services::time_mapper::{pixel_to_time, time_to_pixel};

prop_compose! {
    fn arb_snapshot()(
        grid_top in -500.0f32..2000.0,
        scroll in 0.0f32..5000.0,
        hour_height in 20.0f32..200.0,
        start in 0u32..24,
    ) -> GridSnapshot {
        GridSnapshot::new(ColumnId("2025-01-01".to_string()), grid_top, scroll, hour_height, start)
            .unwrap()
    }
}

prop_compose! {
    fn arb_grid_time()(hour in -6i32..36, quarter in 0u32..4) -> CalendarTime {
        CalendarTime::new(hour, quarter * SNAP_MINUTES).unwrap()
    }
}

proptest! {
    /// Property: every converted time sits on the 15-minute grid
    #[test]
    fn prop_minutes_always_snap_to_quarter_hours(
        snapshot in arb_snapshot(),
        client_y in -500.0f32..8000.0,
        offset in -2000.0f32..2000.0,
    ) {
        let time = pixel_to_time(client_y, &snapshot, CalibrationOffset::new(offset).unwrap());
        prop_assert_eq!(time.minute() % SNAP_MINUTES, 0);
        prop_assert!(time.minute() < 60);
    }

    /// Property: after calibrating on a click, that same click reads as midnight
    #[test]
    fn prop_calibration_is_exact_at_reference_point(
        snapshot in arb_snapshot(),
        click_y in -500.0f32..8000.0,
    ) {
        let offset = CalibrationOffset::new(midnight_offset(click_y, &snapshot)).unwrap();
        prop_assert_eq!(pixel_to_time(click_y, &snapshot, offset), CalendarTime::MIDNIGHT);
    }

    /// Property: time -> pixel -> time reproduces grid-aligned times
    #[test]
    fn prop_round_trip_without_offset(
        snapshot in arb_snapshot(),
        time in arb_grid_time(),
    ) {
        let client_y = time_to_pixel(time, &snapshot) + snapshot.grid_top - snapshot.grid_scroll_top;
        prop_assert_eq!(pixel_to_time(client_y, &snapshot, CalibrationOffset::ZERO), time);
    }

    /// Property: any finite offset, negative included, survives a reload
    #[test]
    fn prop_offset_persists(px in -1.0e6f32..1.0e6) {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        let mut store = CalibrationStore::load(&db);
        store.set(px).unwrap();
        prop_assert_eq!(store.reload().px(), px);
    }

    /// Property: reset is idempotent
    #[test]
    fn prop_reset_twice_equals_reset_once(px in -1.0e4f32..1.0e4) {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        let mut store = CalibrationStore::load(&db);
        store.set(px).unwrap();
        let once = store.reset().unwrap();
        let twice = store.reset().unwrap();
        prop_assert_eq!(once, twice);
        prop_assert!(store.reload().is_zero());
    }
}
