//! "Move to another calendar" panel.
//!
//! Runs the two-phase move on a worker thread and polls for the outcome once
//! per frame. The move button stays disabled until the running move resolves,
//! so the same event is never moved twice concurrently.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use chrono::NaiveDateTime;
use egui::{Color32, RichText};

use crate::models::event::{CalendarRef, EventPayload, MoveRequest};
use crate::models::settings::RemoteConfig;
use crate::services::event_move::{HttpEventStore, MoveCoordinator, MoveError, MovedEvent};
use crate::utils::date::resolve_local_timezone;

type MoveResult = Result<MovedEvent, MoveError>;

enum MoveStatus {
    Moved(String),
    Failed(String),
    /// Event exists in both calendars.
    Duplicated(String),
}

/// Everything written to the target calendar. The source copy is deleted
/// after the create succeeds, so every field the event has must be here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveForm {
    pub source_calendar: String,
    pub target_calendar: String,
    pub event_id: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub time_zone: String,
}

impl MoveForm {
    /// Build the request for an event running from `start` to `end`.
    /// Blank description and location are left out of the payload.
    pub fn to_request(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<MoveRequest, String> {
        if self.event_id.trim().is_empty() {
            return Err("Enter the id of the event to move".to_string());
        }

        let mut payload =
            EventPayload::in_zone(self.summary.trim(), start, end, self.time_zone.trim())?;
        if !self.description.trim().is_empty() {
            payload = payload.with_description(self.description.clone());
        }
        if !self.location.trim().is_empty() {
            payload = payload.with_location(self.location.trim());
        }

        Ok(MoveRequest {
            source: CalendarRef::new(self.source_calendar.trim()),
            target: CalendarRef::new(self.target_calendar.trim()),
            event_id: self.event_id.trim().to_string(),
            payload,
        })
    }
}

#[derive(Default)]
pub struct MovePanelState {
    form: MoveForm,
    status: Option<MoveStatus>,
    result_rx: Option<Receiver<MoveResult>>,
}

impl MovePanelState {
    pub fn new() -> Self {
        Self {
            form: MoveForm {
                source_calendar: "primary".to_string(),
                time_zone: resolve_local_timezone(),
                ..MoveForm::default()
            },
            ..Self::default()
        }
    }

    pub fn in_progress(&self) -> bool {
        self.result_rx.is_some()
    }
}

/// Poll for a finished move. Call once per frame before rendering.
pub fn poll_move_result(ctx: &egui::Context, state: &mut MovePanelState) {
    let Some(rx) = &state.result_rx else {
        return;
    };

    match rx.try_recv() {
        Ok(result) => {
            state.result_rx = None;
            state.status = Some(status_for(result));
        }
        Err(TryRecvError::Empty) => {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
        Err(TryRecvError::Disconnected) => {
            state.result_rx = None;
            state.status = Some(MoveStatus::Failed(
                "Move worker stopped unexpectedly; check both calendars".to_string(),
            ));
        }
    }
}

fn status_for(result: MoveResult) -> MoveStatus {
    match result {
        Ok(moved) => MoveStatus::Moved(format!(
            "Moved to '{}' (new id {})",
            moved.target, moved.target_event_id
        )),
        Err(err @ MoveError::DeleteFailedAfterCreate { .. }) => {
            MoveStatus::Duplicated(err.to_string())
        }
        Err(err) => MoveStatus::Failed(err.to_string()),
    }
}

/// Render the panel. `selection` is the start/end picked on the grid.
pub fn render_move_panel(
    ui: &mut egui::Ui,
    state: &mut MovePanelState,
    remote: &RemoteConfig,
    selection: Option<(NaiveDateTime, NaiveDateTime)>,
) {
    ui.heading("Move event");
    ui.label(
        RichText::new(
            "The event is recreated in the target calendar from the fields below, \
             then removed from the source calendar.",
        )
        .small()
        .weak(),
    );
    ui.add_space(4.0);

    egui::Grid::new("move_event_fields")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            let form = &mut state.form;

            ui.label("Event id");
            ui.text_edit_singleline(&mut form.event_id);
            ui.end_row();

            ui.label("Title");
            ui.text_edit_singleline(&mut form.summary);
            ui.end_row();

            ui.label("Description");
            ui.text_edit_multiline(&mut form.description);
            ui.end_row();

            ui.label("Location");
            ui.text_edit_singleline(&mut form.location);
            ui.end_row();

            ui.label("Time zone");
            ui.text_edit_singleline(&mut form.time_zone);
            ui.end_row();

            ui.label("From calendar");
            ui.text_edit_singleline(&mut form.source_calendar);
            ui.end_row();

            ui.label("To calendar");
            ui.text_edit_singleline(&mut form.target_calendar);
            ui.end_row();
        });

    match selection {
        Some((start, end)) => {
            ui.label(format!(
                "When: {} – {}",
                start.format("%a %d %b %H:%M"),
                end.format("%H:%M")
            ));
        }
        None => {
            ui.label(RichText::new("Click or drag on the grid to pick a time").italics());
        }
    }

    let ready = selection.is_some()
        && !state.form.event_id.trim().is_empty()
        && !state.form.target_calendar.trim().is_empty()
        && !state.in_progress();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(ready, egui::Button::new("Move"))
            .clicked()
        {
            if let Some((start, end)) = selection {
                start_move(ui.ctx(), state, remote, start, end);
            }
        }
        if state.in_progress() {
            ui.spinner();
        }
    });

    match &state.status {
        Some(MoveStatus::Moved(message)) => {
            ui.colored_label(Color32::from_rgb(80, 170, 80), message);
        }
        Some(MoveStatus::Failed(message)) => {
            ui.colored_label(Color32::RED, message);
        }
        Some(MoveStatus::Duplicated(message)) => {
            ui.colored_label(Color32::from_rgb(255, 170, 60), RichText::new(message).strong());
        }
        None => {}
    }
}

fn start_move(
    ctx: &egui::Context,
    state: &mut MovePanelState,
    remote: &RemoteConfig,
    start: NaiveDateTime,
    end: NaiveDateTime,
) {
    let request = match state.form.to_request(start, end) {
        Ok(request) => request,
        Err(e) => {
            state.status = Some(MoveStatus::Failed(e));
            return;
        }
    };

    let store = match HttpEventStore::from_config(remote) {
        Ok(store) => store,
        Err(e) => {
            state.status = Some(MoveStatus::Failed(format!("{:#}", e)));
            return;
        }
    };

    let (tx, rx) = mpsc::channel();
    state.result_rx = Some(rx);
    state.status = None;

    let ctx = ctx.clone();
    thread::spawn(move || {
        let result = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(async {
                MoveCoordinator::new(&store, &store)
                    .move_event(&request)
                    .await
            }),
            Err(e) => Err(MoveError::CreateFailed {
                target: request.target.clone(),
                reason: format!("failed to start async runtime: {}", e),
            }),
        };
        let _ = tx.send(result);
        ctx.request_repaint();
    });
}
