// Test fixtures - reusable test data
// Provides consistent test data across all test files
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_calendar_grid::models::event::{CalendarRef, EventPayload, MoveRequest};
use rust_calendar_grid::services::event_move::RemoteEventStore;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Feb 14, 2025 at 14:00
    pub fn valentine_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 14)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    /// Returns Mar 30, 2025 at 01:30, inside the UK DST gap
    pub fn uk_dst_gap_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 30)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap()
    }
}

pub fn payload() -> EventPayload {
    let start = dates::valentine_2025();
    EventPayload::in_zone(
        "Quarterly review",
        start,
        start + chrono::Duration::minutes(90),
        "Australia/Brisbane",
    )
    .unwrap()
    .with_description("Agenda:\n1. Revenue\n2. Hiring")
    .with_location("Level 3 boardroom")
}

pub fn move_request(source: &str, target: &str) -> MoveRequest {
    MoveRequest {
        source: CalendarRef::new(source),
        target: CalendarRef::new(target),
        event_id: "evt-original".to_string(),
        payload: payload(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Create { store: String, calendar: String },
    Delete { store: String, calendar: String, event_id: String },
}

pub type CallLog = Rc<RefCell<Vec<StoreCall>>>;

/// In-memory remote store that records every call in a log shared with
/// other fake stores, so cross-store ordering can be asserted.
pub struct FakeEventStore {
    name: String,
    log: CallLog,
    events: RefCell<HashMap<(String, String), EventPayload>>,
    next_id: RefCell<u32>,
    pub fail_create: bool,
    pub fail_delete: bool,
}

impl FakeEventStore {
    pub fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            log: Rc::clone(log),
            events: RefCell::new(HashMap::new()),
            next_id: RefCell::new(1),
            fail_create: false,
            fail_delete: false,
        }
    }

    pub fn insert(&self, calendar: &str, event_id: &str, payload: EventPayload) {
        self.events
            .borrow_mut()
            .insert((calendar.to_string(), event_id.to_string()), payload);
    }

    pub fn get(&self, calendar: &str, event_id: &str) -> Option<EventPayload> {
        self.events
            .borrow()
            .get(&(calendar.to_string(), event_id.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }
}

impl RemoteEventStore for FakeEventStore {
    async fn create_event(&self, calendar: &CalendarRef, payload: &EventPayload) -> Result<String> {
        self.log.borrow_mut().push(StoreCall::Create {
            store: self.name.clone(),
            calendar: calendar.to_string(),
        });

        if self.fail_create {
            return Err(anyhow!("HTTP 503 Service Unavailable"));
        }

        let id = {
            let mut next = self.next_id.borrow_mut();
            let id = format!("{}-{}", self.name, *next);
            *next += 1;
            id
        };
        self.insert(calendar.as_str(), &id, payload.clone());
        Ok(id)
    }

    async fn delete_event(&self, calendar: &CalendarRef, event_id: &str) -> Result<()> {
        self.log.borrow_mut().push(StoreCall::Delete {
            store: self.name.clone(),
            calendar: calendar.to_string(),
            event_id: event_id.to_string(),
        });

        if self.fail_delete {
            return Err(anyhow!("connection reset by peer"));
        }

        self.events
            .borrow_mut()
            .remove(&(calendar.to_string(), event_id.to_string()))
            .map(|_| ())
            .ok_or_else(|| anyhow!("HTTP 404 Not Found"))
    }
}
