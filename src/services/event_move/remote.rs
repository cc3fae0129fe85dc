use anyhow::Result;

use crate::models::event::{CalendarRef, EventPayload};

/// Create/delete capability of a remote calendar backend.
///
/// Calls are not transactional and may fail after partially applying on the
/// server; callers must not assume anything beyond "succeeded" or "failed".
#[allow(async_fn_in_trait)]
pub trait RemoteEventStore {
    /// Insert `payload` into `calendar`, returning the new event's id.
    async fn create_event(&self, calendar: &CalendarRef, payload: &EventPayload) -> Result<String>;

    async fn delete_event(&self, calendar: &CalendarRef, event_id: &str) -> Result<()>;
}
