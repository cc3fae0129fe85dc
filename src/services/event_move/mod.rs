// Event move service module
// Two-phase relocation of an event between independent remote calendars.
//
// There is no cross-store transaction, so the event is created in the target
// first and only then deleted from the source. Any failure leaves the event
// where it was or duplicated in both calendars; it is never lost.

mod http;
mod remote;

pub use http::HttpEventStore;
pub use remote::RemoteEventStore;

use thiserror::Error;

use crate::models::event::{CalendarRef, MoveRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Nothing changed; the whole move can be retried.
    #[error("could not create the event in '{target}': {reason}")]
    CreateFailed { target: CalendarRef, reason: String },

    /// The event now exists in both calendars. The user must remove the
    /// duplicate; the delete is never retried automatically.
    #[error(
        "event copied to '{target}' (id {target_event_id}) but removing it from '{source_calendar}' \
         (id {source_event_id}) failed: {reason}. Please delete the duplicate manually"
    )]
    DeleteFailedAfterCreate {
        source_calendar: CalendarRef,
        source_event_id: String,
        target: CalendarRef,
        target_event_id: String,
        reason: String,
    },

    #[error("source and target are the same calendar '{0}'")]
    SameCalendar(CalendarRef),

    #[error("invalid event: {0}")]
    InvalidPayload(String),
}

/// Successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedEvent {
    pub target: CalendarRef,
    pub target_event_id: String,
}

/// Runs moves from calendars on `source` to calendars on `target`.
///
/// Pass the same store twice when both calendars live on one backend.
/// Moves of the same event must be serialized by the caller.
pub struct MoveCoordinator<'a, S, T> {
    source: &'a S,
    target: &'a T,
}

impl<'a, S, T> MoveCoordinator<'a, S, T>
where
    S: RemoteEventStore,
    T: RemoteEventStore,
{
    pub fn new(source: &'a S, target: &'a T) -> Self {
        Self { source, target }
    }

    pub async fn move_event(&self, request: &MoveRequest) -> Result<MovedEvent, MoveError> {
        if request.source == request.target {
            return Err(MoveError::SameCalendar(request.source.clone()));
        }

        request.payload.validate().map_err(MoveError::InvalidPayload)?;

        let target_event_id = match self
            .target
            .create_event(&request.target, &request.payload)
            .await
        {
            Ok(id) => id,
            Err(err) => {
                log::warn!(
                    "Move of event {} aborted, create in {} failed: {:#}",
                    request.event_id,
                    request.target,
                    err
                );
                return Err(MoveError::CreateFailed {
                    target: request.target.clone(),
                    reason: format!("{err:#}"),
                });
            }
        };

        if let Err(err) = self
            .source
            .delete_event(&request.source, &request.event_id)
            .await
        {
            log::warn!(
                "Event {} duplicated: created as {} in {} but delete from {} failed: {:#}",
                request.event_id,
                target_event_id,
                request.target,
                request.source,
                err
            );
            return Err(MoveError::DeleteFailedAfterCreate {
                source_calendar: request.source.clone(),
                source_event_id: request.event_id.clone(),
                target: request.target.clone(),
                target_event_id,
                reason: format!("{err:#}"),
            });
        }

        log::info!(
            "Moved event {} from {} to {} (now {})",
            request.event_id,
            request.source,
            request.target,
            target_event_id
        );

        Ok(MovedEvent {
            target: request.target.clone(),
            target_event_id,
        })
    }
}
