//! Event Handler
//!
//! Event maintenance and sign-ups. A sign-up charges the member the
//! event's fee.

use tracing::info;

use crate::domain::{Event, Id, OperationContext};
use crate::error::{AppError, AppResult};
use crate::store::SharedClub;

use super::{EventCommand, EventEnrollmentCommand, EventEnrollmentResult};

pub struct EventHandler {
    club: SharedClub,
}

impl EventHandler {
    pub fn new(club: SharedClub) -> Self {
        Self { club }
    }

    pub async fn create(&self, command: EventCommand, context: &OperationContext) -> AppResult<Event> {
        let event = self.club.write().await.events.add(command.validate()?);

        info!(correlation_id = ?context.correlation_id, event_id = event.id, "Event created");
        Ok(event)
    }

    pub async fn update(
        &self,
        id: Id,
        command: EventCommand,
        context: &OperationContext,
    ) -> AppResult<Event> {
        let event = command.validate()?.with_id(id);
        if !self.club.write().await.events.update(event.clone()) {
            return Err(AppError::not_found("event", id));
        }

        info!(correlation_id = ?context.correlation_id, event_id = id, "Event updated");
        Ok(event)
    }

    /// Delete an event and its sign-ups; debits already issued remain
    pub async fn delete(&self, id: Id, context: &OperationContext) -> AppResult<Event> {
        let event = self
            .club
            .write()
            .await
            .events
            .delete(id)
            .ok_or_else(|| AppError::not_found("event", id))?;

        info!(correlation_id = ?context.correlation_id, event_id = id, "Event deleted");
        Ok(event)
    }

    pub async fn enroll(
        &self,
        event_id: Id,
        command: EventEnrollmentCommand,
        context: &OperationContext,
    ) -> AppResult<EventEnrollmentResult> {
        let member_ids = command.validate()?;

        let mut guard = self.club.write().await;
        let club = &mut *guard;
        let debits_before = club.finance.debits().len();
        let enrollments = club
            .events
            .add_enrollments(event_id, &member_ids, &mut club.finance, context.today)
            .ok_or_else(|| AppError::not_found("event", event_id))?;
        let debits = club.finance.debits()[debits_before..].to_vec();

        info!(
            correlation_id = ?context.correlation_id,
            event_id,
            enrolled = enrollments.len(),
            debits = debits.len(),
            "Members enrolled in event"
        );
        Ok(EventEnrollmentResult { enrollments, debits })
    }
}
