//! Minutes Handler

use tracing::info;

use crate::domain::{Id, Minutes, OperationContext};
use crate::error::{AppError, AppResult};
use crate::store::SharedClub;

use super::MinutesCommand;

pub struct MinutesHandler {
    club: SharedClub,
}

impl MinutesHandler {
    pub fn new(club: SharedClub) -> Self {
        Self { club }
    }

    pub async fn create(
        &self,
        command: MinutesCommand,
        context: &OperationContext,
    ) -> AppResult<Minutes> {
        let minutes = self.club.write().await.minutes.add(command.validate()?);

        info!(correlation_id = ?context.correlation_id, minutes_id = minutes.id, "Minutes created");
        Ok(minutes)
    }

    pub async fn update(
        &self,
        id: Id,
        command: MinutesCommand,
        context: &OperationContext,
    ) -> AppResult<Minutes> {
        let minutes = command.validate()?.with_id(id);
        if !self.club.write().await.minutes.update(minutes.clone()) {
            return Err(AppError::not_found("minutes", id));
        }

        info!(correlation_id = ?context.correlation_id, minutes_id = id, "Minutes updated");
        Ok(minutes)
    }

    pub async fn delete(&self, id: Id, context: &OperationContext) -> AppResult<Minutes> {
        let minutes = self
            .club
            .write()
            .await
            .minutes
            .delete(id)
            .ok_or_else(|| AppError::not_found("minutes", id))?;

        info!(correlation_id = ?context.correlation_id, minutes_id = id, "Minutes deleted");
        Ok(minutes)
    }
}
