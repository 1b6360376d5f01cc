//! Specialty Handler
//!
//! Catalog maintenance and completion batches.

use tracing::info;

use crate::domain::{DomainError, Id, OperationContext, Specialty};
use crate::error::{AppError, AppResult};
use crate::store::SharedClub;

use super::{CompletionCommand, CompletionResult, SpecialtyCommand};

pub struct SpecialtyHandler {
    club: SharedClub,
}

impl SpecialtyHandler {
    pub fn new(club: SharedClub) -> Self {
        Self { club }
    }

    pub async fn create(
        &self,
        command: SpecialtyCommand,
        context: &OperationContext,
    ) -> AppResult<Specialty> {
        let specialty = self.club.write().await.specialties.add(command.validate()?);

        info!(
            correlation_id = ?context.correlation_id,
            specialty_id = specialty.id,
            "Specialty created"
        );
        Ok(specialty)
    }

    pub async fn update(
        &self,
        id: Id,
        command: SpecialtyCommand,
        context: &OperationContext,
    ) -> AppResult<Specialty> {
        let specialty = command.validate()?.with_id(id);
        if !self.club.write().await.specialties.update(specialty.clone()) {
            return Err(AppError::not_found("specialty", id));
        }

        info!(correlation_id = ?context.correlation_id, specialty_id = id, "Specialty updated");
        Ok(specialty)
    }

    /// Delete a specialty together with its completion records
    pub async fn delete(&self, id: Id, context: &OperationContext) -> AppResult<Specialty> {
        let specialty = self
            .club
            .write()
            .await
            .specialties
            .delete(id)
            .ok_or_else(|| AppError::not_found("specialty", id))?;

        info!(correlation_id = ?context.correlation_id, specialty_id = id, "Specialty deleted");
        Ok(specialty)
    }

    /// Record the specialty for every listed member.
    ///
    /// The instructor must hold an instructing role. Members that already
    /// completed the specialty are reported as skipped.
    pub async fn record_completions(
        &self,
        specialty_id: Id,
        command: CompletionCommand,
        context: &OperationContext,
    ) -> AppResult<CompletionResult> {
        let instructor_id = command.instructor_id;
        let completions = command.validate(specialty_id)?;

        let mut club = self.club.write().await;
        if club.specialties.get(specialty_id).is_none() {
            return Err(AppError::not_found("specialty", specialty_id));
        }
        let instructor = club
            .members
            .get(instructor_id)
            .ok_or_else(|| AppError::not_found("member", instructor_id))?;
        if !instructor.role.can_instruct() {
            return Err(DomainError::NotAnInstructor(instructor_id).into());
        }

        let mut result = CompletionResult {
            recorded: Vec::new(),
            skipped: Vec::new(),
        };
        for completion in completions {
            if club.specialties.add_completion(completion.clone()) {
                result.recorded.push(completion);
            } else {
                result.skipped.push(completion.member_id);
            }
        }

        info!(
            correlation_id = ?context.correlation_id,
            specialty_id,
            recorded = result.recorded.len(),
            skipped = result.skipped.len(),
            "Completions recorded"
        );
        Ok(result)
    }
}
