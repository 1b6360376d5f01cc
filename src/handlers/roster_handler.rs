//! Roster Handler
//!
//! Members and the units inside each class.

use tracing::info;

use crate::domain::{ClassName, Id, Member, OperationContext, Unit};
use crate::error::{AppError, AppResult};
use crate::store::SharedClub;

use super::{MemberCommand, UnitCommand};

/// Handler for member and unit maintenance
pub struct RosterHandler {
    club: SharedClub,
}

impl RosterHandler {
    pub fn new(club: SharedClub) -> Self {
        Self { club }
    }

    pub async fn create_member(
        &self,
        command: MemberCommand,
        context: &OperationContext,
    ) -> AppResult<Member> {
        let new_member = command.validate()?;
        let member = self.club.write().await.members.add(new_member);

        info!(
            correlation_id = ?context.correlation_id,
            member_id = member.id,
            "Member created"
        );
        Ok(member)
    }

    pub async fn update_member(
        &self,
        id: Id,
        command: MemberCommand,
        context: &OperationContext,
    ) -> AppResult<Member> {
        let member = command.validate()?.with_id(id);
        if !self.club.write().await.members.update(member.clone()) {
            return Err(AppError::not_found("member", id));
        }

        info!(correlation_id = ?context.correlation_id, member_id = id, "Member updated");
        Ok(member)
    }

    /// Delete a member. Enrollments, debits and completions that point at
    /// it stay and resolve to placeholder names from then on.
    pub async fn delete_member(&self, id: Id, context: &OperationContext) -> AppResult<Member> {
        let member = self
            .club
            .write()
            .await
            .members
            .delete(id)
            .ok_or_else(|| AppError::not_found("member", id))?;

        info!(correlation_id = ?context.correlation_id, member_id = id, "Member deleted");
        Ok(member)
    }

    pub async fn add_unit(
        &self,
        class: ClassName,
        command: UnitCommand,
        context: &OperationContext,
    ) -> AppResult<Unit> {
        let new_unit = command.validate()?;
        let unit = self
            .club
            .write()
            .await
            .classes
            .add_unit(class, new_unit)
            .ok_or_else(|| AppError::InvalidRequest(format!("Unknown class: {class}")))?;

        info!(
            correlation_id = ?context.correlation_id,
            class = %class,
            unit_id = unit.id,
            "Unit created"
        );
        Ok(unit)
    }

    pub async fn update_unit(
        &self,
        class: ClassName,
        id: Id,
        command: UnitCommand,
        context: &OperationContext,
    ) -> AppResult<Unit> {
        let unit = command.validate()?.with_id(id);
        if !self.club.write().await.classes.update_unit(class, unit.clone()) {
            return Err(AppError::not_found("unit", id));
        }

        info!(correlation_id = ?context.correlation_id, class = %class, unit_id = id, "Unit updated");
        Ok(unit)
    }

    pub async fn delete_unit(
        &self,
        class: ClassName,
        id: Id,
        context: &OperationContext,
    ) -> AppResult<Unit> {
        let unit = self
            .club
            .write()
            .await
            .classes
            .delete_unit(class, id)
            .ok_or_else(|| AppError::not_found("unit", id))?;

        info!(correlation_id = ?context.correlation_id, class = %class, unit_id = id, "Unit deleted");
        Ok(unit)
    }
}
