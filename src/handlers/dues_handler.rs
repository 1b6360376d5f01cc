//! Dues Handler
//!
//! Annual dues enrollments and installment payments.

use tracing::{info, warn};

use crate::domain::{Id, OperationContext};
use crate::error::{AppError, AppResult};
use crate::reports::{EnrollmentView, InstallmentView};
use crate::store::SharedClub;

use super::{DuesEnrollmentCommand, DuesEnrollmentResult, PaymentResult};

pub struct DuesHandler {
    club: SharedClub,
}

impl DuesHandler {
    pub fn new(club: SharedClub) -> Self {
        Self { club }
    }

    /// Enroll a member for a year and generate the ten installments
    pub async fn enroll(
        &self,
        command: DuesEnrollmentCommand,
        context: &OperationContext,
    ) -> AppResult<DuesEnrollmentResult> {
        let valid = command.validate()?;

        let mut club = self.club.write().await;
        if club.members.get(valid.member_id).is_none() {
            return Err(AppError::not_found("member", valid.member_id));
        }
        let enrollment = club
            .finance
            .create_dues_enrollment(valid.member_id, valid.year, valid.total)
            .ok_or_else(|| AppError::InvalidRequest(format!("Unsupported year: {}", valid.year)))?;
        let installments = club
            .finance
            .installments_for(enrollment.id)
            .map(|i| InstallmentView::as_of(i, context.today))
            .collect();

        info!(
            correlation_id = ?context.correlation_id,
            enrollment_id = enrollment.id,
            member_id = enrollment.member_id,
            year = enrollment.year,
            "Dues enrollment created"
        );
        Ok(DuesEnrollmentResult {
            enrollment: EnrollmentView::as_of(&enrollment, context.today),
            installments,
        })
    }

    /// Pay an installment, booking the inflow dated on the operation date
    pub async fn pay_installment(&self, id: Id, context: &OperationContext) -> AppResult<PaymentResult> {
        let mut guard = self.club.write().await;
        let club = &mut *guard;
        if !club.finance.installments().iter().any(|i| i.id == id) {
            return Err(AppError::not_found("installment", id));
        }
        let result = PaymentResult::from(club.finance.pay_installment(id, &club.members, context.today));

        if result.paid {
            info!(correlation_id = ?context.correlation_id, installment_id = id, "Installment paid");
        } else {
            warn!(correlation_id = ?context.correlation_id, installment_id = id, "Installment was already paid");
        }
        Ok(result)
    }
}
