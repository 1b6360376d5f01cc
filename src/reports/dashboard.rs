//! Dashboard counters and the member finance detail view

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::{Debit, DuesEnrollment, EnrollmentStatus, Event, Id, Installment, InstallmentStatus, Member};
use crate::store::Club;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Distinct members with an active enrollment for the current year
    pub active_members: usize,
    /// Earliest event on or after today
    pub next_event: Option<Event>,
    pub total_units: usize,
    pub total_completions: usize,
}

pub fn dashboard(club: &Club, today: NaiveDate) -> Dashboard {
    let active_members = club
        .finance
        .enrollments()
        .iter()
        .filter(|e| e.year == today.year() && e.is_active())
        .map(|e| e.member_id)
        .collect::<HashSet<Id>>()
        .len();

    let next_event = club
        .events
        .all()
        .iter()
        .filter(|e| e.date >= today)
        .min_by_key(|e| e.date)
        .cloned();

    Dashboard {
        active_members,
        next_event,
        total_units: club.classes.total_units(),
        total_completions: club.specialties.completions().len(),
    }
}

/// An installment with its status as of the report date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallmentView {
    #[serde(flatten)]
    pub installment: Installment,
    pub effective_status: InstallmentStatus,
}

impl InstallmentView {
    pub fn as_of(installment: &Installment, today: NaiveDate) -> Self {
        Self {
            installment: installment.clone(),
            effective_status: installment.effective_status(today),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrollmentView {
    #[serde(flatten)]
    pub enrollment: DuesEnrollment,
    pub effective_status: EnrollmentStatus,
}

impl EnrollmentView {
    pub fn as_of(enrollment: &DuesEnrollment, today: NaiveDate) -> Self {
        Self {
            enrollment: enrollment.clone(),
            effective_status: enrollment.effective_status(today),
        }
    }
}

/// Everything the console shows when a member's finances are opened
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberFinance {
    pub member: Member,
    /// Enrollment for the current year, if any
    pub enrollment: Option<EnrollmentView>,
    pub installments: Vec<InstallmentView>,
    pub debits: Vec<Debit>,
}

/// `None` when the member does not exist
pub fn member_finance(club: &Club, member_id: Id, today: NaiveDate) -> Option<MemberFinance> {
    let member = club.members.get(member_id)?.clone();
    let enrollment = club.finance.enrollment_for(member_id, Some(today.year()));

    let installments = enrollment
        .map(|e| {
            club.finance
                .installments_for(e.id)
                .map(|i| InstallmentView::as_of(i, today))
                .collect()
        })
        .unwrap_or_default();

    Some(MemberFinance {
        member,
        enrollment: enrollment.map(|e| EnrollmentView::as_of(e, today)),
        installments,
        debits: club.finance.debits_of(member_id).cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewEvent;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seeded_counters() {
        let club = Club::seeded(date(2024, 8, 1));
        let board = dashboard(&club, date(2024, 8, 1));

        assert_eq!(board.active_members, 0);
        assert_eq!(board.next_event.unwrap().id, 1);
        assert_eq!(board.total_units, 2);
        assert_eq!(board.total_completions, 4);
    }

    #[test]
    fn test_active_members_counted_once() {
        let mut club = Club::seeded(date(2024, 8, 1));
        club.finance.create_dues_enrollment(1, 2024, dec!(100));
        club.finance.create_dues_enrollment(1, 2024, dec!(100));
        club.finance.create_dues_enrollment(2, 2023, dec!(100));

        assert_eq!(dashboard(&club, date(2024, 8, 1)).active_members, 1);
    }

    #[test]
    fn test_next_event_includes_today_and_skips_past() {
        let mut club = Club::seeded(date(2024, 8, 1));
        club.events.add(NewEvent {
            label: "Caminhada".to_string(),
            date: date(2024, 8, 10),
            location: "Trilha".to_string(),
            fee: dec!(0),
        });

        let next = dashboard(&club, date(2024, 8, 10)).next_event.unwrap();
        assert_eq!(next.label, "Caminhada");
        assert!(dashboard(&club, date(2024, 9, 15)).next_event.is_none());
    }

    #[test]
    fn test_member_finance_uses_current_year() {
        let mut club = Club::seeded(date(2024, 8, 1));
        club.finance.create_dues_enrollment(1, 2023, dec!(50));
        club.finance.create_dues_enrollment(1, 2024, dec!(100));

        let details = member_finance(&club, 1, date(2024, 8, 1)).unwrap();
        let enrollment = details.enrollment.unwrap();
        assert_eq!(enrollment.enrollment.year, 2024);
        assert_eq!(enrollment.effective_status, EnrollmentStatus::Active);
        assert_eq!(details.installments.len(), 10);
        assert_eq!(details.installments[0].effective_status, InstallmentStatus::Overdue);
        assert_eq!(details.installments[9].effective_status, InstallmentStatus::Pending);
        assert_eq!(details.debits.len(), 1);
    }

    #[test]
    fn test_member_finance_without_enrollment() {
        let club = Club::seeded(date(2024, 8, 1));

        let details = member_finance(&club, 2, date(2024, 8, 1)).unwrap();
        assert!(details.enrollment.is_none());
        assert!(details.installments.is_empty());
        assert!(member_finance(&club, 99, date(2024, 8, 1)).is_none());
    }
}
