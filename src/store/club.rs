//! The club: every store the service owns

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::info;

use super::seed;
use super::{ClassStore, EventStore, FinanceStore, MemberStore, MinutesStore, SpecialtyStore};

/// The club shared between request handlers: one writer at a time
pub type SharedClub = Arc<RwLock<Club>>;

/// All stores of one club.
///
/// Cross-store operations borrow the stores they need side by side, e.g.
/// `club.events.add_enrollments(.., &mut club.finance, ..)`.
#[derive(Debug, Clone, Default)]
pub struct Club {
    pub members: MemberStore,
    pub classes: ClassStore,
    pub specialties: SpecialtyStore,
    pub minutes: MinutesStore,
    pub events: EventStore,
    pub finance: FinanceStore,
}

impl Club {
    /// No members or records; the six classes without units
    pub fn empty() -> Self {
        Self::default()
    }

    /// The demo roster. Seeded event sign-ups are charged on `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        let mut club = Self {
            members: MemberStore::seeded(seed::members()),
            classes: ClassStore::seeded(seed::units()),
            specialties: SpecialtyStore::seeded(seed::specialties(), seed::completions()),
            minutes: MinutesStore::seeded(seed::minutes()),
            events: EventStore::seeded(seed::events()),
            finance: FinanceStore::new(),
        };

        for (event_id, member_id) in seed::event_enrollments() {
            club.events
                .add_enrollments(event_id, &[member_id], &mut club.finance, today);
        }

        info!(
            members = club.members.len(),
            specialties = club.specialties.all().len(),
            events = club.events.all().len(),
            "Demo data seeded"
        );
        club
    }

    pub fn into_shared(self) -> SharedClub {
        Arc::new(RwLock::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MemberUnit, NewMember, Role};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }

    #[test]
    fn test_seeded_club_contents() {
        let club = Club::seeded(today());

        assert_eq!(club.members.len(), 10);
        assert_eq!(club.classes.all().len(), 6);
        assert_eq!(club.classes.total_units(), 2);
        assert_eq!(club.specialties.all().len(), 8);
        assert_eq!(club.specialties.completions().len(), 4);
        assert_eq!(club.minutes.all().len(), 2);
        assert_eq!(club.events.enrollments().len(), 2);

        let debits = club.finance.debits();
        assert_eq!(debits.len(), 2);
        assert!(debits
            .iter()
            .all(|d| d.description == "Inscrição: Acampamento de Unidades" && d.date == today()));
    }

    #[test]
    fn test_seeded_counters_continue_after_demo_ids() {
        let mut club = Club::seeded(today());
        let member = club.members.add(NewMember {
            name: "Nova Pessoa".to_string(),
            unit: MemberUnit::Tigers,
            birth_date: NaiveDate::from_ymd_opt(2013, 4, 4).unwrap(),
            role: Role::Pathfinder,
        });
        assert_eq!(member.id, 11);
    }

    #[test]
    fn test_empty_club() {
        let club = Club::empty();
        assert!(club.members.is_empty());
        assert_eq!(club.classes.all().len(), 6);
        assert!(club.finance.debits().is_empty());
    }
}
