//! Event store
//!
//! Events and their member sign-ups. Signing a member up charges the
//! event's fee through the finance store.

use chrono::NaiveDate;
use tracing::debug;

use super::{Collection, FinanceStore};
use crate::domain::{Event, EventEnrollment, Id, NewEvent};

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Collection<Event>,
    enrollments: Vec<EventEnrollment>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(events: Vec<Event>) -> Self {
        Self {
            events: Collection::seeded(events),
            enrollments: Vec::new(),
        }
    }

    pub fn all(&self) -> &[Event] {
        self.events.all()
    }

    pub fn get(&self, id: Id) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn add(&mut self, event: NewEvent) -> Event {
        let event = self.events.insert_with(|id| event.with_id(id));
        debug!(event_id = event.id, label = %event.label, "Event added");
        event
    }

    pub fn update(&mut self, event: Event) -> bool {
        self.events.replace(event)
    }

    /// Remove the event and its sign-ups. Debits already issued stay.
    pub fn delete(&mut self, id: Id) -> Option<Event> {
        let removed = self.events.remove(id)?;
        self.enrollments.retain(|e| e.event_id != id);
        debug!(event_id = id, "Event deleted");
        Some(removed)
    }

    pub fn enrollments(&self) -> &[EventEnrollment] {
        &self.enrollments
    }

    pub fn enrollments_for(&self, event_id: Id) -> impl Iterator<Item = &EventEnrollment> {
        self.enrollments
            .iter()
            .filter(move |e| e.event_id == event_id)
    }

    pub fn is_enrolled(&self, event_id: Id, member_id: Id) -> bool {
        self.enrollments
            .iter()
            .any(|e| e.event_id == event_id && e.member_id == member_id)
    }

    /// Sign members up for an event and charge each one its fee.
    ///
    /// Members already signed up are skipped; the debit itself is guarded
    /// per (member, event) by the finance store. Returns the new sign-ups,
    /// or `None` when the event does not exist.
    pub fn add_enrollments(
        &mut self,
        event_id: Id,
        member_ids: &[Id],
        finance: &mut FinanceStore,
        today: NaiveDate,
    ) -> Option<Vec<EventEnrollment>> {
        let event = self.events.get(event_id)?.clone();
        let mut added = Vec::new();

        for &member_id in member_ids {
            if self.is_enrolled(event_id, member_id) {
                debug!(event_id, member_id, "Member already enrolled, skipping");
                continue;
            }
            let enrollment = EventEnrollment { event_id, member_id };
            self.enrollments.push(enrollment);
            added.push(enrollment);

            finance.create_event_debit(
                member_id,
                event_id,
                event.debit_description(),
                event.fee,
                today,
            );
        }

        debug!(event_id, added = added.len(), "Event enrollments added");
        Some(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn camp() -> NewEvent {
        NewEvent {
            label: "Acampamento de Unidades".to_string(),
            date: date(2024, 9, 14),
            location: "Parque da Represa".to_string(),
            fee: dec!(50.00),
        }
    }

    #[test]
    fn test_enrollment_creates_one_debit_per_member() {
        let mut events = EventStore::new();
        let mut finance = FinanceStore::new();
        let event = events.add(camp());

        let added = events
            .add_enrollments(event.id, &[1, 4], &mut finance, date(2024, 8, 1))
            .unwrap();

        assert_eq!(added.len(), 2);
        assert_eq!(finance.debits().len(), 2);
        let debit = &finance.debits()[0];
        assert_eq!(debit.description, "Inscrição: Acampamento de Unidades");
        assert_eq!(debit.amount, dec!(50.00));
        assert_eq!(debit.event_id, Some(event.id));
    }

    #[test]
    fn test_existing_debit_not_duplicated() {
        let mut events = EventStore::new();
        let mut finance = FinanceStore::new();
        let event = events.add(camp());
        finance.create_event_debit(5, event.id, "Inscrição".into(), dec!(50), date(2024, 8, 1));

        events
            .add_enrollments(event.id, &[5], &mut finance, date(2024, 8, 2))
            .unwrap();

        assert!(events.is_enrolled(event.id, 5));
        assert_eq!(finance.debits_of(5).count(), 1);
    }

    #[test]
    fn test_repeat_enrollment_skipped() {
        let mut events = EventStore::new();
        let mut finance = FinanceStore::new();
        let event = events.add(camp());
        let today = date(2024, 8, 1);

        events.add_enrollments(event.id, &[1], &mut finance, today);
        let second = events
            .add_enrollments(event.id, &[1, 2], &mut finance, today)
            .unwrap();

        assert_eq!(second, vec![EventEnrollment { event_id: event.id, member_id: 2 }]);
        assert_eq!(events.enrollments_for(event.id).count(), 2);
    }

    #[test]
    fn test_unknown_event_returns_none() {
        let mut events = EventStore::new();
        let mut finance = FinanceStore::new();
        assert!(events
            .add_enrollments(9, &[1], &mut finance, date(2024, 8, 1))
            .is_none());
        assert!(finance.debits().is_empty());
    }

    #[test]
    fn test_delete_keeps_debits() {
        let mut events = EventStore::new();
        let mut finance = FinanceStore::new();
        let event = events.add(camp());
        events.add_enrollments(event.id, &[1, 4], &mut finance, date(2024, 8, 1));

        assert!(events.delete(event.id).is_some());
        assert!(events.enrollments().is_empty());
        assert_eq!(finance.debits().len(), 2);
    }
}
