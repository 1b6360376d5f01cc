//! Store module
//!
//! In-memory stores, one per functional area. Stores are synchronous and
//! never fail: lookups return `Option`, mutators report misses as
//! `false`/`None`, and nothing here validates user input.

pub mod classes;
pub mod club;
pub mod events;
pub mod finance;
pub mod members;
pub mod minutes;
mod seed;
pub mod specialties;

pub use classes::ClassStore;
pub use club::{Club, SharedClub};
pub use events::EventStore;
pub use finance::FinanceStore;
pub use members::MemberStore;
pub use minutes::MinutesStore;
pub use specialties::SpecialtyStore;

use crate::domain::{
    Asset, CashEntry, Cost, Debit, DuesEnrollment, Event, Id, Installment, Member, Minutes,
    Specialty, Unit,
};

/// A record keyed by a store-assigned id
pub trait Entity: Clone {
    fn id(&self) -> Id;
}

macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> Id {
                    self.id
                }
            }
        )+
    };
}

impl_entity!(
    Asset,
    CashEntry,
    Cost,
    Debit,
    DuesEnrollment,
    Event,
    Installment,
    Member,
    Minutes,
    Specialty,
    Unit,
);

/// Ordered records plus the counter that assigns the next id.
///
/// Ids are never reused: the counter starts above the highest seeded id and
/// only moves forward, even after deletes.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    next_id: Id,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records; the counter continues at max id + 1.
    pub fn seeded(items: Vec<T>) -> Self {
        let next_id = items.iter().map(Entity::id).max().map_or(1, |max| max + 1);
        Self { items, next_id }
    }

    /// Assign the next id, build the record with it and append it.
    pub fn insert_with(&mut self, build: impl FnOnce(Id) -> T) -> T {
        let record = build(self.next_id);
        self.next_id += 1;
        self.items.push(record.clone());
        record
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Replace the record with the same id in place. Unknown ids are a no-op.
    pub fn replace(&mut self, record: T) -> bool {
        match self.get_mut(record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
