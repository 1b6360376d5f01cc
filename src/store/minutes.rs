//! Meeting minutes store

use tracing::debug;

use super::Collection;
use crate::domain::minutes::dedup_preserving_order;
use crate::domain::{Id, Minutes, NewMinutes};

#[derive(Debug, Clone, Default)]
pub struct MinutesStore {
    minutes: Collection<Minutes>,
}

impl MinutesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(minutes: Vec<Minutes>) -> Self {
        Self {
            minutes: Collection::seeded(minutes),
        }
    }

    pub fn all(&self) -> &[Minutes] {
        self.minutes.all()
    }

    pub fn get(&self, id: Id) -> Option<&Minutes> {
        self.minutes.get(id)
    }

    pub fn add(&mut self, minutes: NewMinutes) -> Minutes {
        let minutes = self.minutes.insert_with(|id| minutes.with_id(id));
        debug!(minutes_id = minutes.id, "Minutes added");
        minutes
    }

    pub fn update(&mut self, mut minutes: Minutes) -> bool {
        minutes.attachments = dedup_preserving_order(minutes.attachments);
        self.minutes.replace(minutes)
    }

    pub fn delete(&mut self, id: Id) -> Option<Minutes> {
        self.minutes.remove(id)
    }
}
