//! Specialty catalog and completion records

use tracing::debug;

use super::Collection;
use crate::domain::{Completion, Id, NewSpecialty, Specialty};

#[derive(Debug, Clone, Default)]
pub struct SpecialtyStore {
    specialties: Collection<Specialty>,
    completions: Vec<Completion>,
}

impl SpecialtyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(specialties: Vec<Specialty>, completions: Vec<Completion>) -> Self {
        let mut store = Self {
            specialties: Collection::seeded(specialties),
            completions: Vec::new(),
        };
        for completion in completions {
            store.add_completion(completion);
        }
        store
    }

    pub fn all(&self) -> &[Specialty] {
        self.specialties.all()
    }

    pub fn get(&self, id: Id) -> Option<&Specialty> {
        self.specialties.get(id)
    }

    pub fn add(&mut self, specialty: NewSpecialty) -> Specialty {
        let specialty = self.specialties.insert_with(|id| specialty.with_id(id));
        debug!(specialty_id = specialty.id, "Specialty added");
        specialty
    }

    pub fn update(&mut self, specialty: Specialty) -> bool {
        self.specialties.replace(specialty)
    }

    /// Remove the specialty and every completion of it.
    pub fn delete(&mut self, id: Id) -> Option<Specialty> {
        let removed = self.specialties.remove(id)?;
        let before = self.completions.len();
        self.completions.retain(|c| c.specialty_id != id);
        debug!(
            specialty_id = id,
            completions_removed = before - self.completions.len(),
            "Specialty deleted"
        );
        Some(removed)
    }

    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    /// Record a completion. An existing (member, specialty) pair is skipped.
    pub fn add_completion(&mut self, completion: Completion) -> bool {
        if self.completions.iter().any(|c| c.same_pair(&completion)) {
            debug!(
                member_id = completion.member_id,
                specialty_id = completion.specialty_id,
                "Completion already recorded, skipping"
            );
            return false;
        }
        self.completions.push(completion);
        true
    }

    pub fn completions_for_specialty(&self, specialty_id: Id) -> impl Iterator<Item = &Completion> {
        self.completions
            .iter()
            .filter(move |c| c.specialty_id == specialty_id)
    }

    pub fn completions_for_member(&self, member_id: Id) -> impl Iterator<Item = &Completion> {
        self.completions
            .iter()
            .filter(move |c| c.member_id == member_id)
    }
}
