//! Class and unit store
//!
//! The six classes are fixed at construction; only their unit lists change.
//! Unit ids come from one counter shared by every class.

use tracing::debug;

use crate::domain::{Class, ClassName, Id, NewUnit, Unit};

#[derive(Debug, Clone)]
pub struct ClassStore {
    classes: Vec<Class>,
    next_unit_id: Id,
}

/// (name, age, display color) for each class
const CLASS_TABLE: [(ClassName, i32, &str); 6] = [
    (ClassName::Amigo, 10, "bg-blue-500"),
    (ClassName::Companheiro, 11, "bg-red-500"),
    (ClassName::Pesquisador, 12, "bg-green-500"),
    (ClassName::Pioneiro, 13, "bg-gray-500"),
    (ClassName::Excursionista, 14, "bg-yellow-500"),
    (ClassName::Guia, 15, "bg-purple-500"),
];

impl Default for ClassStore {
    fn default() -> Self {
        let classes = CLASS_TABLE
            .iter()
            .map(|(name, age, color)| Class {
                name: *name,
                units: Vec::new(),
                min_age: *age,
                max_age: *age,
                color: (*color).to_string(),
            })
            .collect();
        Self {
            classes,
            next_unit_id: 1,
        }
    }
}

impl ClassStore {
    /// The six classes with no units
    pub fn new() -> Self {
        Self::default()
    }

    /// The six classes with the given units attached
    pub fn seeded(units: Vec<(ClassName, Unit)>) -> Self {
        let mut store = Self::new();
        for (name, unit) in units {
            store.next_unit_id = store.next_unit_id.max(unit.id + 1);
            if let Some(class) = store.class_mut(name) {
                class.units.push(unit);
            }
        }
        store
    }

    pub fn all(&self) -> &[Class] {
        &self.classes
    }

    pub fn get(&self, name: ClassName) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    fn class_mut(&mut self, name: ClassName) -> Option<&mut Class> {
        self.classes.iter_mut().find(|c| c.name == name)
    }

    /// First class whose age band contains `age`
    pub fn class_for_age(&self, age: i32) -> Option<&Class> {
        self.classes.iter().find(|c| c.accepts_age(age))
    }

    pub fn total_units(&self) -> usize {
        self.classes.iter().map(|c| c.units.len()).sum()
    }

    pub fn add_unit(&mut self, class: ClassName, unit: NewUnit) -> Option<Unit> {
        let id = self.next_unit_id;
        let target = self.class_mut(class)?;
        let unit = unit.with_id(id);
        target.units.push(unit.clone());
        self.next_unit_id += 1;
        debug!(class = %class, unit_id = unit.id, "Unit added");
        Some(unit)
    }

    pub fn update_unit(&mut self, class: ClassName, unit: Unit) -> bool {
        let Some(target) = self.class_mut(class) else {
            return false;
        };
        match target.units.iter_mut().find(|u| u.id == unit.id) {
            Some(slot) => {
                *slot = unit;
                true
            }
            None => false,
        }
    }

    pub fn delete_unit(&mut self, class: ClassName, id: Id) -> Option<Unit> {
        let target = self.class_mut(class)?;
        let index = target.units.iter().position(|u| u.id == id)?;
        debug!(class = %class, unit_id = id, "Unit deleted");
        Some(target.units.remove(index))
    }
}
