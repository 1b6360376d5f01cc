//! Classes and units
//!
//! The six age-banded classes are fixed; only their units change.

use serde::{Deserialize, Serialize};

use super::labels::labeled_enum;
use super::Id;

/// Label used when no class matches a member's age
pub const NO_CLASS: &str = "N/A";

labeled_enum! {
    /// The fixed, age-banded membership tiers
    pub enum ClassName {
        Amigo => "Amigo",
        Companheiro => "Companheiro",
        Pesquisador => "Pesquisador",
        Pioneiro => "Pioneiro",
        Excursionista => "Excursionista",
        Guia => "Guia",
    }
}

/// A named sub-group of a class with an optional counselor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: Id,
    pub name: String,
    pub counselor_id: Option<Id>,
}

/// A unit before the store assigns its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUnit {
    pub name: String,
    pub counselor_id: Option<Id>,
}

impl NewUnit {
    pub fn with_id(self, id: Id) -> Unit {
        Unit {
            id,
            name: self.name,
            counselor_id: self.counselor_id,
        }
    }
}

/// A class with its age band and units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: ClassName,
    pub units: Vec<Unit>,
    pub min_age: i32,
    pub max_age: i32,
    /// Display color token for the console
    pub color: String,
}

impl Class {
    pub fn accepts_age(&self, age: i32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_band_is_inclusive() {
        let class = Class {
            name: ClassName::Amigo,
            units: Vec::new(),
            min_age: 10,
            max_age: 11,
            color: "bg-blue-500".to_string(),
        };
        assert!(!class.accepts_age(9));
        assert!(class.accepts_age(10));
        assert!(class.accepts_age(11));
        assert!(!class.accepts_age(12));
    }
}
