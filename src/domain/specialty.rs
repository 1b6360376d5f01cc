//! Specialties
//!
//! Merit-badge catalog entries and the member completion join.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::labels::labeled_enum;
use super::Id;

/// Label used when a specialty reference does not resolve
pub const UNKNOWN_SPECIALTY: &str = "Desconhecida";

labeled_enum! {
    /// Subject area of a specialty
    pub enum SpecialtyArea {
        Nature => "Natureza",
        Crafts => "Artes Manuais",
        HomeSkills => "Habilidades Domésticas",
        Recreation => "Atividades Recreativas",
        HealthAndScience => "Saúde e Ciência",
        Missionary => "Atividades Missionárias",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: Id,
    pub name: String,
    pub area: SpecialtyArea,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSpecialty {
    pub name: String,
    pub area: SpecialtyArea,
    pub image_url: String,
}

impl NewSpecialty {
    pub fn with_id(self, id: Id) -> Specialty {
        Specialty {
            id,
            name: self.name,
            area: self.area,
            image_url: self.image_url,
        }
    }
}

/// A member's completion of a specialty.
///
/// Has no id of its own; (member, specialty) is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub member_id: Id,
    pub specialty_id: Id,
    pub completed_on: NaiveDate,
    pub instructor_id: Id,
}

impl Completion {
    pub fn same_pair(&self, other: &Completion) -> bool {
        self.member_id == other.member_id && self.specialty_id == other.specialty_id
    }
}
