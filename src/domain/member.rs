//! Members
//!
//! Roster records and their fixed unit/role vocabularies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::age_on;
use super::labels::labeled_enum;
use super::Id;

/// Label used when a member reference does not resolve
pub const UNKNOWN_MEMBER: &str = "Membro desconhecido";

/// Shorter sentinel used by the roster-style reports
pub const UNKNOWN: &str = "Desconhecido";

labeled_enum! {
    /// The unit a member belongs to
    pub enum MemberUnit {
        Falcons => "Falcões",
        Eagles => "Águias",
        Tigers => "Tigres",
        Wolves => "Lobos",
    }
}

labeled_enum! {
    /// A member's role in the club
    pub enum Role {
        Pathfinder => "Desbravador",
        Counselor => "Conselheiro",
        Director => "Diretor",
        Treasurer => "Tesoureiro",
        Instructor => "Instrutor",
    }
}

impl Role {
    /// Roles allowed to sign off a specialty completion
    pub fn can_instruct(&self) -> bool {
        matches!(self, Role::Instructor | Role::Director | Role::Counselor)
    }
}

/// A club member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Id,
    pub name: String,
    pub unit: MemberUnit,
    pub birth_date: NaiveDate,
    pub role: Role,
}

impl Member {
    /// Age on the given date
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_on(self.birth_date, today)
    }

    /// Members under 18 need a signed authorization for events
    pub fn is_minor_on(&self, today: NaiveDate) -> bool {
        self.age_on(today) < 18
    }
}

/// A member before the store assigns its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub unit: MemberUnit,
    pub birth_date: NaiveDate,
    pub role: Role,
}

impl NewMember {
    pub fn with_id(self, id: Id) -> Member {
        Member {
            id,
            name: self.name,
            unit: self.unit,
            birth_date: self.birth_date,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_flag() {
        let member = Member {
            id: 1,
            name: "João da Silva".to_string(),
            unit: MemberUnit::Falcons,
            birth_date: NaiveDate::from_ymd_opt(2010, 5, 15).unwrap(),
            role: Role::Pathfinder,
        };
        let today = NaiveDate::from_ymd_opt(2028, 5, 14).unwrap();
        assert!(member.is_minor_on(today));
        assert!(!member.is_minor_on(today.succ_opt().unwrap()));
    }

    #[test]
    fn test_instructor_roles() {
        assert!(Role::Instructor.can_instruct());
        assert!(Role::Counselor.can_instruct());
        assert!(!Role::Treasurer.can_instruct());
        assert!(!Role::Pathfinder.can_instruct());
    }
}
