//! Club events and member sign-ups

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Id;

/// A club event (camp, outing, special meeting)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Id,
    /// Free-form type/label, e.g. "Acampamento de Unidades"
    pub label: String,
    pub date: NaiveDate,
    pub location: String,
    /// Fee charged to every enrolled member
    pub fee: Decimal,
}

impl Event {
    /// Description used for the debit an enrollment creates
    pub fn debit_description(&self) -> String {
        format!("Inscrição: {}", self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub label: String,
    pub date: NaiveDate,
    pub location: String,
    pub fee: Decimal,
}

impl NewEvent {
    pub fn with_id(self, id: Id) -> Event {
        Event {
            id,
            label: self.label,
            date: self.date,
            location: self.location,
            fee: self.fee,
        }
    }
}

/// A member signed up for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnrollment {
    pub event_id: Id,
    pub member_id: Id,
}
