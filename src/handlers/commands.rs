//! Command definitions
//!
//! Commands carry what an operator submitted. Each one validates itself
//! into the record a store accepts; stores never see unvalidated input.
//! Monetary fields travel as strings to keep decimal precision.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    require_text, Amount, CashDirection, CashEntry, Completion, CostCategory, Debit, DomainError,
    EventEnrollment, Id, MemberUnit, MinutesKind, Money, NewAsset, NewCashEntry, NewCost,
    NewEvent, NewMember, NewMinutes, NewSpecialty, NewUnit, Role, SpecialtyArea, MIN_DUES_YEAR,
};
use crate::reports::{EnrollmentView, InstallmentView};

/// Location assigned to assets registered without one
pub const DEFAULT_ASSET_LOCATION: &str = "Sede";

fn parse_amount(field: &'static str, value: &str) -> Result<Decimal, DomainError> {
    value
        .parse::<Amount>()
        .map(|a| a.value())
        .map_err(|e| DomainError::invalid_amount(field, e))
}

fn parse_money(field: &'static str, value: &str) -> Result<Decimal, DomainError> {
    value
        .parse::<Money>()
        .map(|m| m.value())
        .map_err(|e| DomainError::invalid_amount(field, e))
}

fn require_selection(field: &'static str, ids: &[Id]) -> Result<(), DomainError> {
    if ids.is_empty() {
        return Err(DomainError::EmptySelection(field));
    }
    Ok(())
}

// =========================================================================
// Roster
// =========================================================================

/// Create or replace a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCommand {
    pub name: String,
    pub unit: MemberUnit,
    pub birth_date: NaiveDate,
    pub role: Role,
}

impl MemberCommand {
    pub fn validate(self) -> Result<NewMember, DomainError> {
        Ok(NewMember {
            name: require_text("name", &self.name)?,
            unit: self.unit,
            birth_date: self.birth_date,
            role: self.role,
        })
    }
}

/// Create or replace a unit within a class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitCommand {
    pub name: String,
    #[serde(default)]
    pub counselor_id: Option<Id>,
}

impl UnitCommand {
    pub fn validate(self) -> Result<NewUnit, DomainError> {
        Ok(NewUnit {
            name: require_text("name", &self.name)?,
            counselor_id: self.counselor_id,
        })
    }
}

// =========================================================================
// Specialties
// =========================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyCommand {
    pub name: String,
    pub area: SpecialtyArea,
    pub image_url: String,
}

impl SpecialtyCommand {
    pub fn validate(self) -> Result<NewSpecialty, DomainError> {
        Ok(NewSpecialty {
            name: require_text("name", &self.name)?,
            area: self.area,
            image_url: require_text("image_url", &self.image_url)?,
        })
    }
}

/// Record one specialty as completed by several members at once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionCommand {
    pub member_ids: Vec<Id>,
    pub completed_on: NaiveDate,
    pub instructor_id: Id,
}

impl CompletionCommand {
    pub fn validate(self, specialty_id: Id) -> Result<Vec<Completion>, DomainError> {
        require_selection("member", &self.member_ids)?;
        Ok(self
            .member_ids
            .into_iter()
            .map(|member_id| Completion {
                member_id,
                specialty_id,
                completed_on: self.completed_on,
                instructor_id: self.instructor_id,
            })
            .collect())
    }
}

/// Outcome of a completion batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResult {
    pub recorded: Vec<Completion>,
    /// Members that already had this specialty
    pub skipped: Vec<Id>,
}

// =========================================================================
// Minutes
// =========================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinutesCommand {
    pub title: String,
    pub date: NaiveDate,
    pub kind: MinutesKind,
    pub description: String,
    #[serde(default)]
    pub participant_ids: Vec<Id>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl MinutesCommand {
    pub fn validate(self) -> Result<NewMinutes, DomainError> {
        Ok(NewMinutes {
            title: require_text("title", &self.title)?,
            date: self.date,
            kind: self.kind,
            description: require_text("description", &self.description)?,
            participant_ids: self.participant_ids,
            attachments: self
                .attachments
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        })
    }
}

// =========================================================================
// Events
// =========================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCommand {
    pub label: String,
    pub date: NaiveDate,
    pub location: String,
    /// Fee per enrolled member; zero is allowed
    pub fee: String,
}

impl EventCommand {
    pub fn validate(self) -> Result<NewEvent, DomainError> {
        Ok(NewEvent {
            label: require_text("label", &self.label)?,
            date: self.date,
            location: require_text("location", &self.location)?,
            fee: parse_money("fee", &self.fee)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnrollmentCommand {
    pub member_ids: Vec<Id>,
}

impl EventEnrollmentCommand {
    pub fn validate(self) -> Result<Vec<Id>, DomainError> {
        require_selection("member", &self.member_ids)?;
        Ok(self.member_ids)
    }
}

/// New sign-ups and the debits they produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnrollmentResult {
    pub enrollments: Vec<EventEnrollment>,
    pub debits: Vec<Debit>,
}

// =========================================================================
// Dues
// =========================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuesEnrollmentCommand {
    pub member_id: Id,
    pub year: i32,
    pub total: String,
}

/// Validated dues enrollment input
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDuesEnrollment {
    pub member_id: Id,
    pub year: i32,
    pub total: Decimal,
}

impl DuesEnrollmentCommand {
    pub fn validate(self) -> Result<ValidDuesEnrollment, DomainError> {
        if self.year < MIN_DUES_YEAR {
            return Err(DomainError::InvalidYear(self.year));
        }
        Ok(ValidDuesEnrollment {
            member_id: self.member_id,
            year: self.year,
            total: parse_amount("total", &self.total)?,
        })
    }
}

/// A new enrollment and its installments, with statuses as of the operation date
#[derive(Debug, Clone, Serialize)]
pub struct DuesEnrollmentResult {
    pub enrollment: EnrollmentView,
    pub installments: Vec<InstallmentView>,
}

/// Outcome of paying an installment or a debit.
///
/// Paying something already paid is not an error: `paid` is false and no
/// cash entry is booked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub paid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_entry: Option<CashEntry>,
}

impl From<Option<CashEntry>> for PaymentResult {
    fn from(cash_entry: Option<CashEntry>) -> Self {
        Self {
            paid: cash_entry.is_some(),
            cash_entry,
        }
    }
}

// =========================================================================
// Debits and ledgers
// =========================================================================

/// Charge a member outside of any event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebitCommand {
    pub member_id: Id,
    pub description: String,
    pub amount: String,
    /// Defaults to the operation date
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidDebit {
    pub member_id: Id,
    pub description: String,
    pub amount: Decimal,
    pub date: Option<NaiveDate>,
}

impl DebitCommand {
    pub fn validate(self) -> Result<ValidDebit, DomainError> {
        Ok(ValidDebit {
            member_id: self.member_id,
            description: require_text("description", &self.description)?,
            amount: parse_amount("amount", &self.amount)?,
            date: self.date,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashEntryCommand {
    pub direction: CashDirection,
    pub date: NaiveDate,
    pub description: String,
    pub amount: String,
}

impl CashEntryCommand {
    pub fn validate(self) -> Result<NewCashEntry, DomainError> {
        Ok(NewCashEntry {
            direction: self.direction,
            date: self.date,
            description: require_text("description", &self.description)?,
            amount: parse_amount("amount", &self.amount)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostCommand {
    pub date: NaiveDate,
    pub description: String,
    pub category: CostCategory,
    pub amount: String,
}

impl CostCommand {
    pub fn validate(self) -> Result<NewCost, DomainError> {
        Ok(NewCost {
            date: self.date,
            description: require_text("description", &self.description)?,
            category: self.category,
            amount: parse_amount("amount", &self.amount)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetCommand {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub acquired_on: NaiveDate,
    pub acquisition_value: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl AssetCommand {
    pub fn validate(self) -> Result<NewAsset, DomainError> {
        let location = self
            .location
            .unwrap_or_else(|| DEFAULT_ASSET_LOCATION.to_string());
        Ok(NewAsset {
            name: require_text("name", &self.name)?,
            description: self.description.trim().to_string(),
            acquired_on: self.acquired_on,
            acquisition_value: parse_money("acquisition_value", &self.acquisition_value)?,
            location: require_text("location", &location)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AmountError;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_member_name_required() {
        let command = MemberCommand {
            name: "  ".to_string(),
            unit: MemberUnit::Tigers,
            birth_date: date(2012, 1, 5),
            role: Role::Pathfinder,
        };
        assert_eq!(command.validate().unwrap_err(), DomainError::MissingField("name"));
    }

    #[test]
    fn test_event_fee_may_be_zero_but_not_negative() {
        let mut command = EventCommand {
            label: "Trilha".to_string(),
            date: date(2024, 10, 5),
            location: "Serra".to_string(),
            fee: "0".to_string(),
        };
        assert_eq!(command.clone().validate().unwrap().fee, Decimal::ZERO);

        command.fee = "-1".to_string();
        let err = command.validate().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidAmount { field: "fee", source: AmountError::Negative(_) }
        ));
    }

    #[test]
    fn test_dues_year_and_total_bounds() {
        let command = DuesEnrollmentCommand {
            member_id: 1,
            year: 1999,
            total: "100".to_string(),
        };
        assert_eq!(command.validate().unwrap_err(), DomainError::InvalidYear(1999));

        let command = DuesEnrollmentCommand {
            member_id: 1,
            year: 2024,
            total: "0.00".to_string(),
        };
        assert!(matches!(
            command.validate().unwrap_err(),
            DomainError::InvalidAmount { field: "total", .. }
        ));

        let command = DuesEnrollmentCommand {
            member_id: 1,
            year: 2024,
            total: "0.01".to_string(),
        };
        assert_eq!(command.validate().unwrap().total, dec!(0.01));
    }

    #[test]
    fn test_completion_needs_a_member() {
        let command = CompletionCommand {
            member_ids: Vec::new(),
            completed_on: date(2024, 2, 15),
            instructor_id: 10,
        };
        assert_eq!(command.validate(1).unwrap_err(), DomainError::EmptySelection("member"));
    }

    #[test]
    fn test_asset_location_defaults() {
        let asset = AssetCommand {
            name: "Barraca".to_string(),
            description: String::new(),
            acquired_on: date(2023, 6, 1),
            acquisition_value: "0".to_string(),
            location: None,
        }
        .validate()
        .unwrap();
        assert_eq!(asset.location, DEFAULT_ASSET_LOCATION);
        assert_eq!(asset.acquisition_value, Decimal::ZERO);
    }

    #[test]
    fn test_cash_entry_rejects_fractional_cents() {
        let command = CashEntryCommand {
            direction: CashDirection::Outflow,
            date: date(2024, 4, 1),
            description: "Gás".to_string(),
            amount: "10.005".to_string(),
        };
        assert!(matches!(
            command.validate().unwrap_err(),
            DomainError::InvalidAmount { source: AmountError::TooManyDecimals(3), .. }
        ));
    }

    #[test]
    fn test_payment_result_from_entry() {
        let result = PaymentResult::from(None);
        assert!(!result.paid);
        assert!(result.cash_entry.is_none());
    }

    #[test]
    fn test_minutes_blank_attachments_dropped() {
        let minutes = MinutesCommand {
            title: "Ata".to_string(),
            date: date(2024, 3, 3),
            kind: MinutesKind::Other,
            description: "Texto".to_string(),
            participant_ids: vec![1],
            attachments: vec![" ".to_string(), "ata.pdf".to_string()],
        }
        .validate()
        .unwrap();
        assert_eq!(minutes.attachments, vec!["ata.pdf"]);
    }
}
