//! Finance records
//!
//! Annual dues enrollments and their installments, member debits and the
//! three ledgers (cash flow, costs, assets).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::labels::labeled_enum;
use super::Id;

labeled_enum! {
    pub enum EnrollmentStatus {
        Active => "Ativa",
        Expired => "Vencida",
    }
}

labeled_enum! {
    /// `Overdue` is never stored; see [`Installment::effective_status`]
    pub enum InstallmentStatus {
        Paid => "Paga",
        Pending => "Pendente",
        Overdue => "Atrasada",
    }
}

labeled_enum! {
    pub enum DebitStatus {
        Pending => "Pendente",
        Paid => "Pago",
    }
}

labeled_enum! {
    pub enum CashDirection {
        Inflow => "Entrada",
        Outflow => "Saída",
    }
}

labeled_enum! {
    pub enum CostCategory {
        Food => "Alimentação",
        Transport => "Transporte",
        OfficeSupplies => "Material de Escritório",
        Events => "Eventos",
        Other => "Outros",
    }
}

/// An annual dues enrollment (inscrição)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuesEnrollment {
    pub id: Id,
    pub member_id: Id,
    pub year: i32,
    pub total: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: EnrollmentStatus,
}

impl DuesEnrollment {
    /// Status for display: expired once the window has closed.
    pub fn effective_status(&self, today: NaiveDate) -> EnrollmentStatus {
        if today > self.end_date {
            EnrollmentStatus::Expired
        } else {
            self.status
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }
}

/// One monthly installment (mensalidade) of a dues enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    pub id: Id,
    pub enrollment_id: Id,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: InstallmentStatus,
}

impl Installment {
    pub fn is_paid(&self) -> bool {
        self.status == InstallmentStatus::Paid
    }

    /// Status as of `today`: overdue when unpaid and due before today.
    pub fn effective_status(&self, today: NaiveDate) -> InstallmentStatus {
        if self.is_paid() {
            InstallmentStatus::Paid
        } else if self.due_date < today {
            InstallmentStatus::Overdue
        } else {
            InstallmentStatus::Pending
        }
    }
}

/// A charge owed by a member, optionally tied to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debit {
    pub id: Id,
    pub member_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<Id>,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: DebitStatus,
}

impl Debit {
    pub fn is_paid(&self) -> bool {
        self.status == DebitStatus::Paid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDebit {
    pub member_id: Id,
    pub event_id: Option<Id>,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl NewDebit {
    pub fn with_id(self, id: Id) -> Debit {
        Debit {
            id,
            member_id: self.member_id,
            event_id: self.event_id,
            description: self.description,
            amount: self.amount,
            date: self.date,
            status: DebitStatus::Pending,
        }
    }
}

/// A cash-flow ledger entry (movimentação de caixa)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashEntry {
    pub id: Id,
    pub direction: CashDirection,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl CashEntry {
    /// Amount with sign applied: positive for inflows.
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            CashDirection::Inflow => self.amount,
            CashDirection::Outflow => -self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCashEntry {
    pub direction: CashDirection,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl NewCashEntry {
    pub fn with_id(self, id: Id) -> CashEntry {
        CashEntry {
            id,
            direction: self.direction,
            date: self.date,
            description: self.description,
            amount: self.amount,
        }
    }
}

/// A miscellaneous club expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub id: Id,
    pub date: NaiveDate,
    pub description: String,
    pub category: CostCategory,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCost {
    pub date: NaiveDate,
    pub description: String,
    pub category: CostCategory,
    pub amount: Decimal,
}

impl NewCost {
    pub fn with_id(self, id: Id) -> Cost {
        Cost {
            id,
            date: self.date,
            description: self.description,
            category: self.category,
            amount: self.amount,
        }
    }
}

/// A club asset (patrimônio)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub acquired_on: NaiveDate,
    pub acquisition_value: Decimal,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAsset {
    pub name: String,
    pub description: String,
    pub acquired_on: NaiveDate,
    pub acquisition_value: Decimal,
    pub location: String,
}

impl NewAsset {
    pub fn with_id(self, id: Id) -> Asset {
        Asset {
            id,
            name: self.name,
            description: self.description,
            acquired_on: self.acquired_on,
            acquisition_value: self.acquisition_value,
            location: self.location,
        }
    }
}
