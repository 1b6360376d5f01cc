//! Domain module
//!
//! Club records, their labeled vocabularies and the pure computations
//! derived from them.

pub mod amount;
pub mod calendar;
pub mod class;
pub mod context;
pub mod error;
pub mod event;
pub mod finance;
mod labels;
pub mod member;
pub mod minutes;
pub mod specialty;

/// Surrogate key assigned by the owning store
pub type Id = u32;

pub use amount::{Amount, AmountError, Money};
pub use calendar::{age_on, dues_end, dues_start, installment_due_dates, INSTALLMENT_COUNT};
pub use class::{Class, ClassName, NewUnit, Unit, NO_CLASS};
pub use context::OperationContext;
pub use error::{require_text, DomainError, MIN_DUES_YEAR};
pub use event::{Event, EventEnrollment, NewEvent};
pub use finance::{
    Asset, CashDirection, CashEntry, Cost, CostCategory, Debit, DebitStatus, DuesEnrollment,
    EnrollmentStatus, Installment, InstallmentStatus, NewAsset, NewCashEntry, NewCost, NewDebit,
};
pub use member::{Member, MemberUnit, NewMember, Role, UNKNOWN, UNKNOWN_MEMBER};
pub use minutes::{Minutes, MinutesKind, NewMinutes};
pub use specialty::{Completion, NewSpecialty, Specialty, SpecialtyArea, UNKNOWN_SPECIALTY};
