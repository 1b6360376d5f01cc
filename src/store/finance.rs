//! Finance store
//!
//! Dues enrollments and installments, member debits, and the cash, cost
//! and asset ledgers. Paying an installment or a debit is the only path
//! that writes to the cash ledger on its own.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{Collection, MemberStore};
use crate::domain::{
    dues_end, dues_start, installment_due_dates, Asset, CashDirection, CashEntry, Cost, Debit,
    DebitStatus, DuesEnrollment, EnrollmentStatus, Id, Installment, InstallmentStatus, NewAsset,
    NewCashEntry, NewCost, NewDebit, INSTALLMENT_COUNT, UNKNOWN_MEMBER,
};

#[derive(Debug, Clone, Default)]
pub struct FinanceStore {
    enrollments: Collection<DuesEnrollment>,
    installments: Collection<Installment>,
    debits: Collection<Debit>,
    cash: Collection<CashEntry>,
    costs: Collection<Cost>,
    assets: Collection<Asset>,
}

impl FinanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Dues enrollments and installments
    // =========================================================================

    /// Enroll a member for a year's dues and generate its installments.
    ///
    /// The window runs Jan 15 to Jan 14 of the next year, and the total is
    /// split into equal installments due on the 15th of consecutive months.
    /// No rounding is applied to the split. Enrolling the same member twice
    /// for a year creates two independent enrollments.
    ///
    /// Returns `None` only for years the calendar cannot represent.
    pub fn create_dues_enrollment(
        &mut self,
        member_id: Id,
        year: i32,
        total: Decimal,
    ) -> Option<DuesEnrollment> {
        let start_date = dues_start(year)?;
        let end_date = dues_end(year)?;

        if self.enrollment_for(member_id, Some(year)).is_some() {
            warn!(member_id, year, "Member already has a dues enrollment for this year");
        }

        let enrollment = self.enrollments.insert_with(|id| DuesEnrollment {
            id,
            member_id,
            year,
            total,
            start_date,
            end_date,
            status: EnrollmentStatus::Active,
        });

        let amount = total / Decimal::from(INSTALLMENT_COUNT);
        for due_date in installment_due_dates(start_date, INSTALLMENT_COUNT) {
            self.installments.insert_with(|id| Installment {
                id,
                enrollment_id: enrollment.id,
                amount,
                due_date,
                status: InstallmentStatus::Pending,
            });
        }

        debug!(
            enrollment_id = enrollment.id,
            member_id,
            year,
            total = %total,
            "Dues enrollment created"
        );
        Some(enrollment)
    }

    pub fn enrollments(&self) -> &[DuesEnrollment] {
        self.enrollments.all()
    }

    pub fn enrollment(&self, id: Id) -> Option<&DuesEnrollment> {
        self.enrollments.get(id)
    }

    /// First enrollment of the member, optionally restricted to a year
    pub fn enrollment_for(&self, member_id: Id, year: Option<i32>) -> Option<&DuesEnrollment> {
        self.enrollments
            .iter()
            .find(|e| e.member_id == member_id && year.map_or(true, |y| e.year == y))
    }

    pub fn enrollments_of(&self, member_id: Id) -> impl Iterator<Item = &DuesEnrollment> {
        self.enrollments
            .iter()
            .filter(move |e| e.member_id == member_id)
    }

    pub fn installments(&self) -> &[Installment] {
        self.installments.all()
    }

    pub fn installments_for(&self, enrollment_id: Id) -> impl Iterator<Item = &Installment> {
        self.installments
            .iter()
            .filter(move |i| i.enrollment_id == enrollment_id)
    }

    /// Sum of the enrollment's unpaid installments
    pub fn pending_amount(&self, enrollment_id: Id) -> Decimal {
        self.installments_for(enrollment_id)
            .filter(|i| !i.is_paid())
            .map(|i| i.amount)
            .sum()
    }

    /// Mark an installment paid and book the inflow.
    ///
    /// Unknown or already-paid installments are left untouched and `None`
    /// is returned.
    pub fn pay_installment(
        &mut self,
        installment_id: Id,
        members: &MemberStore,
        today: NaiveDate,
    ) -> Option<CashEntry> {
        let installment = self.installments.get_mut(installment_id)?;
        if installment.is_paid() {
            debug!(installment_id, "Installment already paid");
            return None;
        }
        installment.status = InstallmentStatus::Paid;
        let amount = installment.amount;
        let enrollment_id = installment.enrollment_id;

        let member_name = self
            .enrollments
            .get(enrollment_id)
            .and_then(|e| members.name_of(e.member_id))
            .unwrap_or(UNKNOWN_MEMBER);

        let entry = self.add_cash_entry(NewCashEntry {
            direction: CashDirection::Inflow,
            date: today,
            description: format!("Mensalidade - {member_name}"),
            amount,
        });
        debug!(installment_id, cash_entry_id = entry.id, "Installment paid");
        Some(entry)
    }

    // =========================================================================
    // Debits
    // =========================================================================

    pub fn debits(&self) -> &[Debit] {
        self.debits.all()
    }

    pub fn debit(&self, id: Id) -> Option<&Debit> {
        self.debits.get(id)
    }

    pub fn debits_of(&self, member_id: Id) -> impl Iterator<Item = &Debit> {
        self.debits.iter().filter(move |d| d.member_id == member_id)
    }

    /// Record a debit as pending
    pub fn add_debit(&mut self, debit: NewDebit) -> Debit {
        let debit = self.debits.insert_with(|id| debit.with_id(id));
        debug!(debit_id = debit.id, member_id = debit.member_id, "Debit added");
        debit
    }

    /// Charge a member for an event, at most once per (member, event).
    pub fn create_event_debit(
        &mut self,
        member_id: Id,
        event_id: Id,
        description: String,
        amount: Decimal,
        today: NaiveDate,
    ) -> Option<Debit> {
        let exists = self
            .debits
            .iter()
            .any(|d| d.member_id == member_id && d.event_id == Some(event_id));
        if exists {
            warn!(member_id, event_id, "Event debit already exists, skipping");
            return None;
        }
        Some(self.add_debit(NewDebit {
            member_id,
            event_id: Some(event_id),
            description,
            amount,
            date: today,
        }))
    }

    /// Mark a debit paid and book the inflow. Mirrors [`Self::pay_installment`].
    pub fn pay_debit(
        &mut self,
        debit_id: Id,
        members: &MemberStore,
        today: NaiveDate,
    ) -> Option<CashEntry> {
        let debit = self.debits.get_mut(debit_id)?;
        if debit.is_paid() {
            debug!(debit_id, "Debit already paid");
            return None;
        }
        debit.status = DebitStatus::Paid;

        let member_name = members.name_of(debit.member_id).unwrap_or(UNKNOWN_MEMBER);
        let description = format!("{} - {member_name}", debit.description);
        let amount = debit.amount;

        let entry = self.add_cash_entry(NewCashEntry {
            direction: CashDirection::Inflow,
            date: today,
            description,
            amount,
        });
        debug!(debit_id, cash_entry_id = entry.id, "Debit paid");
        Some(entry)
    }

    // =========================================================================
    // Cash ledger
    // =========================================================================

    pub fn cash_entries(&self) -> &[CashEntry] {
        self.cash.all()
    }

    pub fn add_cash_entry(&mut self, entry: NewCashEntry) -> CashEntry {
        self.cash.insert_with(|id| entry.with_id(id))
    }

    pub fn update_cash_entry(&mut self, entry: CashEntry) -> bool {
        self.cash.replace(entry)
    }

    pub fn delete_cash_entry(&mut self, id: Id) -> Option<CashEntry> {
        self.cash.remove(id)
    }

    // =========================================================================
    // Cost ledger
    // =========================================================================

    pub fn costs(&self) -> &[Cost] {
        self.costs.all()
    }

    pub fn add_cost(&mut self, cost: NewCost) -> Cost {
        self.costs.insert_with(|id| cost.with_id(id))
    }

    pub fn update_cost(&mut self, cost: Cost) -> bool {
        self.costs.replace(cost)
    }

    pub fn delete_cost(&mut self, id: Id) -> Option<Cost> {
        self.costs.remove(id)
    }

    // =========================================================================
    // Asset ledger
    // =========================================================================

    pub fn assets(&self) -> &[Asset] {
        self.assets.all()
    }

    pub fn add_asset(&mut self, asset: NewAsset) -> Asset {
        self.assets.insert_with(|id| asset.with_id(id))
    }

    pub fn update_asset(&mut self, asset: Asset) -> bool {
        self.assets.replace(asset)
    }

    pub fn delete_asset(&mut self, id: Id) -> Option<Asset> {
        self.assets.remove(id)
    }
}
