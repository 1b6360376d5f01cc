//! Ledger Handler
//!
//! Member debits and the cash, cost and asset ledgers.

use tracing::{info, warn};

use crate::domain::{Asset, CashEntry, Cost, Debit, Id, NewDebit, OperationContext};
use crate::error::{AppError, AppResult};
use crate::store::SharedClub;

use super::{AssetCommand, CashEntryCommand, CostCommand, DebitCommand, PaymentResult};

pub struct LedgerHandler {
    club: SharedClub,
}

impl LedgerHandler {
    pub fn new(club: SharedClub) -> Self {
        Self { club }
    }

    // =========================================================================
    // Debits
    // =========================================================================

    pub async fn add_debit(&self, command: DebitCommand, context: &OperationContext) -> AppResult<Debit> {
        let valid = command.validate()?;

        let mut club = self.club.write().await;
        if club.members.get(valid.member_id).is_none() {
            return Err(AppError::not_found("member", valid.member_id));
        }
        let debit = club.finance.add_debit(NewDebit {
            member_id: valid.member_id,
            event_id: None,
            description: valid.description,
            amount: valid.amount,
            date: valid.date.unwrap_or(context.today),
        });

        info!(correlation_id = ?context.correlation_id, debit_id = debit.id, "Debit created");
        Ok(debit)
    }

    pub async fn pay_debit(&self, id: Id, context: &OperationContext) -> AppResult<PaymentResult> {
        let mut guard = self.club.write().await;
        let club = &mut *guard;
        if club.finance.debit(id).is_none() {
            return Err(AppError::not_found("debit", id));
        }
        let result = PaymentResult::from(club.finance.pay_debit(id, &club.members, context.today));

        if result.paid {
            info!(correlation_id = ?context.correlation_id, debit_id = id, "Debit paid");
        } else {
            warn!(correlation_id = ?context.correlation_id, debit_id = id, "Debit was already paid");
        }
        Ok(result)
    }

    // =========================================================================
    // Cash ledger
    // =========================================================================

    pub async fn add_cash_entry(
        &self,
        command: CashEntryCommand,
        context: &OperationContext,
    ) -> AppResult<CashEntry> {
        let entry = self.club.write().await.finance.add_cash_entry(command.validate()?);
        info!(correlation_id = ?context.correlation_id, cash_entry_id = entry.id, "Cash entry created");
        Ok(entry)
    }

    pub async fn update_cash_entry(
        &self,
        id: Id,
        command: CashEntryCommand,
        context: &OperationContext,
    ) -> AppResult<CashEntry> {
        let entry = command.validate()?.with_id(id);
        if !self.club.write().await.finance.update_cash_entry(entry.clone()) {
            return Err(AppError::not_found("cash entry", id));
        }
        info!(correlation_id = ?context.correlation_id, cash_entry_id = id, "Cash entry updated");
        Ok(entry)
    }

    pub async fn delete_cash_entry(&self, id: Id, context: &OperationContext) -> AppResult<CashEntry> {
        let entry = self
            .club
            .write()
            .await
            .finance
            .delete_cash_entry(id)
            .ok_or_else(|| AppError::not_found("cash entry", id))?;
        info!(correlation_id = ?context.correlation_id, cash_entry_id = id, "Cash entry deleted");
        Ok(entry)
    }

    // =========================================================================
    // Cost ledger
    // =========================================================================

    pub async fn add_cost(&self, command: CostCommand, context: &OperationContext) -> AppResult<Cost> {
        let cost = self.club.write().await.finance.add_cost(command.validate()?);
        info!(correlation_id = ?context.correlation_id, cost_id = cost.id, "Cost created");
        Ok(cost)
    }

    pub async fn update_cost(
        &self,
        id: Id,
        command: CostCommand,
        context: &OperationContext,
    ) -> AppResult<Cost> {
        let cost = command.validate()?.with_id(id);
        if !self.club.write().await.finance.update_cost(cost.clone()) {
            return Err(AppError::not_found("cost", id));
        }
        info!(correlation_id = ?context.correlation_id, cost_id = id, "Cost updated");
        Ok(cost)
    }

    pub async fn delete_cost(&self, id: Id, context: &OperationContext) -> AppResult<Cost> {
        let cost = self
            .club
            .write()
            .await
            .finance
            .delete_cost(id)
            .ok_or_else(|| AppError::not_found("cost", id))?;
        info!(correlation_id = ?context.correlation_id, cost_id = id, "Cost deleted");
        Ok(cost)
    }

    // =========================================================================
    // Asset ledger
    // =========================================================================

    pub async fn add_asset(&self, command: AssetCommand, context: &OperationContext) -> AppResult<Asset> {
        let asset = self.club.write().await.finance.add_asset(command.validate()?);
        info!(correlation_id = ?context.correlation_id, asset_id = asset.id, "Asset created");
        Ok(asset)
    }

    pub async fn update_asset(
        &self,
        id: Id,
        command: AssetCommand,
        context: &OperationContext,
    ) -> AppResult<Asset> {
        let asset = command.validate()?.with_id(id);
        if !self.club.write().await.finance.update_asset(asset.clone()) {
            return Err(AppError::not_found("asset", id));
        }
        info!(correlation_id = ?context.correlation_id, asset_id = id, "Asset updated");
        Ok(asset)
    }

    pub async fn delete_asset(&self, id: Id, context: &OperationContext) -> AppResult<Asset> {
        let asset = self
            .club
            .write()
            .await
            .finance
            .delete_asset(id)
            .ok_or_else(|| AppError::not_found("asset", id))?;
        info!(correlation_id = ?context.correlation_id, asset_id = id, "Asset deleted");
        Ok(asset)
    }
}
