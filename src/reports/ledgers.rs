//! Ledger reports: cash flow, costs and assets

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::export::{Cell, Exportable, ReportDocument};
use super::filter::{empty_string_as_none, matches, DateRange};
use crate::domain::{Asset, CashDirection, CashEntry, Cost, CostCategory};
use crate::store::Club;

// =========================================================================
// Cash flow
// =========================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CashReportFilter {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub to: Option<NaiveDate>,
}

impl CashReportFilter {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashReport {
    /// Oldest first
    pub entries: Vec<CashEntry>,
    pub total_inflow: Decimal,
    pub total_outflow: Decimal,
    /// Inflow minus outflow over the period
    pub balance: Decimal,
}

pub fn cash_report(club: &Club, filter: &CashReportFilter) -> CashReport {
    let range = filter.range();
    let mut entries: Vec<CashEntry> = club
        .finance
        .cash_entries()
        .iter()
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect();
    entries.sort_by_key(|e| e.date);

    let total = |direction: CashDirection| -> Decimal {
        entries
            .iter()
            .filter(|e| e.direction == direction)
            .map(|e| e.amount)
            .sum()
    };
    let total_inflow = total(CashDirection::Inflow);
    let total_outflow = total(CashDirection::Outflow);

    CashReport {
        total_inflow,
        total_outflow,
        balance: total_inflow - total_outflow,
        entries,
    }
}

impl Exportable for CashReport {
    fn to_document(&self, heading: &str, today: NaiveDate) -> ReportDocument {
        ReportDocument::new(
            heading,
            "Relatório de Fluxo de Caixa",
            &["Data", "Descrição", "Entrada", "Saída"],
            "relatorio_caixa",
            today,
        )
        .rows(self.entries.iter().map(|e| {
            let (inflow, outflow) = match e.direction {
                CashDirection::Inflow => (Cell::Money(e.amount), Cell::Empty),
                CashDirection::Outflow => (Cell::Empty, Cell::Money(e.amount)),
            };
            vec![Cell::Date(e.date), Cell::text(&e.description), inflow, outflow]
        }))
        .total(vec![
            Cell::text("Total Entradas"),
            Cell::Empty,
            Cell::Money(self.total_inflow),
            Cell::Empty,
        ])
        .total(vec![
            Cell::text("Total Saídas"),
            Cell::Empty,
            Cell::Empty,
            Cell::Money(self.total_outflow),
        ])
        .total(vec![
            Cell::text("Saldo do Período"),
            Cell::Empty,
            Cell::Empty,
            Cell::Money(self.balance),
        ])
    }
}

// =========================================================================
// Costs
// =========================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostReportFilter {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub to: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<CostCategory>,
}

impl CostReportFilter {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReport {
    /// Oldest first
    pub costs: Vec<Cost>,
    pub total: Decimal,
}

pub fn cost_report(club: &Club, filter: &CostReportFilter) -> CostReport {
    let range = filter.range();
    let mut costs: Vec<Cost> = club
        .finance
        .costs()
        .iter()
        .filter(|c| range.contains(c.date) && matches(&filter.category, &c.category))
        .cloned()
        .collect();
    costs.sort_by_key(|c| c.date);

    CostReport {
        total: costs.iter().map(|c| c.amount).sum(),
        costs,
    }
}

impl Exportable for CostReport {
    fn to_document(&self, heading: &str, today: NaiveDate) -> ReportDocument {
        ReportDocument::new(
            heading,
            "Relatório de Custos",
            &["Data", "Descrição", "Categoria", "Valor"],
            "relatorio_custos",
            today,
        )
        .rows(self.costs.iter().map(|c| {
            vec![
                Cell::Date(c.date),
                Cell::text(&c.description),
                Cell::text(c.category.label()),
                Cell::Money(c.amount),
            ]
        }))
        .total(vec![
            Cell::text("Total de Custos"),
            Cell::Empty,
            Cell::Empty,
            Cell::Money(self.total),
        ])
    }
}

// =========================================================================
// Assets
// =========================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetReport {
    /// Most recently acquired first
    pub assets: Vec<Asset>,
    pub total_value: Decimal,
}

pub fn asset_report(club: &Club) -> AssetReport {
    let mut assets = club.finance.assets().to_vec();
    assets.sort_by(|a, b| b.acquired_on.cmp(&a.acquired_on));

    AssetReport {
        total_value: assets.iter().map(|a| a.acquisition_value).sum(),
        assets,
    }
}

impl Exportable for AssetReport {
    fn to_document(&self, heading: &str, today: NaiveDate) -> ReportDocument {
        ReportDocument::new(
            heading,
            "Relatório de Patrimônio",
            &["Nome", "Descrição", "Data de Aquisição", "Local", "Valor"],
            "relatorio_patrimonio",
            today,
        )
        .rows(self.assets.iter().map(|a| {
            vec![
                Cell::text(&a.name),
                Cell::text(&a.description),
                Cell::Date(a.acquired_on),
                Cell::text(&a.location),
                Cell::Money(a.acquisition_value),
            ]
        }))
        .total(vec![
            Cell::text("Valor Total"),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Money(self.total_value),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewAsset, NewCashEntry, NewCost};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn club() -> Club {
        let mut club = Club::empty();
        for (direction, day, description, amount) in [
            (CashDirection::Inflow, 20, "Mensalidade - Ana Costa", dec!(10)),
            (CashDirection::Outflow, 5, "Lanche", dec!(35.50)),
            (CashDirection::Inflow, 10, "Doação", dec!(200)),
        ] {
            club.finance.add_cash_entry(NewCashEntry {
                direction,
                date: date(2024, 3, day),
                description: description.to_string(),
                amount,
            });
        }
        for (category, month, amount) in [
            (CostCategory::Transport, 4, dec!(300)),
            (CostCategory::Food, 2, dec!(80)),
            (CostCategory::Food, 6, dec!(120)),
        ] {
            club.finance.add_cost(NewCost {
                date: date(2024, month, 1),
                description: "Despesa".to_string(),
                category,
                amount,
            });
        }
        for (name, year, value) in [("Barraca", 2021, dec!(900)), ("Projetor", 2023, dec!(2500))] {
            club.finance.add_asset(NewAsset {
                name: name.to_string(),
                description: String::new(),
                acquired_on: date(year, 1, 1),
                acquisition_value: value,
                location: "Sede".to_string(),
            });
        }
        club
    }

    #[test]
    fn test_cash_totals_and_order() {
        let report = cash_report(&club(), &CashReportFilter::default());

        let days: Vec<NaiveDate> = report.entries.iter().map(|e| e.date).collect();
        assert_eq!(days, vec![date(2024, 3, 5), date(2024, 3, 10), date(2024, 3, 20)]);
        assert_eq!(report.total_inflow, dec!(210));
        assert_eq!(report.total_outflow, dec!(35.50));
        assert_eq!(report.balance, dec!(174.50));
    }

    #[test]
    fn test_cash_range_is_inclusive() {
        let filter = CashReportFilter {
            from: Some(date(2024, 3, 10)),
            to: Some(date(2024, 3, 20)),
        };
        let report = cash_report(&club(), &filter);

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.total_outflow, dec!(0));
    }

    #[test]
    fn test_cash_document_splits_columns() {
        let doc = cash_report(&club(), &CashReportFilter::default()).to_document("Clube", date(2024, 4, 1));

        assert_eq!(doc.rows[0][2], Cell::Empty);
        assert_eq!(doc.rows[0][3], Cell::Money(dec!(35.50)));
        assert_eq!(doc.totals[2][0], Cell::text("Saldo do Período"));
        assert_eq!(doc.totals[2][3], Cell::Money(dec!(174.50)));
    }

    #[test]
    fn test_cost_category_filter() {
        let filter = CostReportFilter {
            category: Some(CostCategory::Food),
            ..Default::default()
        };
        let report = cost_report(&club(), &filter);

        assert_eq!(report.costs.len(), 2);
        assert_eq!(report.costs[0].date, date(2024, 2, 1));
        assert_eq!(report.total, dec!(200));
    }

    #[test]
    fn test_cost_range_filter() {
        let filter = CostReportFilter {
            to: Some(date(2024, 4, 30)),
            ..Default::default()
        };
        assert_eq!(cost_report(&club(), &filter).total, dec!(380));
    }

    #[test]
    fn test_assets_latest_first() {
        let report = asset_report(&club());

        assert_eq!(report.assets[0].name, "Projetor");
        assert_eq!(report.total_value, dec!(3400));

        let doc = report.to_document("Clube", date(2024, 4, 1));
        assert_eq!(doc.file_name, "relatorio_patrimonio_2024-04-01.pdf");
        assert_eq!(doc.totals[0][4], Cell::Money(dec!(3400)));
    }
}
