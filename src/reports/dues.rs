//! Dues enrollment report
//!
//! One row per member holding a dues enrollment, with how much of it has
//! been collected and whether any unpaid installment is past due.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::export::{Cell, Exportable, ReportDocument};
use super::filter::{collation_key, empty_string_as_none, matches};
use crate::domain::{ClassName, DomainError, Id, InstallmentStatus, MemberUnit, NO_CLASS};
use crate::store::Club;

/// Where a member stands on their annual dues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStanding {
    EmDia,
    Pendente,
    Atrasado,
}

impl PaymentStanding {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStanding::EmDia => "Em dia",
            PaymentStanding::Pendente => "Pendente",
            PaymentStanding::Atrasado => "Atrasado",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            PaymentStanding::EmDia => "em_dia",
            PaymentStanding::Pendente => "pendente",
            PaymentStanding::Atrasado => "atrasado",
        }
    }
}

impl fmt::Display for PaymentStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PaymentStanding {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "em_dia" => Ok(PaymentStanding::EmDia),
            "pendente" => Ok(PaymentStanding::Pendente),
            "atrasado" => Ok(PaymentStanding::Atrasado),
            other => Err(DomainError::UnknownLabel {
                kind: "PaymentStanding",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DuesReportFilter {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit: Option<MemberUnit>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub class: Option<ClassName>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub standing: Option<PaymentStanding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuesReportRow {
    pub member_id: Id,
    pub enrollment_id: Id,
    pub name: String,
    pub unit: MemberUnit,
    pub class: String,
    pub standing: PaymentStanding,
    pub paid: Decimal,
    pub pending: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DuesSummary {
    pub enrolled: usize,
    pub collected: Decimal,
    pub receivable: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuesReport {
    pub rows: Vec<DuesReportRow>,
    /// `None` when no row matched
    pub summary: Option<DuesSummary>,
    /// Distinct enrollment years, latest first
    pub available_years: Vec<i32>,
}

/// Standing of one enrollment: settled when nothing is pending, otherwise
/// overdue if any unpaid installment is past its due date.
pub fn payment_standing(club: &Club, enrollment_id: Id, today: NaiveDate) -> (PaymentStanding, Decimal) {
    let pending = club.finance.pending_amount(enrollment_id);
    if pending.is_zero() {
        return (PaymentStanding::EmDia, pending);
    }
    let overdue = club
        .finance
        .installments_for(enrollment_id)
        .any(|i| i.effective_status(today) == InstallmentStatus::Overdue);
    let standing = if overdue {
        PaymentStanding::Atrasado
    } else {
        PaymentStanding::Pendente
    };
    (standing, pending)
}

pub fn dues_report(club: &Club, filter: &DuesReportFilter, today: NaiveDate) -> DuesReport {
    let mut rows: Vec<DuesReportRow> = club
        .members
        .all()
        .iter()
        .filter_map(|member| {
            let enrollment = club.finance.enrollment_for(member.id, filter.year)?;
            let (standing, pending) = payment_standing(club, enrollment.id, today);
            let class = club.classes.class_for_age(member.age_on(today)).map(|c| c.name);

            if !matches(&filter.unit, &member.unit)
                || filter.class.map_or(false, |wanted| class != Some(wanted))
                || !matches(&filter.standing, &standing)
            {
                return None;
            }

            Some(DuesReportRow {
                member_id: member.id,
                enrollment_id: enrollment.id,
                name: member.name.clone(),
                unit: member.unit,
                class: class.map_or(NO_CLASS, |c| c.label()).to_string(),
                standing,
                paid: enrollment.total - pending,
                pending,
            })
        })
        .collect();
    rows.sort_by_cached_key(|row| collation_key(&row.name));

    let summary = (!rows.is_empty()).then(|| DuesSummary {
        enrolled: rows.len(),
        collected: rows.iter().map(|r| r.paid).sum(),
        receivable: rows.iter().map(|r| r.pending).sum(),
    });

    let mut available_years: Vec<i32> = club.finance.enrollments().iter().map(|e| e.year).collect();
    available_years.sort_unstable_by(|a, b| b.cmp(a));
    available_years.dedup();

    DuesReport {
        rows,
        summary,
        available_years,
    }
}

impl Exportable for DuesReport {
    fn to_document(&self, heading: &str, today: NaiveDate) -> ReportDocument {
        let mut doc = ReportDocument::new(
            heading,
            "Relatório Financeiro de Inscrições",
            &["Membro", "Unidade", "Classe", "Status", "Valor Pago", "Valor Pendente"],
            "relatorio_inscricoes",
            today,
        )
        .rows(self.rows.iter().map(|row| {
            vec![
                Cell::text(&row.name),
                Cell::text(row.unit.label()),
                Cell::text(&row.class),
                Cell::text(row.standing.label()),
                Cell::Money(row.paid),
                Cell::Money(row.pending),
            ]
        }));

        if let Some(summary) = &self.summary {
            doc = doc
                .total(vec![
                    Cell::text("Total Inscritos"),
                    Cell::count(summary.enrolled),
                    Cell::Empty,
                    Cell::Empty,
                    Cell::Empty,
                    Cell::Empty,
                ])
                .total(vec![
                    Cell::text("Total Arrecadado"),
                    Cell::Empty,
                    Cell::Empty,
                    Cell::Empty,
                    Cell::Money(summary.collected),
                    Cell::Empty,
                ])
                .total(vec![
                    Cell::text("Total a Receber"),
                    Cell::Empty,
                    Cell::Empty,
                    Cell::Empty,
                    Cell::Empty,
                    Cell::Money(summary.receivable),
                ]);
        }
        doc
    }
}
