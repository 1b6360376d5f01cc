//! Member roster report

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::export::{Cell, Exportable, ReportDocument};
use super::filter::{collation_key, empty_string_as_none, matches};
use crate::domain::{Id, MemberUnit, Role, NO_CLASS, UNKNOWN_SPECIALTY};
use crate::store::{Club, FinanceStore};

/// Shown when a member has completed no specialty
pub const NO_SPECIALTIES: &str = "Nenhuma";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberReportFilter {
    /// Matches name or role, case-insensitive
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub only_active: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit: Option<MemberUnit>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberReportRow {
    pub id: Id,
    pub name: String,
    pub unit: MemberUnit,
    /// Class for the member's age, or "N/A"
    pub class: String,
    pub role: Role,
    pub age: i32,
    pub active: bool,
    /// Completed specialty names joined by ", ", or "Nenhuma"
    pub specialties: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberReport {
    pub rows: Vec<MemberReportRow>,
}

/// A member is active with a stored-`Ativa` dues enrollment for the
/// current calendar year.
pub fn is_active_member(finance: &FinanceStore, member_id: Id, today: NaiveDate) -> bool {
    finance
        .enrollments_of(member_id)
        .any(|e| e.year == today.year() && e.is_active())
}

pub fn member_report(club: &Club, filter: &MemberReportFilter, today: NaiveDate) -> MemberReport {
    let term = filter
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let only_active = filter.only_active.unwrap_or(false);

    let mut rows: Vec<MemberReportRow> = club
        .members
        .all()
        .iter()
        .filter(|m| matches(&filter.unit, &m.unit) && matches(&filter.role, &m.role))
        .filter(|m| {
            term.as_deref().map_or(true, |term| {
                m.name.to_lowercase().contains(term) || m.role.label().to_lowercase().contains(term)
            })
        })
        .filter_map(|m| {
            let active = is_active_member(&club.finance, m.id, today);
            if only_active && !active {
                return None;
            }
            let age = m.age_on(today);
            let class = club
                .classes
                .class_for_age(age)
                .map_or_else(|| NO_CLASS.to_string(), |c| c.name.label().to_string());
            let specialties: Vec<&str> = club
                .specialties
                .completions_for_member(m.id)
                .map(|c| {
                    club.specialties
                        .get(c.specialty_id)
                        .map_or(UNKNOWN_SPECIALTY, |s| s.name.as_str())
                })
                .collect();

            Some(MemberReportRow {
                id: m.id,
                name: m.name.clone(),
                unit: m.unit,
                class,
                role: m.role,
                age,
                active,
                specialties: if specialties.is_empty() {
                    NO_SPECIALTIES.to_string()
                } else {
                    specialties.join(", ")
                },
            })
        })
        .collect();

    rows.sort_by_cached_key(|row| collation_key(&row.name));
    MemberReport { rows }
}

impl Exportable for MemberReport {
    fn to_document(&self, heading: &str, today: NaiveDate) -> ReportDocument {
        ReportDocument::new(
            heading,
            "Relatório de Membros",
            &["Nome", "Unidade", "Classe", "Cargo", "Idade", "Status"],
            "relatorio_membros",
            today,
        )
        .rows(self.rows.iter().map(|row| {
            vec![
                Cell::text(&row.name),
                Cell::text(row.unit.label()),
                Cell::text(&row.class),
                Cell::text(row.role.label()),
                Cell::Integer(row.age.into()),
                Cell::text(if row.active { "Ativo" } else { "Inativo" }),
            ]
        }))
        .total(vec![Cell::text("Total de Membros"), Cell::count(self.rows.len())])
    }
}
