//! Specialty completions report

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::export::{Cell, Exportable, ReportDocument};
use super::filter::{empty_string_as_none, matches};
use crate::domain::{Id, MemberUnit, NO_CLASS, UNKNOWN, UNKNOWN_SPECIALTY};
use crate::store::Club;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecialtyReportFilter {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub specialty_id: Option<Id>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit: Option<MemberUnit>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub year: Option<i32>,
    /// 1 = January
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub month: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialtyReportRow {
    pub member: String,
    pub unit: String,
    pub specialty: String,
    pub completed_on: NaiveDate,
    pub instructor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialtyReport {
    pub rows: Vec<SpecialtyReportRow>,
    /// Distinct completion years, latest first
    pub available_years: Vec<i32>,
}

/// Completions filtered and resolved to names, latest first.
///
/// A unit filter drops completions whose member no longer exists.
pub fn specialty_report(club: &Club, filter: &SpecialtyReportFilter) -> SpecialtyReport {
    let completions = club.specialties.completions();

    let mut rows: Vec<SpecialtyReportRow> = completions
        .iter()
        .filter(|c| {
            let member = club.members.get(c.member_id);
            matches(&filter.specialty_id, &c.specialty_id)
                && filter
                    .unit
                    .map_or(true, |unit| member.map_or(false, |m| m.unit == unit))
                && matches(&filter.year, &c.completed_on.year())
                && matches(&filter.month, &c.completed_on.month())
        })
        .map(|c| {
            let member = club.members.get(c.member_id);
            SpecialtyReportRow {
                member: member.map_or(UNKNOWN, |m| m.name.as_str()).to_string(),
                unit: member.map_or(NO_CLASS, |m| m.unit.label()).to_string(),
                specialty: club
                    .specialties
                    .get(c.specialty_id)
                    .map_or(UNKNOWN_SPECIALTY, |s| s.name.as_str())
                    .to_string(),
                completed_on: c.completed_on,
                instructor: club.members.name_of(c.instructor_id).unwrap_or(UNKNOWN).to_string(),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.completed_on.cmp(&a.completed_on));

    let mut available_years: Vec<i32> = completions.iter().map(|c| c.completed_on.year()).collect();
    available_years.sort_unstable_by(|a, b| b.cmp(a));
    available_years.dedup();

    SpecialtyReport {
        rows,
        available_years,
    }
}

impl Exportable for SpecialtyReport {
    fn to_document(&self, heading: &str, today: NaiveDate) -> ReportDocument {
        ReportDocument::new(
            heading,
            "Relatório de Especialidades",
            &["Membro", "Unidade", "Especialidade", "Data Conclusão", "Instrutor"],
            "relatorio_especialidades",
            today,
        )
        .rows(self.rows.iter().map(|row| {
            vec![
                Cell::text(&row.member),
                Cell::text(&row.unit),
                Cell::text(&row.specialty),
                Cell::Date(row.completed_on),
                Cell::text(&row.instructor),
            ]
        }))
        .total(vec![Cell::text("Total de Conclusões"), Cell::count(self.rows.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }

    #[test]
    fn test_all_completions_latest_first() {
        let club = Club::seeded(today());
        let report = specialty_report(&club, &SpecialtyReportFilter::default());

        assert_eq!(report.rows.len(), 4);
        assert_eq!(report.rows[0].member, "Maria Oliveira");
        assert_eq!(report.rows[0].instructor, "Laura Gonçalves");
        assert_eq!(report.available_years, vec![2024, 2023]);
    }

    #[test]
    fn test_year_and_month_filters() {
        let club = Club::seeded(today());
        let filter = SpecialtyReportFilter {
            year: Some(2023),
            month: Some(10),
            ..Default::default()
        };
        let report = specialty_report(&club, &filter);

        assert_eq!(report.rows.len(), 2);
        assert!(report.rows.iter().all(|r| r.specialty == "Acampamento I"));
    }

    #[test]
    fn test_dangling_references_use_sentinels() {
        let mut club = Club::seeded(today());
        club.members.delete(2);
        club.members.delete(10);

        let report = specialty_report(&club, &SpecialtyReportFilter::default());
        let row = &report.rows[0];
        assert_eq!(row.member, UNKNOWN);
        assert_eq!(row.unit, NO_CLASS);
        assert_eq!(row.instructor, UNKNOWN);
    }

    #[test]
    fn test_unit_filter_excludes_missing_members() {
        let mut club = Club::seeded(today());
        club.members.delete(4);

        let filter = SpecialtyReportFilter {
            unit: Some(MemberUnit::Falcons),
            ..Default::default()
        };
        let report = specialty_report(&club, &filter);

        assert_eq!(report.rows.len(), 2);
        assert!(report.rows.iter().all(|r| r.member == "João da Silva"));
    }

    #[test]
    fn test_document_totals() {
        let club = Club::seeded(today());
        let doc = specialty_report(&club, &SpecialtyReportFilter::default()).to_document("Clube", today());

        assert_eq!(doc.columns[3], "Data Conclusão");
        assert_eq!(doc.totals, vec![vec![Cell::text("Total de Conclusões"), Cell::Integer(4)]]);
    }
}
