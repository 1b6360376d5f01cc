//! Book of minutes report

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::export::{Cell, Exportable, ReportDocument};
use super::filter::{empty_string_as_none, matches, DateRange};
use crate::domain::{Id, MinutesKind, UNKNOWN_MEMBER};
use crate::store::Club;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MinutesReportFilter {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub to: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub kind: Option<MinutesKind>,
}

impl MinutesReportFilter {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinutesReportRow {
    pub id: Id,
    pub title: String,
    pub date: NaiveDate,
    pub kind: MinutesKind,
    pub description: String,
    /// Participant names in recorded order
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinutesReport {
    pub rows: Vec<MinutesReportRow>,
}

pub fn minutes_report(club: &Club, filter: &MinutesReportFilter) -> MinutesReport {
    let range = filter.range();
    let mut rows: Vec<MinutesReportRow> = club
        .minutes
        .all()
        .iter()
        .filter(|m| range.contains(m.date) && matches(&filter.kind, &m.kind))
        .map(|m| MinutesReportRow {
            id: m.id,
            title: m.title.clone(),
            date: m.date,
            kind: m.kind,
            description: m.description.clone(),
            participants: m
                .participant_ids
                .iter()
                .map(|id| club.members.name_of(*id).unwrap_or(UNKNOWN_MEMBER).to_string())
                .collect(),
        })
        .collect();

    rows.sort_by(|a, b| b.date.cmp(&a.date));
    MinutesReport { rows }
}

impl Exportable for MinutesReport {
    fn to_document(&self, heading: &str, today: NaiveDate) -> ReportDocument {
        ReportDocument::new(
            heading,
            "Livro de Atas e Atos",
            &["Título", "Tipo", "Data", "Descrição", "Participantes"],
            "relatorio_atas",
            today,
        )
        .rows(self.rows.iter().map(|row| {
            vec![
                Cell::text(&row.title),
                Cell::text(row.kind.label()),
                Cell::Date(row.date),
                Cell::text(&row.description),
                Cell::text(row.participants.join(", ")),
            ]
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_latest_first() {
        let club = Club::seeded(date(2024, 8, 1));
        let report = minutes_report(&club, &MinutesReportFilter::default());

        let dates: Vec<NaiveDate> = report.rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2024, 8, 1), date(2024, 2, 10)]);
    }

    #[test]
    fn test_range_and_kind_filters() {
        let club = Club::seeded(date(2024, 8, 1));

        let filter = MinutesReportFilter {
            from: Some(date(2024, 3, 1)),
            ..Default::default()
        };
        assert_eq!(minutes_report(&club, &filter).rows.len(), 1);

        let filter = MinutesReportFilter {
            kind: Some(MinutesKind::RegularMeeting),
            ..Default::default()
        };
        let report = minutes_report(&club, &filter);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].id, 2);
    }

    #[test]
    fn test_unresolved_participants_labelled() {
        let mut club = Club::seeded(date(2024, 8, 1));
        club.members.delete(2);

        let report = minutes_report(&club, &MinutesReportFilter::default());
        let board = report.rows.iter().find(|r| r.id == 1).unwrap();
        assert_eq!(board.participants[0], UNKNOWN_MEMBER);
        assert_eq!(board.participants[1], "Carlos Pereira");
    }

    #[test]
    fn test_document_has_no_totals() {
        let club = Club::seeded(date(2024, 8, 1));
        let doc = minutes_report(&club, &MinutesReportFilter::default())
            .to_document("Clube", date(2024, 8, 1));

        assert_eq!(doc.title, "Livro de Atas e Atos");
        assert_eq!(doc.rows.len(), 2);
        assert!(doc.totals.is_empty());
        assert_eq!(doc.file_name, "relatorio_atas_2024-08-01.pdf");
    }
}
