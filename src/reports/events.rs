//! Event roster report

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::export::{Cell, Exportable, ReportDocument};
use super::filter::{collation_key, empty_string_as_none};
use crate::domain::{Event, Id, MemberUnit, Role};
use crate::store::Club;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventReportFilter {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub event_id: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    pub member_id: Id,
    pub name: String,
    pub unit: MemberUnit,
    pub role: Role,
    pub age: i32,
    /// Under 18 on the report date; needs a signed authorization
    pub minor: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventReport {
    /// All events, latest first
    pub events: Vec<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<Event>,
    pub participants: Vec<Participant>,
}

/// Events newest first. With an event selected, its enrolled members
/// sorted by name; enrollments of deleted members are left out.
pub fn event_report(club: &Club, filter: &EventReportFilter, today: NaiveDate) -> EventReport {
    let mut events = club.events.all().to_vec();
    events.sort_by(|a, b| b.date.cmp(&a.date));

    let selected = filter.event_id.and_then(|id| club.events.get(id)).cloned();
    let mut participants: Vec<Participant> = selected
        .as_ref()
        .map(|event| {
            club.events
                .enrollments_for(event.id)
                .filter_map(|enrollment| club.members.get(enrollment.member_id))
                .map(|m| Participant {
                    member_id: m.id,
                    name: m.name.clone(),
                    unit: m.unit,
                    role: m.role,
                    age: m.age_on(today),
                    minor: m.is_minor_on(today),
                })
                .collect()
        })
        .unwrap_or_default();
    participants.sort_by_cached_key(|p| collation_key(&p.name));

    EventReport {
        events,
        selected,
        participants,
    }
}

/// `relatorio_evento_<label>` with whitespace runs replaced by `_`
fn file_stem(label: &str) -> String {
    let joined = label.split_whitespace().collect::<Vec<_>>().join("_");
    format!("relatorio_evento_{joined}")
}

impl Exportable for EventReport {
    fn to_document(&self, heading: &str, today: NaiveDate) -> ReportDocument {
        let label = self.selected.as_ref().map_or("", |e| e.label.as_str());
        ReportDocument::new(
            heading,
            format!("Relatório de Inscrições - {label}"),
            &["Nome", "Unidade", "Cargo", "Idade"],
            &file_stem(label),
            today,
        )
        .rows(self.participants.iter().map(|p| {
            vec![
                Cell::text(&p.name),
                Cell::text(p.unit.label()),
                Cell::text(p.role.label()),
                Cell::Integer(p.age.into()),
            ]
        }))
        .total(vec![
            Cell::text("Total de Inscritos"),
            Cell::count(self.participants.len()),
        ])
    }
}
