//! Meeting minutes (atas)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::labels::labeled_enum;
use super::Id;

labeled_enum! {
    /// Kind of meeting the minutes record
    pub enum MinutesKind {
        BoardMeeting => "Reunião de Diretoria",
        DisciplinaryCommittee => "Comissão Disciplinar",
        RegularMeeting => "Reunião Regular",
        Other => "Outro",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minutes {
    pub id: Id,
    pub title: String,
    pub date: NaiveDate,
    pub kind: MinutesKind,
    pub description: String,
    pub participant_ids: Vec<Id>,
    /// Attachment filenames, without duplicates
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMinutes {
    pub title: String,
    pub date: NaiveDate,
    pub kind: MinutesKind,
    pub description: String,
    pub participant_ids: Vec<Id>,
    pub attachments: Vec<String>,
}

impl NewMinutes {
    pub fn with_id(self, id: Id) -> Minutes {
        Minutes {
            id,
            title: self.title,
            date: self.date,
            kind: self.kind,
            description: self.description,
            participant_ids: self.participant_ids,
            attachments: dedup_preserving_order(self.attachments),
        }
    }
}

/// Drop repeated entries, keeping the first occurrence of each.
pub fn dedup_preserving_order<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachments_deduplicated_in_order() {
        let minutes = NewMinutes {
            title: "Planejamento".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            kind: MinutesKind::BoardMeeting,
            description: "Logística".to_string(),
            participant_ids: vec![2, 3],
            attachments: vec![
                "b.pdf".to_string(),
                "a.pdf".to_string(),
                "b.pdf".to_string(),
            ],
        }
        .with_id(7);

        assert_eq!(minutes.id, 7);
        assert_eq!(minutes.attachments, vec!["b.pdf", "a.pdf"]);
    }
}
