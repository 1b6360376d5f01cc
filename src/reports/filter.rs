//! Report filter helpers
//!
//! Query strings from the console send every filter field, with `""` for
//! "any". Those empty values deserialize to `None` and match every row.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer};

use crate::domain::DomainError;

/// Deserialize an optional field, treating an empty or blank string as absent.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map(Some).map_err(de::Error::custom),
    }
}

/// `true` when the filter is unset or equals the value
pub fn matches<T: PartialEq>(filter: &Option<T>, value: &T) -> bool {
    filter.as_ref().map_or(true, |wanted| wanted == value)
}

/// Inclusive date range; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Reject a range whose start is after its end
    pub fn validate(&self) -> Result<(), DomainError> {
        match (self.from, self.to) {
            (Some(from), Some(to)) if from > to => Err(DomainError::InvertedDateRange { from, to }),
            _ => Ok(()),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// Case- and accent-insensitive key for sorting Portuguese names.
pub fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MemberUnit;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        unit: Option<MemberUnit>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        year: Option<i32>,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_strings_are_no_filter() {
        let probe: Probe = serde_json::from_str(r#"{"unit": "", "year": " "}"#).unwrap();
        assert!(probe.unit.is_none());
        assert!(probe.year.is_none());

        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(probe.unit.is_none());
    }

    #[test]
    fn test_values_parse_through_labels() {
        let probe: Probe = serde_json::from_str(r#"{"unit": "Águias", "year": "2024"}"#).unwrap();
        assert_eq!(probe.unit, Some(MemberUnit::Eagles));
        assert_eq!(probe.year, Some(2024));

        assert!(serde_json::from_str::<Probe>(r#"{"unit": "Corujas"}"#).is_err());
    }

    #[test]
    fn test_date_range_bounds_inclusive() {
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2024, 2, 1)));
        assert!(DateRange::default().contains(date(1900, 1, 1)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let range = DateRange::new(Some(date(2024, 2, 1)), Some(date(2024, 1, 1)));
        assert!(matches!(range.validate(), Err(DomainError::InvertedDateRange { .. })));
    }

    #[test]
    fn test_collation_ignores_case_and_accents() {
        assert_eq!(collation_key("Águias"), "aguias");
        assert!(collation_key("Ana Costa") < collation_key("Érica"));
        assert!(collation_key("érica") < collation_key("Fábio"));
    }
}
