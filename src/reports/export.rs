//! Export documents
//!
//! A report becomes a table of typed cells that a PDF renderer can lay out:
//! heading, title, column headers, rows and totals rows. Formatting of
//! dates and currency is left to the renderer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Cell {
    Text(String),
    Money(Decimal),
    Date(NaiveDate),
    Integer(i64),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn count(value: usize) -> Self {
        Cell::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// A report laid out for export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    /// Club name printed above the title
    pub heading: String,
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub totals: Vec<Vec<Cell>>,
    pub file_name: String,
}

impl ReportDocument {
    pub fn new(
        heading: &str,
        title: impl Into<String>,
        columns: &[&str],
        file_stem: &str,
        today: NaiveDate,
    ) -> Self {
        Self {
            heading: heading.to_string(),
            title: title.into(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows: Vec::new(),
            totals: Vec::new(),
            file_name: file_name(file_stem, today),
        }
    }

    pub fn row(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Vec<Cell>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn total(mut self, cells: Vec<Cell>) -> Self {
        self.totals.push(cells);
        self
    }
}

/// `<stem>_<YYYY-MM-DD>.pdf`
pub fn file_name(stem: &str, today: NaiveDate) -> String {
    format!("{stem}_{}.pdf", today.format("%Y-%m-%d"))
}

/// A report that can be laid out for export
pub trait Exportable {
    fn to_document(&self, heading: &str, today: NaiveDate) -> ReportDocument;
}
