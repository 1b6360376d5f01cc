//! Domain Error Types
//!
//! Boundary validation failures. Stores never produce these; commands do,
//! before any store is touched.

use chrono::NaiveDate;
use thiserror::Error;

use super::amount::AmountError;
use super::Id;

/// Earliest year accepted for an annual dues enrollment.
pub const MIN_DUES_YEAR: i32 = 2000;

/// Validation errors raised by typed commands.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A required text field was empty or whitespace
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A monetary field failed validation
    #[error("Invalid amount for {field}: {source}")]
    InvalidAmount {
        field: &'static str,
        #[source]
        source: AmountError,
    },

    /// Dues year outside the accepted range
    #[error("Invalid year: {0} (must be {MIN_DUES_YEAR} or later)")]
    InvalidYear(i32),

    /// A selection that needs at least one entry was empty
    #[error("At least one {0} must be selected")]
    EmptySelection(&'static str),

    /// A label that does not belong to the enumeration
    #[error("Unknown {kind}: {value}")]
    UnknownLabel { kind: &'static str, value: String },

    /// A report date range whose start is after its end
    #[error("Invalid date range: {from} is after {to}")]
    InvertedDateRange { from: NaiveDate, to: NaiveDate },

    /// Completion signed off by someone without an instructing role
    #[error("Member {0} cannot sign off specialties")]
    NotAnInstructor(Id),
}

impl DomainError {
    /// Wrap an amount error with the field it came from
    pub fn invalid_amount(field: &'static str, source: AmountError) -> Self {
        Self::InvalidAmount { field, source }
    }

    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::InvalidYear(_) => "invalid_year",
            Self::EmptySelection(_) => "empty_selection",
            Self::UnknownLabel { .. } => "unknown_label",
            Self::InvertedDateRange { .. } => "invalid_date_range",
            Self::NotAnInstructor(_) => "not_an_instructor",
        }
    }
}

/// Reject empty or whitespace-only text, returning the trimmed value.
pub fn require_text(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("nome", "  Ana  ").unwrap(), "Ana");
    }

    #[test]
    fn test_require_text_rejects_blank() {
        let err = require_text("nome", "   ").unwrap_err();
        assert_eq!(err, DomainError::MissingField("nome"));
        assert_eq!(err.error_code(), "missing_field");
    }

    #[test]
    fn test_invalid_amount_message_names_field() {
        let err = DomainError::invalid_amount("valor", AmountError::NotPositive(Decimal::ZERO));
        assert!(err.to_string().contains("valor"));
        assert_eq!(err.error_code(), "invalid_amount");
    }

    #[test]
    fn test_invalid_year_message() {
        let err = DomainError::InvalidYear(1999);
        assert!(err.to_string().contains("1999"));
        assert!(err.to_string().contains("2000"));
    }
}
