//! Request DTOs and validation for the budget endpoint.

use chrono::NaiveDate;
use serde::Deserialize;

use super::models::{BillingRequest, MAX_NUMBER_OF_DAYS};

/// Raw query parameters as they arrive on the wire.
///
/// Both fields stay textual here; all interpretation happens in
/// [`BudgetQuery::validate`] so a bad value maps to the documented 400
/// response instead of a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetQuery {
    #[serde(default, rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, rename = "numberOfDays")]
    pub number_of_days: Option<String>,
}

/// Validation failure for one request field.
///
/// The `Display` strings are the exact messages surfaced in the JSON
/// error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid startDate")]
    InvalidStartDate,

    #[error("Invalid numberOfDays")]
    InvalidNumberOfDays,
}

impl BudgetQuery {
    /// Validate both fields into a [`BillingRequest`].
    ///
    /// `startDate` is checked first; when both fields are invalid only the
    /// startDate failure is reported.
    pub fn validate(&self) -> Result<BillingRequest, ValidationError> {
        let start_date = parse_start_date(self.start_date.as_deref())?;
        let number_of_days = parse_number_of_days(self.number_of_days.as_deref())?;

        Ok(BillingRequest {
            start_date,
            number_of_days,
        })
    }
}

/// Parse a `M-D-YYYY` date. Month and day may be unpadded; the value must
/// be a real calendar date (month 1-12, day valid for that month/year).
fn parse_start_date(raw: Option<&str>) -> Result<NaiveDate, ValidationError> {
    let raw = raw.ok_or(ValidationError::InvalidStartDate)?;
    NaiveDate::parse_from_str(raw.trim(), "%m-%d-%Y")
        .map_err(|_| ValidationError::InvalidStartDate)
}

/// Parse a decimal integer day count in `1..=365`.
fn parse_number_of_days(raw: Option<&str>) -> Result<u32, ValidationError> {
    let days: u32 = raw
        .ok_or(ValidationError::InvalidNumberOfDays)?
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumberOfDays)?;

    if (1..=MAX_NUMBER_OF_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(ValidationError::InvalidNumberOfDays)
    }
}
