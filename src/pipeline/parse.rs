//! Employee record parsing and validation.

use crate::error::{ReportError, ReportResult};
use crate::models::{EmployeeRecord, RawEmployeeRecord};

use super::aggregate::checked_total_pay;
use super::redaction::is_valid_ssn;

/// Parses a JSON array of employee records.
///
/// Malformed JSON, a top-level value that is not an array, or a field with
/// the wrong JSON type fails with [`ReportError::Parse`]. A record missing a
/// required field, or whose `socialSecurity` is not `DDD-DD-DDDD` (or its
/// redacted form `xxx-xx-DDDD`), or whose pay periods sum past the
/// [`Decimal`](rust_decimal::Decimal) range, fails with
/// [`ReportError::Validation`].
/// The first failing record stops the parse. An empty array is valid.
///
/// # Examples
///
/// ```
/// use salary_reporter::pipeline::parse_employees;
///
/// let records = parse_employees(r#"[{
///     "firstName": "John", "lastName": "Doe", "active": true,
///     "socialSecurity": "123-45-2588", "pay": [50000.00, 47234.76]
/// }]"#)?;
/// assert_eq!(records.len(), 1);
/// assert!(parse_employees("[]")?.is_empty());
/// # Ok::<(), salary_reporter::error::ReportError>(())
/// ```
pub fn parse_employees(raw: &str) -> ReportResult<Vec<EmployeeRecord>> {
    let raw_records: Vec<RawEmployeeRecord> = serde_json::from_str(raw)?;

    raw_records
        .into_iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect()
}

/// Converts a raw record into a validated [`EmployeeRecord`].
fn validate_record(index: usize, raw: RawEmployeeRecord) -> ReportResult<EmployeeRecord> {
    let first_name = require(index, "firstName", raw.first_name)?;
    let last_name = require(index, "lastName", raw.last_name)?;
    let active = require(index, "active", raw.active)?;
    let social_security = require(index, "socialSecurity", raw.social_security)?;
    let pay = require(index, "pay", raw.pay)?;

    if !is_valid_ssn(&social_security) {
        return Err(ReportError::Validation {
            index,
            field: "socialSecurity".to_string(),
            message: "expected format DDD-DD-DDDD".to_string(),
        });
    }
    checked_total_pay(index, &pay)?;

    Ok(EmployeeRecord {
        first_name,
        last_name,
        active,
        social_security,
        pay,
    })
}

fn require<T>(index: usize, field: &str, value: Option<T>) -> ReportResult<T> {
    value.ok_or_else(|| ReportError::Validation {
        index,
        field: field.to_string(),
        message: "missing field".to_string(),
    })
}
