//! Employee record model.
//!
//! Input arrives as a JSON array of camelCase objects. Each object is first
//! read into a [`RawEmployeeRecord`], where every field is optional, and then
//! validated into an [`EmployeeRecord`] by the parser.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pipeline::redact_ssn;

/// A validated employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// The employee's given name.
    pub first_name: String,
    /// The employee's surname. Reports are ordered by this field.
    pub last_name: String,
    /// Whether the employee is currently active. Only active employees are reported.
    pub active: bool,
    /// Social security number, `DDD-DD-DDDD` or already redacted as `xxx-xx-DDDD`.
    pub social_security: String,
    /// One payment per pay period.
    pub pay: Vec<Decimal>,
}

impl EmployeeRecord {
    /// Returns a copy of this record with its social security number redacted.
    ///
    /// Only `social_security` is touched; names are left as they are even if
    /// they happen to contain digits. The original record is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_reporter::models::EmployeeRecord;
    ///
    /// let record = EmployeeRecord {
    ///     first_name: "John".to_string(),
    ///     last_name: "Doe".to_string(),
    ///     active: true,
    ///     social_security: "123-45-2588".to_string(),
    ///     pay: vec![],
    /// };
    /// let redacted = record.redacted();
    /// assert_eq!(redacted.social_security, "xxx-xx-2588");
    /// assert_eq!(record.social_security, "123-45-2588");
    /// ```
    pub fn redacted(&self) -> Self {
        Self {
            social_security: redact_ssn(&self.social_security),
            ..self.clone()
        }
    }
}

/// An employee record as it appears in the input, before validation.
///
/// Absent and `null` fields deserialize to `None` so the parser can report
/// exactly which field is missing from which record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmployeeRecord {
    /// The employee's given name.
    pub first_name: Option<String>,
    /// The employee's surname.
    pub last_name: Option<String>,
    /// Whether the employee is currently active.
    pub active: Option<bool>,
    /// Social security number.
    pub social_security: Option<String>,
    /// One payment per pay period.
    pub pay: Option<Vec<Decimal>>,
}
