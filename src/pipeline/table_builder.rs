//! Projection of employee records into the report table.

use crate::error::ReportResult;
use crate::models::{Cell, EmployeeRecord, Table};

use super::aggregate::checked_total_pay;
use super::redaction::redact_ssn;

/// Builds the data row for one record:
/// `[lastName, firstName, totalPay, redacted socialSecurity]`.
///
/// The social security number is redacted here regardless of whether an
/// earlier stage already did so. `index` is the record's position and is
/// only used to report a total that overflows.
pub fn summary_row(index: usize, record: &EmployeeRecord) -> ReportResult<Vec<Cell>> {
    Ok(vec![
        Cell::from(record.last_name.as_str()),
        Cell::from(record.first_name.as_str()),
        Cell::from(checked_total_pay(index, &record.pay)?),
        Cell::from(redact_ssn(&record.social_security)),
    ])
}

/// Builds the report table from already filtered and sorted records.
///
/// Rows appear in the order of `records`.
pub fn build_table(records: &[EmployeeRecord]) -> ReportResult<Table> {
    let mut table = Table::with_report_header();
    for (index, record) in records.iter().enumerate() {
        table.push_row(summary_row(index, record)?)?;
    }
    Ok(table)
}
