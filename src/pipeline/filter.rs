//! Active-employee filtering.

use crate::models::EmployeeRecord;

/// Keeps only active employees, preserving their relative order.
pub fn filter_active(records: Vec<EmployeeRecord>) -> Vec<EmployeeRecord> {
    records.into_iter().filter(|record| record.active).collect()
}
