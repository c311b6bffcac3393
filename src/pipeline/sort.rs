//! Ordering of records by surname.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::EmployeeRecord;

/// Sort direction for the surname ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// A before Z.
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Z before A.
    #[serde(alias = "desc")]
    Descending,
}

/// Compares two surnames by code point, honouring `direction`.
///
/// Equal surnames compare [`Ordering::Equal`] in both directions, so a stable
/// sort keeps tied records in input order whichever way it runs.
pub fn compare_last_names(a: &str, b: &str, direction: SortDirection) -> Ordering {
    // str's Ord is byte-wise over UTF-8, which orders by code point.
    let ordering = a.cmp(b);
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Sorts records by `last_name` in the given direction.
///
/// The sort is stable: records with equal surnames keep their relative order.
///
/// # Examples
///
/// ```
/// use salary_reporter::models::EmployeeRecord;
/// use salary_reporter::pipeline::{SortDirection, sort_by_last_name};
///
/// let record = |last: &str| EmployeeRecord {
///     first_name: String::new(),
///     last_name: last.to_string(),
///     active: true,
///     social_security: "123-45-6789".to_string(),
///     pay: vec![],
/// };
/// let sorted = sort_by_last_name(vec![record("B"), record("A"), record("C")], SortDirection::Descending);
/// let names: Vec<_> = sorted.iter().map(|r| r.last_name.as_str()).collect();
/// assert_eq!(names, ["C", "B", "A"]);
/// ```
pub fn sort_by_last_name(
    mut records: Vec<EmployeeRecord>,
    direction: SortDirection,
) -> Vec<EmployeeRecord> {
    records.sort_by(|a, b| compare_last_names(&a.last_name, &b.last_name, direction));
    records
}
