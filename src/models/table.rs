//! Tabular report model.
//!
//! A [`Table`] is the intermediate representation handed from the pipeline
//! to a renderer: a fixed header plus data rows of equal width.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ReportError, ReportResult};

/// Column names of the salary report, in canonical order.
pub const REPORT_HEADER: [&str; 4] = [
    "Last Name",
    "First Name",
    "Total Pay",
    "Social Security Number",
];

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Free text, rendered verbatim.
    Text(String),
    /// A numeric amount, rendered in plain decimal notation.
    Number(Decimal),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            // normalize() drops trailing zeros: 100000.00 renders as 100000
            Cell::Number(amount) => write!(f, "{}", amount.normalize()),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<Decimal> for Cell {
    fn from(amount: Decimal) -> Self {
        Cell::Number(amount)
    }
}

/// A header row plus data rows.
///
/// Every data row has exactly as many cells as the header; [`Table::push_row`]
/// rejects anything else, so a constructed table always satisfies that
/// invariant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    header: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with the given header.
    pub fn new<I, C>(header: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Creates an empty table with the salary report header.
    pub fn with_report_header() -> Self {
        Self::new(REPORT_HEADER)
    }

    /// Appends a data row.
    ///
    /// Returns [`ReportError::RowWidth`] if the row is not as wide as the header.
    pub fn push_row(&mut self, row: Vec<Cell>) -> ReportResult<()> {
        if row.len() != self.header.len() {
            return Err(ReportError::RowWidth {
                expected: self.header.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Returns the header row.
    pub fn header(&self) -> &[Cell] {
        &self.header
    }

    /// Returns the data rows, excluding the header.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Iterates over all rows, header first.
    pub fn all_rows(&self) -> impl Iterator<Item = &[Cell]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
