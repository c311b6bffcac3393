//! Core data models for the salary reporter.
//!
//! This module contains the employee record read from input and the
//! table that sits between the pipeline and the renderers.

mod employee;
mod table;

pub use employee::{EmployeeRecord, RawEmployeeRecord};
pub use table::{Cell, REPORT_HEADER, Table};
