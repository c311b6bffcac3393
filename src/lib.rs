//! Salary reporter
//!
//! This crate turns a JSON list of employee records into a tabular salary
//! report (CSV or HTML) covering active employees: surname, given name,
//! total pay and a redacted social security number.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod render;
