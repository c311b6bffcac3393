//! Configuration loading for the salary reporter.
//!
//! This module loads report settings from a YAML file: output format,
//! sort direction, redaction mode and HTML page options.
//!
//! # Example
//!
//! ```no_run
//! use salary_reporter::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/report.yaml").unwrap();
//! println!("Default format: {:?}", loader.config().report.format);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HtmlSection, ReportConfig, ReportSection};
