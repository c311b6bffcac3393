//! Report pipeline for the salary reporter.
//!
//! This module contains the individual transform stages (redaction,
//! parsing, filtering, sorting, aggregation and table building) and the
//! [`ReportPipeline`] that runs them in order over one raw input document.
//!
//! Each stage takes one input and returns a new value; nothing is mutated
//! in place, so two pipelines can run over the same record set without
//! seeing each other's redaction. Per-run settings such as the sort
//! direction live in [`PipelineConfig`] and are fixed when the pipeline is
//! constructed.

mod aggregate;
mod filter;
mod parse;
mod redaction;
mod sort;
mod table_builder;

pub use aggregate::total_pay;
pub use filter::filter_active;
pub use parse::parse_employees;
pub use redaction::{RedactionMode, is_valid_ssn, redact_ssn, redact_text};
pub use sort::{SortDirection, compare_last_names, sort_by_last_name};
pub use table_builder::{build_table, summary_row};

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ReportResult;
use crate::models::{EmployeeRecord, Table};
use crate::render::{Renderer, ReportFormat};

/// Settings bound into a [`ReportPipeline`] at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Surname ordering of the report rows.
    #[serde(default)]
    pub sort_direction: SortDirection,
    /// Whether redaction runs on the raw document or on parsed records.
    #[serde(default)]
    pub redaction_mode: RedactionMode,
}

impl PipelineConfig {
    /// Returns a copy with a different sort direction.
    pub fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self {
        self.sort_direction = sort_direction;
        self
    }

    /// Returns a copy with a different redaction mode.
    pub fn with_redaction_mode(mut self, redaction_mode: RedactionMode) -> Self {
        self.redaction_mode = redaction_mode;
        self
    }
}

/// Runs raw employee JSON through every stage and produces a [`Table`].
///
/// # Example
///
/// ```
/// use salary_reporter::pipeline::{PipelineConfig, ReportPipeline};
/// use salary_reporter::render::ReportFormat;
///
/// let raw = r#"[{"firstName": "John", "lastName": "Doe", "active": true,
///               "socialSecurity": "123-45-2588", "pay": [50000.00, 47234.76]}]"#;
///
/// let pipeline = ReportPipeline::new(PipelineConfig::default());
/// let csv = pipeline.render(raw, ReportFormat::Csv)?;
/// assert_eq!(
///     csv,
///     "Last Name,First Name,Total Pay,Social Security Number\nDoe,John,97234.76,xxx-xx-2588"
/// );
/// # Ok::<(), salary_reporter::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportPipeline {
    config: PipelineConfig,
}

impl ReportPipeline {
    /// Creates a pipeline bound to `config`.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this pipeline was built with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Parses, redacts, filters and sorts the input, returning the records
    /// that will appear in the report.
    pub fn prepare(&self, raw: &str) -> ReportResult<Vec<EmployeeRecord>> {
        let records: Vec<EmployeeRecord> = match self.config.redaction_mode {
            RedactionMode::Document => parse_employees(&redact_text(raw))?,
            RedactionMode::Field => parse_employees(raw)?
                .iter()
                .map(EmployeeRecord::redacted)
                .collect(),
        };
        debug!(
            records = records.len(),
            redaction_mode = ?self.config.redaction_mode,
            "Parsed employee records"
        );

        let active = filter_active(records);
        debug!(active = active.len(), "Filtered active employees");

        Ok(sort_by_last_name(active, self.config.sort_direction))
    }

    /// Runs the full pipeline and returns the report table.
    pub fn run(&self, raw: &str) -> ReportResult<Table> {
        let records = self.prepare(raw)?;
        build_table(&records)
    }

    /// Runs the full pipeline and renders the table as `format`.
    pub fn render(&self, raw: &str, format: ReportFormat) -> ReportResult<String> {
        self.render_with(raw, &*format.renderer())
    }

    /// Runs the full pipeline and renders the table with `renderer`.
    pub fn render_with(&self, raw: &str, renderer: &dyn Renderer) -> ReportResult<String> {
        let start_time = Instant::now();
        let table = self.run(raw)?;
        let output = renderer.render(&table);
        info!(
            rows = table.len(),
            content_type = renderer.content_type(),
            sort_direction = ?self.config.sort_direction,
            duration_us = start_time.elapsed().as_micros(),
            "Report rendered"
        );
        Ok(output)
    }
}
