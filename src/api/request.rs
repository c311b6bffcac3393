//! Request types for the salary reporter API.
//!
//! The request body of `POST /report` is the raw employee JSON array and is
//! handed to the pipeline untouched; only the query string is typed here.

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::pipeline::{PipelineConfig, SortDirection};
use crate::render::ReportFormat;

/// Query parameters for `POST /report`.
///
/// Both fields are optional and fall back to the configured defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Output format override (`csv` or `html`).
    #[serde(default)]
    pub format: Option<ReportFormat>,
    /// Sort direction override (`ascending`/`asc` or `descending`/`desc`).
    #[serde(default)]
    pub order: Option<SortDirection>,
}

impl ReportQuery {
    /// Resolves the output format against the configuration.
    pub fn format_or(&self, config: &ReportConfig) -> ReportFormat {
        self.format.unwrap_or(config.report.format)
    }

    /// Resolves the pipeline settings against the configuration.
    pub fn pipeline_config_or(&self, config: &ReportConfig) -> PipelineConfig {
        let base = config.pipeline_config();
        match self.order {
            Some(order) => base.with_sort_direction(order),
            None => base,
        }
    }
}
