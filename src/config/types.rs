//! Configuration types for report generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file is a valid configuration.

use serde::Deserialize;

use crate::pipeline::{PipelineConfig, RedactionMode, SortDirection};
use crate::render::{DEFAULT_TITLE, HtmlRenderer, Renderer, ReportFormat};

/// The `report` section: what the pipeline produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportSection {
    /// Default output format.
    #[serde(default)]
    pub format: ReportFormat,
    /// Surname ordering of the rows.
    #[serde(default)]
    pub sort_direction: SortDirection,
    /// Where redaction runs.
    #[serde(default)]
    pub redaction_mode: RedactionMode,
}

/// The `html` section: page options for HTML output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HtmlSection {
    /// Wrap the table in a full `<html>` page with a timestamped title.
    #[serde(default)]
    pub wrap_document: bool,
    /// Page title prefix, used when `wrap_document` is set.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for HtmlSection {
    fn default() -> Self {
        Self {
            wrap_document: false,
            title: default_title(),
        }
    }
}

/// The complete report configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Pipeline and format settings.
    #[serde(default)]
    pub report: ReportSection,
    /// HTML page settings.
    #[serde(default)]
    pub html: HtmlSection,
}

impl ReportConfig {
    /// Returns the pipeline settings from the `report` section.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            sort_direction: self.report.sort_direction,
            redaction_mode: self.report.redaction_mode,
        }
    }

    /// Returns the renderer for `format`, applying the `html` section.
    pub fn renderer(&self, format: ReportFormat) -> Box<dyn Renderer> {
        match format {
            ReportFormat::Html if self.html.wrap_document => {
                Box::new(HtmlRenderer::document(self.html.title.clone()))
            }
            other => other.renderer(),
        }
    }
}
