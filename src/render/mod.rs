//! Report renderers.
//!
//! A renderer turns a [`Table`] into text. CSV and HTML are independent
//! strategies behind the [`Renderer`] trait; callers pick one through
//! [`ReportFormat`] or construct a renderer directly.

mod csv;
mod html;

pub use csv::{CsvRenderer, render_csv};
pub use html::{DEFAULT_TITLE, HtmlRenderer, render_html, render_html_document};

use serde::{Deserialize, Serialize};

use crate::models::Table;

/// Serializes a [`Table`] into a textual report.
pub trait Renderer: Send + Sync {
    /// Renders the whole table.
    fn render(&self, table: &Table) -> String;

    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str;
}

/// Output formats the reporter can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Comma-separated values.
    #[default]
    Csv,
    /// An HTML `<table>` fragment.
    Html,
}

impl ReportFormat {
    /// Returns the default renderer for this format.
    ///
    /// HTML renders as a bare fragment; use [`HtmlRenderer::document`] for a
    /// full page.
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            ReportFormat::Csv => Box::new(CsvRenderer),
            ReportFormat::Html => Box::new(HtmlRenderer::fragment()),
        }
    }
}
