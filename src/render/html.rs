//! HTML rendering.
//!
//! The core output is a compact `<table>` fragment: one `<thead>` row of
//! `<th>` cells from the header and one `<tbody>` holding a `<tr>` of `<td>`
//! cells per data row. Cell text is inserted without escaping, so a value
//! containing `<` or `&` will break the markup.
//!
//! [`render_html_document`] wraps the fragment in a minimal page whose title
//! carries the generation time.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{Cell, Table};

use super::Renderer;

/// Page title used when none is configured.
pub const DEFAULT_TITLE: &str = "Employee Report";

/// Renders `table` as an HTML `<table>` fragment.
///
/// # Examples
///
/// ```
/// use salary_reporter::models::Table;
/// use salary_reporter::render::render_html;
///
/// let html = render_html(&Table::new(["Last Name"]));
/// assert_eq!(
///     html,
///     "<table><thead><tr><th>Last Name</th></tr></thead><tbody></tbody></table>"
/// );
/// ```
pub fn render_html(table: &Table) -> String {
    let mut html = String::from("<table><thead>");
    push_row(&mut html, table.header(), "th");
    html.push_str("</thead><tbody>");
    for row in table.rows() {
        push_row(&mut html, row, "td");
    }
    html.push_str("</tbody></table>");
    html
}

/// Renders `table` inside a full HTML page titled `"{title}: {generated_at}"`.
pub fn render_html_document(table: &Table, title: &str, generated_at: DateTime<Utc>) -> String {
    format!(
        "<html><head><title>{}: {}</title></head><body>{}</body></html>",
        title,
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        render_html(table)
    )
}

fn push_row(html: &mut String, cells: &[Cell], tag: &str) {
    html.push_str("<tr>");
    for cell in cells {
        html.push_str(&format!("<{tag}>{cell}</{tag}>"));
    }
    html.push_str("</tr>");
}

/// [`Renderer`] for HTML output, either a bare table or a full page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRenderer {
    document_title: Option<String>,
}

impl HtmlRenderer {
    /// Renders the `<table>` fragment only.
    pub fn fragment() -> Self {
        Self {
            document_title: None,
        }
    }

    /// Renders a full page titled with `title` and the current time.
    pub fn document(title: impl Into<String>) -> Self {
        Self {
            document_title: Some(title.into()),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::fragment()
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, table: &Table) -> String {
        match &self.document_title {
            Some(title) => render_html_document(table, title, Utc::now()),
            None => render_html(table),
        }
    }

    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}
