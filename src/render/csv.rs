//! CSV rendering.
//!
//! Cells are joined with `,` and rows with `\n`, with no trailing newline.
//! Cells are written verbatim: a value containing a comma or newline is not
//! quoted and will shift columns for CSV readers.

use crate::models::Table;

use super::Renderer;

/// Renders `table` as CSV, header first.
pub fn render_csv(table: &Table) -> String {
    table
        .all_rows()
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// [`Renderer`] for CSV output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn render(&self, table: &Table) -> String {
        render_csv(table)
    }

    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }
}
