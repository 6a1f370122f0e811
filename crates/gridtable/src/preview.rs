//! Plain-text rendering of a table through its grid callbacks.
//!
//! The preview asks the table for column widths and cell descriptions exactly
//! as a grid would, then lays the result out as monospaced text. Pixel widths
//! are converted to characters with [`PreviewOptions::px_per_char`] and
//! rounded per column, so the text never accumulates sub-character drift.
//!
//! ```rust
//! use gridtable::{render_preview, Col, PreviewOptions, VirtualTable};
//! use serde_json::json;
//!
//! let table = VirtualTable::builder(240.0)
//!     .columns([Col::px("id", 40.0), Col::variable("name")])
//!     .data(vec![json!({"id": 1, "name": "Ada"}), json!({"id": 2, "name": "Grace"})])
//!     .include_headers(true)
//!     .build();
//!
//! let text = render_preview(&table, &PreviewOptions::default());
//! assert_eq!(text, "id    name\n1     Ada\n2     Grace");
//! ```

use console::Style;

use crate::config::SortDirection;
use crate::table::VirtualTable;
use crate::util::fit;

/// Pixels per character when nothing else is configured.
pub const DEFAULT_PX_PER_CHAR: f64 = 8.0;

/// Options for [`render_preview`].
#[derive(Clone, Debug)]
pub struct PreviewOptions {
    /// Pixel width of one character cell.
    pub px_per_char: f64,
    /// Text placed between columns.
    pub separator: String,
    /// First data row to show.
    pub first_row: usize,
    /// Number of data rows to show. `None` shows the rest.
    pub max_rows: Option<usize>,
    /// Marker appended to truncated cells.
    pub ellipsis: String,
    /// Style applied to header cells.
    pub header_style: Option<Style>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        PreviewOptions {
            px_per_char: DEFAULT_PX_PER_CHAR,
            separator: " ".to_string(),
            first_row: 0,
            max_rows: None,
            ellipsis: "…".to_string(),
            header_style: None,
        }
    }
}

impl PreviewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn px_per_char(mut self, px: f64) -> Self {
        self.px_per_char = px;
        self
    }

    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.separator = sep.into();
        self
    }

    /// Show `max_rows` data rows starting at `first_row`.
    pub fn window(mut self, first_row: usize, max_rows: usize) -> Self {
        self.first_row = first_row;
        self.max_rows = Some(max_rows);
        self
    }

    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = Some(style);
        self
    }

    fn scale(&self) -> f64 {
        if self.px_per_char.is_finite() && self.px_per_char > 0.0 {
            self.px_per_char
        } else {
            DEFAULT_PX_PER_CHAR
        }
    }
}

/// Column widths in characters, each rounded on its own.
pub fn char_widths(table: &VirtualTable, options: &PreviewOptions) -> Vec<usize> {
    let scale = options.scale();
    table
        .column_widths()
        .iter()
        .map(|px| (px / scale).round().max(0.0) as usize)
        .collect()
}

/// Render the header row and a window of data rows as aligned text.
pub fn render_preview(table: &VirtualTable, options: &PreviewOptions) -> String {
    let widths = char_widths(table, options);
    let header_offset = usize::from(table.config().include_headers);
    let data_len = table.data().len();

    let first = options.first_row.min(data_len);
    let last = match options.max_rows {
        Some(max) => first.saturating_add(max).min(data_len),
        None => data_len,
    };

    let header_rows = (0..header_offset).map(|row| render_row(table, row, &widths, options));
    let data_rows = (first..last).map(|i| render_row(table, i + header_offset, &widths, options));

    header_rows.chain(data_rows).collect::<Vec<_>>().join("\n")
}

fn render_row(
    table: &VirtualTable,
    row_index: usize,
    widths: &[usize],
    options: &PreviewOptions,
) -> String {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .filter_map(|(column_index, width)| {
            let cell = table.render_cell(row_index, column_index)?;
            let mut content = cell.content;
            if let Some(label) = cell.sort_label.filter(|l| l.active) {
                content.push(' ');
                content.push(match label.direction {
                    SortDirection::Asc => '▲',
                    SortDirection::Desc => '▼',
                });
            }

            let text = fit(&content, *width, &options.ellipsis);
            Some(match (&options.header_style, cell.state.header) {
                (Some(style), true) => style.apply_to(text).to_string(),
                _ => text,
            })
        })
        .collect();

    cells.join(&options.separator).trim_end().to_string()
}
