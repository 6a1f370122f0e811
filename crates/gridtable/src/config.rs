//! Table configuration.
//!
//! Every table instance carries its own [`TableConfig`]. It can be built in
//! code or loaded from YAML/JSON, so a layout can live next to the
//! application's other settings:
//!
//! ```rust
//! use gridtable::{SortDirection, TableConfig};
//!
//! let config = TableConfig::from_yaml(r#"
//! width: 960
//! height: 480
//! include_headers: true
//! fixed_row_count: 1
//! resizable: true
//! order_by: title
//! order_direction: desc
//! "#).unwrap();
//!
//! assert!(config.resizable);
//! assert_eq!(config.order_direction, SortDirection::Desc);
//! assert_eq!(config.row_height, 48.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Default row height in pixels.
pub const DEFAULT_ROW_HEIGHT: f64 = 48.0;

/// Default height of the pagination toolbar in pixels.
pub const DEFAULT_FOOTER_HEIGHT: f64 = 56.0;

/// Border drawn between the grid and the pagination footer.
pub const FOOTER_BORDER_HEIGHT: f64 = 1.0;

/// Direction of the active sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Pagination props passed through to the host's pagination control.
///
/// Page state lives with the host; the table only needs `rows_per_page` to
/// size itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub rows_per_page: usize,
    pub page: usize,
    pub count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows_per_page_options: Vec<usize>,
}

/// Layout and behavior settings for one table instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Visible width. Columns wider than this in total scroll horizontally.
    pub width: f64,
    /// Fixed visible height. When unset, height follows the row count.
    pub height: Option<f64>,
    /// Upper bound on the container height.
    pub max_height: Option<f64>,
    pub row_height: f64,
    /// Rows frozen at the top of the viewport.
    pub fixed_row_count: usize,
    /// Columns frozen at the left of the viewport, in declaration order.
    pub fixed_column_count: usize,
    /// Render a header row as grid row 0.
    pub include_headers: bool,
    /// Shrink a paginated table to the rows actually present.
    pub fit_height_to_rows: bool,
    /// Enable drag handles and the proportional width store.
    pub resizable: bool,
    /// Static width applied to every column, overriding both built-in
    /// allocation strategies.
    pub column_width: Option<f64>,
    pub order_by: Option<String>,
    pub order_direction: SortDirection,
    pub pagination: Option<PaginationConfig>,
    /// Height of the pagination toolbar.
    pub footer_height: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            width: 0.0,
            height: None,
            max_height: None,
            row_height: DEFAULT_ROW_HEIGHT,
            fixed_row_count: 0,
            fixed_column_count: 0,
            include_headers: false,
            fit_height_to_rows: false,
            resizable: false,
            column_width: None,
            order_by: None,
            order_direction: SortDirection::default(),
            pagination: None,
            footer_height: DEFAULT_FOOTER_HEIGHT,
        }
    }
}

impl TableConfig {
    /// Create a configuration for the given visible width.
    pub fn new(width: f64) -> Self {
        TableConfig {
            width,
            ..Default::default()
        }
    }

    /// Parse a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file, choosing the format by extension
    /// (`.json`, otherwise YAML).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
        .map_err(|e| TableError::Config(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "loaded table config");
        Ok(config)
    }

    /// Height of the pagination footer including its border, or 0 without
    /// pagination.
    pub fn pagination_height(&self) -> f64 {
        if self.pagination.is_some() {
            self.footer_height + FOOTER_BORDER_HEIGHT
        } else {
            0.0
        }
    }

    /// Rows counted above the data when sizing the grid: the frozen rows if
    /// any, otherwise the header row if shown.
    pub fn header_rows(&self) -> usize {
        if self.fixed_row_count > 0 {
            self.fixed_row_count
        } else if self.include_headers {
            1
        } else {
            0
        }
    }
}
