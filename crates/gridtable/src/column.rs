//! Column specifications.
//!
//! A table is described by an ordered list of [`ColumnSpec`]s. Order matters:
//! it fixes left-to-right position and decides which column a drag handle
//! trades width with.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cell::CellPropsProducer;
use crate::error::TableError;
use crate::event::ClickHandler;

/// A declared column width.
///
/// Serialized as a plain number for pixel widths and as a `"40%"` string for
/// percentages, so column lists can be written naturally in YAML or JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WidthRaw", into = "WidthRaw")]
pub enum ColumnWidth {
    /// Absolute width in pixels.
    Pixels(f64),
    /// Percentage of the table width, as written (`40.0` means 40%).
    Percent(f64),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRaw {
    Pixels(f64),
    Text(String),
}

impl From<ColumnWidth> for WidthRaw {
    fn from(width: ColumnWidth) -> Self {
        match width {
            ColumnWidth::Pixels(px) => WidthRaw::Pixels(px),
            ColumnWidth::Percent(pct) => WidthRaw::Text(format!("{}%", pct)),
        }
    }
}

impl TryFrom<WidthRaw> for ColumnWidth {
    type Error = TableError;

    fn try_from(raw: WidthRaw) -> Result<Self, Self::Error> {
        match raw {
            WidthRaw::Pixels(px) if px.is_finite() && px >= 0.0 => Ok(ColumnWidth::Pixels(px)),
            WidthRaw::Pixels(px) => Err(TableError::InvalidWidth(px.to_string())),
            WidthRaw::Text(s) => s.parse(),
        }
    }
}

impl FromStr for ColumnWidth {
    type Err = TableError;

    /// Parses a percentage string such as `"40%"`.
    ///
    /// Bare numbers are only accepted through the numeric form, never as
    /// strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TableError::InvalidWidth(s.to_string());
        let number = s.trim().strip_suffix('%').ok_or_else(invalid)?;
        let pct: f64 = number.trim().parse().map_err(|_| invalid())?;
        if !pct.is_finite() || pct < 0.0 {
            return Err(invalid());
        }
        Ok(ColumnWidth::Percent(pct))
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWidth::Pixels(px) => write!(f, "{}px", px),
            ColumnWidth::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

impl ColumnWidth {
    /// Create a pixel width.
    pub fn px(width: f64) -> Self {
        ColumnWidth::Pixels(width)
    }

    /// Create a percentage width (`percent(40.0)` is 40% of the table).
    pub fn percent(pct: f64) -> Self {
        ColumnWidth::Percent(pct)
    }

    /// The concrete width this declaration resolves to, floored at `min_width`.
    pub fn deterministic(&self, total_width: f64, min_width: f64) -> f64 {
        let width = match self {
            ColumnWidth::Pixels(px) => *px,
            ColumnWidth::Percent(pct) => pct / 100.0 * total_width,
        };
        width.max(min_width).max(0.0)
    }
}

/// Header click behavior for a single column.
#[derive(Clone, Default)]
pub enum HeaderClick {
    /// Use the table-level header click handler, if any.
    #[default]
    Inherit,
    /// Never treat this header as clickable, even if the table has a handler.
    Disabled,
    /// Column-specific handler, taking precedence over the table handler.
    Handler(ClickHandler),
}

impl fmt::Debug for HeaderClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderClick::Inherit => f.write_str("Inherit"),
            HeaderClick::Disabled => f.write_str("Disabled"),
            HeaderClick::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

/// Renders the content of a data cell from its row.
pub type CellRenderer = Arc<dyn Fn(&Value) -> String>;

/// Configuration for a single table column.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Unique identifier within the table. Also the default field key.
    pub name: String,
    /// Label shown in the header row. Falls back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Declared width. `None` makes the column share leftover space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<ColumnWidth>,
    /// Pixel floor applied whether or not `width` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Alternative sort key matched against the table's `order_by`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Header click behavior.
    #[serde(skip)]
    pub header_click: HeaderClick,
    /// Custom content renderer for data cells.
    #[serde(skip)]
    pub cell: Option<CellRenderer>,
    /// Per-column cell props, merged over the table defaults.
    #[serde(skip)]
    pub cell_props: Option<Arc<dyn CellPropsProducer>>,
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("order_by", &self.order_by)
            .field("header_click", &self.header_click)
            .field("cell", &self.cell.as_ref().map(|_| ".."))
            .field("cell_props", &self.cell_props.as_ref().map(|_| ".."))
            .finish()
    }
}

impl ColumnSpec {
    /// Create a variable-width column with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        ColumnSpec {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the declared width.
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = Some(width);
        self
    }

    /// Set a fixed pixel width.
    pub fn px(self, width: f64) -> Self {
        self.width(ColumnWidth::Pixels(width))
    }

    /// Set a percentage width (`percent(40.0)` is 40%).
    pub fn percent(self, pct: f64) -> Self {
        self.width(ColumnWidth::Percent(pct))
    }

    /// Set the minimum pixel width.
    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Set the header label.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the alternative sort key.
    pub fn order_by(mut self, key: impl Into<String>) -> Self {
        self.order_by = Some(key.into());
        self
    }

    /// Handle clicks on this column's header.
    pub fn on_header_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&crate::event::CellClick<'_>) + 'static,
    {
        self.header_click = HeaderClick::Handler(Arc::new(handler));
        self
    }

    /// Never render this header as a sort label.
    pub fn disable_header_click(mut self) -> Self {
        self.header_click = HeaderClick::Disabled;
        self
    }

    /// Render data cells with a custom function of the row.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value) -> String + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Attach per-column cell props (static [`CellProps`](crate::CellProps)
    /// or a closure over [`CellContext`](crate::CellContext)).
    pub fn cell_props<P>(mut self, props: P) -> Self
    where
        P: CellPropsProducer + 'static,
    {
        self.cell_props = Some(Arc::new(props));
        self
    }

    /// Whether this column shares leftover space (declares no width).
    pub fn is_variable(&self) -> bool {
        self.width.is_none()
    }

    /// The minimum width, or 0 when unset.
    pub fn floor(&self) -> f64 {
        self.min_width.unwrap_or(0.0).max(0.0)
    }

    /// The text shown in the header row.
    pub fn label(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.name)
    }

    /// Whether the table's `order_by` key designates this column.
    pub fn matches_order_by(&self, key: &str) -> bool {
        self.name == key || self.order_by.as_deref() == Some(key)
    }
}

/// Shorthand constructors for columns.
///
/// ```rust
/// use gridtable::Col;
///
/// let id = Col::px("id", 80.0);
/// let name = Col::percent("name", 40.0).min_width(120.0);
/// let notes = Col::variable("notes");
/// ```
pub struct Col;

impl Col {
    /// A fixed pixel-width column.
    pub fn px(name: impl Into<String>, width: f64) -> ColumnSpec {
        ColumnSpec::new(name).px(width)
    }

    /// A percentage-width column.
    pub fn percent(name: impl Into<String>, pct: f64) -> ColumnSpec {
        ColumnSpec::new(name).percent(pct)
    }

    /// A column sharing leftover space.
    pub fn variable(name: impl Into<String>) -> ColumnSpec {
        ColumnSpec::new(name)
    }
}
