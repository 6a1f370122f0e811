//! Cell descriptions handed to the grid's cell renderer.
//!
//! The table never produces markup. For every `(row, column)` the grid asks
//! about, it returns a [`RenderedCell`]: the text content, a set of boolean
//! states the host maps to its own styling, merged [`CellProps`], and the
//! header decorations (sort label, drag handle).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::ColumnSpec;
use crate::config::SortDirection;

/// Host-defined presentation properties for a cell.
///
/// `style` is replaced wholesale when a more specific source provides one;
/// `attributes` are merged key by key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl CellProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a style property.
    pub fn style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add an attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Overlay `other` on top of `self`.
    pub fn merge(mut self, other: CellProps) -> CellProps {
        if other.style.is_some() {
            self.style = other.style;
        }
        self.attributes.extend(other.attributes);
        self
    }
}

/// Everything a per-cell decision may depend on.
#[derive(Clone, Copy, Debug)]
pub struct CellContext<'a> {
    pub column: &'a ColumnSpec,
    pub row: &'a Value,
    pub hovered_column: Option<&'a ColumnSpec>,
    pub hovered_row: Option<&'a Value>,
}

/// Source of cell props: either static props or a function of the cell.
///
/// Implemented for [`CellProps`] itself and for any
/// `Fn(&CellContext) -> CellProps` closure.
pub trait CellPropsProducer {
    fn cell_props(&self, ctx: &CellContext<'_>) -> CellProps;
}

impl CellPropsProducer for CellProps {
    fn cell_props(&self, _ctx: &CellContext<'_>) -> CellProps {
        self.clone()
    }
}

impl<F> CellPropsProducer for F
where
    F: Fn(&CellContext<'_>) -> CellProps,
{
    fn cell_props(&self, ctx: &CellContext<'_>) -> CellProps {
        self(ctx)
    }
}

/// Boolean states of a rendered cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CellState {
    pub header: bool,
    pub clickable: bool,
    pub hovered: bool,
    pub selected: bool,
    pub disabled: bool,
    pub last_column: bool,
    pub last_row: bool,
}

/// Sort indicator shown on clickable header cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SortLabel {
    /// This column is the one the table is ordered by.
    pub active: bool,
    pub direction: SortDirection,
}

/// Description of one cell for the grid to draw.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedCell {
    pub row_index: usize,
    pub column_index: usize,
    pub content: String,
    pub state: CellState,
    pub props: CellProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_label: Option<SortLabel>,
    /// Header cell carries a resize handle for the column boundary on its right.
    pub drag_handle: bool,
}

/// Extract a display value from a row using dot notation (`"author.name"`).
///
/// Strings are returned as-is, null or missing fields as an empty string, and
/// other values as their JSON text.
pub fn extract_value(row: &Value, path: &str) -> String {
    let mut current = row;
    for part in path.split('.') {
        match current {
            Value::Object(map) => match map.get(part) {
                Some(next) => current = next,
                None => return String::new(),
            },
            _ => return String::new(),
        }
    }

    match current {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        v => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_replaces_style_and_merges_attributes() {
        let base = CellProps::new()
            .style("color", "gray")
            .style("padding", "4px")
            .attr("title", "base")
            .attr("role", "cell");
        let column = CellProps::new().style("color", "red").attr("title", "column");

        let merged = base.merge(column);
        let style = merged.style.unwrap();
        assert_eq!(style.get("color").map(String::as_str), Some("red"));
        assert!(!style.contains_key("padding"));
        assert_eq!(merged.attributes["title"], "column");
        assert_eq!(merged.attributes["role"], "cell");
    }

    #[test]
    fn merge_keeps_style_when_overlay_has_none() {
        let merged = CellProps::new()
            .style("color", "gray")
            .merge(CellProps::new().attr("x", "1"));
        assert!(merged.style.is_some());
    }

    #[test]
    fn static_and_dynamic_producers() {
        let column = ColumnSpec::new("status");
        let row = json!({"status": "late"});
        let ctx = CellContext {
            column: &column,
            row: &row,
            hovered_column: None,
            hovered_row: None,
        };

        let fixed = CellProps::new().attr("kind", "static");
        assert_eq!(fixed.cell_props(&ctx).attributes["kind"], "static");

        let dynamic = |ctx: &CellContext<'_>| {
            CellProps::new().attr("value", extract_value(ctx.row, &ctx.column.name))
        };
        assert_eq!(dynamic.cell_props(&ctx).attributes["value"], "late");
    }

    #[test]
    fn extract_nested_values() {
        let row = json!({
            "name": "Ada",
            "age": 36,
            "author": {"name": "Lovelace"},
            "missing": null
        });
        assert_eq!(extract_value(&row, "name"), "Ada");
        assert_eq!(extract_value(&row, "age"), "36");
        assert_eq!(extract_value(&row, "author.name"), "Lovelace");
        assert_eq!(extract_value(&row, "missing"), "");
        assert_eq!(extract_value(&row, "nope"), "");
        assert_eq!(extract_value(&row, "name.first"), "");
    }
}
