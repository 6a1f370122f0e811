//! Click events routed from the host's input layer to table handlers.

use std::sync::Arc;

use serde_json::Value;

use crate::column::ColumnSpec;

/// Kind of pointer interaction on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickKind {
    /// Primary button click.
    Click,
    /// Double click.
    DoubleClick,
    /// Secondary button (context menu) click.
    ContextMenu,
}

/// Payload passed to click handlers.
#[derive(Clone, Copy, Debug)]
pub struct CellClick<'a> {
    /// What kind of click occurred.
    pub kind: ClickKind,
    /// The column that was clicked.
    pub column: &'a ColumnSpec,
    /// The row under the pointer. `None` for header cells.
    pub row_data: Option<&'a Value>,
    /// All rows of the table.
    pub data: &'a [Value],
}

/// Handler invoked for cell and header clicks.
pub type ClickHandler = Arc<dyn Fn(&CellClick<'_>)>;
