//! The table component: columns, rows and interaction state in front of a
//! virtualization grid.
//!
//! # Example
//!
//! ```rust
//! use gridtable::{Col, SortDirection, VirtualTable};
//! use serde_json::json;
//!
//! let mut table = VirtualTable::builder(600.0)
//!     .columns([Col::px("id", 100.0), Col::variable("name"), Col::variable("email")])
//!     .data(vec![
//!         json!({"id": 1, "name": "Ada", "email": "ada@example.com"}),
//!         json!({"id": 2, "name": "Grace", "email": "grace@example.com"}),
//!     ])
//!     .include_headers(true)
//!     .order_by("name", SortDirection::Asc)
//!     .on_header_click(|click| println!("sort by {}", click.column.name))
//!     .build();
//!
//! assert_eq!(table.column_width(0), 100.0);
//! assert_eq!(table.column_width(1), 250.0);
//!
//! let header = table.render_cell(0, 1).unwrap();
//! assert_eq!(header.content, "name");
//! assert!(header.sort_label.unwrap().active);
//!
//! let cell = table.render_cell(2, 1).unwrap();
//! assert_eq!(cell.content, "Grace");
//! assert!(cell.state.last_row);
//!
//! table.set_hovered(1, 2);
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::cell::{
    extract_value, CellContext, CellPropsProducer, CellState, RenderedCell, SortLabel,
};
use crate::column::{ColumnSpec, HeaderClick};
use crate::config::{PaginationConfig, SortDirection, TableConfig};
use crate::error::{Result, TableError};
use crate::event::{CellClick, ClickHandler, ClickKind};
use crate::grid::Grid;
use crate::layout::GridProps;
use crate::resolve::ResolvedWidths;
use crate::sizing::{ColumnSizer, ColumnWidthContext, ColumnWidthOverride};

/// Row used for header cells and for rows past the end of the data.
static EMPTY_ROW: Value = Value::Null;

/// Predicate over a cell, used for hover, selection and disabled states.
pub type CellPredicate = Arc<dyn Fn(&CellContext<'_>) -> bool>;

/// Callbacks and per-cell capabilities supplied by the host.
#[derive(Clone, Default)]
pub struct TableHandlers {
    pub on_cell_click: Option<ClickHandler>,
    pub on_cell_double_click: Option<ClickHandler>,
    pub on_cell_context_menu: Option<ClickHandler>,
    /// Header click handler shared by columns that don't override it.
    pub on_header_click: Option<ClickHandler>,
    /// Decides which cells highlight while another cell is hovered.
    pub is_cell_hovered: Option<CellPredicate>,
    pub is_cell_selected: Option<CellPredicate>,
    pub is_cell_disabled: Option<CellPredicate>,
    /// Default cell props, overlaid by each column's own props.
    pub cell_props: Option<Arc<dyn CellPropsProducer>>,
}

impl TableHandlers {
    fn data_click_handler(&self, kind: ClickKind) -> Option<&ClickHandler> {
        match kind {
            ClickKind::Click => self.on_cell_click.as_ref(),
            ClickKind::DoubleClick => self.on_cell_double_click.as_ref(),
            ClickKind::ContextMenu => self.on_cell_context_menu.as_ref(),
        }
    }

    fn has_data_click(&self) -> bool {
        self.on_cell_click.is_some()
            || self.on_cell_double_click.is_some()
            || self.on_cell_context_menu.is_some()
    }

    fn header_click_handler<'a>(&'a self, column: &'a ColumnSpec) -> Option<&'a ClickHandler> {
        match &column.header_click {
            HeaderClick::Disabled => None,
            HeaderClick::Handler(handler) => Some(handler),
            HeaderClick::Inherit => self.on_header_click.as_ref(),
        }
    }

    fn check(predicate: &Option<CellPredicate>, ctx: &CellContext<'_>) -> bool {
        predicate.as_ref().is_some_and(|p| p(ctx))
    }
}

/// The cell currently under the pointer, in grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoveredCell {
    pub column_index: usize,
    pub row_index: usize,
}

/// A table presented through an external virtualization grid.
///
/// Owns its configuration, columns, rows, hover state and column sizing.
/// Every change that can affect sizing calls
/// [`Grid::recompute_grid_size`] on the attached grid before returning.
pub struct VirtualTable {
    config: TableConfig,
    columns: Vec<ColumnSpec>,
    data: Vec<Value>,
    handlers: TableHandlers,
    sizer: ColumnSizer,
    hovered: Option<HoveredCell>,
    grid: Option<Box<dyn Grid>>,
}

impl fmt::Debug for VirtualTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualTable")
            .field("config", &self.config)
            .field("columns", &self.columns)
            .field("rows", &self.data.len())
            .field("sizer", &self.sizer)
            .field("hovered", &self.hovered)
            .field("grid", &self.grid.is_some())
            .finish_non_exhaustive()
    }
}

impl VirtualTable {
    /// Start building a table `width` pixels wide.
    pub fn builder(width: f64) -> VirtualTableBuilder {
        VirtualTableBuilder::new(TableConfig::new(width))
    }

    /// Start building a table from an existing configuration.
    pub fn from_config(config: TableConfig) -> VirtualTableBuilder {
        VirtualTableBuilder::new(config)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn sizer(&self) -> &ColumnSizer {
        &self.sizer
    }

    pub fn hovered(&self) -> Option<HoveredCell> {
        self.hovered
    }

    /// Number of grid rows, header row included.
    pub fn row_count(&self) -> usize {
        self.data.len() + usize::from(self.config.include_headers)
    }

    /// Width of the column at `index`, as the grid should size it.
    pub fn column_width(&self, index: usize) -> f64 {
        self.sizer
            .column_width(index, &self.columns, self.config.width)
    }

    /// Widths of all columns under the active strategy.
    pub fn column_widths(&self) -> ResolvedWidths {
        ResolvedWidths {
            widths: (0..self.columns.len()).map(|i| self.column_width(i)).collect(),
        }
    }

    /// Props for the grid and its container.
    pub fn grid_props(&self) -> GridProps {
        GridProps::compute(&self.config, self.data.len(), self.columns.len())
    }

    fn is_header_row(&self, row_index: usize) -> bool {
        self.config.include_headers && row_index == 0
    }

    /// Data index for a grid row, `None` for the header row.
    fn data_index(&self, row_index: usize) -> Option<usize> {
        if self.is_header_row(row_index) {
            None
        } else {
            Some(row_index - usize::from(self.config.include_headers))
        }
    }

    fn row_at(&self, row_index: usize) -> &Value {
        self.data_index(row_index)
            .and_then(|i| self.data.get(i))
            .unwrap_or(&EMPTY_ROW)
    }

    fn hover_target(&self) -> (Option<&ColumnSpec>, Option<&Value>) {
        match self.hovered {
            Some(hovered) => match self.columns.get(hovered.column_index) {
                Some(column) => (Some(column), Some(self.row_at(hovered.row_index))),
                None => (None, None),
            },
            None => (None, None),
        }
    }

    /// Describe the cell at grid position `(row_index, column_index)`.
    ///
    /// Returns `None` for a column index past the last column. Rows past the
    /// end of the data render against an empty row.
    pub fn render_cell(&self, row_index: usize, column_index: usize) -> Option<RenderedCell> {
        let column = self.columns.get(column_index)?;
        let is_header = self.is_header_row(row_index);
        let data_index = self.data_index(row_index);
        let row = self.row_at(row_index);
        let (hovered_column, hovered_row) = self.hover_target();

        let ctx = CellContext {
            column,
            row,
            hovered_column,
            hovered_row,
        };

        let default_props = self
            .handlers
            .cell_props
            .as_ref()
            .map(|p| p.cell_props(&ctx))
            .unwrap_or_default();
        let props = match &column.cell_props {
            Some(column_props) => default_props.merge(column_props.cell_props(&ctx)),
            None => default_props,
        };

        let content = if is_header {
            column.label().to_string()
        } else if let Some(render) = &column.cell {
            render(row)
        } else {
            extract_value(row, &column.name)
        };

        let hovered = hovered_column.is_some()
            && hovered_row.is_some()
            && TableHandlers::check(&self.handlers.is_cell_hovered, &ctx);

        let state = CellState {
            header: is_header,
            clickable: !is_header && self.handlers.has_data_click(),
            hovered,
            selected: TableHandlers::check(&self.handlers.is_cell_selected, &ctx),
            disabled: TableHandlers::check(&self.handlers.is_cell_disabled, &ctx),
            last_column: column_index + 1 == self.columns.len(),
            last_row: !self.data.is_empty() && data_index == Some(self.data.len() - 1),
        };

        let sort_label = if is_header && self.handlers.header_click_handler(column).is_some() {
            Some(SortLabel {
                active: self
                    .config
                    .order_by
                    .as_deref()
                    .is_some_and(|key| column.matches_order_by(key)),
                direction: self.config.order_direction,
            })
        } else {
            None
        };

        Some(RenderedCell {
            row_index,
            column_index,
            content,
            state,
            props,
            sort_label,
            drag_handle: is_header
                && self.sizer.is_resizable()
                && column_index + 1 < self.columns.len(),
        })
    }

    /// Route a click at grid position `(row_index, column_index)` to its
    /// handler. Returns whether a handler ran.
    ///
    /// Header cells only react to primary clicks, using the column's own
    /// handler before the table's.
    pub fn click(&self, row_index: usize, column_index: usize, kind: ClickKind) -> bool {
        let Some(column) = self.columns.get(column_index) else {
            return false;
        };

        let (handler, row_data) = if self.is_header_row(row_index) {
            if kind != ClickKind::Click {
                return false;
            }
            (self.handlers.header_click_handler(column), None)
        } else {
            (
                self.handlers.data_click_handler(kind),
                Some(self.row_at(row_index)),
            )
        };

        match handler {
            Some(handler) => {
                handler(&CellClick {
                    kind,
                    column,
                    row_data,
                    data: &self.data,
                });
                true
            }
            None => false,
        }
    }

    /// Mark the cell under the pointer.
    pub fn set_hovered(&mut self, column_index: usize, row_index: usize) {
        let hovered = Some(HoveredCell {
            column_index,
            row_index,
        });
        if self.hovered != hovered {
            self.hovered = hovered;
            self.relayout();
        }
    }

    /// The pointer left the table.
    pub fn clear_hovered(&mut self) {
        if self.hovered.take().is_some() {
            self.relayout();
        }
    }

    /// Apply one drag-move event from the resize handle right of
    /// `column_name`. Returns the fractional delta actually applied.
    pub fn drag(&mut self, column_name: &str, delta_px: f64) -> Result<f64> {
        let store = self.sizer.store_mut().ok_or(TableError::ResizeDisabled)?;
        let applied = store.apply_drag(&self.columns, column_name, delta_px, self.config.width)?;
        self.relayout();
        Ok(applied)
    }

    /// Replace the column list. A resizable table re-seeds its fractions
    /// when the column names changed.
    pub fn set_columns(&mut self, columns: Vec<ColumnSpec>) {
        if let Some(store) = self.sizer.store_mut() {
            store.sync_columns(&columns);
        }
        self.columns = columns;
        self.relayout();
    }

    pub fn set_data(&mut self, data: Vec<Value>) {
        self.data = data;
        self.relayout();
    }

    pub fn set_width(&mut self, width: f64) {
        self.config.width = width;
        self.relayout();
    }

    pub fn set_height(&mut self, height: Option<f64>) {
        self.config.height = height;
        self.relayout();
    }

    /// Change the active sort shown on header labels.
    pub fn set_order(&mut self, order_by: Option<String>, direction: SortDirection) {
        self.config.order_by = order_by;
        self.config.order_direction = direction;
    }

    /// Attach the grid that receives re-layout signals.
    pub fn attach_grid<G: Grid + 'static>(&mut self, grid: G) {
        self.grid = Some(Box::new(grid));
    }

    fn relayout(&mut self) {
        trace!("recomputing grid size");
        if let Some(grid) = self.grid.as_mut() {
            grid.recompute_grid_size();
        }
    }
}

/// Builder for [`VirtualTable`].
pub struct VirtualTableBuilder {
    config: TableConfig,
    columns: Vec<ColumnSpec>,
    data: Vec<Value>,
    handlers: TableHandlers,
    column_width: Option<ColumnWidthOverride>,
    grid: Option<Box<dyn Grid>>,
}

impl VirtualTableBuilder {
    fn new(config: TableConfig) -> Self {
        VirtualTableBuilder {
            config,
            columns: Vec::new(),
            data: Vec::new(),
            handlers: TableHandlers::default(),
            column_width: None,
            grid: None,
        }
    }

    /// Add a column.
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns.
    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnSpec>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Set the rows.
    pub fn data(mut self, data: Vec<Value>) -> Self {
        self.data = data;
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.config.height = Some(height);
        self
    }

    pub fn max_height(mut self, max_height: f64) -> Self {
        self.config.max_height = Some(max_height);
        self
    }

    pub fn row_height(mut self, row_height: f64) -> Self {
        self.config.row_height = row_height;
        self
    }

    pub fn include_headers(mut self, include: bool) -> Self {
        self.config.include_headers = include;
        self
    }

    pub fn fixed_row_count(mut self, count: usize) -> Self {
        self.config.fixed_row_count = count;
        self
    }

    pub fn fixed_column_count(mut self, count: usize) -> Self {
        self.config.fixed_column_count = count;
        self
    }

    pub fn fit_height_to_rows(mut self, fit: bool) -> Self {
        self.config.fit_height_to_rows = fit;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.config.resizable = resizable;
        self
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.config.pagination = Some(pagination);
        self
    }

    pub fn order_by(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.config.order_by = Some(key.into());
        self.config.order_direction = direction;
        self
    }

    /// Compute column widths with a custom function, overriding both
    /// built-in strategies.
    pub fn column_width_fn<F>(mut self, width_fn: F) -> Self
    where
        F: Fn(&ColumnWidthContext<'_>) -> f64 + 'static,
    {
        self.column_width = Some(ColumnWidthOverride::Custom(Arc::new(width_fn)));
        self
    }

    pub fn on_cell_click<F: Fn(&CellClick<'_>) + 'static>(mut self, handler: F) -> Self {
        self.handlers.on_cell_click = Some(Arc::new(handler));
        self
    }

    pub fn on_cell_double_click<F: Fn(&CellClick<'_>) + 'static>(mut self, handler: F) -> Self {
        self.handlers.on_cell_double_click = Some(Arc::new(handler));
        self
    }

    pub fn on_cell_context_menu<F: Fn(&CellClick<'_>) + 'static>(mut self, handler: F) -> Self {
        self.handlers.on_cell_context_menu = Some(Arc::new(handler));
        self
    }

    pub fn on_header_click<F: Fn(&CellClick<'_>) + 'static>(mut self, handler: F) -> Self {
        self.handlers.on_header_click = Some(Arc::new(handler));
        self
    }

    pub fn is_cell_hovered<F: Fn(&CellContext<'_>) -> bool + 'static>(mut self, f: F) -> Self {
        self.handlers.is_cell_hovered = Some(Arc::new(f));
        self
    }

    pub fn is_cell_selected<F: Fn(&CellContext<'_>) -> bool + 'static>(mut self, f: F) -> Self {
        self.handlers.is_cell_selected = Some(Arc::new(f));
        self
    }

    pub fn is_cell_disabled<F: Fn(&CellContext<'_>) -> bool + 'static>(mut self, f: F) -> Self {
        self.handlers.is_cell_disabled = Some(Arc::new(f));
        self
    }

    /// Default cell props for every cell.
    pub fn cell_props<P: CellPropsProducer + 'static>(mut self, props: P) -> Self {
        self.handlers.cell_props = Some(Arc::new(props));
        self
    }

    /// Replace all handlers at once.
    pub fn handlers(mut self, handlers: TableHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Attach the grid that receives re-layout signals.
    pub fn grid<G: Grid + 'static>(mut self, grid: G) -> Self {
        self.grid = Some(Box::new(grid));
        self
    }

    pub fn build(self) -> VirtualTable {
        let mut sizer = if self.config.resizable {
            ColumnSizer::resizable(&self.columns)
        } else {
            ColumnSizer::resolved()
        };

        let override_width = self
            .column_width
            .or_else(|| self.config.column_width.map(ColumnWidthOverride::Static));
        if let Some(override_width) = override_width {
            sizer = sizer.with_override(override_width);
        }

        debug!(
            columns = self.columns.len(),
            rows = self.data.len(),
            resizable = self.config.resizable,
            custom_widths = sizer.has_override(),
            "built table"
        );

        VirtualTable {
            config: self.config,
            columns: self.columns,
            data: self.data,
            handlers: self.handlers,
            sizer,
            hovered: None,
            grid: self.grid,
        }
    }
}
