//! Gridtable - column layout and cell descriptions for virtualized tables.
//!
//! Gridtable sits between tabular data and an external virtualization grid
//! (anything that asks "how wide is column `i`?" and "what goes in cell
//! `(row, column)`?"). It provides:
//!
//! - A pure width resolver for fixed-pixel, percentage, min-width and
//!   variable columns
//! - A resizable mode where columns own fractions of the table and drag
//!   handles move width between neighbors
//! - Cell descriptions with header, hover, selection, sort and resize state
//! - Grid sizing props (height, frozen rows and columns, pagination footer)
//! - Table configuration loadable from YAML or JSON
//!
//! # Quick Start
//!
//! ```rust
//! use gridtable::{resolve_widths, Col};
//!
//! let columns = vec![
//!     Col::px("id", 100.0),
//!     Col::percent("title", 30.0),
//!     Col::variable("notes").min_width(450.0),
//!     Col::variable("description"),
//! ];
//!
//! let resolved = resolve_widths(&columns, 1000.0);
//! assert_eq!(resolved.widths, vec![100.0, 300.0, 450.0, 150.0]);
//! ```
//!
//! # Width Allocation
//!
//! Declared widths are deterministic: `px` columns keep their pixels and
//! `percent` columns take their share of the total, both raised to
//! `min_width` when it is larger. Variable columns split what is left:
//!
//! ```text
//! initial_share = (total - declared) / variable_count
//! pinned        = variable columns with min_width > initial_share
//! share         = (total - declared - sum(pinned min widths)) / unpinned_count
//! width         = max(min_width, share, 0)
//! ```
//!
//! Widths are never negative, but may sum to more than the table width when
//! declared widths or minimums exceed it. The grid scrolls horizontally then.
//!
//! # Resizing
//!
//! With `resizable: true` the resolver is bypassed. Each column gets a
//! fraction of the table (declared columns 0.1 each, variable columns an even
//! split of the rest) and [`VirtualTable::drag`] moves width from the column
//! right of the handle to the column left of it:
//!
//! ```rust
//! use gridtable::{Col, VirtualTable};
//!
//! let mut table = VirtualTable::builder(400.0)
//!     .columns([Col::variable("a"), Col::variable("b")])
//!     .resizable(true)
//!     .build();
//!
//! table.drag("a", 40.0)?;
//! assert!((table.column_width(0) - 240.0).abs() < 1e-9);
//! assert!((table.column_width(1) - 160.0).abs() < 1e-9);
//! # Ok::<(), gridtable::TableError>(())
//! ```
//!
//! # Re-layout
//!
//! The grid caches measurements. Attach it with [`VirtualTable::attach_grid`]
//! (any `FnMut()` works) and the table calls
//! [`Grid::recompute_grid_size`] after every change that can affect sizing.

mod cell;
mod column;
mod config;
mod error;
mod event;
mod grid;
mod layout;
mod preview;
mod resize;
mod resolve;
mod sizing;
mod table;
mod util;

pub use cell::{
    extract_value, CellContext, CellProps, CellPropsProducer, CellState, RenderedCell, SortLabel,
};
pub use column::{CellRenderer, Col, ColumnSpec, ColumnWidth, HeaderClick};
pub use config::{
    PaginationConfig, SortDirection, TableConfig, DEFAULT_FOOTER_HEIGHT, DEFAULT_ROW_HEIGHT,
    FOOTER_BORDER_HEIGHT,
};
pub use error::{Result, TableError};
pub use event::{CellClick, ClickHandler, ClickKind};
pub use grid::Grid;
pub use layout::GridProps;
pub use preview::{char_widths, render_preview, PreviewOptions, DEFAULT_PX_PER_CHAR};
pub use resize::{ResizableWidths, EXPLICIT_WIDTH_FRACTION};
pub use resolve::{resolve_width, resolve_widths, ResolvedWidths};
pub use sizing::{ColumnSizer, ColumnWidthContext, ColumnWidthFn, ColumnWidthOverride};
pub use table::{CellPredicate, HoveredCell, TableHandlers, VirtualTable, VirtualTableBuilder};
pub use util::{display_width, fit, pad_right, truncate_end};
