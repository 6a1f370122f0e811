//! Per-table choice of column width strategy.
//!
//! Exactly one strategy answers `column_width(index)` for a table instance,
//! picked by configuration and never blended:
//!
//! 1. a caller-supplied override (a function of the column, or a static
//!    width), when present;
//! 2. the [`ResizableWidths`] store, when the table is resizable;
//! 3. the stateless [`resolve_width`] allocation otherwise.

use std::fmt;
use std::sync::Arc;

use crate::column::ColumnSpec;
use crate::resize::ResizableWidths;
use crate::resolve::resolve_width;

/// Arguments passed to a custom column width function.
#[derive(Clone, Copy, Debug)]
pub struct ColumnWidthContext<'a> {
    pub index: usize,
    pub columns: &'a [ColumnSpec],
    /// Total table width.
    pub width: f64,
}

/// Caller-supplied column width function.
pub type ColumnWidthFn = Arc<dyn Fn(&ColumnWidthContext<'_>) -> f64>;

/// A caller override that takes precedence over both built-in strategies.
#[derive(Clone)]
pub enum ColumnWidthOverride {
    /// Same width for every column.
    Static(f64),
    /// Width computed by the caller.
    Custom(ColumnWidthFn),
}

impl fmt::Debug for ColumnWidthOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWidthOverride::Static(w) => f.debug_tuple("Static").field(w).finish(),
            ColumnWidthOverride::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Column width strategy for one table instance.
#[derive(Clone, Debug, Default)]
pub struct ColumnSizer {
    override_width: Option<ColumnWidthOverride>,
    resizable: Option<ResizableWidths>,
}

impl ColumnSizer {
    /// Stateless sizing through the width resolver.
    pub fn resolved() -> Self {
        Self::default()
    }

    /// Proportional sizing seeded from `columns`.
    pub fn resizable(columns: &[ColumnSpec]) -> Self {
        ColumnSizer {
            override_width: None,
            resizable: Some(ResizableWidths::new(columns)),
        }
    }

    /// Install a caller override.
    pub fn with_override(mut self, override_width: ColumnWidthOverride) -> Self {
        self.override_width = Some(override_width);
        self
    }

    /// The resize store, when resizing is enabled.
    pub fn store(&self) -> Option<&ResizableWidths> {
        self.resizable.as_ref()
    }

    /// Mutable access to the resize store, when resizing is enabled.
    pub fn store_mut(&mut self) -> Option<&mut ResizableWidths> {
        self.resizable.as_mut()
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable.is_some()
    }

    pub fn has_override(&self) -> bool {
        self.override_width.is_some()
    }

    /// Width of the column at `index` for a table `total_width` wide.
    pub fn column_width(&self, index: usize, columns: &[ColumnSpec], total_width: f64) -> f64 {
        match (&self.override_width, &self.resizable) {
            (Some(ColumnWidthOverride::Static(width)), _) => *width,
            (Some(ColumnWidthOverride::Custom(width_fn)), _) => width_fn(&ColumnWidthContext {
                index,
                columns,
                width: total_width,
            }),
            (None, Some(store)) => store.width(index, columns, total_width),
            (None, None) => resolve_width(index, columns, total_width),
        }
    }
}
