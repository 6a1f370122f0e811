//! Proportional column widths adjusted by dragging.
//!
//! When a table is resizable, column widths stop coming from the resolver.
//! Instead each column owns a fraction of the table width, and dragging the
//! handle between two columns moves share from the right-hand column to the
//! left-hand one. Nothing else is touched by a drag, so an abandoned gesture
//! always leaves a consistent map.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::column::ColumnSpec;
use crate::error::{Result, TableError};

/// Share of the table given to each column that declares an explicit width.
pub const EXPLICIT_WIDTH_FRACTION: f64 = 0.1;

/// Fractional width map for a resizable table.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizableWidths {
    fractions: HashMap<String, f64>,
    /// Column names at seeding time, in order.
    seeded_for: Vec<String>,
}

impl ResizableWidths {
    /// Seed fractions from the initial columns.
    ///
    /// Columns with an explicit width get [`EXPLICIT_WIDTH_FRACTION`] each;
    /// the rest of the table is split evenly across the variable columns.
    pub fn new(columns: &[ColumnSpec]) -> Self {
        let mut fractions = HashMap::with_capacity(columns.len());
        let mut remaining = 1.0;
        let mut variable = Vec::new();

        for column in columns {
            if column.width.is_some() {
                fractions.insert(column.name.clone(), EXPLICIT_WIDTH_FRACTION);
                remaining -= EXPLICIT_WIDTH_FRACTION;
            } else {
                variable.push(column.name.clone());
            }
        }

        if !variable.is_empty() {
            let share = remaining / variable.len() as f64;
            for name in variable {
                fractions.insert(name, share);
            }
        }

        debug!(
            columns = columns.len(),
            remaining, "seeded resizable column widths"
        );

        ResizableWidths {
            fractions,
            seeded_for: columns.iter().map(|c| c.name.clone()).collect(),
        }
    }

    /// The fraction of the table width owned by `name`.
    pub fn fraction(&self, name: &str) -> Option<f64> {
        self.fractions.get(name).copied()
    }

    /// All fractions keyed by column name.
    pub fn fractions(&self) -> &HashMap<String, f64> {
        &self.fractions
    }

    /// Pixel width of the column at `index`.
    pub fn width(&self, index: usize, columns: &[ColumnSpec], total_width: f64) -> f64 {
        columns
            .get(index)
            .and_then(|c| self.fraction(&c.name))
            .map_or(0.0, |fraction| fraction * total_width)
    }

    /// Move `delta_px` worth of width from the column right of `name` to
    /// `name`.
    ///
    /// The transfer is clamped so that a shrinking column never drops below
    /// its `min_width`. Returns the fractional delta actually applied, which
    /// is 0 when the drag was fully absorbed by a floor or the table has no
    /// width.
    pub fn apply_drag(
        &mut self,
        columns: &[ColumnSpec],
        name: &str,
        delta_px: f64,
        total_width: f64,
    ) -> Result<f64> {
        let unknown = || {
            warn!(column = name, "drag on unknown column");
            TableError::UnknownColumn(name.to_string())
        };

        let index = columns.iter().position(|c| c.name == name).ok_or_else(unknown)?;
        let column = &columns[index];
        let neighbor = columns
            .get(index + 1)
            .ok_or_else(|| TableError::NoAdjacentColumn(name.to_string()))?;

        let current = self.fraction(&column.name).ok_or_else(unknown)?;
        let next = self
            .fraction(&neighbor.name)
            .ok_or_else(|| TableError::UnknownColumn(neighbor.name.clone()))?;

        if total_width <= 0.0 || !delta_px.is_finite() {
            return Ok(0.0);
        }

        let delta = delta_px / total_width;
        let applied = if delta < 0.0 {
            // Dragged column shrinks.
            let room = (current - column.floor() / total_width).max(0.0);
            delta.max(-room)
        } else {
            // Neighbor shrinks.
            let room = (next - neighbor.floor() / total_width).max(0.0);
            delta.min(room)
        };

        if applied != delta {
            trace!(column = name, requested = delta, applied, "drag clamped at min width");
        }
        if applied == 0.0 {
            return Ok(0.0);
        }

        self.fractions.insert(column.name.clone(), current + applied);
        self.fractions.insert(neighbor.name.clone(), next - applied);

        debug!(
            column = name,
            neighbor = neighbor.name.as_str(),
            delta = applied,
            "resized column"
        );
        Ok(applied)
    }

    /// Re-seed when the ordered list of column names changed since seeding.
    ///
    /// Returns whether a re-seed happened. An identical name list keeps the
    /// user's adjusted fractions.
    pub fn sync_columns(&mut self, columns: &[ColumnSpec]) -> bool {
        let unchanged = self.seeded_for.len() == columns.len()
            && self.seeded_for.iter().zip(columns).all(|(a, c)| *a == c.name);
        if unchanged {
            return false;
        }

        debug!("column list changed, re-seeding resizable widths");
        *self = ResizableWidths::new(columns);
        true
    }
}
