//! Width resolution algorithm for table columns.
//!
//! Columns that declare a width (pixels or a percentage of the table) are
//! deterministic and never affected by their siblings. Columns without a
//! width share whatever is left, with one refinement: a variable column whose
//! `min_width` beats the naive even share is pinned to its minimum, and the
//! remaining variable columns split what is left after that.
//!
//! This is a single-pass, two-tier redistribution rather than a fixed-point
//! solver. Widths stay `f64` throughout; rounding belongs to whoever applies
//! them to pixels or characters.

use crate::column::ColumnSpec;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedWidths {
    /// Width for each column, in declaration order.
    pub widths: Vec<f64>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.widths.get(index).copied()
    }

    /// Sum of all column widths.
    pub fn total(&self) -> f64 {
        self.widths.iter().sum()
    }

    /// How far the columns overflow `total_width` (0 when they fit).
    pub fn overflow(&self, total_width: f64) -> f64 {
        (self.total() - total_width).max(0.0)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Iterate over the widths in column order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.widths.iter().copied()
    }
}

/// Resolve the width of a single column.
///
/// Pure and order-independent: each call recomputes the allocation from
/// `columns` and `total_width`, so columns may be queried in any order.
/// An out-of-range `index` resolves to 0.
pub fn resolve_width(index: usize, columns: &[ColumnSpec], total_width: f64) -> f64 {
    match columns.get(index) {
        Some(column) => Allocation::new(columns, total_width).width_of(column),
        None => 0.0,
    }
}

/// Resolve the widths of every column at once.
pub fn resolve_widths(columns: &[ColumnSpec], total_width: f64) -> ResolvedWidths {
    let allocation = Allocation::new(columns, total_width);
    ResolvedWidths {
        widths: columns.iter().map(|c| allocation.width_of(c)).collect(),
    }
}

/// Totals shared by every column of one (columns, total width) pair.
#[derive(Clone, Copy, Debug)]
struct Allocation {
    total_width: f64,
    /// Sum of the deterministic (declared) widths.
    allocated: f64,
    variable_count: usize,
    /// Even split of the leftover space before minimums are considered.
    initial_share: f64,
    /// Variable columns whose minimum beats `initial_share`.
    pinned_count: usize,
    pinned_min_width: f64,
}

impl Allocation {
    fn new(columns: &[ColumnSpec], total_width: f64) -> Self {
        let mut allocated = 0.0;
        let mut variable_count = 0;
        for column in columns {
            match &column.width {
                Some(width) => allocated += width.deterministic(total_width, column.floor()),
                None => variable_count += 1,
            }
        }

        let initial_share = if variable_count == 0 {
            0.0
        } else {
            (total_width - allocated) / variable_count as f64
        };

        let mut pinned_count = 0;
        let mut pinned_min_width = 0.0;
        for column in columns.iter().filter(|c| c.is_variable()) {
            if column.floor() > initial_share {
                pinned_count += 1;
                pinned_min_width += column.floor();
            }
        }

        Allocation {
            total_width,
            allocated,
            variable_count,
            initial_share,
            pinned_count,
            pinned_min_width,
        }
    }

    fn width_of(&self, column: &ColumnSpec) -> f64 {
        if let Some(width) = &column.width {
            return width.deterministic(self.total_width, column.floor());
        }

        let floor = column.floor();
        if floor > self.initial_share {
            return floor;
        }

        // Every variable column pinned: nothing left to redistribute.
        let unpinned = self.variable_count - self.pinned_count;
        if unpinned == 0 {
            return floor;
        }

        let share =
            (self.total_width - self.allocated - self.pinned_min_width) / unpinned as f64;
        floor.max(share).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Col, ColumnSpec};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn resolve_empty_columns() {
        let resolved = resolve_widths(&[], 500.0);
        assert!(resolved.is_empty());
        assert_eq!(resolve_width(0, &[], 500.0), 0.0);
    }

    #[test]
    fn single_column_fills_table() {
        let columns = vec![Col::variable("name")];
        assert_eq!(resolve_width(0, &columns, 500.0), 500.0);
    }

    #[test]
    fn two_columns_split_equally() {
        let columns = vec![Col::variable("first"), Col::variable("last")];
        assert_eq!(resolve_width(0, &columns, 500.0), 250.0);
        assert_eq!(resolve_width(1, &columns, 500.0), 250.0);
    }

    #[test]
    fn three_columns_split_equally() {
        let columns = vec![
            Col::variable("first"),
            Col::variable("middle"),
            Col::variable("last"),
        ];
        for i in 0..3 {
            assert_eq!(resolve_width(i, &columns, 500.0), 500.0 / 3.0);
        }
    }

    #[test]
    fn fixed_column_leaves_rest_to_variable_columns() {
        let columns = vec![
            Col::px("first", 100.0),
            Col::variable("middle"),
            Col::variable("last"),
        ];
        let resolved = resolve_widths(&columns, 500.0);
        assert_eq!(resolved.widths, vec![100.0, 200.0, 200.0]);
        assert_eq!(resolved.total(), 500.0);
    }

    #[test]
    fn multiple_fixed_columns() {
        let columns = vec![
            Col::px("first", 100.0),
            Col::px("middle", 100.0),
            Col::variable("last"),
        ];
        let resolved = resolve_widths(&columns, 500.0);
        assert_eq!(resolved.widths, vec![100.0, 100.0, 300.0]);
    }

    #[test]
    fn min_width_below_share_is_inert() {
        let columns = vec![
            Col::variable("first").min_width(100.0),
            Col::variable("middle"),
            Col::variable("last"),
        ];
        for i in 0..3 {
            assert_eq!(resolve_width(i, &columns, 500.0), 500.0 / 3.0);
        }
    }

    #[test]
    fn min_width_above_share_is_pinned() {
        let columns = vec![
            Col::variable("first").min_width(100.0),
            Col::variable("middle"),
            Col::variable("last"),
        ];
        let resolved = resolve_widths(&columns, 200.0);
        assert_eq!(resolved.widths, vec![100.0, 50.0, 50.0]);
    }

    #[test]
    fn every_variable_column_pinned() {
        let columns = vec![
            Col::variable("a").min_width(300.0),
            Col::variable("b").min_width(400.0),
        ];
        let resolved = resolve_widths(&columns, 500.0);
        assert_eq!(resolved.widths, vec![300.0, 400.0]);
        assert!(resolved.iter().all(f64::is_finite));
        assert_eq!(resolved.overflow(500.0), 200.0);
    }

    #[test]
    fn percentage_is_relative_to_total_width() {
        let columns = vec![
            Col::percent("a", 40.0),
            Col::percent("b", 40.0),
            Col::percent("c", 40.0),
        ];
        let resolved = resolve_widths(&columns, 500.0);
        assert_eq!(resolved.widths, vec![200.0, 200.0, 200.0]);
        assert_eq!(resolved.overflow(500.0), 100.0);
    }

    #[test]
    fn percentage_is_clamped_by_min_width() {
        let columns = vec![Col::percent("a", 10.0).min_width(80.0), Col::variable("b")];
        let resolved = resolve_widths(&columns, 500.0);
        assert_eq!(resolved.widths, vec![80.0, 420.0]);
    }

    #[test]
    fn percentage_and_fixed_mix() {
        let columns = vec![
            Col::px("id", 60.0),
            Col::percent("title", 50.0),
            Col::variable("notes"),
            Col::variable("tags"),
        ];
        // 800 - 60 - 400 = 340 left for two variable columns
        let resolved = resolve_widths(&columns, 800.0);
        assert_eq!(resolved.widths, vec![60.0, 400.0, 170.0, 170.0]);
    }

    #[test]
    fn floors_exceeding_total_overflow() {
        let columns = vec![
            Col::px("a", 300.0),
            Col::px("b", 300.0),
            Col::variable("c").min_width(50.0),
            Col::variable("d"),
        ];
        let resolved = resolve_widths(&columns, 500.0);
        assert_eq!(resolved.widths, vec![300.0, 300.0, 50.0, 0.0]);
        assert_eq!(resolved.overflow(500.0), 150.0);
    }

    #[test]
    fn zero_and_negative_total_width_are_non_negative() {
        let columns = vec![
            Col::variable("a"),
            Col::percent("b", 30.0),
            Col::variable("c").min_width(10.0),
        ];
        for total in [0.0, -200.0] {
            let resolved = resolve_widths(&columns, total);
            assert!(resolved.iter().all(|w| w >= 0.0), "{:?}", resolved);
            assert_eq!(resolved.get(2), Some(10.0));
        }
    }

    #[test]
    fn single_column_matches_bulk_resolution() {
        let columns = vec![
            Col::px("a", 75.0),
            Col::variable("b").min_width(220.0),
            Col::percent("c", 15.0),
            Col::variable("d"),
            Col::variable("e").min_width(5.0),
        ];
        let resolved = resolve_widths(&columns, 640.0);
        for (i, width) in resolved.iter().enumerate() {
            assert!(approx(resolve_width(i, &columns, 640.0), width));
        }
    }

    #[test]
    fn out_of_range_index_is_zero() {
        let columns = vec![ColumnSpec::new("only")];
        assert_eq!(resolve_width(3, &columns, 500.0), 0.0);
    }

    #[test]
    fn resolved_widths_accessors() {
        let resolved = ResolvedWidths {
            widths: vec![10.0, 20.0, 30.0],
        };

        assert_eq!(resolved.get(0), Some(10.0));
        assert_eq!(resolved.get(2), Some(30.0));
        assert_eq!(resolved.get(3), None);
        assert_eq!(resolved.total(), 60.0);
        assert_eq!(resolved.overflow(100.0), 0.0);
        assert_eq!(resolved.len(), 3);
        assert!(!resolved.is_empty());
    }
}
