//! The virtualization grid the table drives.
//!
//! The grid itself lives outside this crate. It pulls cell content and column
//! widths from the table and caches its measurements; the table tells it when
//! those caches are stale.

/// A virtualized grid that caches column and row measurements.
pub trait Grid {
    /// Drop cached measurements and lay out again.
    ///
    /// Called synchronously after every state change that can affect sizing.
    fn recompute_grid_size(&mut self);
}

impl<F: FnMut()> Grid for F {
    fn recompute_grid_size(&mut self) {
        self()
    }
}
