//! Per-object bookkeeping owned by the grid.

use crate::{CellRange, Handle};

/// One tracked object.
///
/// The handle and name never change. Position, extent and the cached cell
/// range are rewritten by the grid when the object moves. Records have no
/// equality of their own; compare their handles.
#[derive(Clone, Debug)]
pub struct ObjectRecord {
    handle: Handle,
    name: String,
    pub(crate) center: (f64, f64),
    pub(crate) extent: (f64, f64),
    /// Cells the object is currently bucketed in. `None` once removed.
    pub(crate) cells: Option<CellRange>,
}

impl ObjectRecord {
    pub(crate) fn new(handle: Handle, name: String, center: (f64, f64), extent: (f64, f64)) -> Self {
        Self {
            handle,
            name,
            center,
            extent,
            cells: None,
        }
    }

    #[must_use]
    pub const fn handle(&self) -> Handle {
        self.handle
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn center(&self) -> (f64, f64) {
        self.center
    }

    /// Full width and height.
    #[must_use]
    pub const fn extent(&self) -> (f64, f64) {
        self.extent
    }

    #[must_use]
    pub fn half_extent(&self) -> (f64, f64) {
        (self.extent.0 / 2.0, self.extent.1 / 2.0)
    }

    /// Cached occupied cell range, or `None` if the record is unregistered.
    #[must_use]
    pub const fn cells(&self) -> Option<CellRange> {
        self.cells
    }

    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.cells.is_some()
    }

    /// Axis-aligned overlap test against another rectangle, for callers
    /// refining the cell-level candidates a query returns.
    #[must_use]
    pub fn intersects(&self, center: (f64, f64), extent: (f64, f64)) -> bool {
        let (hw, hh) = self.half_extent();
        (self.center.0 - center.0).abs() <= hw + extent.0 / 2.0
            && (self.center.1 - center.1).abs() <= hh + extent.1 / 2.0
    }
}
