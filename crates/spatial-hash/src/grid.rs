//! Uniform spatial hash grid.

use hashbrown::hash_map::Entry;
use hashbrown::{HashMap, HashSet};
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::table::RecordTable;
use crate::{
    Bounds, CellCoord, CellKey, CellRange, GridConfig, GridError, GridResult, Handle, ObjectRecord,
};

/// Most cells a single object may occupy.
///
/// An object is pushed into every bucket it overlaps, so an unbounded extent
/// would never finish inserting. Queries have no such limit.
pub const MAX_OBJECT_CELLS: u64 = 1 << 16;

/// Handles registered in one cell.
type Bucket = SmallVec<[Handle; 4]>;

type CellMap = HashMap<CellKey, Bucket, FxBuildHasher>;

/// A 2D uniform grid of cell buckets over a fixed world rectangle.
///
/// Objects are axis-aligned rectangles described by a center and a full
/// extent. Each object is bucketed in every cell its rectangle overlaps, so
/// a query only has to visit the cells covered by the query window.
///
/// ```
/// use spatial_hash::{Bounds, SpatialHashGrid};
///
/// let mut grid = SpatialHashGrid::with_bounds(Bounds::new((0.0, 100.0), (0.0, 100.0)), (10, 10))?;
/// let a = grid.insert((50.0, 50.0), (10.0, 10.0), "a")?;
///
/// assert!(grid.query((50.0, 50.0), (10.0, 10.0)).contains(&a));
///
/// grid.update(a, (10.0, 10.0))?;
/// assert!(grid.query((50.0, 50.0), (10.0, 10.0)).is_empty());
///
/// grid.remove(a);
/// assert!(grid.is_empty());
/// # Ok::<(), spatial_hash::GridError>(())
/// ```
#[derive(Debug)]
pub struct SpatialHashGrid {
    config: GridConfig,
    cells: CellMap,
    records: RecordTable,
}

impl SpatialHashGrid {
    /// Create an empty grid.
    pub fn new(config: GridConfig) -> GridResult<Self> {
        config.validate()?;

        let (cell_w, cell_h) = config.cell_size();
        debug!(
            resolution = ?config.resolution,
            cell_w,
            cell_h,
            "created spatial hash grid"
        );

        Ok(Self {
            config,
            cells: CellMap::default(),
            records: RecordTable::new(),
        })
    }

    /// Create an empty grid from bounds and a cell count per axis.
    pub fn with_bounds(bounds: Bounds, resolution: (u32, u32)) -> GridResult<Self> {
        Self::new(GridConfig::new(bounds, resolution))
    }

    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Cells overlapped by a rectangle in this grid.
    #[must_use]
    pub fn cell_range(&self, center: (f64, f64), extent: (f64, f64)) -> CellRange {
        self.config.cell_range(center, extent)
    }

    /// Register a new object and return its handle.
    ///
    /// `extent` is the full width and height. A zero extent is allowed and
    /// occupies exactly one cell.
    pub fn insert(
        &mut self,
        center: (f64, f64),
        extent: (f64, f64),
        name: impl Into<String>,
    ) -> GridResult<Handle> {
        let range = self.object_range(center, extent)?;
        let name = name.into();

        let handle = self.records.insert_with(|handle| {
            let mut record = ObjectRecord::new(handle, name, center, extent);
            record.cells = Some(range);
            record
        });
        Self::link(&self.config, &mut self.cells, handle, range);

        trace!(%handle, %range, "inserted object");
        Ok(handle)
    }

    /// Move a registered object to a new center, keeping its extent.
    pub fn update(&mut self, handle: Handle, center: (f64, f64)) -> GridResult<()> {
        let extent = self
            .get(handle)
            .ok_or(GridError::NotRegistered(handle))?
            .extent();
        self.relocate(handle, center, extent)
    }

    /// Move a registered object and change its extent.
    pub fn update_with_extent(
        &mut self,
        handle: Handle,
        center: (f64, f64),
        extent: (f64, f64),
    ) -> GridResult<()> {
        self.relocate(handle, center, extent)
    }

    /// Remove an object from every cell it occupies.
    ///
    /// Returns the removed record with its cell range cleared. Removing a
    /// handle that is not registered does nothing and returns `None`.
    pub fn remove(&mut self, handle: Handle) -> Option<ObjectRecord> {
        let mut record = self.records.remove(handle)?;
        if let Some(range) = record.cells.take() {
            Self::unlink(&mut self.cells, handle, range);
        }

        trace!(%handle, name = record.name(), "removed object");
        Some(record)
    }

    /// Handles of every object bucketed in a cell overlapped by the query
    /// window.
    ///
    /// This is a cell-level candidate set: it contains every object that
    /// intersects the window, and possibly some that only share a cell with
    /// it. Use [`ObjectRecord::intersects`] to refine.
    #[must_use]
    pub fn query(&self, center: (f64, f64), extent: (f64, f64)) -> HashSet<Handle> {
        self.query_cells(self.config.cell_range(center, extent))
    }

    /// Handles bucketed in any cell of `range`.
    #[must_use]
    pub fn query_cells(&self, range: CellRange) -> HashSet<Handle> {
        let mut found = HashSet::new();

        // A window wider than the occupied area is cheaper to answer by
        // scanning the live buckets.
        if range.len() > self.cells.len() as u64 {
            for (&key, bucket) in &self.cells {
                if range.contains(CellCoord::from_key(key)) {
                    found.extend(bucket.iter().copied());
                }
            }
        } else {
            for cell in range.iter() {
                if let Some(bucket) = self.cells.get(&cell.to_key()) {
                    found.extend(bucket.iter().copied());
                }
            }
        }

        found
    }

    /// Records of the objects returned by [`SpatialHashGrid::query`].
    pub fn query_records(
        &self,
        center: (f64, f64),
        extent: (f64, f64),
    ) -> impl Iterator<Item = &ObjectRecord> + '_ {
        self.query(center, extent)
            .into_iter()
            .filter_map(move |handle| self.get(handle))
    }

    /// Record for a handle issued by this grid and not yet removed.
    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&ObjectRecord> {
        self.records.get(handle)
    }

    #[must_use]
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some_and(ObjectRecord::is_registered)
    }

    /// Number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.records().map(ObjectRecord::handle)
    }

    pub fn records(&self) -> impl Iterator<Item = &ObjectRecord> + '_ {
        self.records.iter()
    }

    /// Number of non-empty buckets currently stored.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of objects bucketed in one cell.
    #[must_use]
    pub fn bucket_len(&self, cell: CellCoord) -> usize {
        self.cells.get(&cell.to_key()).map_or(0, |bucket| bucket.len())
    }

    /// Iterate the non-empty buckets in no particular order.
    pub fn buckets(&self) -> impl Iterator<Item = (CellCoord, &[Handle])> + '_ {
        self.cells
            .iter()
            .map(|(&key, bucket)| (CellCoord::from_key(key), bucket.as_slice()))
    }

    /// Remove every object. Outstanding handles become stale.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.records.clear();
    }

    /// Validated cell range for an object rectangle.
    fn object_range(&self, center: (f64, f64), extent: (f64, f64)) -> GridResult<CellRange> {
        let (width, height) = extent;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(GridError::InvalidExtent { width, height });
        }

        let range = self.config.cell_range(center, extent);
        if range.len() > MAX_OBJECT_CELLS {
            return Err(GridError::TooManyCells { cells: range.len() });
        }
        Ok(range)
    }

    fn relocate(&mut self, handle: Handle, center: (f64, f64), extent: (f64, f64)) -> GridResult<()> {
        if self.records.get(handle).is_none() {
            return Err(GridError::NotRegistered(handle));
        }
        let range = self.object_range(center, extent)?;

        let Self {
            config,
            cells,
            records,
        } = self;

        let record = records
            .get_mut(handle)
            .ok_or(GridError::NotRegistered(handle))?;
        let old = record.cells.take().ok_or(GridError::NotRegistered(handle))?;

        // Leave through the cached range; the recorded position is not
        // trusted to still describe it.
        Self::unlink(cells, handle, old);
        Self::link(config, cells, handle, range);

        record.center = center;
        record.extent = extent;
        record.cells = Some(range);

        trace!(%handle, from = %old, to = %range, "moved object");
        Ok(())
    }

    fn link(config: &GridConfig, cells: &mut CellMap, handle: Handle, range: CellRange) {
        if !config.contains_range(&range) {
            trace!(%handle, %range, "object extends past world bounds");
        }

        for cell in range.iter() {
            cells.entry(cell.to_key()).or_default().push(handle);
        }
    }

    fn unlink(cells: &mut CellMap, handle: Handle, range: CellRange) {
        for cell in range.iter() {
            let Entry::Occupied(mut entry) = cells.entry(cell.to_key()) else {
                continue;
            };

            let bucket = entry.get_mut();
            if let Some(pos) = bucket.iter().position(|&h| h == handle) {
                bucket.swap_remove(pos);
            }
            if bucket.is_empty() {
                entry.remove();
            }
        }
    }
}
