//! Cell coordinates and inclusive cell ranges.

use std::fmt;

/// Integer coordinate of one grid cell.
///
/// Coordinates are not bounded by the grid resolution: objects reaching
/// outside the world bounds map to negative or overflowing cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

/// Packed form of a [`CellCoord`] used as the cell map key.
pub type CellKey = u64;

impl CellCoord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pack both axes into one 64-bit key.
    #[must_use]
    pub const fn to_key(self) -> CellKey {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }

    /// Unpack a coordinate from a key built by [`CellCoord::to_key`].
    #[must_use]
    pub const fn from_key(key: CellKey) -> Self {
        Self {
            x: (key >> 32) as u32 as i32,
            y: key as u32 as i32,
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Inclusive rectangle of cell coordinates.
///
/// A range whose `min` exceeds `max` on either axis is empty. This happens
/// for query windows with a negative extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub min: CellCoord,
    pub max: CellCoord,
}

impl CellRange {
    #[must_use]
    pub const fn new(min: CellCoord, max: CellCoord) -> Self {
        Self { min, max }
    }

    /// Range covering a single cell.
    #[must_use]
    pub const fn single(cell: CellCoord) -> Self {
        Self {
            min: cell,
            max: cell,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Number of cells in the range, saturating at `u64::MAX`.
    ///
    /// A range spanning the whole `i32` plane on both axes holds 2^64 cells,
    /// one more than fits.
    #[must_use]
    pub const fn len(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let w = (self.max.x as i64 - self.min.x as i64 + 1) as u64;
        let h = (self.max.y as i64 - self.min.y as i64 + 1) as u64;
        w.saturating_mul(h)
    }

    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.y >= self.min.y && cell.y <= self.max.y
    }

    /// Iterate every cell in the range, row by row.
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| CellCoord::new(x, y)))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
