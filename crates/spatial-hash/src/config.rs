//! World bounds, resolution, and the world-to-cell transform.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CellCoord, CellRange, GridError, GridResult};

/// A world axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Half-open world intervals `[min, max)` along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Bounds {
    #[must_use]
    pub const fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x.1 - self.x.0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y.1 - self.y.0
    }
}

/// Grid construction parameters.
///
/// ```
/// use spatial_hash::{Bounds, GridConfig};
///
/// let config = GridConfig::new(Bounds::new((0.0, 100.0), (0.0, 50.0)), (10, 5));
/// assert_eq!(config.cell_size(), (10.0, 10.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub bounds: Bounds,
    /// Number of cells along x and y.
    pub resolution: (u32, u32),
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::new((0.0, 800.0), (0.0, 600.0)),
            resolution: (10, 10),
        }
    }
}

impl GridConfig {
    #[must_use]
    pub const fn new(bounds: Bounds, resolution: (u32, u32)) -> Self {
        Self { bounds, resolution }
    }

    /// Check that both axes have a positive finite span and at least one cell.
    pub fn validate(&self) -> GridResult<()> {
        for (axis, (min, max)) in [(Axis::X, self.bounds.x), (Axis::Y, self.bounds.y)] {
            let span = max - min;
            if !span.is_finite() || span <= 0.0 {
                return Err(GridError::InvalidBounds { axis, min, max });
            }
        }

        if self.resolution.0 == 0 {
            return Err(GridError::ZeroResolution { axis: Axis::X });
        }
        if self.resolution.1 == 0 {
            return Err(GridError::ZeroResolution { axis: Axis::Y });
        }

        Ok(())
    }

    /// Width and height of one cell in world units.
    #[must_use]
    pub fn cell_size(&self) -> (f64, f64) {
        (
            self.bounds.width() / f64::from(self.resolution.0),
            self.bounds.height() / f64::from(self.resolution.1),
        )
    }

    /// Cell containing a world point.
    #[must_use]
    pub fn cell_of(&self, point: (f64, f64)) -> CellCoord {
        let (cell_w, cell_h) = self.cell_size();
        CellCoord::new(
            Self::floor_cell(point.0 - self.bounds.x.0, cell_w),
            Self::floor_cell(point.1 - self.bounds.y.0, cell_h),
        )
    }

    /// Inclusive range of cells overlapped by a rectangle.
    ///
    /// `center` is the rectangle's center and `extent` its full width and
    /// height. Edges lying exactly on a cell boundary count towards the cell
    /// on the far side, so an object touching a boundary occupies both cells.
    #[must_use]
    pub fn cell_range(&self, center: (f64, f64), extent: (f64, f64)) -> CellRange {
        let (half_w, half_h) = (extent.0 / 2.0, extent.1 / 2.0);
        CellRange::new(
            self.cell_of((center.0 - half_w, center.1 - half_h)),
            self.cell_of((center.0 + half_w, center.1 + half_h)),
        )
    }

    /// World rectangle `(min, max)` covered by a cell.
    #[must_use]
    pub fn cell_bounds(&self, cell: CellCoord) -> ((f64, f64), (f64, f64)) {
        let (cell_w, cell_h) = self.cell_size();
        let min = (
            self.bounds.x.0 + f64::from(cell.x) * cell_w,
            self.bounds.y.0 + f64::from(cell.y) * cell_h,
        );
        (min, (min.0 + cell_w, min.1 + cell_h))
    }

    /// Whether a cell lies inside `[0, nx) x [0, ny)`.
    #[must_use]
    pub fn contains_cell(&self, cell: CellCoord) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < self.resolution.0
            && (cell.y as u32) < self.resolution.1
    }

    /// Whether every cell of a range lies inside the grid.
    #[must_use]
    pub fn contains_range(&self, range: &CellRange) -> bool {
        self.contains_cell(range.min) && self.contains_cell(range.max)
    }

    // `as` saturates: far or infinite offsets clamp to the i32 limits and NaN
    // lands in cell 0.
    fn floor_cell(offset: f64, cell_size: f64) -> i32 {
        (offset / cell_size).floor() as i32
    }
}
