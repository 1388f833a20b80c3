//! Uniform spatial hash grid.
//!
//! Tracks movable axis-aligned rectangles in a fixed 2D world and answers
//! "what is near here" by looking only at the grid cells a query window
//! covers, instead of scanning every object.
//!
//! ```text
//!   world [min_x, max_x) x [min_y, max_y), split into nx x ny cells
//!
//!   ┌────┬────┬────┬────┐
//!   │    │ ┌──┼──┐ │    │   object A overlaps 4 cells and is
//!   ├────┼─┼──┼──┼─┼────┤   stored in all 4 buckets
//!   │    │ └──┼──┘ │    │
//!   ├────┼────┼────┼────┤   a query visits only the buckets of
//!   │    │    │    │    │   the cells its window covers
//!   └────┴────┴────┴────┘
//! ```
//!
//! Queries return cell-level candidates. Callers needing exact overlap
//! refine with [`ObjectRecord::intersects`].
//!
//! The grid is a plain single-threaded structure. Share it across threads
//! by wrapping the whole grid in one lock, since a single move touches
//! several buckets.

pub mod cell;
pub mod config;
mod error;
pub mod grid;
pub mod handle;
mod record;
mod table;

pub use cell::{CellCoord, CellKey, CellRange};
pub use config::{Axis, Bounds, GridConfig};
pub use error::{GridError, GridResult};
pub use grid::{MAX_OBJECT_CELLS, SpatialHashGrid};
pub use handle::{Generation, GridId, Handle, SlotId};
pub use record::ObjectRecord;
