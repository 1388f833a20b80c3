//! Object handles.

use std::fmt;

/// Bumped every time a record slot is vacated, so handles to the previous
/// occupant stop resolving.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation(u32);

impl Generation {
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen{}", self.0)
    }
}

/// Index of a slot in a grid's record table.
pub type SlotId = u32;

/// Identifies the grid that issued a handle.
pub type GridId = u32;

/// Stable identity of an object registered in a grid.
///
/// Only issued by [`SpatialHashGrid::insert`](crate::SpatialHashGrid::insert).
/// Equality and hashing never involve the object's position, so moving an
/// object keeps its handle valid. A handle only resolves in the grid that
/// issued it and only until the object is removed; afterwards every grid
/// treats it as unregistered.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    grid: GridId,
    slot: SlotId,
    generation: Generation,
}

impl Handle {
    pub(crate) const fn new(grid: GridId, slot: SlotId, generation: Generation) -> Self {
        Self {
            grid,
            slot,
            generation,
        }
    }

    #[must_use]
    pub const fn grid(self) -> GridId {
        self.grid
    }

    #[must_use]
    pub const fn slot(self) -> SlotId {
        self.slot
    }

    #[must_use]
    pub const fn generation(self) -> Generation {
        self.generation
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{}@{})", self.slot, self.generation.0, self.grid)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.slot, self.generation.0)
    }
}
