//! Grid error types.

use thiserror::Error;

use crate::{Axis, Handle};

/// Grid error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// World span along an axis is zero, negative or not finite.
    #[error("invalid {axis} bounds: [{min}, {max}) must have a positive finite span")]
    InvalidBounds { axis: Axis, min: f64, max: f64 },

    /// Zero cells requested along an axis.
    #[error("resolution along {axis} must be at least one cell")]
    ZeroResolution { axis: Axis },

    /// Object extent is negative or not finite.
    #[error("invalid extent {width}x{height}: components must be finite and non-negative")]
    InvalidExtent { width: f64, height: f64 },

    /// Object rectangle covers more cells than one object may occupy.
    #[error("object would occupy {cells} cells, more than the per-object limit")]
    TooManyCells { cells: u64 },

    /// Handle does not refer to a registered object.
    #[error("object not registered: {0}")]
    NotRegistered(Handle),
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
