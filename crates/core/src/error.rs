//! Error types for the geometry engine. These only cover programming and
//! configuration defects; a click that misses the grid is not an error.

use thiserror::Error;

/// Errors raised by coordinate construction and layout setup.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HexError {
    /// Components don't fall on the plane `q + r + s = 0`, and the active
    /// [CoordinatePolicy](crate::CoordinatePolicy) doesn't allow correcting
    /// them.
    #[error("invalid coordinate ({q}, {r}, {s}): q + r + s must be 0")]
    InvalidCoordinate { q: i32, r: i32, s: i32 },

    /// The layout can't map between hex and pixel space, either because the
    /// cell size isn't a positive number or the orientation matrix can't be
    /// inverted.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}
