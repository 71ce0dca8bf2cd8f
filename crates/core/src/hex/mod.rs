//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! Hexview uses two different coordinate systems:
//!
//! ### Hex Coordinates
//!
//! Hex coordinates identify cells within the grid. The system we use is the
//! [cube coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`q`, `r`, and `s`). **For any cell,
//! all three components are integers and `q + r + s = 0`.** Even though the
//! grid is two-dimensional, the third component makes a lot of the math
//! (distance, rounding, symmetry) much simpler. Because `s` can always be
//! derived from the other two, a coordinate can also be written in its
//! two-component _axial_ form `(q, r)`.
//!
//! Points that aren't cell centers (e.g. where the user clicked) are
//! represented with [FractionalCube], which lives on the same plane but has
//! float components. Rounding a fractional cube gives you the cell that
//! contains it.
//!
//! ### Pixel Coordinates
//!
//! Pixel coordinates are the 2D coordinates of the viewport the grid is drawn
//! into. Conventionally `(0, 0)` is the top-left corner of the viewport, `x`
//! grows to the right and `y` grows **down**. The cell `(0, 0, 0)` is drawn at
//! the layout's origin, which is usually the viewport center.
//!
//! Converting between the two systems is the job of [Layout](crate::Layout),
//! which combines an orientation (pointy-top or flat-top), a cell size and an
//! origin. See the [crate::layout] module for the exact math.

mod unit;

pub use self::unit::*;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;

/// An ORDERED set of coordinates. Iteration follows insertion order, which
/// is handy for deterministic drawing but carries no other meaning.
pub type CubeIndexSet = IndexSet<CubeCoordinate, FnvBuildHasher>;
