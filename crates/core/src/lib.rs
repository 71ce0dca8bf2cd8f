//! Hexview is a hex grid geometry engine. It maps between hex cells and
//! screen pixels, decides which cells make up a grid for a given viewport,
//! and tracks which cell the user has selected. Drawing is left to the
//! presentation layer; see the `hexview-wasm` crate for the browser bindings.
//!
//! ```
//! use hexview::{GridConfig, GridController, Point2, Viewport};
//!
//! let mut controller = GridController::new(GridConfig::default()).unwrap();
//! controller.resize(Viewport::new(800.0, 600.0)).unwrap();
//! let selected = controller.on_point(Point2::new(400.0, 300.0));
//! println!("{:?}", selected);
//! for cell in controller.cells() {
//!     // From here you can draw the cells however you like
//!     println!("{} at {}", cell.coordinate, cell.center);
//! }
//! ```
//!
//! See [GridConfig] for details on how the grid can be customized.

mod config;
mod controller;
mod error;
pub mod grid;
pub mod hex;
pub mod layout;
mod selection;
pub mod util;

pub use crate::{
    config::{GridConfig, MAX_RADIUS},
    controller::{Cell, GridController},
    error::HexError,
    grid::{EnumerationStrategy, Grid},
    hex::{CoordinatePolicy, CubeCoordinate, FractionalCube, HexDirection},
    layout::{HexOrientation, Layout, Orientation, Point2, Viewport},
    selection::SelectionTracker,
};

// Re-exported so dependents can use the exact same versions
pub use anyhow;
pub use validator;
