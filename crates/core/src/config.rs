use crate::{
    grid::EnumerationStrategy, hex::CoordinatePolicy, layout::HexOrientation,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// The largest grid radius we'll generate. A radius-10000 hexagon is already
/// ~300 million cells, which no viewport is going to draw.
pub const MAX_RADIUS: u16 = 10000;

/// Configuration that defines how a grid is laid out and which cells it
/// contains. The same config and viewport always produce the same grid.
///
/// Any field left out during deserialization is populated with its default.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Which way up the hexagons sit. This controls the transform between hex
    /// and pixel space, as well as where each cell's corners are.
    pub orientation: HexOrientation,

    /// How the set of cells is chosen. See [EnumerationStrategy] for the
    /// options.
    #[validate(custom = "validate_strategy")]
    pub strategy: EnumerationStrategy,

    /// Distance from a cell's center to any of its corners, in pixels.
    /// Ignored by [EnumerationStrategy::AutoFit], which picks its own size.
    #[validate(range(min = 0.001))]
    pub cell_size: f64,

    /// Extra margin around the viewport, in cell widths, for
    /// [EnumerationStrategy::RectangleBounded]. Cells whose centers fall in
    /// the margin are still included, so partially visible cells at the edge
    /// don't get dropped. Anything below 1.0 risks clipping.
    #[validate(range(min = 0.0, max = 100.0))]
    pub padding_cells: f64,

    /// The fraction of the viewport that [EnumerationStrategy::AutoFit]
    /// aims to fill when picking a cell size. 1.0 means edge to edge.
    #[validate(range(min = 0.01, max = 1.0))]
    pub fit_padding: f64,

    /// What to do with coordinates built from three components that don't
    /// sum to zero.
    pub coordinate_policy: CoordinatePolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: HexOrientation::PointyTop,
            strategy: EnumerationStrategy::default(),
            cell_size: 50.0,
            padding_cells: 2.0,
            fit_padding: 0.9,
            coordinate_policy: CoordinatePolicy::Forgiving,
        }
    }
}

fn validate_strategy(
    strategy: &EnumerationStrategy,
) -> Result<(), ValidationError> {
    let radius = match *strategy {
        EnumerationStrategy::RadiusBounded { radius } => radius,
        EnumerationStrategy::AutoFit { target_radius } => target_radius,
        EnumerationStrategy::RectangleBounded => return Ok(()),
    };
    if radius > MAX_RADIUS {
        Err(ValidationError::new("radius_too_large"))
    } else {
        Ok(())
    }
}
