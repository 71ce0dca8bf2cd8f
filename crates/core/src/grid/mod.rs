//! The set of cells that make up the grid, and the strategies for deciding
//! which cells belong in it.

mod generate;

pub use self::generate::*;
use crate::{
    config::MAX_RADIUS,
    error::HexError,
    hex::{CubeCoordinate, CubeIndexSet},
    layout::{Layout, Point2, Viewport},
    util::{self, range::NumRange},
};
use fnv::FnvBuildHasher;
use serde::{Deserialize, Serialize};
use std::{cmp, iter::FromIterator};

/// How the cells of a grid are chosen. Every strategy puts cell `(0, 0, 0)` at
/// the center of the viewport.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EnumerationStrategy {
    /// A hexagon of cells: every cell within `radius` steps of the center.
    /// The viewport only affects where it gets drawn, not what's in it.
    RadiusBounded { radius: u16 },
    /// Fill the viewport. Every cell whose center is on screen is included,
    /// along with a margin of cells around the edges so that partially
    /// visible cells never get clipped.
    RectangleBounded,
    /// A hexagon of cells, with the cell size picked so the hexagon fills
    /// the viewport. See [Fit] for how the size and radius are solved.
    AutoFit { target_radius: u16 },
}

impl Default for EnumerationStrategy {
    fn default() -> Self {
        Self::RadiusBounded { radius: 5 }
    }
}

/// The cells that make up a grid. Membership is a set; iteration follows
/// generation order, which is stable but has no other meaning.
///
/// Grids are never modified after being built. When the viewport changes,
/// build a new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    cells: CubeIndexSet,
}

impl Grid {
    /// Build a hexagon-shaped grid with the given radius, centered on the
    /// origin. A radius of 0 means 1 cell, 1 means 7 cells, and so on.
    pub fn hexagon(radius: u16) -> Self {
        let capacity = util::hexagon_len(radius);
        let mut cells = CubeIndexSet::with_capacity_and_hasher(
            capacity,
            FnvBuildHasher::default(),
        );

        let r = i32::from(radius);
        for q in -r..=r {
            // If we just do [-r,r] for the inner axis as well, then we end up
            // with a diamond pattern instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let r_min = cmp::max(-r, -q - r);
            let r_max = cmp::min(r, -q + r);
            for r in r_min..=r_max {
                cells.insert(CubeCoordinate::new_qr(q, r));
            }
        }

        debug_assert_eq!(cells.len(), capacity, "expected 3r²+3r+1 cells");
        Self { cells }
    }

    /// Build a grid that covers the viewport. A cell is included if its
    /// center falls within the viewport, grown by `padding_cells` cell widths
    /// on every side. With a padding of at least one cell width, every cell
    /// that's even partially visible makes it in.
    ///
    /// Returns an error if the cells are so small relative to the viewport
    /// that the sweep would cover more candidates than the largest
    /// hexagon-shaped grid we'll build.
    pub fn rectangle(
        layout: &Layout,
        viewport: Viewport,
        padding_cells: f64,
    ) -> Result<Self, HexError> {
        let padding = padding_cells * layout.cell_width();
        let x_range = NumRange::new(0.0, viewport.width).pad(padding);
        let y_range = NumRange::new(0.0, viewport.height).pad(padding);

        // Bound the sweep by mapping the corners of the padded box back into
        // hex space. The transform is linear, so the most extreme q and r
        // values land on the corners. The +1 absorbs rounding at the edges.
        let mut q_max: f64 = 0.0;
        let mut r_max: f64 = 0.0;
        for x in [x_range.min, x_range.max].iter() {
            for y in [y_range.min, y_range.max].iter() {
                let corner = layout.to_fractional(Point2::new(*x, *y));
                q_max = q_max.max(corner.q.abs().ceil() + 1.0);
                r_max = r_max.max(corner.r.abs().ceil() + 1.0);
            }
        }

        // Also rejects NaN, which fails every comparison
        let candidates = (2.0 * q_max + 1.0) * (2.0 * r_max + 1.0);
        let limit = util::hexagon_len(MAX_RADIUS) as f64;
        if !(candidates <= limit) {
            return Err(HexError::InvalidLayout(format!(
                "cell size {} is too small to fill a {} viewport",
                layout.size(),
                viewport
            )));
        }
        // Both bounds are under the limit, so they fit in an i32
        let q_max = q_max as i32;
        let r_max = r_max as i32;

        Ok((-q_max..=q_max)
            .flat_map(|q| {
                (-r_max..=r_max).map(move |r| CubeCoordinate::new_qr(q, r))
            })
            .filter(|coord| {
                let center = layout.to_pixel(*coord);
                x_range.contains(center.x) && y_range.contains(center.y)
            })
            .collect())
    }

    /// Get the number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Is the given cell part of this grid?
    pub fn contains(&self, coord: CubeCoordinate) -> bool {
        self.cells.contains(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = CubeCoordinate> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<CubeCoordinate> for Grid {
    fn from_iter<I: IntoIterator<Item = CubeCoordinate>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
