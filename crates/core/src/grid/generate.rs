use crate::{
    config::{GridConfig, MAX_RADIUS},
    error::HexError,
    grid::{EnumerationStrategy, Grid},
    layout::{Layout, Orientation, Viewport},
    timed,
    util::range::NumRange,
};
use log::debug;

/// Absorbs float error when flooring a solved radius, so a radius that comes
/// out as 4.9999999 still counts as 5.
const RADIUS_EPSILON: f64 = 1e-9;

/// A container for building the grid for a particular viewport. It resolves
/// the layout first (which for [EnumerationStrategy::AutoFit] means solving
/// for the cell size), then enumerates the cells under that layout.
pub struct GridBuilder<'a> {
    config: &'a GridConfig,
    viewport: Viewport,
}

impl<'a> GridBuilder<'a> {
    pub fn new(config: &'a GridConfig, viewport: Viewport) -> Self {
        Self { config, viewport }
    }

    /// Build the layout and the grid. The layout's origin is always the
    /// center of the viewport. Returns an error only if the config produces
    /// an unusable layout, which validated configs never do.
    pub fn build(self) -> Result<(Layout, Grid), HexError> {
        let (layout, grid) = timed!("Grid enumeration", self.enumerate())?;
        debug!(
            "Built grid of {} cells for {} viewport (size {:.2}, {:?})",
            grid.len(),
            self.viewport,
            layout.size(),
            self.config.strategy
        );
        Ok((layout, grid))
    }

    fn enumerate(&self) -> Result<(Layout, Grid), HexError> {
        let orientation = self.config.orientation.orientation();
        let origin = self.viewport.center();
        let default_layout =
            || Layout::new(orientation, self.config.cell_size, origin);

        let built = match self.config.strategy {
            EnumerationStrategy::RadiusBounded { radius } => {
                (default_layout()?, Grid::hexagon(radius))
            }
            // There's nothing to fill
            EnumerationStrategy::RectangleBounded
                if self.viewport.is_empty() =>
            {
                (default_layout()?, Grid::default())
            }
            EnumerationStrategy::RectangleBounded => {
                let layout = default_layout()?;
                let grid = Grid::rectangle(
                    &layout,
                    self.viewport,
                    self.config.padding_cells,
                )?;
                (layout, grid)
            }
            EnumerationStrategy::AutoFit { target_radius } => {
                match Fit::solve(
                    &orientation,
                    self.viewport,
                    target_radius,
                    self.config.fit_padding,
                ) {
                    Some(fit) => (
                        Layout::new(orientation, fit.size, origin)?,
                        Grid::hexagon(fit.radius),
                    ),
                    None => (default_layout()?, Grid::default()),
                }
            }
        };
        Ok(built)
    }
}

/// The solution to fitting a hexagon-shaped grid into a viewport.
///
/// This is solved in two passes:
///
/// 1. Pick the biggest cell size at which a hexagon of the target radius fits
///    in the viewport, after shrinking the viewport by the padding factor
/// 2. At that size, count how many whole rings fit in the **unpadded**
///    viewport on both axes, and take the smaller count
///
/// The second pass gives back the target radius at minimum, and more if the
/// padding left room for extra rings. It's a heuristic, not an optimal
/// packing, but the resulting hexagon is always entirely on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fit {
    /// Distance from cell center to corner, in pixels
    pub size: f64,
    pub radius: u16,
}

impl Fit {
    /// Solve the fit. Returns `None` if the viewport has no area, because
    /// there's no size that makes sense there.
    pub fn solve(
        orientation: &Orientation,
        viewport: Viewport,
        target_radius: u16,
        padding: f64,
    ) -> Option<Self> {
        if viewport.is_empty() {
            return None;
        }

        // Pass 1: size from target radius
        let extent = orientation.disk_extent(target_radius);
        let size = (viewport.width * padding / extent.x)
            .min(viewport.height * padding / extent.y);

        // Pass 2: radius from size. A hexagon of radius r spans
        // `2r * step + cell` on each axis (at unit size), so solve for r
        let step = orientation.step_extent();
        let cell = orientation.cell_extent();
        let radius_x = (viewport.width / size - cell.x) / (2.0 * step.x);
        let radius_y = (viewport.height / size - cell.y) / (2.0 * step.y);
        let radius = (radius_x.min(radius_y) + RADIUS_EPSILON).floor();
        let radius = NumRange::new(0.0, f64::from(MAX_RADIUS)).clamp(radius);

        Some(Self {
            size,
            radius: radius as u16,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{HexOrientation, Point2};
    use strum::IntoEnumIterator;

    /// Make sure every corner of every cell is on screen
    fn assert_on_screen(layout: &Layout, grid: &Grid, viewport: Viewport) {
        let slop = 1e-6;
        for coord in grid.iter() {
            for corner in layout.corners(coord).iter() {
                assert!(
                    corner.x >= -slop
                        && corner.x <= viewport.width + slop
                        && corner.y >= -slop
                        && corner.y <= viewport.height + slop,
                    "corner {} of {} is off screen",
                    corner,
                    coord
                );
            }
        }
    }

    #[test]
    fn test_fit_reaches_target() {
        let viewport = Viewport::new(800.0, 600.0);
        for kind in HexOrientation::iter() {
            for target in [0, 1, 5, 12].iter() {
                let fit =
                    Fit::solve(&kind.orientation(), viewport, *target, 0.9)
                        .unwrap();
                assert!(
                    fit.radius >= *target,
                    "{}: wanted {}, got {:?}",
                    kind,
                    target,
                    fit
                );
                let layout =
                    Layout::new(kind, fit.size, viewport.center()).unwrap();
                assert_on_screen(
                    &layout,
                    &Grid::hexagon(fit.radius),
                    viewport,
                );
            }
        }
    }

    #[test]
    fn test_fit_uses_padding_room() {
        // Pointy, target 5: 90% padding leaves no room for an extra ring...
        let orientation = HexOrientation::PointyTop.orientation();
        let viewport = Viewport::new(800.0, 600.0);
        let fit = Fit::solve(&orientation, viewport, 5, 0.9).unwrap();
        assert_eq!(fit.radius, 5);

        // ...but 50% padding halves the cells, so a lot more rings fit
        let fit = Fit::solve(&orientation, viewport, 5, 0.5).unwrap();
        assert_eq!(fit.radius, 10);
    }

    #[test]
    fn test_fit_empty_viewport() {
        let orientation = HexOrientation::FlatTop.orientation();
        assert_eq!(
            Fit::solve(&orientation, Viewport::new(0.0, 600.0), 5, 0.9),
            None
        );
    }

    #[test]
    fn test_build_radius_bounded() {
        let config = GridConfig {
            strategy: EnumerationStrategy::RadiusBounded { radius: 3 },
            cell_size: 20.0,
            ..Default::default()
        };
        let viewport = Viewport::new(1000.0, 500.0);
        let (layout, grid) =
            GridBuilder::new(&config, viewport).build().unwrap();
        assert_eq!(grid.len(), 37);
        assert_eq!(layout.size(), 20.0);
        assert_eq!(layout.origin(), Point2::new(500.0, 250.0));
    }

    #[test]
    fn test_build_rectangle_empty_viewport() {
        let config = GridConfig {
            strategy: EnumerationStrategy::RectangleBounded,
            ..Default::default()
        };
        let (_, grid) = GridBuilder::new(&config, Viewport::default())
            .build()
            .unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_build_auto_fit() {
        let config = GridConfig {
            strategy: EnumerationStrategy::AutoFit { target_radius: 4 },
            ..Default::default()
        };
        let viewport = Viewport::new(1024.0, 768.0);
        let (layout, grid) =
            GridBuilder::new(&config, viewport).build().unwrap();
        assert!(grid.len() >= 61);
        assert_ne!(layout.size(), config.cell_size);
        assert_on_screen(&layout, &grid, viewport);
    }
}
