use crate::{
    config::GridConfig,
    grid::{Grid, GridBuilder},
    hex::CubeCoordinate,
    layout::{HexOrientation, Layout, Point2, Viewport},
    selection::SelectionTracker,
};
use anyhow::Context;
use log::{debug, info};
use serde::Serialize;
use validator::Validate;

/// Everything needed to draw a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Cell {
    pub coordinate: CubeCoordinate,
    /// Pixel position of the cell's center
    pub center: Point2,
    /// Pixel positions of the cell's corners, in drawing order
    pub corners: [Point2; 6],
    pub selected: bool,
}

/// The single owner of all grid state. The UI layer feeds viewport changes
/// and pointer events in, and reads cells and the selection back out.
///
/// The grid and layout are rebuilt from scratch on every [Self::resize]; they
/// never change in between. The selection survives a rebuild only if the
/// selected cell is still in the new grid.
#[derive(Clone, Debug)]
pub struct GridController {
    config: GridConfig,
    viewport: Viewport,
    layout: Layout,
    grid: Grid,
    selection: SelectionTracker,
}

impl GridController {
    /// Validate the config and build a controller around it. The controller
    /// starts out with an empty viewport, so there are no cells until the
    /// first call to [Self::resize].
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid config")?;
        info!("Initializing grid with config {:#?}", config);

        let viewport = Viewport::default();
        let layout = Layout::new(
            config.orientation,
            config.cell_size,
            viewport.center(),
        )
        .context("invalid layout")?;
        Ok(Self {
            config,
            viewport,
            layout,
            grid: Grid::default(),
            selection: SelectionTracker::new(),
        })
    }

    /// Rebuild the layout and grid for a new viewport. If the selected cell
    /// doesn't survive the rebuild, the selection is cleared.
    pub fn resize(&mut self, viewport: Viewport) -> anyhow::Result<()> {
        let (layout, grid) = GridBuilder::new(&self.config, viewport)
            .build()
            .context("invalid layout")?;
        self.viewport = viewport;
        self.layout = layout;
        self.grid = grid;
        self.selection.on_grid_rebuilt(&self.grid);
        Ok(())
    }

    /// Handle a click (or tap) at a pixel position. If it lands on a cell in
    /// the grid, that cell becomes selected and is returned.
    pub fn on_point(&mut self, point: Point2) -> Option<CubeCoordinate> {
        let selected = self.selection.on_point(point, &self.layout, &self.grid);
        if let Some(coord) = selected {
            debug!("Selected {} at {}", coord, point);
        }
        selected
    }

    /// Select a cell by its coordinate. Returns `false` if the cell isn't in
    /// the grid, in which case the selection is unchanged.
    pub fn select(&mut self, coord: CubeCoordinate) -> bool {
        self.selection.select(coord, &self.grid)
    }

    /// Build a coordinate from three components, following the configured
    /// [CoordinatePolicy](crate::CoordinatePolicy).
    pub fn make_coordinate(
        &self,
        q: i32,
        r: i32,
        s: i32,
    ) -> anyhow::Result<CubeCoordinate> {
        Ok(CubeCoordinate::new(q, r, s, self.config.coordinate_policy)?)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<CubeCoordinate> {
        self.selection.selected()
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn orientation(&self) -> HexOrientation {
        self.config.orientation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get render data for every cell in the grid, in grid order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let selected = self.selected();
        self.grid.iter().map(move |coordinate| Cell {
            coordinate,
            center: self.layout.to_pixel(coordinate),
            corners: self.layout.corners(coordinate),
            selected: selected == Some(coordinate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::EnumerationStrategy, hex::CoordinatePolicy};

    fn controller(config: GridConfig) -> GridController {
        let mut controller = GridController::new(config).unwrap();
        controller.resize(Viewport::new(800.0, 600.0)).unwrap();
        controller
    }

    #[test]
    fn test_starts_empty() {
        let controller = GridController::new(GridConfig::default()).unwrap();
        assert!(controller.grid().is_empty());
        assert_eq!(controller.selected(), None);
        assert_eq!(controller.cells().count(), 0);
    }

    #[test]
    fn test_resize() {
        let controller = controller(GridConfig::default());
        assert_eq!(controller.grid().len(), 91);
        assert_eq!(controller.layout().origin(), Point2::new(400.0, 300.0));
        assert_eq!(controller.viewport(), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn test_cells() {
        let mut controller = controller(GridConfig::default());
        let target = CubeCoordinate::new_qr(-2, 1);
        assert!(controller.select(target));

        let cells: Vec<Cell> = controller.cells().collect();
        assert_eq!(cells.len(), controller.grid().len());
        let selected: Vec<&Cell> =
            cells.iter().filter(|cell| cell.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].coordinate, target);
        assert_eq!(selected[0].center, controller.layout().to_pixel(target));
    }

    #[test]
    fn test_make_coordinate() {
        let forgiving = controller(GridConfig::default());
        assert_eq!(
            forgiving.make_coordinate(1, 2, 3).unwrap(),
            CubeCoordinate::new_qr(1, 2)
        );

        let strict = controller(GridConfig {
            coordinate_policy: CoordinatePolicy::Strict,
            ..Default::default()
        });
        assert!(strict.make_coordinate(1, 2, 3).is_err());
        assert_eq!(
            strict.make_coordinate(1, 2, -3).unwrap(),
            CubeCoordinate::new_qr(1, 2)
        );
    }

    #[test]
    fn test_selection_survives_resize() {
        let mut controller = controller(GridConfig {
            strategy: EnumerationStrategy::RectangleBounded,
            ..Default::default()
        });
        let coord = controller.on_point(Point2::new(400.0, 300.0)).unwrap();
        assert_eq!(coord, CubeCoordinate::ORIGIN);

        // Origin is always in a rectangle grid, no matter the size
        controller.resize(Viewport::new(200.0, 100.0)).unwrap();
        assert_eq!(controller.selected(), Some(CubeCoordinate::ORIGIN));
    }
}
