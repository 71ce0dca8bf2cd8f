use crate::{
    grid::Grid,
    hex::CubeCoordinate,
    layout::{Layout, Point2},
};
use log::debug;

/// Tracks which cell, if any, the user has selected. There are only two
/// states: nothing selected, or exactly one cell selected.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SelectionTracker {
    selected: Option<CubeCoordinate>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected cell
    pub fn selected(&self) -> Option<CubeCoordinate> {
        self.selected
    }

    /// Resolve a pixel to a cell and select it. If the pixel falls outside
    /// the grid, the selection is left alone and `None` is returned. Missing
    /// the grid is normal, not an error.
    pub fn on_point(
        &mut self,
        point: Point2,
        layout: &Layout,
        grid: &Grid,
    ) -> Option<CubeCoordinate> {
        let coord = layout.to_coordinate(point);
        if self.select(coord, grid) {
            Some(coord)
        } else {
            debug!(
                "Point {} resolved to {}, which isn't in the grid",
                point, coord
            );
            None
        }
    }

    /// Select a cell directly. Returns `false` (and changes nothing) if the
    /// cell isn't in the grid.
    pub fn select(&mut self, coord: CubeCoordinate, grid: &Grid) -> bool {
        if grid.contains(coord) {
            self.selected = Some(coord);
            true
        } else {
            false
        }
    }

    /// Call this whenever the grid is replaced. If the selected cell didn't
    /// make it into the new grid, the selection is dropped.
    pub fn on_grid_rebuilt(&mut self, grid: &Grid) {
        if let Some(coord) = self.selected {
            if !grid.contains(coord) {
                debug!("Selected cell {} left the grid, clearing", coord);
                self.selected = None;
            }
        }
    }

    /// Deselect whatever is selected
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
