//! This crate provides WebAssembly bindings for Hexview. The [HexView] struct
//! is the main interface; create one per grid on the page, feed it the canvas
//! size and pointer events, then draw whatever [HexView::cells] hands back.
//!
//! You probably won't ever want to include this crate in another Rust project.
//! Instead, use `wasm-pack` to build this into an npm package, then import that
//! into your JS project.

mod util;

use crate::util::{to_js, GridConfigHelper, ResultExt};
use hexview::{CubeCoordinate, GridController, Point2, Viewport};
use log::debug;
use wasm_bindgen::prelude::*;

/// Executed when the Wasm module is first loaded
#[wasm_bindgen(start)]
pub fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    wasm_logger::init(wasm_logger::Config::default());
}

/// Get the default grid config as a JS object.
#[wasm_bindgen]
pub fn default_config() -> Result<GridConfigObject, JsValue> {
    GridConfigHelper::new().default()
}

/// Verify that the given JS object is a valid grid config. Return the
/// validated config, with all defaults populated, if it's valid. Return an
/// error if it isn't.
#[wasm_bindgen]
pub fn validate_config(
    input: GridConfigObject,
) -> Result<GridConfigObject, JsValue> {
    GridConfigHelper::new().validate(&input)
}

/// A single interactive grid. Wraps [GridController] for use from JS.
#[wasm_bindgen]
pub struct HexView {
    controller: GridController,
}

#[wasm_bindgen]
impl HexView {
    /// Build a new grid from a config object. The grid is empty until the
    /// first call to [Self::resize].
    #[wasm_bindgen(constructor)]
    pub fn new(config: GridConfigObject) -> Result<HexView, JsValue> {
        let config = GridConfigHelper::new().deserialize(&config)?;
        let controller = GridController::new(config).into_js()?;
        Ok(Self { controller })
    }

    /// Rebuild the grid for a new canvas size. Call this on startup and
    /// whenever the canvas changes size.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.controller
            .resize(Viewport::new(width, height))
            .into_js()?;
        debug!("Resized to {}x{}", width, height);
        Ok(())
    }

    /// Handle a click at the given canvas position. Returns the newly selected
    /// cell, or `undefined` if the click missed the grid.
    pub fn click(&mut self, x: f64, y: f64) -> Option<CubeCoordinate> {
        self.controller.on_point(Point2::new(x, y))
    }

    /// Select a cell by its components. The components are checked according
    /// to the configured coordinate policy. Returns `false` if the cell isn't
    /// in the grid.
    pub fn select(&mut self, q: i32, r: i32, s: i32) -> Result<bool, JsValue> {
        let coord = self.controller.make_coordinate(q, r, s).into_js()?;
        Ok(self.controller.select(coord))
    }

    pub fn clear_selection(&mut self) {
        self.controller.clear_selection();
    }

    pub fn selected(&self) -> Option<CubeCoordinate> {
        self.controller.selected()
    }

    /// Get render data for every cell, as an array of plain objects.
    pub fn cells(&self) -> Result<CellArray, JsValue> {
        let cells: Vec<_> = self.controller.cells().collect();
        to_js(&cells)
    }

    pub fn cell_count(&self) -> usize {
        self.controller.grid().len()
    }
}

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &'static str = r#"
/**
 * See description in the `extern "C"` section below
 */
export interface GridConfigObject {
    orientation: 'pointy_top' | 'flat_top';
    strategy:
        | { type: 'radius_bounded'; radius: number }
        | { type: 'rectangle_bounded' }
        | { type: 'auto_fit'; target_radius: number };
    cell_size: number;
    padding_cells: number;
    fit_padding: number;
    coordinate_policy: 'forgiving' | 'strict';
}

export interface CellObject {
    coordinate: { q: number; r: number; s: number };
    center: { x: number; y: number };
    corners: { x: number; y: number }[];
    selected: boolean;
}
"#;

#[wasm_bindgen]
extern "C" {
    /// A TS version of the [hexview::GridConfig] type from the core crate.
    /// This represents what **can be deserialized into a
    /// [hexview::GridConfig]**; every field is optional on the way in.
    ///
    /// **It is very important that this stays up to date with the
    /// [hexview::GridConfig] type**.
    #[wasm_bindgen(typescript_type = "GridConfigObject")]
    pub type GridConfigObject;

    /// Type hack needed until https://github.com/rustwasm/wasm-bindgen/issues/111
    #[wasm_bindgen(typescript_type = "CellObject[]")]
    pub type CellArray;
}
