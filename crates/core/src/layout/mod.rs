//! Conversions between hex space and pixel space. A [Layout] holds everything
//! needed to place cells on screen; it's a plain value that gets rebuilt
//! whenever the viewport changes.
//!
//! ## Calculation
//!
//! Going from hex to pixel space is a single linear transform:
//!
//! ```text
//! x = size * (f0 * q + f1 * r) + origin.x
//! y = size * (f2 * q + f3 * r) + origin.y
//! ```
//!
//! where `f0..f3` come from the orientation's forward matrix. Going back is
//! the same thing in reverse with the inverse matrix, which gives a
//! _fractional_ cube coordinate. That then gets rounded to the cell that
//! contains the point. See [FractionalCube::round] for the rounding rules.

mod orientation;
mod unit;

pub use self::{orientation::*, unit::*};
use crate::{
    error::HexError,
    hex::{CubeCoordinate, FractionalCube},
};

/// The (orientation, size, origin) triple that parameterizes every conversion
/// between hex and pixel space.
///
/// A layout is validated when it's built, so once you have one, every
/// conversion on it is infallible.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    /// Distance from a cell's center to any of its corners, in pixels
    size: f64,
    /// Pixel position of the center of cell `(0, 0, 0)`
    origin: Point2,
}

impl Layout {
    /// Build a new layout. Returns an error if the size isn't a positive,
    /// finite number.
    pub fn new(
        orientation: impl Into<Orientation>,
        size: f64,
        origin: Point2,
    ) -> Result<Self, HexError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(HexError::InvalidLayout(format!(
                "cell size must be positive, but was {}",
                size
            )));
        }
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(HexError::InvalidLayout(format!(
                "origin must be finite, but was {}",
                origin
            )));
        }
        Ok(Self {
            orientation: orientation.into(),
            size,
            origin,
        })
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Get the pixel position of a cell's center. This is exact, no rounding
    /// is involved.
    pub fn to_pixel(&self, coord: CubeCoordinate) -> Point2 {
        self.orientation.project(coord.q().into(), coord.r().into())
            * self.size
            + self.origin
    }

    /// Get the exact position of a pixel in hex space. The result will
    /// generally fall somewhere inside a cell rather than on its center.
    pub fn to_fractional(&self, point: Point2) -> FractionalCube {
        let offset = (point - self.origin) / self.size;
        let (q, r) = self.orientation.unproject(offset);
        FractionalCube::from_axial(q, r)
    }

    /// Get the cell that contains a pixel. Points exactly on a boundary
    /// between cells are resolved by the tie-breaking rules of
    /// [FractionalCube::round].
    pub fn to_coordinate(&self, point: Point2) -> CubeCoordinate {
        self.to_fractional(point).round()
    }

    /// Offset from any cell's center to its `i`th corner, in pixels. Corners
    /// go clockwise on screen, starting from the orientation's start angle.
    pub fn corner_offset(&self, corner: usize) -> Point2 {
        self.orientation.corner_offset(corner) * self.size
    }

    /// Get the pixel position of each of a cell's 6 corners, ready to be
    /// drawn as a polygon.
    pub fn corners(&self, coord: CubeCoordinate) -> [Point2; 6] {
        let center = self.to_pixel(coord);
        let mut corners = [center; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner += self.corner_offset(i);
        }
        corners
    }

    /// Width of a single cell's bounding box, in pixels
    pub fn cell_width(&self) -> f64 {
        self.orientation.cell_extent().x * self.size
    }

    /// Height of a single cell's bounding box, in pixels
    pub fn cell_height(&self) -> f64 {
        self.orientation.cell_extent().y * self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    const SQRT_3: f64 = 1.732_050_807_568_877_2;

    fn layout(kind: HexOrientation, size: f64) -> Layout {
        Layout::new(kind, size, Point2::new(400.0, 300.0)).unwrap()
    }

    #[test]
    fn test_invalid_size() {
        for size in [0.0, -5.0, f64::NAN, f64::INFINITY].iter() {
            assert!(matches!(
                Layout::new(HexOrientation::PointyTop, *size, Point2::ZERO),
                Err(HexError::InvalidLayout(_))
            ));
        }
    }

    #[test]
    fn test_to_pixel_pointy() {
        let layout = layout(HexOrientation::PointyTop, 50.0);
        let origin = layout.to_pixel(CubeCoordinate::ORIGIN);
        assert_eq!(origin, Point2::new(400.0, 300.0));

        let east = layout.to_pixel(CubeCoordinate::new_qr(1, 0));
        assert_approx_eq!(east.x, 400.0 + 50.0 * SQRT_3);
        assert_approx_eq!(east.y, 300.0);

        // One row down, half a cell to the right
        let south_east = layout.to_pixel(CubeCoordinate::new_qr(0, 1));
        assert_approx_eq!(south_east.x, 400.0 + 25.0 * SQRT_3);
        assert_approx_eq!(south_east.y, 375.0);
    }

    #[test]
    fn test_to_pixel_flat() {
        let layout = layout(HexOrientation::FlatTop, 10.0);
        let east = layout.to_pixel(CubeCoordinate::new_qr(1, 0));
        assert_approx_eq!(east.x, 415.0);
        assert_approx_eq!(east.y, 300.0 + 5.0 * SQRT_3);

        let south = layout.to_pixel(CubeCoordinate::new_qr(0, 1));
        assert_approx_eq!(south.x, 400.0);
        assert_approx_eq!(south.y, 300.0 + 10.0 * SQRT_3);
    }

    #[test]
    fn test_round_trip() {
        for kind in HexOrientation::iter() {
            for size in [1.0, 13.7, 50.0].iter() {
                let layout = layout(kind, *size);
                for q in -12..=12 {
                    for r in -12..=12 {
                        let coord = CubeCoordinate::new_qr(q, r);
                        let pixel = layout.to_pixel(coord);
                        assert_eq!(
                            layout.to_coordinate(pixel),
                            coord,
                            "{} round trip failed at size {} via {}",
                            kind,
                            size,
                            pixel
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_to_coordinate_inside_cell() {
        let layout = layout(HexOrientation::PointyTop, 50.0);
        let coord = CubeCoordinate::new_qr(2, -1);
        let center = layout.to_pixel(coord);
        // Anything well inside the cell's inner circle belongs to it
        for i in 0..6 {
            let nudge = layout.corner_offset(i) * 0.8;
            assert_eq!(layout.to_coordinate(center + nudge), coord);
        }
    }

    #[test]
    fn test_to_fractional() {
        let layout = layout(HexOrientation::PointyTop, 50.0);
        let frac = layout.to_fractional(Point2::new(400.0, 225.0));
        assert_approx_eq!(frac.q, 0.5);
        assert_approx_eq!(frac.r, -1.0);
        assert_approx_eq!(frac.s, 0.5);
    }

    #[test]
    fn test_corners() {
        let layout = layout(HexOrientation::PointyTop, 50.0);
        let corners = layout.corners(CubeCoordinate::ORIGIN);
        // Pointy-top cells start at 30°, so corner 1 is straight down
        assert_approx_eq!(corners[0].x, 400.0 + 25.0 * SQRT_3);
        assert_approx_eq!(corners[0].y, 325.0);
        assert_approx_eq!(corners[1].x, 400.0);
        assert_approx_eq!(corners[1].y, 350.0);
        assert_approx_eq!(corners[4].x, 400.0);
        assert_approx_eq!(corners[4].y, 250.0);

        // Flat-top cells start at 0°, so corner 0 is straight right
        let layout = Layout::new(HexOrientation::FlatTop, 10.0, Point2::ZERO)
            .unwrap();
        let corners = layout.corners(CubeCoordinate::ORIGIN);
        assert_approx_eq!(corners[0].x, 10.0);
        assert_approx_eq!(corners[0].y, 0.0);
        assert_approx_eq!(corners[3].x, -10.0);

        // Every corner is exactly one size away from the center
        for corner in corners.iter() {
            assert_approx_eq!(corner.x.hypot(corner.y), 10.0);
        }
    }

    #[test]
    fn test_cell_dimensions() {
        let layout = layout(HexOrientation::PointyTop, 50.0);
        assert_approx_eq!(layout.cell_width(), 50.0 * SQRT_3);
        assert_approx_eq!(layout.cell_height(), 100.0);
    }
}
