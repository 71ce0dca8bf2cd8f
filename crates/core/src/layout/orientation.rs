use crate::{
    error::HexError,
    hex::{CubeCoordinate, HexDirection},
    layout::unit::Point2,
};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The two standard ways to lay hexagons out on screen.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HexOrientation {
    /// A vertex points straight up. Cells in the same row line up
    /// horizontally, and the `r` axis runs down the screen.
    PointyTop,
    /// A flat side faces up. Cells in the same column line up vertically,
    /// and the `q` axis runs across the screen.
    FlatTop,
}

impl HexOrientation {
    /// Get the transform matrices for this orientation
    pub fn orientation(self) -> Orientation {
        match self {
            Self::PointyTop => Orientation {
                forward: Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0),
                inverse: Matrix2::new(
                    SQRT_3 / 3.0,
                    -1.0 / 3.0,
                    0.0,
                    2.0 / 3.0,
                ),
                start_angle: 30.0,
            },
            Self::FlatTop => Orientation {
                forward: Matrix2::new(3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3),
                inverse: Matrix2::new(
                    2.0 / 3.0,
                    0.0,
                    -1.0 / 3.0,
                    SQRT_3 / 3.0,
                ),
                start_angle: 0.0,
            },
        }
    }
}

impl Default for HexOrientation {
    fn default() -> Self {
        Self::PointyTop
    }
}

/// The linear transform between axial hex space and pixel space, at a cell
/// size of 1. The forward matrix maps `(q, r)` to `(x, y)` and the inverse
/// maps back. The start angle is the angle (in degrees, clockwise from the
/// +x axis since y points down) of a cell's first corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    forward: Matrix2<f64>,
    inverse: Matrix2<f64>,
    start_angle: f64,
}

impl Orientation {
    /// Build a custom orientation from its forward matrix. The inverse is
    /// derived here, so this fails if the matrix is degenerate.
    pub fn from_forward(
        forward: Matrix2<f64>,
        start_angle: f64,
    ) -> Result<Self, HexError> {
        let not_invertible = || {
            HexError::InvalidLayout(format!(
                "orientation matrix {:?} is not invertible",
                forward.as_slice()
            ))
        };
        let inverse = forward
            .try_inverse()
            .filter(|inverse| inverse.iter().all(|x| x.is_finite()))
            .ok_or_else(not_invertible)?;
        Ok(Self {
            forward,
            inverse,
            start_angle,
        })
    }

    pub fn forward(&self) -> &Matrix2<f64> {
        &self.forward
    }

    pub fn inverse(&self) -> &Matrix2<f64> {
        &self.inverse
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Map fractional axial components into unit-size pixel space
    pub(crate) fn project(&self, q: f64, r: f64) -> Point2 {
        (self.forward * Vector2::new(q, r)).into()
    }

    /// Map a unit-size pixel offset back into fractional axial components
    pub(crate) fn unproject(&self, offset: Point2) -> (f64, f64) {
        let axial = self.inverse * Vector2::from(offset);
        (axial.x, axial.y)
    }

    /// Offset from a unit-size cell's center to one of its 6 corners. Corner
    /// `i` sits at `60° * i` past the start angle.
    pub fn corner_offset(&self, corner: usize) -> Point2 {
        let angle = (60.0 * corner as f64 + self.start_angle).to_radians();
        Point2::new(angle.cos(), angle.sin())
    }

    /// Width and height of the bounding box of a unit-size cell
    pub fn cell_extent(&self) -> Point2 {
        let corners = (0..6).map(|i| self.corner_offset(i));
        let (mut min, mut max) = (Point2::ZERO, Point2::ZERO);
        for corner in corners {
            min.x = min.x.min(corner.x);
            min.y = min.y.min(corner.y);
            max.x = max.x.max(corner.x);
            max.y = max.y.max(corner.y);
        }
        max - min
    }

    /// The furthest a single step to an adjacent cell can move a center, on
    /// each pixel axis, at unit size.
    pub fn step_extent(&self) -> Point2 {
        HexDirection::iter()
            .map(|dir| self.center_offset(dir.to_vector()))
            .fold(Point2::ZERO, |acc, offset| {
                Point2::new(
                    acc.x.max(offset.x.abs()),
                    acc.y.max(offset.y.abs()),
                )
            })
    }

    /// Width and height of the bounding box of a hexagon-shaped grid of the
    /// given radius, at unit size. This covers whole cells, not just their
    /// centers.
    pub fn disk_extent(&self, radius: u16) -> Point2 {
        self.step_extent() * (2.0 * f64::from(radius)) + self.cell_extent()
    }

    fn center_offset(&self, coord: CubeCoordinate) -> Point2 {
        self.project(coord.q().into(), coord.r().into())
    }
}

impl From<HexOrientation> for Orientation {
    fn from(kind: HexOrientation) -> Self {
        kind.orientation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_inverse_matches_forward() {
        for kind in HexOrientation::iter() {
            let orientation = kind.orientation();
            let product = orientation.forward() * orientation.inverse();
            assert!(
                (product - Matrix2::identity()).norm() < 1e-12,
                "{} inverse is wrong: {}",
                kind,
                product
            );
        }
    }

    #[test]
    fn test_from_forward() {
        let pointy = HexOrientation::PointyTop.orientation();
        let derived = Orientation::from_forward(*pointy.forward(), 30.0)
            .unwrap();
        assert!((derived.inverse() - pointy.inverse()).norm() < 1e-12);

        let degenerate = Matrix2::new(1.0, 2.0, 2.0, 4.0);
        assert!(matches!(
            Orientation::from_forward(degenerate, 0.0),
            Err(HexError::InvalidLayout(_))
        ));
        let infinite = Matrix2::new(f64::INFINITY, 0.0, 0.0, 1.0);
        assert!(Orientation::from_forward(infinite, 0.0).is_err());

        // Tiny, but still invertible
        let tiny = Orientation::from_forward(Matrix2::identity() * 1e-8, 0.0)
            .unwrap();
        assert_approx_eq!(tiny.inverse()[(0, 0)], 1e8, 1e-3);
        assert_approx_eq!(tiny.inverse()[(1, 1)], 1e8, 1e-3);
    }

    #[test]
    fn test_cell_extent() {
        let pointy = HexOrientation::PointyTop.orientation().cell_extent();
        assert_approx_eq!(pointy.x, SQRT_3);
        assert_approx_eq!(pointy.y, 2.0);

        let flat = HexOrientation::FlatTop.orientation().cell_extent();
        assert_approx_eq!(flat.x, 2.0);
        assert_approx_eq!(flat.y, SQRT_3);
    }

    #[test]
    fn test_disk_extent() {
        // A radius-2 pointy disk is 5 cells wide along its middle row, and its
        // rows are 1.5 apart
        let pointy = HexOrientation::PointyTop.orientation().disk_extent(2);
        assert_approx_eq!(pointy.x, 5.0 * SQRT_3);
        assert_approx_eq!(pointy.y, 4.0 * 1.5 + 2.0);

        let flat = HexOrientation::FlatTop.orientation().disk_extent(2);
        assert_approx_eq!(flat.x, 4.0 * 1.5 + 2.0);
        assert_approx_eq!(flat.y, 5.0 * SQRT_3);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "flat_top".parse::<HexOrientation>().unwrap(),
            HexOrientation::FlatTop
        );
        assert_eq!(HexOrientation::PointyTop.to_string(), "pointy_top");
    }
}
