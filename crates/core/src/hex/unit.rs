//! This sub-module contains the basic value types of the cube coordinate
//! system. See the parent module documentation for more info on the coordinate
//! system.

use crate::error::HexError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops;
use strum::{EnumIter, IntoEnumIterator};
#[cfg(feature = "js")]
use wasm_bindgen::prelude::*;

/// Maximum drift from `q + r + s = 0` that we'll tolerate on fractional input
/// before considering the point off-plane.
const ZERO_SUM_TOLERANCE: f64 = 1e-6;

/// Determines what happens when a coordinate is constructed from three
/// components that don't sum to zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatePolicy {
    /// Keep `q` and `r` as given and derive `s = -q - r`. Never fails.
    Forgiving,
    /// Reject the input with [HexError::InvalidCoordinate].
    Strict,
}

impl Default for CoordinatePolicy {
    fn default() -> Self {
        Self::Forgiving
    }
}

/// A whole hex cell in the cube coordinate system. See module-level docs for
/// a description of the system.
///
/// ## Implementation
///
/// Every cell lies on the plane `q + r + s = 0`, so we only store `q` and `r`
/// and derive `s` as needed. This makes the zero-sum invariant structural:
/// there is no way to build a coordinate that violates it, and `add`/`sub`
/// preserve it for free.
#[cfg_attr(feature = "js", wasm_bindgen)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{},{},{}", "self.q()", "self.r()", "self.s()")]
pub struct CubeCoordinate {
    q: i32,
    r: i32,
}

impl CubeCoordinate {
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// Construct a coordinate from axial `q` and `r`. Since q+r+s=0 for all
    /// cells, we can derive s from q & r. The derived `s` must fit in an
    /// `i32`; use [Self::new] for untrusted input.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a coordinate from `q` and `s`, deriving `r`.
    pub const fn new_qs(q: i32, s: i32) -> Self {
        Self::new_qr(q, -q - s)
    }

    /// Construct a coordinate from `r` and `s`, deriving `q`.
    pub const fn new_rs(r: i32, s: i32) -> Self {
        Self::new_qr(-r - s, r)
    }

    /// Construct a coordinate from all three components. If they don't sum
    /// to zero, the outcome depends on the policy:
    /// [CoordinatePolicy::Forgiving] keeps `q` and `r` and derives `s`,
    /// [CoordinatePolicy::Strict] returns an error. Either way, `q` and `r`
    /// whose derived `s` doesn't fit in an `i32` are rejected.
    pub fn new(
        q: i32,
        r: i32,
        s: i32,
        policy: CoordinatePolicy,
    ) -> Result<Self, HexError> {
        let invalid = HexError::InvalidCoordinate { q, r, s };
        let sum = i64::from(q) + i64::from(r) + i64::from(s);
        if sum != 0 && policy == CoordinatePolicy::Strict {
            return Err(invalid);
        }
        Self::checked_qr(q, r).ok_or(invalid)
    }

    /// Construct from axial `q` and `r`, or `None` if `s` can't be derived
    /// without overflowing
    fn checked_qr(q: i32, r: i32) -> Option<Self> {
        q.checked_add(r)?.checked_neg()?;
        Some(Self::new_qr(q, r))
    }

    /// Same as [Self::new], but for float input. If the input is on the
    /// plane (within a small tolerance), it's cube-rounded to the cell that
    /// contains it, see [FractionalCube::round]. Otherwise the policy decides:
    /// forgiving mode rounds `q` and `r` and derives `s`, strict mode fails.
    pub fn from_fractional(
        q: f64,
        r: f64,
        s: f64,
        policy: CoordinatePolicy,
    ) -> Result<Self, HexError> {
        if (q + r + s).abs() <= ZERO_SUM_TOLERANCE {
            return Ok(FractionalCube::new(q, r, s).round());
        }
        match policy {
            CoordinatePolicy::Forgiving => {
                Ok(FractionalCube::from_axial(q, r).round())
            }
            CoordinatePolicy::Strict => Err(HexError::InvalidCoordinate {
                q: q.round() as i32,
                r: r.round() as i32,
                s: s.round() as i32,
            }),
        }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -(self.q + self.r)
    }

    /// Reduce to axial form. `s` is always recoverable as `-q - r`.
    pub fn to_axial(self) -> (i32, i32) {
        (self.q, self.r)
    }

    /// Get the cell adjacent to this one in the given direction
    pub fn adjacent(self, direction: HexDirection) -> Self {
        self + direction.to_vector()
    }

    /// Get an iterator of all the cells directly adjacent to this one. The
    /// iterator will always contain exactly 6 values.
    pub fn adjacents(self) -> impl Iterator<Item = CubeCoordinate> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Number of single-cell steps between two cells. 0 if they're equal, 1 if
    /// they're adjacent, etc.
    pub fn distance_to(self, other: Self) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let delta = self - other;
        delta
            .q()
            .unsigned_abs()
            .max(delta.r().unsigned_abs())
            .max(delta.s().unsigned_abs())
    }
}

// Wasm-friendly API
#[cfg(feature = "js")]
#[wasm_bindgen]
impl CubeCoordinate {
    #[wasm_bindgen(getter = q)]
    pub fn js_q(&self) -> i32 {
        self.q()
    }

    #[wasm_bindgen(getter = r)]
    pub fn js_r(&self) -> i32 {
        self.r()
    }

    #[wasm_bindgen(getter = s)]
    pub fn js_s(&self) -> i32 {
        self.s()
    }

    /// The `"q,r,s"` identity string, handy as a JS map key
    #[wasm_bindgen(js_name = toString)]
    pub fn js_to_string(&self) -> String {
        self.to_string()
    }
}

impl ops::Add for CubeCoordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new_qr(self.q + rhs.q, self.r + rhs.r)
    }
}

impl ops::Sub for CubeCoordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new_qr(self.q - rhs.q, self.r - rhs.r)
    }
}

impl From<(i32, i32)> for CubeCoordinate {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new_qr(q, r)
    }
}

// Coordinates go over the wire with all three components, because consumers
// (JS especially) shouldn't have to know how to derive s. On the way in, s is
// optional, but if it's given it has to be correct.
#[derive(Serialize, Deserialize)]
#[serde(rename = "CubeCoordinate")]
struct CubeComponents {
    q: i32,
    r: i32,
    #[serde(default)]
    s: Option<i32>,
}

impl From<CubeCoordinate> for CubeComponents {
    fn from(coord: CubeCoordinate) -> Self {
        Self {
            q: coord.q(),
            r: coord.r(),
            s: Some(coord.s()),
        }
    }
}

impl TryFrom<CubeComponents> for CubeCoordinate {
    type Error = HexError;

    fn try_from(value: CubeComponents) -> Result<Self, Self::Error> {
        match value.s {
            Some(s) => Self::new(value.q, value.r, s, CoordinatePolicy::Strict),
            None => Self::checked_qr(value.q, value.r).ok_or(
                HexError::InvalidCoordinate {
                    q: value.q,
                    r: value.r,
                    s: 0,
                },
            ),
        }
    }
}

impl Serialize for CubeCoordinate {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        CubeComponents::from(*self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CubeCoordinate {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let components = CubeComponents::deserialize(deserializer)?;
        Self::try_from(components).map_err(serde::de::Error::custom)
    }
}

/// A point anywhere on the plane `q + r + s = 0`, not just at cell centers.
/// This is what comes out of the inverse pixel projection, and gets rounded
/// back into a [CubeCoordinate].
#[derive(Copy, Clone, Debug, PartialEq, Display)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct FractionalCube {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalCube {
    pub fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Build from fractional axial components, deriving `s`
    pub fn from_axial(q: f64, r: f64) -> Self {
        Self::new(q, r, -q - r)
    }

    /// Find the cell that contains this point.
    ///
    /// Each component is rounded independently, which can knock the result
    /// off the plane. To get back on it, we throw away the component that
    /// moved the most during rounding and rebuild it from the other two. When
    /// rounding errors tie, `q` is discarded before `r`, and `r` before `s`.
    /// This decides which cell a click exactly on a boundary belongs to.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn round(self) -> CubeCoordinate {
        let q = self.q.round();
        let r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff >= r_diff && q_diff >= s_diff {
            CubeCoordinate::new_rs(r as i32, s as i32)
        } else if r_diff >= s_diff {
            CubeCoordinate::new_qs(q as i32, s as i32)
        } else {
            CubeCoordinate::new_qr(q as i32, r as i32)
        }
    }
}

impl From<CubeCoordinate> for FractionalCube {
    fn from(coord: CubeCoordinate) -> Self {
        Self::new(coord.q().into(), coord.r().into(), coord.s().into())
    }
}

/// The 6 directions in which cells line up side-to-side. Each one moves a
/// cell to one of its neighbors. The names describe the movement under a
/// pointy-top layout in screen space (y pointing down); for flat-top layouts
/// the compass labels rotate by 30°, but the vectors stay the same.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    /// Get the offset that moves a cell one step in this direction
    pub fn to_vector(self) -> CubeCoordinate {
        match self {
            Self::East => CubeCoordinate::new_qr(1, 0),
            Self::NorthEast => CubeCoordinate::new_qr(1, -1),
            Self::NorthWest => CubeCoordinate::new_qr(0, -1),
            Self::West => CubeCoordinate::new_qr(-1, 0),
            Self::SouthWest => CubeCoordinate::new_qr(-1, 1),
            Self::SouthEast => CubeCoordinate::new_qr(0, 1),
        }
    }
}
