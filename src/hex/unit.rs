//! This sub-module contains the basic value types of the hex coordinate
//! system: the cube-coordinate [HexCoordinate], the translation type
//! [HexVector], and the [HexOrientation] tag. See the parent module
//! documentation for a description of the coordinate system itself.

use crate::{
    hex::direction::StepDirection,
    screen::Point2,
};
use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Which way a hexagon tile is turned: flat sides facing up/down ([FlatTop])
/// or vertices facing up/down ([PointyTop]). Orientation changes the set of
/// steppable directions and the hex-to-pixel projection, so it is carried on
/// every coordinate rather than assumed globally.
///
/// [FlatTop]: HexOrientation::FlatTop
/// [PointyTop]: HexOrientation::PointyTop
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexOrientation {
    FlatTop,
    PointyTop,
}

/// A translation in cube-coordinate space. This is an `(x, y, z)` kind of
/// vector, not a list vector. The components of a well-formed vector sum to
/// zero, so that translating a valid coordinate always produces a valid
/// coordinate; the unit step vectors of every
/// [StepDirection](crate::StepDirection) satisfy this.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    Neg,
    Add,
    Sub,
    AddAssign,
    SubAssign,
)]
#[display(fmt = "({}, {}, {})", x, y, z)]
pub struct HexVector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl HexVector {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// One cell of a hexagonal grid, in cube coordinates.
///
/// Each coordinate has three integer components with the invariant
/// `x + y + z == 0` (see <https://www.redblobgames.com/grids/hexagons/#coordinates-cube>),
/// plus the `size` (center-to-vertex radius, in pixels) and [HexOrientation]
/// of the grid it belongs to. Coordinates are grid-scoped values, not pure
/// topological indices: two coordinates at the same `(x, y, z)` cell but with
/// a different size or orientation are **not equal** and hash differently.
///
/// This is an immutable value type. Every arithmetic or geometric operation
/// returns a fresh coordinate with the same size and orientation.
#[derive(Copy, Clone, Debug, Display, Serialize, Deserialize)]
#[display(fmt = "({}, {}, {})", x, y, z)]
pub struct HexCoordinate {
    x: i32,
    y: i32,
    z: i32,
    size: f64,
    orientation: HexOrientation,
}

impl HexCoordinate {
    /// Construct a coordinate from explicit cube components. This is the
    /// canonical constructor that every other construction path funnels
    /// through. The components are stored as given; the caller is responsible
    /// for the zero-sum invariant (checked in debug builds only). Use
    /// [Self::new] for input that hasn't been validated yet.
    pub const fn from_axes(
        x: i32,
        y: i32,
        z: i32,
        size: f64,
        orientation: HexOrientation,
    ) -> Self {
        debug_assert!(x + y + z == 0);
        Self {
            x,
            y,
            z,
            size,
            orientation,
        }
    }

    /// Construct a validated coordinate. Returns an error if the components
    /// don't fall on the plane `x + y + z = 0`, or if the tile size isn't
    /// positive.
    pub fn new(
        x: i32,
        y: i32,
        z: i32,
        size: f64,
        orientation: HexOrientation,
    ) -> anyhow::Result<Self> {
        if x + y + z != 0 {
            return Err(anyhow!(
                "invalid coordinate ({x}, {y}, {z}); must be on the plane x+y+z=0"
            ));
        }
        if !(size > 0.0) {
            return Err(anyhow!("invalid tile size {size}; must be positive"));
        }
        Ok(Self::from_axes(x, y, z, size, orientation))
    }

    /// The origin cell `(0, 0, 0)` of a grid with the given size and
    /// orientation
    pub const fn origin(size: f64, orientation: HexOrientation) -> Self {
        Self::from_axes(0, 0, 0, size, orientation)
    }

    /// Construct a coordinate from a 2D point interpreted as two cube axes:
    /// `x` from the point's x and `z` from the point's y, truncating toward
    /// zero, with `y` derived to satisfy the zero-sum invariant.
    pub fn from_axial_point(
        point: Point2,
        size: f64,
        orientation: HexOrientation,
    ) -> Self {
        let x = point.x as i32;
        let z = point.y as i32;
        Self::from_axes(x, -x - z, z, size, orientation)
    }

    /// Resolve a pixel position to the cell containing it. This is the
    /// inverse of [Self::to_pixel]: the pixel is converted to fractional
    /// axial coordinates (using the dual of the projection formula for the
    /// given orientation), extended to fractional cube coordinates, and
    /// rounded with [Self::round].
    pub fn from_pixel(
        pixel: Point2,
        size: f64,
        orientation: HexOrientation,
    ) -> Self {
        let sqrt3 = 3.0_f64.sqrt();
        // Screen y grows downward, so flip it back before inverting the
        // projection
        let (q, r) = match orientation {
            HexOrientation::PointyTop => (
                (pixel.x * sqrt3 / 3.0 - (-pixel.y) / 3.0) / size,
                (-pixel.y * 2.0 / 3.0) / size,
            ),
            HexOrientation::FlatTop => (
                (pixel.x * 2.0 / 3.0) / size,
                ((-pixel.y) * sqrt3 / 3.0 - pixel.x / 3.0) / size,
            ),
        };

        let (x, y, z) = Self::round(q, -q - r, r);
        Self::from_axes(x, y, z, size, orientation)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    /// Center-to-vertex radius of this coordinate's grid, in pixels
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn orientation(&self) -> HexOrientation {
        self.orientation
    }

    /// The `q` axial component (same as `x`). Only used for pixel conversion.
    fn q(&self) -> i32 {
        self.x
    }

    /// The `r` axial component (same as `z`). Only used for pixel conversion.
    fn r(&self) -> i32 {
        self.z
    }

    /// Project this cell's center into 2D screen space. The output y is
    /// negated because screen space grows downward (see [Point2]); callers on
    /// an upward-positive axis must not apply that inversion twice.
    pub fn to_pixel(&self) -> Point2 {
        let sqrt3 = 3.0_f64.sqrt();
        let q = self.q() as f64;
        let r = self.r() as f64;
        let (x, y) = match self.orientation {
            HexOrientation::PointyTop => (
                self.size * sqrt3 * (q + r / 2.0),
                self.size * (3.0 / 2.0) * r,
            ),
            HexOrientation::FlatTop => (
                self.size * (3.0 / 2.0) * q,
                self.size * sqrt3 * (r + q / 2.0),
            ),
        };
        Point2::new(x, -y)
    }

    /// Calculate the path distance between two cells: 0 for equal cells, 1
    /// for adjacent cells, and so on. This is the Manhattan distance in cube
    /// space divided by two, because two adjacent cell centers are always
    /// separated by two cube edges. Exact integer for any pair of valid
    /// coordinates.
    pub fn distance_to(&self, other: HexCoordinate) -> f64 {
        let x = (self.x - other.x).abs() as f64;
        let y = (self.y - other.y).abs() as f64;
        let z = (self.z - other.z).abs() as f64;
        (x + y + z) / 2.0
    }

    /// Get the adjacent cell one step in the given direction. The direction
    /// class must match this coordinate's orientation; stepping a flat-top
    /// coordinate with a [PointyDirection] (or vice versa) is a caller bug
    /// and panics.
    ///
    /// [PointyDirection]: crate::PointyDirection
    pub fn neighbor<D: StepDirection>(self, direction: D) -> Self {
        assert!(
            self.orientation == D::ORIENTATION,
            "direction {:?} cannot step a {:?} coordinate",
            direction,
            self.orientation,
        );
        self.translate(direction.to_vector())
    }

    /// Rotate this cell 60° counterclockwise around the grid origin
    pub fn rotate_left(self) -> Self {
        Self::from_axes(-self.y, -self.z, -self.x, self.size, self.orientation)
    }

    /// Rotate this cell 60° clockwise around the grid origin
    pub fn rotate_right(self) -> Self {
        Self::from_axes(-self.z, -self.x, -self.y, self.size, self.orientation)
    }

    /// Offset this coordinate by a translation vector. The vector's
    /// components must sum to zero for the result to be well-formed.
    pub fn translate(self, vector: HexVector) -> Self {
        Self::from_axes(
            self.x + vector.x,
            self.y + vector.y,
            self.z + vector.z,
            self.size,
            self.orientation,
        )
    }

    /// Round fractional cube components (with `x + y + z ≈ 0`) to the nearest
    /// cell. Each axis is rounded independently, then the axis with the
    /// largest rounding residual is recomputed from the other two, which
    /// re-establishes the zero-sum invariant exactly. Residual comparisons
    /// run in the order x, then y, else z. Already-integer inputs are
    /// returned unchanged.
    pub fn round(x: f64, y: f64, z: f64) -> (i32, i32, i32) {
        let mut rx = x.round();
        let mut ry = y.round();
        let mut rz = z.round();

        let x_diff = (rx - x).abs();
        let y_diff = (ry - y).abs();
        let z_diff = (rz - z).abs();

        if x_diff > y_diff && x_diff > z_diff {
            rx = -ry - rz;
        } else if y_diff > z_diff {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }

        (rx as i32, ry as i32, rz as i32)
    }
}

// Equality and hashing cover all five fields, so coordinates from grids of a
// different scale or orientation are never equal even at the same cell. The
// size is compared and hashed bitwise, which keeps Eq and Hash consistent
// with each other for a float field.
impl PartialEq for HexCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.z == other.z
            && self.orientation == other.orientation
            && self.size.to_bits() == other.size.to_bits()
    }
}

impl Eq for HexCoordinate {}

impl Hash for HexCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.z.hash(state);
        self.orientation.hash(state);
        self.size.to_bits().hash(state);
    }
}
