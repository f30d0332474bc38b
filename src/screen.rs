//! Basic value types for screen space. These are only used at the boundary of
//! the crate: pixel positions come in (hit testing) and go out (tile
//! projection), but all grid logic happens in hex coordinates. See the hex
//! module docs for a description of both coordinate systems.

use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A position in 2D screen space. The origin is wherever the tile `(0, 0, 0)`
/// is rendered; left is negative x, right is positive x, **down is positive
/// y**, up is negative y. That vertical convention matches most display
/// toolkits, and is the reason [crate::HexCoordinate::to_pixel] negates its
/// y output. Callers on an upward-positive axis must negate y themselves.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in 2D screen space. Used for on-screen frames that a
/// grid should be fitted into, and for the bounding box of a rendered grid.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{}x{}", width, height)]
pub struct Size2 {
    pub width: f64,
    pub height: f64,
}

impl Size2 {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The smaller of the two dimensions
    pub fn min_dimension(self) -> f64 {
        self.width.min(self.height)
    }
}
