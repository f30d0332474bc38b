//! Direction types for moving around a hex grid. There are two levels here:
//!
//! - [CompassDirection]: the full set of 8 compass-style labels that can name
//!   a hex side across both orientations. Useful for UI-facing code (angle
//!   classification, inverse lookup).
//! - [PointyDirection] / [FlatDirection]: the 6-label subset that is actually
//!   steppable for each orientation. Each hexagon only has 6 sides, so 2 of
//!   the 8 compass labels are meaningless per orientation; by giving each
//!   orientation its own enum, an unsteppable label simply cannot be
//!   constructed.

use crate::hex::unit::{HexOrientation, HexVector};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::EnumIter;

/// The 8 compass labels used to talk about hex sides across both grid
/// orientations. A pointy-top hexagon has no top/bottom side and a flat-top
/// hexagon has no left/right side, so any single orientation only ever uses 6
/// of these. Convert to [PointyDirection] or [FlatDirection] (via `TryFrom`)
/// to actually step a coordinate.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CompassDirection {
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
    Left,
    Right,
}

impl CompassDirection {
    /// Get the label on the exact opposite side of the compass. Every label
    /// has a fixed inverse, and `d.inverse().inverse() == d`.
    pub fn inverse(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::Bottom => Self::Top,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Classify an angle (degrees, in `[0, 360)`) into the direction sector it
    /// falls in for the given orientation. Pointy-top grids use six 60°
    /// sectors starting at 0°; flat-top grids use the same sectors offset by
    /// 30°, so the sector wrapping through 0° maps to [Self::Top]. Angles
    /// outside `[0, 360)` are malformed input and yield `None`.
    pub fn from_angle(degrees: f64, orientation: HexOrientation) -> Option<Self> {
        match orientation {
            HexOrientation::PointyTop => match degrees {
                d if (0.0..60.0).contains(&d) => Some(Self::TopRight),
                d if (60.0..120.0).contains(&d) => Some(Self::Right),
                d if (120.0..180.0).contains(&d) => Some(Self::BottomRight),
                d if (180.0..240.0).contains(&d) => Some(Self::BottomLeft),
                d if (240.0..300.0).contains(&d) => Some(Self::Left),
                d if (300.0..360.0).contains(&d) => Some(Self::TopLeft),
                _ => None,
            },
            HexOrientation::FlatTop => match degrees {
                d if (0.0..30.0).contains(&d) || (330.0..360.0).contains(&d) => {
                    Some(Self::Top)
                }
                d if (30.0..90.0).contains(&d) => Some(Self::TopRight),
                d if (90.0..150.0).contains(&d) => Some(Self::BottomRight),
                d if (150.0..210.0).contains(&d) => Some(Self::Bottom),
                d if (210.0..270.0).contains(&d) => Some(Self::BottomLeft),
                d if (270.0..330.0).contains(&d) => Some(Self::TopLeft),
                _ => None,
            },
        }
    }
}

/// A steppable direction class for one grid orientation. Implementations are
/// closed 6-label enums, one per orientation, so that a direction that doesn't
/// exist for an orientation is unrepresentable rather than a runtime error.
///
/// This trait provides whatever implementations it can so that both direction
/// classes get common functionality for free.
pub trait StepDirection: 'static + Copy + Debug + Eq + Sized {
    /// The orientation whose hexagons this class of directions can step
    const ORIENTATION: HexOrientation;

    /// All directions in this class, in clockwise order around the compass,
    /// starting with the sector that contains 0°.
    const CLOCKWISE: &'static [Self];

    /// Get the index of this direction within the clockwise ordering of its
    /// class
    fn clockwise_index(self) -> usize {
        Self::CLOCKWISE.iter().position(|dir| self == *dir).unwrap()
    }

    /// Get the direction directly opposite this one. Stepping by a direction
    /// and then by its opposite always returns to the starting coordinate.
    fn opposite(self) -> Self {
        let index = self.clockwise_index();
        let clockwise = Self::CLOCKWISE;
        clockwise[(index + clockwise.len() / 2) % clockwise.len()]
    }

    /// Get the unit vector that moves a coordinate one tile in this
    /// direction. Each component of the returned vector is one of `-1`, `0`,
    /// or `1`, and the components always sum to zero.
    fn to_vector(self) -> HexVector;
}

/// The 6 side-to-side directions of a pointy-top hexagon. Pointy-top tiles
/// have vertical left/right sides but no top/bottom side, so `Top` and
/// `Bottom` don't exist here.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointyDirection {
    TopRight,
    Right,
    BottomRight,
    BottomLeft,
    Left,
    TopLeft,
}

impl StepDirection for PointyDirection {
    const ORIENTATION: HexOrientation = HexOrientation::PointyTop;

    const CLOCKWISE: &'static [Self] = &[
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    fn to_vector(self) -> HexVector {
        match self {
            Self::TopLeft => HexVector::new(0, 1, -1),
            Self::TopRight => HexVector::new(1, 0, -1),
            Self::Right => HexVector::new(1, -1, 0),
            Self::BottomRight => HexVector::new(0, -1, 1),
            Self::BottomLeft => HexVector::new(-1, 0, 1),
            Self::Left => HexVector::new(-1, 1, 0),
        }
    }
}

impl From<PointyDirection> for CompassDirection {
    fn from(other: PointyDirection) -> Self {
        match other {
            PointyDirection::TopRight => Self::TopRight,
            PointyDirection::Right => Self::Right,
            PointyDirection::BottomRight => Self::BottomRight,
            PointyDirection::BottomLeft => Self::BottomLeft,
            PointyDirection::Left => Self::Left,
            PointyDirection::TopLeft => Self::TopLeft,
        }
    }
}

impl TryFrom<CompassDirection> for PointyDirection {
    type Error = anyhow::Error;

    fn try_from(value: CompassDirection) -> Result<Self, Self::Error> {
        match value {
            CompassDirection::TopRight => Ok(Self::TopRight),
            CompassDirection::Right => Ok(Self::Right),
            CompassDirection::BottomRight => Ok(Self::BottomRight),
            CompassDirection::BottomLeft => Ok(Self::BottomLeft),
            CompassDirection::Left => Ok(Self::Left),
            CompassDirection::TopLeft => Ok(Self::TopLeft),
            CompassDirection::Top | CompassDirection::Bottom => Err(anyhow!(
                "{value:?} is not a side of a pointy-top hexagon"
            )),
        }
    }
}

/// The 6 side-to-side directions of a flat-top hexagon. Flat-top tiles have
/// horizontal top/bottom sides but no left/right side, so `Left` and `Right`
/// don't exist here.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FlatDirection {
    Top,
    TopRight,
    BottomRight,
    Bottom,
    BottomLeft,
    TopLeft,
}

impl StepDirection for FlatDirection {
    const ORIENTATION: HexOrientation = HexOrientation::FlatTop;

    const CLOCKWISE: &'static [Self] = &[
        Self::Top,
        Self::TopRight,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::TopLeft,
    ];

    fn to_vector(self) -> HexVector {
        match self {
            Self::TopLeft => HexVector::new(-1, 1, 0),
            Self::Top => HexVector::new(0, 1, -1),
            Self::TopRight => HexVector::new(1, 0, -1),
            Self::BottomRight => HexVector::new(1, -1, 0),
            Self::Bottom => HexVector::new(0, -1, 1),
            Self::BottomLeft => HexVector::new(-1, 0, 1),
        }
    }
}

impl From<FlatDirection> for CompassDirection {
    fn from(other: FlatDirection) -> Self {
        match other {
            FlatDirection::Top => Self::Top,
            FlatDirection::TopRight => Self::TopRight,
            FlatDirection::BottomRight => Self::BottomRight,
            FlatDirection::Bottom => Self::Bottom,
            FlatDirection::BottomLeft => Self::BottomLeft,
            FlatDirection::TopLeft => Self::TopLeft,
        }
    }
}

impl TryFrom<CompassDirection> for FlatDirection {
    type Error = anyhow::Error;

    fn try_from(value: CompassDirection) -> Result<Self, Self::Error> {
        match value {
            CompassDirection::Top => Ok(Self::Top),
            CompassDirection::TopRight => Ok(Self::TopRight),
            CompassDirection::BottomRight => Ok(Self::BottomRight),
            CompassDirection::Bottom => Ok(Self::Bottom),
            CompassDirection::BottomLeft => Ok(Self::BottomLeft),
            CompassDirection::TopLeft => Ok(Self::TopLeft),
            CompassDirection::Left | CompassDirection::Right => Err(anyhow!(
                "{value:?} is not a side of a flat-top hexagon"
            )),
        }
    }
}
