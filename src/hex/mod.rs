//! This module holds the coordinate algebra for hexagon grids.
//!
//! ## Coordinate Systems
//!
//! This crate uses two coordinate systems:
//!
//! ### Cube Coordinates
//!
//! Grid cells are identified by [cube coordinates as defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three integer components (`x`, `y`, `z`) with the
//! invariant **`x + y + z = 0`**. Even though a hex grid is laid out in two
//! dimensions, three-component coordinates make the math around distances,
//! rotation, and line drawing much simpler: every operation is plain
//! component-wise arithmetic, with the third axis keeping everything on the
//! zero-sum plane.
//!
//! Unlike a bare topological index, a [HexCoordinate] also carries the tile
//! `size` and [HexOrientation] of the grid it belongs to, so a coordinate is
//! always enough on its own to compute its screen position. The axial pair
//! `(q, r)` used by the pixel formulas is derived as `q = x`, `r = z` and
//! never stored.
//!
//! ### Screen Coordinates
//!
//! Screen space is a plain 2D Cartesian system used only at the crate's
//! boundary, for pixel input and output. The cell `(0, 0, 0)` projects onto
//! the screen origin, and **the y axis grows downward**, matching the display
//! convention of most UI toolkits:
//!
//! ```text
//! +-------------------+
//! |        -y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        +y         |
//! +-------------------+
//! ```
//!
//! Use [HexCoordinate::to_pixel] and [HexCoordinate::from_pixel] to convert
//! between the two systems. The formulas differ per orientation: pointy-top
//! and flat-top grids use dual axial bases, so each direction of the
//! conversion is defined separately for each orientation.

mod direction;
mod unit;

pub use self::{direction::*, unit::*};
