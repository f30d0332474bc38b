//! Cube-coordinate algebra and sparse tile storage for hexagonal grids. This
//! crate contains the coordinate math (construction, rounding,
//! neighbor/direction algebra, pixel conversion) and a bounds-checked tile
//! store over a hexagon-shaped region. Rendering and game logic are
//! implemented elsewhere; this crate only hands out pixel positions and
//! stored elements.
//!
//! ```
//! use hexgrid::{GridConfig, PointyDirection, TileProvider};
//!
//! let config = GridConfig {
//!     radius: 3,
//!     ..GridConfig::default()
//! };
//! let mut grid = TileProvider::new(config).unwrap();
//! grid.generate(|hex| format!("tile at {hex}"));
//! assert_eq!(grid.len(), 37);
//!
//! // Pixel positions round-trip back to the cell that produced them
//! let (cell, element) = grid.at_pixel(grid.random_coordinate(&mut rand::thread_rng()).to_pixel());
//! assert!(element.is_some());
//! let neighbor = cell.neighbor(PointyDirection::Right);
//! assert_eq!(cell.distance_to(neighbor), 1.0);
//! ```
//!
//! See [GridConfig] for the knobs a grid can be created with. All public
//! types are re-exported flat at the crate root.

mod config;
mod hex;
mod provider;
mod screen;

pub use crate::{
    config::{GridConfig, HexLayout},
    hex::{
        CompassDirection, FlatDirection, HexCoordinate, HexOrientation,
        HexVector, PointyDirection, StepDirection,
    },
    provider::{CoordinateMap, TileProvider},
    screen::{Point2, Size2},
};
