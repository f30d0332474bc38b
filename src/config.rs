use crate::{hex::HexOrientation, screen::Size2};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The shape of the region a [TileProvider](crate::TileProvider) manages.
/// Currently only hexagon-shaped regions (a centered hexagon of cells) are
/// supported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexLayout {
    Hexagon,
}

/// Configuration that defines a tile grid. Two providers created with the
/// same config manage the same region; only their stored elements can differ.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Shape of the managed region
    pub layout: HexLayout,

    /// Distance from the center of the region to its edge, in cells. 0 means
    /// the region is exactly 1 cell, 1 means 7 cells, and so on (the region
    /// holds `3r(r+1)+1` cells).
    #[validate(range(min = 0, max = 10000))]
    pub radius: u16,

    /// Center-to-vertex radius of a single tile, in pixels
    #[validate(range(min = 0.0))]
    pub tile_size: f64,

    /// Which way the tiles are turned. This fixes the set of steppable
    /// directions and the pixel projection for every coordinate in the grid.
    pub tile_orientation: HexOrientation,

    /// If set, [generate](crate::TileProvider::generate) is a no-op and the
    /// region is populated one insertion at a time instead.
    pub lazy_generation: bool,
}

impl GridConfig {
    /// Build a config whose tile size is derived from a target on-screen
    /// frame: the rendered region's largest dimension will match the frame's
    /// smaller dimension. The widest span of a hexagon region is
    /// `√3 · tile_size · (2·radius + 1)`, so the tile size falls out as
    /// `min(width, height) / (√3 · (2·radius + 1))`.
    pub fn fit_frame(radius: u16, frame: Size2) -> Self {
        let spread = 3.0_f64.sqrt() * (2.0 * radius as f64 + 1.0);
        Self {
            radius,
            tile_size: frame.min_dimension() / spread,
            ..Self::default()
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layout: HexLayout::Hexagon,
            radius: 10,
            tile_size: 10.0,
            tile_orientation: HexOrientation::PointyTop,
            lazy_generation: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_fit_frame() {
        let config = GridConfig::fit_frame(3, Size2::new(800.0, 600.0));
        assert_eq!(config.radius, 3);
        // 600 / (√3 · 7)
        assert_approx_eq!(config.tile_size, 49.487166, 1e-6);

        // Frame orientation doesn't matter, only the smaller dimension
        let flipped = GridConfig::fit_frame(3, Size2::new(600.0, 800.0));
        assert_approx_eq!(config.tile_size, flipped.tile_size, 1e-9);
    }

    #[test]
    fn test_validation() {
        assert!(GridConfig::default().validate().is_ok());
        assert!(GridConfig {
            radius: 10001,
            ..GridConfig::default()
        }
        .validate()
        .is_err());
        assert!(GridConfig {
            tile_size: -1.0,
            ..GridConfig::default()
        }
        .validate()
        .is_err());
    }
}
