use crate::{
    config::{GridConfig, HexLayout},
    hex::{HexCoordinate, HexOrientation},
    screen::{Point2, Size2},
};
use anyhow::Context;
use fnv::FnvBuildHasher;
use log::{debug, info, trace};
use rand::Rng;
use std::{cmp, collections::HashMap};
use validator::Validate;

/// A map of hex coordinates to some `T`. No iteration-order guarantee.
pub type CoordinateMap<T> = HashMap<HexCoordinate, T, FnvBuildHasher>;

/// Bounds-checked sparse storage for one hexagon-shaped region of a hex grid.
///
/// A provider owns a mapping of [HexCoordinate] to an arbitrary element type,
/// restricted to the centered hexagon of cells within `radius` steps of the
/// origin. For a region of radius `r` the furthest cells are all `r` steps
/// from the center, and a filled region holds `3r(r+1)+1` elements. The
/// element type is fully opaque to the provider.
///
/// Storage is sparse: cells can be empty, and lookups at empty (or
/// out-of-region) cells simply return nothing. Inserting outside the region
/// is silently dropped rather than treated as an error, because out-of-region
/// coordinates are a normal outcome of pixel hit testing and path
/// interpolation near the region's edge.
///
/// The provider is single-threaded; wrap it in a lock if it ever needs to be
/// shared across threads.
#[derive(Clone, Debug)]
pub struct TileProvider<T> {
    /// The config this grid was created with. Fixed for the provider's
    /// lifetime; only the stored elements change.
    config: GridConfig,

    /// The stored elements, keyed by their cell
    tiles: CoordinateMap<T>,
}

impl<T> TileProvider<T> {
    /// Create an empty provider for the region described by the given config.
    /// Returns an error if the config is invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        Ok(Self {
            config,
            tiles: CoordinateMap::default(),
        })
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> HexLayout {
        self.config.layout
    }

    pub fn radius(&self) -> u16 {
        self.config.radius
    }

    pub fn tile_size(&self) -> f64 {
        self.config.tile_size
    }

    pub fn tile_orientation(&self) -> HexOrientation {
        self.config.tile_orientation
    }

    pub fn lazy_generation(&self) -> bool {
        self.config.lazy_generation
    }

    /// The number of elements currently stored
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over all stored elements and their cells, in no particular
    /// order
    pub fn iter(&self) -> impl Iterator<Item = (&HexCoordinate, &T)> {
        self.tiles.iter()
    }

    /// The number of cells in a *filled* region of this radius (the centered
    /// hexagonal number `3r(r+1)+1`), regardless of how many elements are
    /// currently stored. Radius 0 means 1 cell, 1 is 7, 2 is 19, etc.
    pub fn total_tile_count(&self) -> usize {
        let r = self.config.radius as usize;
        3 * r * (r + 1) + 1
    }

    /// The bounding box of the full rendered region at this grid's tile size.
    /// A hexagon region spans `√3·s·(2r+1)` pixels across its tiles' flat
    /// sides and `s·(3r+2)` across their vertices; which of those is the
    /// width and which is the height swaps with the orientation.
    pub fn region_size(&self) -> Size2 {
        let radius = self.config.radius as f64;
        let size = self.config.tile_size;
        let across_sides = 3.0_f64.sqrt() * size * (2.0 * radius + 1.0);
        let across_vertices = size * (3.0 * radius + 2.0);
        match self.config.tile_orientation {
            HexOrientation::PointyTop => {
                Size2::new(across_sides, across_vertices)
            }
            HexOrientation::FlatTop => {
                Size2::new(across_vertices, across_sides)
            }
        }
    }

    /// Check whether a cell falls inside this provider's region: every
    /// component within `[-radius, radius]` and the zero-sum invariant
    /// intact.
    pub fn in_bounds(&self, hex: HexCoordinate) -> bool {
        let r = self.config.radius as i32;
        hex.x().abs() <= r
            && hex.y().abs() <= r
            && hex.z().abs() <= r
            && hex.x() + hex.y() + hex.z() == 0
    }

    /// Fill the region eagerly: invoke the factory once per in-region cell,
    /// in a fixed row-by-row order, and store each returned element. If the
    /// provider was configured for lazy generation this is a no-op and the
    /// caller populates via [Self::insert] instead.
    pub fn generate(&mut self, element_fn: impl FnMut(HexCoordinate) -> T) {
        if self.config.lazy_generation {
            trace!("lazy generation enabled, skipping eager fill");
            return;
        }

        match self.config.layout {
            HexLayout::Hexagon => self.generate_hexagon(element_fn),
        }
    }

    fn generate_hexagon(
        &mut self,
        mut element_fn: impl FnMut(HexCoordinate) -> T,
    ) {
        info!(
            "Generating hexagon region with radius {} ({} tiles)",
            self.config.radius,
            self.total_tile_count()
        );

        let radius = self.config.radius as i32;
        self.tiles.reserve(self.total_tile_count());
        for dx in -radius..=radius {
            // Clamping dy keeps the region a hexagon rather than a diamond
            // https://www.redblobgames.com/grids/hexagons/#range
            let dy_min = cmp::max(-radius, -dx - radius);
            let dy_max = cmp::min(radius, -dx + radius);
            for dy in dy_min..=dy_max {
                let hex = HexCoordinate::from_axes(
                    dx,
                    dy,
                    -dx - dy,
                    self.config.tile_size,
                    self.config.tile_orientation,
                );
                let element = element_fn(hex);
                self.tiles.insert(hex, element);
            }
        }
    }

    /// Store an element at the given cell. Inserting outside the region is
    /// silently dropped: nothing is stored and no error is raised.
    pub fn insert(&mut self, hex: HexCoordinate, element: T) {
        if !self.in_bounds(hex) {
            trace!("dropping insert at out-of-region cell {hex}");
            return;
        }
        self.tiles.insert(hex, element);
    }

    /// Get the element stored at a cell, if any. Out-of-region cells are
    /// never stored, so absence covers them naturally.
    pub fn get(&self, hex: HexCoordinate) -> Option<&T> {
        self.tiles.get(&hex)
    }

    pub fn get_mut(&mut self, hex: HexCoordinate) -> Option<&mut T> {
        self.tiles.get_mut(&hex)
    }

    /// Combined write accessor: `Some` performs a bounds-checked insert,
    /// `None` removes whatever is stored at the cell. Read through
    /// [Self::get].
    pub fn set(&mut self, hex: HexCoordinate, value: Option<T>) {
        match value {
            Some(element) => self.insert(hex, element),
            None => self.relocate(hex, None),
        }
    }

    /// Resolve a pixel position to its cell and look that cell up. Both the
    /// resolved coordinate and the (possibly absent) element are returned,
    /// since callers usually need the cell even when it's empty.
    pub fn at_pixel(&self, pixel: Point2) -> (HexCoordinate, Option<&T>) {
        let hex = HexCoordinate::from_pixel(
            pixel,
            self.config.tile_size,
            self.config.tile_orientation,
        );
        (hex, self.tiles.get(&hex))
    }

    /// Remove the element at `from` and, if a destination is given, re-insert
    /// it there. The destination is **not** bounds-checked and any element
    /// already stored there is overwritten. If nothing is stored at the
    /// source, or the source equals the destination, nothing happens.
    pub fn relocate(
        &mut self,
        from: HexCoordinate,
        to: Option<HexCoordinate>,
    ) {
        if to == Some(from) {
            return;
        }

        let Some(element) = self.tiles.remove(&from) else {
            return;
        };

        match to {
            Some(destination) => {
                debug!("moving element from {from} to {destination}");
                self.tiles.insert(destination, element);
            }
            None => {
                debug!("clearing element at {from}");
            }
        }
    }

    /// Draw a uniformly distributed in-region cell. The first component is
    /// drawn from `[-r, r]`, the second from the sub-range that keeps their
    /// sum in `[-r, r]`, and the third is derived; that construction keeps
    /// every component in bounds, so a derived component out of range means
    /// the sampling math itself is broken and panics.
    pub fn random_coordinate(&self, rng: &mut impl Rng) -> HexCoordinate {
        let r = self.config.radius as i32;
        let x = rng.gen_range(-r..=r);
        let y = rng.gen_range(cmp::max(-r, -r - x)..=cmp::min(r, r - x));
        let z = -(x + y);
        assert!(
            z.abs() <= r,
            "sampled cell ({x}, {y}, {z}) outside region of radius {r}"
        );

        HexCoordinate::from_axes(
            x,
            y,
            z,
            self.config.tile_size,
            self.config.tile_orientation,
        )
    }

    /// Compute the straight line of cells from `start` to `end`, inclusive of
    /// both. For cells at hex distance `D`, the result holds `D + 1`
    /// coordinates ordered start-to-end, each consecutive pair adjacent. The
    /// line is produced by interpolating each cube axis independently and
    /// rounding back onto the grid; it does not consult stored elements, so
    /// it is interpolation, not obstacle-aware search.
    pub fn path(
        &self,
        start: HexCoordinate,
        end: HexCoordinate,
    ) -> Vec<HexCoordinate> {
        let distance = start.distance_to(end) as i32;
        if distance == 0 {
            return vec![start];
        }

        let mut results = Vec::with_capacity(distance as usize + 1);
        for i in 0..=distance {
            let t = i as f64 / distance as f64;
            let (x, y, z) = HexCoordinate::round(
                lerp(start.x(), end.x(), t),
                lerp(start.y(), end.y(), t),
                lerp(start.z(), end.z(), t),
            );
            results.push(HexCoordinate::from_axes(
                x,
                y,
                z,
                self.config.tile_size,
                self.config.tile_orientation,
            ));
        }
        results
    }

    /// Discard every stored element. The region itself (radius, tile size,
    /// orientation, layout) is unaffected.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

fn lerp(a: i32, b: i32, t: f64) -> f64 {
    a as f64 + (b - a) as f64 * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn provider(radius: u16) -> TileProvider<HexCoordinate> {
        let config = GridConfig {
            radius,
            tile_size: 10.0,
            ..GridConfig::default()
        };
        TileProvider::new(config).unwrap()
    }

    fn hex(provider: &TileProvider<HexCoordinate>, x: i32, y: i32, z: i32) -> HexCoordinate {
        HexCoordinate::from_axes(
            x,
            y,
            z,
            provider.tile_size(),
            provider.tile_orientation(),
        )
    }

    #[test]
    fn test_total_tile_count() {
        assert_eq!(provider(0).total_tile_count(), 1);
        assert_eq!(provider(1).total_tile_count(), 7);
        assert_eq!(provider(2).total_tile_count(), 19);
        assert_eq!(provider(3).total_tile_count(), 37);
        assert_eq!(provider(4).total_tile_count(), 61);
    }

    #[test]
    fn test_generate_fills_region() {
        let mut provider = provider(3);
        provider.generate(|hex| hex);

        assert_eq!(provider.len(), 37);
        for (cell, element) in provider.iter() {
            assert!(provider.in_bounds(*cell));
            // The factory was called with the cell it was storing to
            assert_eq!(element, cell);
        }
    }

    #[test]
    fn test_lazy_generation_skips_fill() {
        let config = GridConfig {
            radius: 3,
            lazy_generation: true,
            ..GridConfig::default()
        };
        let mut provider: TileProvider<HexCoordinate> =
            TileProvider::new(config).unwrap();
        provider.generate(|hex| hex);
        assert!(provider.is_empty());

        // Lazy population goes through insert
        let cell = hex(&provider, 3, 0, -3);
        provider.insert(cell, cell);
        assert_eq!(provider.get(cell), Some(&cell));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GridConfig {
            radius: 10001,
            ..GridConfig::default()
        };
        assert!(TileProvider::<()>::new(config).is_err());
    }

    #[test]
    fn test_insert_out_of_region_dropped() {
        let mut provider = provider(2);
        let outside = hex(&provider, 3, 0, -3);
        provider.insert(outside, outside);
        assert_eq!(provider.len(), 0);
        assert_eq!(provider.get(outside), None);

        let edge = hex(&provider, 2, -2, 0);
        provider.insert(edge, edge);
        assert_eq!(provider.get(edge), Some(&edge));
    }

    #[test]
    fn test_in_bounds() {
        let provider = provider(2);
        assert!(provider.in_bounds(hex(&provider, 0, 0, 0)));
        assert!(provider.in_bounds(hex(&provider, 2, 0, -2)));
        assert!(provider.in_bounds(hex(&provider, -1, 2, -1)));
        assert!(!provider.in_bounds(hex(&provider, 3, -3, 0)));
        assert!(!provider.in_bounds(hex(&provider, 3, -1, -2)));
    }

    #[test]
    fn test_set_accessor() {
        let mut provider = provider(2);
        let cell = hex(&provider, 1, -1, 0);

        provider.set(cell, Some(cell));
        assert_eq!(provider.get(cell), Some(&cell));

        provider.set(cell, None);
        assert_eq!(provider.get(cell), None);

        // Writing to an out-of-region cell is still bounds-checked
        let outside = hex(&provider, 0, 3, -3);
        provider.set(outside, Some(outside));
        assert_eq!(provider.get(outside), None);
    }

    #[test]
    fn test_relocate() {
        let mut provider = provider(2);
        let a = hex(&provider, 0, 0, 0);
        let b = hex(&provider, 1, 0, -1);
        let c = hex(&provider, 0, 1, -1);

        // Empty source leaves everything untouched
        provider.insert(b, b);
        provider.relocate(a, Some(b));
        assert_eq!(provider.get(b), Some(&b));
        assert_eq!(provider.len(), 1);

        // Moving overwrites the destination
        provider.insert(a, a);
        provider.relocate(a, Some(b));
        assert_eq!(provider.get(a), None);
        assert_eq!(provider.get(b), Some(&a));

        // Source == destination is a no-op, not a remove
        provider.relocate(b, Some(b));
        assert_eq!(provider.get(b), Some(&a));

        // No destination means plain removal
        provider.relocate(b, None);
        assert_eq!(provider.get(b), None);

        // Destination is not bounds-checked
        let outside = hex(&provider, 3, 0, -3);
        provider.insert(c, c);
        provider.relocate(c, Some(outside));
        assert_eq!(provider.get(c), None);
        assert_eq!(provider.get(outside), Some(&c));
    }

    #[test]
    fn test_at_pixel() {
        let mut provider = provider(3);
        provider.generate(|hex| hex);

        let target = hex(&provider, 1, 0, -1);
        let (resolved, element) = provider.at_pixel(target.to_pixel());
        assert_eq!(resolved, target);
        assert_eq!(element, Some(&target));

        // A pixel outside the region still resolves to a cell, just an
        // empty one
        let (resolved, element) =
            provider.at_pixel(Point2::new(1000.0, 1000.0));
        assert!(!provider.in_bounds(resolved));
        assert_eq!(element, None);
    }

    #[test]
    fn test_random_coordinate_in_bounds() {
        let provider = provider(4);
        let mut rng = Pcg64::seed_from_u64(12345);
        for _ in 0..1000 {
            let cell = provider.random_coordinate(&mut rng);
            assert!(provider.in_bounds(cell), "{cell} out of bounds");
        }
    }

    #[test]
    fn test_path_single_cell() {
        let provider = provider(3);
        let a = hex(&provider, 2, -1, -1);
        assert_eq!(provider.path(a, a), vec![a]);
    }

    #[test]
    fn test_path_properties() {
        let provider = provider(4);
        let start = hex(&provider, -3, 3, 0);
        let end = hex(&provider, 2, -1, -1);
        let path = provider.path(start, end);

        let distance = start.distance_to(end) as usize;
        assert_eq!(path.len(), distance + 1);
        assert_eq!(path[0], start);
        assert_eq!(path[path.len() - 1], end);
        for pair in path.windows(2) {
            assert_eq!(pair[0].distance_to(pair[1]), 1.0);
        }
    }

    #[test]
    fn test_clear() {
        let mut provider = provider(2);
        provider.generate(|hex| hex);
        assert_eq!(provider.len(), 19);

        provider.clear();
        assert!(provider.is_empty());
        // The region itself is unaffected
        assert_eq!(provider.radius(), 2);
        assert_eq!(provider.total_tile_count(), 19);
    }

    #[test]
    fn test_region_size() {
        let pointy = provider(3);
        let size = pointy.region_size();
        // √3·10·7 across the flat sides, 10·11 across the vertices
        assert_approx_eq!(size.width, 121.243557, 1e-6);
        assert_approx_eq!(size.height, 110.0, 1e-6);

        let config = GridConfig {
            radius: 3,
            tile_size: 10.0,
            tile_orientation: HexOrientation::FlatTop,
            ..GridConfig::default()
        };
        let flat: TileProvider<()> = TileProvider::new(config).unwrap();
        let flipped = flat.region_size();
        assert_approx_eq!(flipped.width, size.height, 1e-9);
        assert_approx_eq!(flipped.height, size.width, 1e-9);
    }
}
