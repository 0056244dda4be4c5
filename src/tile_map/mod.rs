//! This module defines the [`TileMap`] struct and its associated methods.
//! It stores every tile attribute of the hexagonal map and answers coordinate and neighbor queries.
//! Its method contains 2 parts:
//! 1. The common methods for creating and querying the map, included in the `mod.rs` file.
//! 2. The editing methods (placement, rivers, city limits, persistence) are defined in the [`impls`] module.

use std::collections::HashMap;

use enum_map::EnumMap;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{grid::Hex, map_parameters::EditorParameters, tile::Tile, tile_component::*};

mod impls;

pub use impls::*;

#[derive(PartialEq, Debug, Clone)]
pub struct TileMap {
    /// Radius of the hexagonal map. For a loaded map it is the largest distance of any tile from the origin.
    radius: u32,
    /// Axial coordinate of each tile. The index of the coordinate is equal to [`Tile::index()`].
    pub(crate) hex_list: Vec<Hex>,
    /// Reverse lookup from axial coordinate to tile.
    tile_lookup: HashMap<Hex, Tile>,
    /// Terrain of each tile. The index of the terrain is equal to [`Tile::index()`].
    pub(crate) terrain_list: Vec<Terrain>,
    /// Relief of each tile. The index of the relief is equal to [`Tile::index()`].
    pub(crate) relief_list: Vec<Relief>,
    /// Mountain sprite variant of each tile, in `1..=6`.
    pub(crate) mountain_variant_list: Vec<u8>,
    /// Feature of each tile. The index of the feature is equal to [`Tile::index()`].
    pub(crate) feature_list: Vec<Option<Feature>>,
    /// District of each tile. The index of the district is equal to [`Tile::index()`].
    pub(crate) district_list: Vec<Option<District>>,
    /// Resource of each tile. The index of the resource is equal to [`Tile::index()`].
    pub(crate) resource_list: Vec<Option<Resource>>,
    /// Improvement of each tile. The index of the improvement is equal to [`Tile::index()`].
    pub(crate) improvement_list: Vec<Option<Improvement>>,
    /// River edges of each tile. An edge shared by two tiles is stored on both of them.
    pub(crate) river_list: Vec<RiverEdges>,
    /// Whether each tile is within the city limits of some city center.
    /// Only [`TileMap::recompute_city_limits`] writes it.
    pub(crate) city_limits_list: Vec<bool>,
    /// Yields of each tile, as assigned by the last applied score.
    pub(crate) yields_list: Vec<EnumMap<YieldType, u32>>,
}

impl TileMap {
    /// Maximum number of distinct mountain sprites.
    pub const MOUNTAIN_VARIANT_COUNT: u8 = 6;

    /// Creates a blank hexagonal map with the radius given in `parameters`.
    ///
    /// Every tile starts as flat grassland without feature, district, resource, improvement or river.
    pub fn new(parameters: &EditorParameters) -> Self {
        let mut random_number_generator = StdRng::seed_from_u64(parameters.seed);
        let hex_list = Hex::ORIGIN.hexes_in_distance(parameters.radius);
        let mountain_variant_list = hex_list
            .iter()
            .map(|_| random_number_generator.random_range(1..=Self::MOUNTAIN_VARIANT_COUNT))
            .collect();

        let mut tile_map = Self::with_hexes(hex_list);
        tile_map.mountain_variant_list = mountain_variant_list;
        tile_map
    }

    /// Creates a blank map over an arbitrary set of coordinates.
    ///
    /// Duplicate coordinates must be removed by the caller.
    pub(crate) fn with_hexes(hex_list: Vec<Hex>) -> Self {
        let size = hex_list.len();
        let radius = hex_list
            .iter()
            .map(|hex| hex.length().unsigned_abs())
            .max()
            .unwrap_or_default();
        let tile_lookup = hex_list
            .iter()
            .enumerate()
            .map(|(index, &hex)| (hex, Tile::new(index)))
            .collect();

        Self {
            radius,
            hex_list,
            tile_lookup,
            terrain_list: vec![Terrain::default(); size],
            relief_list: vec![Relief::default(); size],
            mountain_variant_list: vec![1; size],
            feature_list: vec![None; size],
            district_list: vec![None; size],
            resource_list: vec![None; size],
            improvement_list: vec![None; size],
            river_list: vec![RiverEdges::empty(); size],
            city_limits_list: vec![false; size],
            yields_list: vec![EnumMap::default(); size],
        }
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of tiles in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.hex_list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hex_list.is_empty()
    }

    /// Returns the tile at `hex`, or `None` if `hex` is outside the map.
    #[inline]
    pub fn tile(&self, hex: Hex) -> Option<Tile> {
        self.tile_lookup.get(&hex).copied()
    }

    /// Returns an iterator over all tiles in the map.
    ///
    /// The order is stable for the lifetime of the map.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn all_tiles(&self) -> impl Iterator<Item = Tile> + use<> {
        (0..self.hex_list.len()).map(Tile::new)
    }

    /// Returns an iterator over all city center tiles.
    pub fn city_center_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.all_tiles().filter(|tile| tile.is_city_center(self))
    }
}
