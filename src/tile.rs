use arrayvec::ArrayVec;
use enum_map::EnumMap;

use crate::{
    grid::{Direction, Hex},
    tile_component::{
        District, Feature, Improvement, Relief, Resource, ResourceType, RiverEdges, Terrain,
        YieldType,
    },
    tile_map::TileMap,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// `Tile` represents a tile on the map, where the `usize` is the index of the current tile.
///
/// The index is only meaningful for the [`TileMap`] that produced it.
/// When the map is replaced (e.g. a map is loaded), previously obtained tiles must be dropped.
pub struct Tile(usize);

impl Tile {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the index of the tile.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Returns the axial coordinate of the tile.
    #[inline]
    pub fn hex(&self, tile_map: &TileMap) -> Hex {
        tile_map.hex_list[self.0]
    }

    #[inline]
    pub fn terrain(&self, tile_map: &TileMap) -> Terrain {
        tile_map.terrain_list[self.0]
    }

    #[inline]
    pub fn relief(&self, tile_map: &TileMap) -> Relief {
        tile_map.relief_list[self.0]
    }

    #[inline]
    pub fn is_hill(&self, tile_map: &TileMap) -> bool {
        self.relief(tile_map).is_hill()
    }

    #[inline]
    pub fn is_mountain(&self, tile_map: &TileMap) -> bool {
        self.relief(tile_map).is_mountain()
    }

    /// Which of the mountain sprites (1..=6) is drawn when the tile is a mountain.
    #[inline]
    pub fn mountain_variant(&self, tile_map: &TileMap) -> u8 {
        tile_map.mountain_variant_list[self.0]
    }

    #[inline]
    pub fn feature(&self, tile_map: &TileMap) -> Option<Feature> {
        tile_map.feature_list[self.0]
    }

    #[inline]
    pub fn district(&self, tile_map: &TileMap) -> Option<District> {
        tile_map.district_list[self.0]
    }

    #[inline]
    pub fn resource(&self, tile_map: &TileMap) -> Option<Resource> {
        tile_map.resource_list[self.0]
    }

    /// The category of the tile's resource. Always derived from [`Tile::resource`].
    #[inline]
    pub fn resource_type(&self, tile_map: &TileMap) -> Option<ResourceType> {
        self.resource(tile_map)
            .map(|resource| resource.resource_type())
    }

    #[inline]
    pub fn improvement(&self, tile_map: &TileMap) -> Option<Improvement> {
        tile_map.improvement_list[self.0]
    }

    #[inline]
    pub fn rivers(&self, tile_map: &TileMap) -> RiverEdges {
        tile_map.river_list[self.0]
    }

    /// Whether the tile lies within [`TileMap::CITY_LIMITS_RADIUS`] of a city center.
    #[inline]
    pub fn within_city_limits(&self, tile_map: &TileMap) -> bool {
        tile_map.city_limits_list[self.0]
    }

    /// Yields assigned to the tile by the last applied score.
    #[inline]
    pub fn yields<'a>(&self, tile_map: &'a TileMap) -> &'a EnumMap<YieldType, u32> {
        &tile_map.yields_list[self.0]
    }

    pub fn is_city_center(&self, tile_map: &TileMap) -> bool {
        self.district(tile_map) == Some(District::CityCenter)
    }

    pub fn has_river(&self, tile_map: &TileMap) -> bool {
        !self.rivers(tile_map).is_empty()
    }

    pub fn has_river_in_direction(&self, direction: Direction, tile_map: &TileMap) -> bool {
        self.rivers(tile_map).has_edge(direction)
    }

    /// Retrieves the neighboring tile from the current tile in the specified direction.
    ///
    /// Returns `None` when the neighbor lies outside the map.
    pub fn neighbor_tile(&self, direction: Direction, tile_map: &TileMap) -> Option<Self> {
        tile_map.tile(self.hex(tile_map).neighbor(direction))
    }

    /// Returns the existing neighbors of the tile in direction order.
    ///
    /// Tiles on the border of the map have fewer than 6 neighbors.
    pub fn neighbor_tiles(&self, tile_map: &TileMap) -> ArrayVec<Self, 6> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor_tile(direction, tile_map))
            .collect()
    }

    /// Same as [`Tile::neighbor_tiles`] but keeps the direction each neighbor lies in.
    pub fn neighbor_tiles_with_direction(
        &self,
        tile_map: &TileMap,
    ) -> ArrayVec<(Direction, Self), 6> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                self.neighbor_tile(direction, tile_map)
                    .map(|tile| (direction, tile))
            })
            .collect()
    }

    /// Returns an iterator over the tiles within the given distance from the current tile, including the current tile.
    pub fn tiles_in_distance<'a>(
        &self,
        distance: u32,
        tile_map: &'a TileMap,
    ) -> impl Iterator<Item = Self> + use<'a> {
        self.hex(tile_map)
            .hexes_in_distance(distance)
            .into_iter()
            .filter_map(move |hex| tile_map.tile(hex))
    }

    pub fn set_terrain(&self, tile_map: &mut TileMap, terrain: Terrain) {
        tile_map.terrain_list[self.0] = terrain;
    }

    pub fn set_feature(&self, tile_map: &mut TileMap, feature: Option<Feature>) {
        tile_map.feature_list[self.0] = feature;
    }

    /// Sets the resource. The resource type follows automatically.
    pub fn set_resource(&self, tile_map: &mut TileMap, resource: Option<Resource>) {
        tile_map.resource_list[self.0] = resource;
    }

    /// Turns the hill on or off. Turning it on replaces a mountain.
    pub fn set_hill(&self, tile_map: &mut TileMap, hill: bool) {
        let relief = &mut tile_map.relief_list[self.0];
        match (hill, *relief) {
            (true, _) => *relief = Relief::Hill,
            (false, Relief::Hill) => *relief = Relief::Flat,
            (false, _) => {}
        }
    }

    /// Turns the mountain on or off. Turning it on replaces a hill.
    pub fn set_mountain(&self, tile_map: &mut TileMap, mountain: bool) {
        let relief = &mut tile_map.relief_list[self.0];
        match (mountain, *relief) {
            (true, _) => *relief = Relief::Mountain,
            (false, Relief::Mountain) => *relief = Relief::Flat,
            (false, _) => {}
        }
    }

    /// Writes the district without validation or city limit bookkeeping.
    pub(crate) fn set_district(&self, tile_map: &mut TileMap, district: Option<District>) {
        tile_map.district_list[self.0] = district;
    }

    /// Writes the improvement without validation.
    pub(crate) fn set_improvement(&self, tile_map: &mut TileMap, improvement: Option<Improvement>) {
        tile_map.improvement_list[self.0] = improvement;
    }

    /// Writes one river edge of this tile only. Callers keep the neighbor in sync.
    pub(crate) fn set_river_edge(&self, tile_map: &mut TileMap, direction: Direction, value: bool) {
        tile_map.river_list[self.0].set_edge(direction, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        grid::{Direction, Hex},
        map_parameters::EditorParameters,
        tile_component::{Relief, Resource, ResourceType},
        tile_map::TileMap,
    };

    fn small_map() -> TileMap {
        TileMap::new(&EditorParameters {
            radius: 2,
            seed: 7,
            ..Default::default()
        })
    }

    #[test]
    fn hill_and_mountain_are_exclusive() {
        let mut tile_map = small_map();
        let tile = tile_map.tile(Hex::ORIGIN).unwrap();

        tile.set_hill(&mut tile_map, true);
        assert!(tile.is_hill(&tile_map));
        tile.set_mountain(&mut tile_map, true);
        assert!(tile.is_mountain(&tile_map));
        assert!(!tile.is_hill(&tile_map));

        // Clearing the hill flag must not clear the mountain.
        tile.set_hill(&mut tile_map, false);
        assert_eq!(tile.relief(&tile_map), Relief::Mountain);

        tile.set_hill(&mut tile_map, true);
        assert_eq!(tile.relief(&tile_map), Relief::Hill);
        tile.set_hill(&mut tile_map, false);
        assert_eq!(tile.relief(&tile_map), Relief::Flat);
    }

    #[test]
    fn resource_type_follows_resource() {
        let mut tile_map = small_map();
        let tile = tile_map.tile(Hex::new(1, 0)).unwrap();
        assert_eq!(tile.resource_type(&tile_map), None);
        tile.set_resource(&mut tile_map, Some(Resource::Iron));
        assert_eq!(tile.resource_type(&tile_map), Some(ResourceType::Strategic));
        tile.set_resource(&mut tile_map, Some(Resource::Wheat));
        assert_eq!(tile.resource_type(&tile_map), Some(ResourceType::Bonus));
        tile.set_resource(&mut tile_map, None);
        assert_eq!(tile.resource_type(&tile_map), None);
    }

    #[test]
    fn border_tiles_have_fewer_neighbors() {
        let tile_map = small_map();
        let center = tile_map.tile(Hex::ORIGIN).unwrap();
        assert_eq!(center.neighbor_tiles(&tile_map).len(), 6);

        let corner = tile_map.tile(Hex::new(2, 0)).unwrap();
        let neighbors = corner.neighbor_tiles_with_direction(&tile_map);
        assert_eq!(neighbors.len(), 3);
        assert_eq!(
            neighbors.iter().map(|&(direction, _)| direction).collect::<Vec<_>>(),
            vec![Direction::SouthWest, Direction::West, Direction::NorthWest]
        );
        assert_eq!(corner.neighbor_tile(Direction::East, &tile_map), None);
    }

    #[test]
    fn neighbor_relation_is_symmetric_on_the_map() {
        let tile_map = small_map();
        for tile in tile_map.all_tiles() {
            for direction in Direction::ALL {
                if let Some(neighbor) = tile.neighbor_tile(direction, &tile_map) {
                    assert_eq!(
                        neighbor.neighbor_tile(direction.opposite(), &tile_map),
                        Some(tile)
                    );
                }
            }
        }
    }

    #[test]
    fn tiles_in_distance_are_clipped_to_the_map() {
        let tile_map = small_map();
        let corner = tile_map.tile(Hex::new(-2, 2)).unwrap();
        let within_one: Vec<_> = corner.tiles_in_distance(1, &tile_map).collect();
        assert_eq!(within_one.len(), 4);
        assert!(within_one.contains(&corner));
    }
}
