use arrayvec::ArrayVec;
use tracing::debug;

use crate::{
    placement::PlacementRejection,
    ruleset::{DistrictPlacementRule, Ruleset},
    tile::Tile,
    tile_component::{District, Feature, Terrain},
    tile_map::TileMap,
};

impl Tile {
    /// Checks whether `district` may be placed on the tile.
    ///
    /// A district without rule in `ruleset` is always allowed.
    /// Otherwise the checks run in a fixed order and the first failing one is returned.
    pub fn check_district_placement(
        &self,
        district: District,
        tile_map: &TileMap,
        ruleset: &Ruleset,
    ) -> Result<(), PlacementRejection> {
        let Some(rule) = ruleset.district_rule(district) else {
            return Ok(());
        };

        let result = self.check_district_rule(rule, tile_map);
        if let Err(rejection) = &result {
            debug!(%district, hex = %self.hex(tile_map), %rejection, "district placement rejected");
        }
        result
    }

    pub fn can_place_district(
        &self,
        district: District,
        tile_map: &TileMap,
        ruleset: &Ruleset,
    ) -> bool {
        self.check_district_placement(district, tile_map, ruleset)
            .is_ok()
    }

    fn check_district_rule(
        &self,
        rule: &DistrictPlacementRule,
        tile_map: &TileMap,
    ) -> Result<(), PlacementRejection> {
        if self.is_mountain(tile_map) {
            return Err(PlacementRejection::Mountain);
        }

        if rule.requires_city && !self.within_city_limits(tile_map) {
            return Err(PlacementRejection::OutsideCityLimits);
        }

        let terrain = self.terrain(tile_map);
        if rule.invalid_terrain.contains(&terrain) {
            return Err(PlacementRejection::InvalidTerrain(terrain));
        }
        if rule
            .required_terrain
            .as_ref()
            .is_some_and(|required| !required.contains(&terrain))
        {
            return Err(PlacementRejection::MissingRequiredTerrain(terrain));
        }

        let feature = self.feature(tile_map);
        if let Some(feature) = feature {
            if rule.invalid_features.contains(&feature) {
                return Err(PlacementRejection::InvalidFeature(feature));
            }
        }
        if let Some(required) = &rule.required_features {
            if !feature.is_some_and(|feature| required.contains(&feature)) {
                return Err(PlacementRejection::MissingRequiredFeature(feature));
            }
        }

        if let Some(resource_type) = self.resource_type(tile_map) {
            if rule.invalid_resource_types.contains(&resource_type) {
                return Err(PlacementRejection::InvalidResourceType(resource_type));
            }
        }

        if rule.requires_flat_land && self.is_hill(tile_map) {
            return Err(PlacementRejection::NotFlatLand);
        }

        let neighbor_tiles = self.neighbor_tiles(tile_map);

        if rule.requires_adjacent_land
            && !neighbor_tiles.iter().any(|neighbor_tile| {
                !matches!(neighbor_tile.terrain(tile_map), Terrain::Ocean | Terrain::Coast)
            })
        {
            return Err(PlacementRejection::NoAdjacentLand);
        }

        let next_to_city_center = neighbor_tiles
            .iter()
            .any(|neighbor_tile| neighbor_tile.is_city_center(tile_map));
        if rule.requires_city_center && !next_to_city_center {
            return Err(PlacementRejection::NoAdjacentCityCenter);
        }
        if rule.requires_not_city_center && next_to_city_center {
            return Err(PlacementRejection::AdjacentCityCenter);
        }

        if rule.requires_freshwater && !self.has_freshwater(tile_map) {
            return Err(PlacementRejection::NoFreshwater);
        }

        if rule.requires_two_river_edges {
            let river_edge_count = self.rivers(tile_map).edge_count();
            if river_edge_count < 2 {
                return Err(PlacementRejection::TooFewRiverEdges(river_edge_count));
            }
        }

        if rule.requires_connect_water_or_city && !self.connects_water_or_city(tile_map) {
            return Err(PlacementRejection::NoWaterOrCityConnection);
        }

        Ok(())
    }

    /// A tile has freshwater when a neighbor is a mountain, an oasis or a lake,
    /// or when it has a river edge other than the one shared with the adjacent city center.
    pub fn has_freshwater(&self, tile_map: &TileMap) -> bool {
        let next_to_freshwater_source =
            self.neighbor_tiles(tile_map).iter().any(|neighbor_tile| {
                neighbor_tile.is_mountain(tile_map)
                    || neighbor_tile.feature(tile_map) == Some(Feature::Oasis)
                    || neighbor_tile.terrain(tile_map) == Terrain::Lake
            });

        next_to_freshwater_source || self.has_river_away_from_city_center(tile_map)
    }

    /// Whether the tile has a river edge that is not the edge toward its first adjacent city center.
    ///
    /// Without adjacent city center any river edge counts.
    fn has_river_away_from_city_center(&self, tile_map: &TileMap) -> bool {
        let city_center_edge = self
            .neighbor_tiles_with_direction(tile_map)
            .into_iter()
            .find(|(_, neighbor_tile)| neighbor_tile.is_city_center(tile_map))
            .map(|(direction, _)| direction);

        self.rivers(tile_map)
            .directions()
            .any(|direction| Some(direction) != city_center_edge)
    }

    /// Whether coast, lake or city center neighbors lie on two sides of the tile
    /// whose direction indices differ by 2, 3 or 4.
    ///
    /// Indices differing by 5 (East and NorthEast) count as not connected.
    pub fn connects_water_or_city(&self, tile_map: &TileMap) -> bool {
        let candidate_indices: ArrayVec<usize, 6> = self
            .neighbor_tiles_with_direction(tile_map)
            .into_iter()
            .filter(|(_, neighbor_tile)| {
                matches!(neighbor_tile.terrain(tile_map), Terrain::Coast | Terrain::Lake)
                    || neighbor_tile.is_city_center(tile_map)
            })
            .map(|(direction, _)| direction.index())
            .collect();

        candidate_indices.iter().enumerate().any(|(i, &a)| {
            candidate_indices[i + 1..]
                .iter()
                .any(|&b| matches!(a.abs_diff(b), 2..=4))
        })
    }
}
