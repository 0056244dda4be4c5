use tracing::debug;

use crate::{
    placement::PlacementRejection,
    ruleset::{ImprovementPlacementRule, Ruleset},
    tile::Tile,
    tile_component::{Feature, Improvement, Terrain},
    tile_map::TileMap,
};

impl Tile {
    /// Checks whether `improvement` may be built on the tile.
    ///
    /// An improvement without rule in `ruleset` is always allowed.
    pub fn check_improvement_placement(
        &self,
        improvement: Improvement,
        tile_map: &TileMap,
        ruleset: &Ruleset,
    ) -> Result<(), PlacementRejection> {
        let Some(rule) = ruleset.improvement_rule(improvement) else {
            debug!(%improvement, "improvement has no placement rule");
            return Ok(());
        };

        let result = self
            .check_improvement_rule(rule, tile_map)
            .and_then(|()| self.check_improvement_specific(improvement, tile_map));
        if let Err(rejection) = &result {
            debug!(%improvement, hex = %self.hex(tile_map), %rejection, "improvement placement rejected");
        }
        result
    }

    pub fn can_place_improvement(
        &self,
        improvement: Improvement,
        tile_map: &TileMap,
        ruleset: &Ruleset,
    ) -> bool {
        self.check_improvement_placement(improvement, tile_map, ruleset)
            .is_ok()
    }

    fn check_improvement_rule(
        &self,
        rule: &ImprovementPlacementRule,
        tile_map: &TileMap,
    ) -> Result<(), PlacementRejection> {
        if self.is_mountain(tile_map) {
            return Err(PlacementRejection::Mountain);
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

        let resource = self.resource(tile_map);
        if let (Some(resource), Some(valid)) = (resource, &rule.valid_resources) {
            if !valid.contains(&resource) {
                return Err(PlacementRejection::InvalidResource(resource));
            }
        }
        if let Some(required) = &rule.required_resources {
            if !resource.is_some_and(|resource| required.contains(&resource)) {
                return Err(PlacementRejection::MissingRequiredResource(resource));
            }
        }

        Ok(())
    }

    /// Checks that only apply to one improvement type.
    fn check_improvement_specific(
        &self,
        improvement: Improvement,
        tile_map: &TileMap,
    ) -> Result<(), PlacementRejection> {
        let feature = self.feature(tile_map);
        match improvement {
            Improvement::Mine => {
                if self.is_hill(tile_map)
                    || feature == Some(Feature::VolcanicSoil)
                    || self.resource(tile_map).is_some()
                {
                    Ok(())
                } else {
                    Err(PlacementRejection::MineWithoutDeposit)
                }
            }
            Improvement::Farm => {
                if self.terrain(tile_map) == Terrain::Desert && feature != Some(Feature::Floodplains) {
                    Err(PlacementRejection::DesertFarmWithoutFloodplains)
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }
}
