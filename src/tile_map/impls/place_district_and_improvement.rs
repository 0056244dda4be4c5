use crate::{
    placement::PlacementRejection,
    ruleset::Ruleset,
    tile::Tile,
    tile_component::{District, Improvement},
    tile_map::TileMap,
};

impl TileMap {
    /// Places `district` on `tile` if the placement is legal. `None` clears the district and always succeeds.
    ///
    /// City limits are recomputed when a city center is placed, removed or replaced.
    /// On rejection the map is left unchanged.
    pub fn try_place_district(
        &mut self,
        tile: Tile,
        district: Option<District>,
        ruleset: &Ruleset,
    ) -> Result<(), PlacementRejection> {
        if let Some(district) = district {
            tile.check_district_placement(district, self, ruleset)?;
        }

        let previous_district = tile.district(self);
        tile.set_district(self, district);
        if previous_district == Some(District::CityCenter) || district == Some(District::CityCenter) {
            self.recompute_city_limits();
        }
        Ok(())
    }

    /// Builds `improvement` on `tile` if the placement is legal. `None` clears the improvement and always succeeds.
    pub fn try_place_improvement(
        &mut self,
        tile: Tile,
        improvement: Option<Improvement>,
        ruleset: &Ruleset,
    ) -> Result<(), PlacementRejection> {
        if let Some(improvement) = improvement {
            tile.check_improvement_placement(improvement, self, ruleset)?;
        }

        tile.set_improvement(self, improvement);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        grid::Hex,
        map_parameters::EditorParameters,
        placement::PlacementRejection,
        ruleset::Ruleset,
        tile_component::{District, Improvement, Terrain},
        tile_map::TileMap,
    };

    fn tile_map() -> TileMap {
        TileMap::new(&EditorParameters {
            radius: 4,
            seed: 2,
            ..Default::default()
        })
    }

    fn city_limits_count(tile_map: &TileMap) -> usize {
        tile_map
            .all_tiles()
            .filter(|tile| tile.within_city_limits(tile_map))
            .count()
    }

    #[test]
    fn placing_and_replacing_city_center_updates_city_limits() {
        let ruleset = Ruleset::new();
        let mut tile_map = tile_map();
        let center = tile_map.tile(Hex::ORIGIN).unwrap();

        tile_map
            .try_place_district(center, Some(District::CityCenter), &ruleset)
            .unwrap();
        assert_eq!(city_limits_count(&tile_map), 37);

        let campus = tile_map.tile(Hex::new(3, 0)).unwrap();
        tile_map
            .try_place_district(campus, Some(District::Campus), &ruleset)
            .unwrap();
        assert_eq!(campus.district(&tile_map), Some(District::Campus));

        // Replacing the city center drops its limits.
        tile_map
            .try_place_district(center, Some(District::Campus), &ruleset)
            .unwrap();
        assert_eq!(city_limits_count(&tile_map), 0);
        assert_eq!(
            tile_map.try_place_district(center, Some(District::Campus), &ruleset),
            Err(PlacementRejection::OutsideCityLimits)
        );
        // Districts placed earlier stay where they are.
        assert_eq!(campus.district(&tile_map), Some(District::Campus));
    }

    #[test]
    fn rejected_placement_leaves_the_map_unchanged() {
        let ruleset = Ruleset::new();
        let mut tile_map = tile_map();
        let tile = tile_map.tile(Hex::new(1, 1)).unwrap();
        tile.set_terrain(&mut tile_map, Terrain::Ocean);
        let before = tile_map.clone();

        assert_eq!(
            tile_map.try_place_district(tile, Some(District::CityCenter), &ruleset),
            Err(PlacementRejection::InvalidTerrain(Terrain::Ocean))
        );
        assert_eq!(
            tile_map.try_place_improvement(tile, Some(Improvement::Farm), &ruleset),
            Err(PlacementRejection::InvalidTerrain(Terrain::Ocean))
        );
        assert_eq!(tile_map, before);
    }

    #[test]
    fn clearing_always_succeeds() {
        let ruleset = Ruleset::new();
        let mut tile_map = tile_map();
        let tile = tile_map.tile(Hex::new(-1, 0)).unwrap();
        tile_map
            .try_place_improvement(tile, Some(Improvement::Farm), &ruleset)
            .unwrap();
        assert_eq!(tile.improvement(&tile_map), Some(Improvement::Farm));

        tile.set_mountain(&mut tile_map, true);
        tile_map.try_place_improvement(tile, None, &ruleset).unwrap();
        tile_map.try_place_district(tile, None, &ruleset).unwrap();
        assert_eq!(tile.improvement(&tile_map), None);
    }
}
