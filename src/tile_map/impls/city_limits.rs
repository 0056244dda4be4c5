use crate::tile_map::TileMap;

impl TileMap {
    /// Tiles within this distance of a city center are within its city limits.
    pub const CITY_LIMITS_RADIUS: u32 = 3;

    /// Recomputes [`Tile::within_city_limits`](crate::tile::Tile::within_city_limits) for every tile.
    ///
    /// All flags are reset, then every tile within [`TileMap::CITY_LIMITS_RADIUS`] of a city center is marked,
    /// including the city center itself.
    pub fn recompute_city_limits(&mut self) {
        self.city_limits_list.fill(false);

        let within_city_limits: Vec<_> = self
            .city_center_tiles()
            .flat_map(|city_center| city_center.tiles_in_distance(Self::CITY_LIMITS_RADIUS, self))
            .collect();
        for tile in within_city_limits {
            self.city_limits_list[tile.index()] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        grid::Hex, map_parameters::EditorParameters, tile_component::District, tile_map::TileMap,
    };

    fn map_with_radius(radius: u32) -> TileMap {
        TileMap::new(&EditorParameters {
            radius,
            seed: 0,
            ..Default::default()
        })
    }

    #[test]
    fn single_city_center_marks_thirty_seven_tiles() {
        let mut tile_map = map_with_radius(4);
        let center = tile_map.tile(Hex::ORIGIN).unwrap();
        center.set_district(&mut tile_map, Some(District::CityCenter));
        tile_map.recompute_city_limits();

        let marked: Vec<_> = tile_map
            .all_tiles()
            .filter(|tile| tile.within_city_limits(&tile_map))
            .collect();
        assert_eq!(marked.len(), 37);
        for tile in tile_map.all_tiles() {
            assert_eq!(
                tile.within_city_limits(&tile_map),
                tile.hex(&tile_map).distance_to(Hex::ORIGIN) <= 3
            );
        }
    }

    #[test]
    fn removing_the_city_center_clears_every_flag() {
        let mut tile_map = map_with_radius(4);
        let tile = tile_map.tile(Hex::new(2, -1)).unwrap();
        tile.set_district(&mut tile_map, Some(District::CityCenter));
        tile_map.recompute_city_limits();
        assert!(tile.within_city_limits(&tile_map));

        tile.set_district(&mut tile_map, None);
        tile_map.recompute_city_limits();
        assert!(
            tile_map
                .all_tiles()
                .all(|tile| !tile.within_city_limits(&tile_map))
        );
    }

    #[test]
    fn city_limits_of_several_cities_are_united() {
        let mut tile_map = map_with_radius(4);
        for hex in [Hex::new(-4, 0), Hex::new(4, 0)] {
            let tile = tile_map.tile(hex).unwrap();
            tile.set_district(&mut tile_map, Some(District::CityCenter));
        }
        tile_map.recompute_city_limits();
        for tile in tile_map.all_tiles() {
            let hex = tile.hex(&tile_map);
            let expected =
                hex.distance_to(Hex::new(-4, 0)) <= 3 || hex.distance_to(Hex::new(4, 0)) <= 3;
            assert_eq!(tile.within_city_limits(&tile_map), expected);
        }
        assert!(!tile_map.tile(Hex::ORIGIN).unwrap().within_city_limits(&tile_map));
    }
}
