use std::collections::HashSet;

use enum_map::EnumMap;
use thiserror::Error;
use tracing::warn;

use crate::{
    grid::{Hex, ParseHexError},
    map_record::{MapRecord, TileRecord},
    tile::Tile,
    tile_component::{Relief, RiverEdges},
    tile_map::TileMap,
};

#[derive(Debug, Error)]
pub enum MapLoadError {
    #[error("invalid map JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("map contains no tiles")]
    Empty,
    #[error(transparent)]
    InvalidKey(#[from] ParseHexError),
    #[error("tile key \"{key}\" does not match its coordinate {hex}")]
    KeyMismatch { key: String, hex: Hex },
    #[error("tile {0} appears more than once")]
    DuplicateTile(Hex),
    #[error("tile {0} is both a hill and a mountain")]
    HillAndMountain(Hex),
}

impl Tile {
    /// Returns the serialized form of the tile, derived fields included.
    pub fn to_record(&self, tile_map: &TileMap) -> TileRecord {
        let hex = self.hex(tile_map);
        let relief = self.relief(tile_map);
        TileRecord {
            q: hex.q(),
            r: hex.r(),
            terrain: self.terrain(tile_map),
            hill: relief.is_hill(),
            mountain: relief.is_mountain(),
            mountain_variant: self.mountain_variant(tile_map),
            feature: self.feature(tile_map),
            district: self.district(tile_map),
            resource: self.resource(tile_map),
            resource_type: self.resource_type(tile_map),
            improvement: self.improvement(tile_map),
            rivers: self.rivers(tile_map).to_array(),
            yields: self
                .yields(tile_map)
                .iter()
                .filter(|(_, amount)| **amount > 0)
                .map(|(yield_type, amount)| (yield_type, *amount))
                .collect(),
            within_city_limits: self.within_city_limits(tile_map),
        }
    }
}

impl TileMap {
    pub fn to_record(&self) -> MapRecord {
        self.all_tiles()
            .map(|tile| (tile.hex(self).to_string(), tile.to_record(self)))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_record())
    }

    /// Builds a new map from its serialized form.
    ///
    /// The stored resource types and city limits are ignored and derived again.
    /// A river edge recorded on only one of its two tiles is added to the other one.
    pub fn from_record(record: &MapRecord) -> Result<Self, MapLoadError> {
        if record.is_empty() {
            return Err(MapLoadError::Empty);
        }

        let mut seen = HashSet::with_capacity(record.len());
        let mut hex_list = Vec::with_capacity(record.len());
        let mut relief_list = Vec::with_capacity(record.len());
        for (key, tile_record) in record {
            let hex: Hex = key.parse()?;
            if hex != Hex::new(tile_record.q, tile_record.r) {
                return Err(MapLoadError::KeyMismatch {
                    key: key.clone(),
                    hex: Hex::new(tile_record.q, tile_record.r),
                });
            }
            if !seen.insert(hex) {
                return Err(MapLoadError::DuplicateTile(hex));
            }
            let relief = Relief::from_flags(tile_record.hill, tile_record.mountain)
                .ok_or(MapLoadError::HillAndMountain(hex))?;
            hex_list.push(hex);
            relief_list.push(relief);
        }

        let mut tile_map = Self::with_hexes(hex_list);
        tile_map.relief_list = relief_list;
        for (index, tile_record) in record.values().enumerate() {
            tile_map.terrain_list[index] = tile_record.terrain;
            tile_map.mountain_variant_list[index] = tile_record
                .mountain_variant
                .clamp(1, Self::MOUNTAIN_VARIANT_COUNT);
            tile_map.feature_list[index] = tile_record.feature;
            tile_map.district_list[index] = tile_record.district;
            tile_map.resource_list[index] = tile_record.resource;
            tile_map.improvement_list[index] = tile_record.improvement;
            tile_map.river_list[index] = RiverEdges::from_array(tile_record.rivers);
            let mut yields = EnumMap::default();
            for (&yield_type, &amount) in &tile_record.yields {
                yields[yield_type] = amount;
            }
            tile_map.yields_list[index] = yields;
        }

        let repaired = tile_map.repair_river_symmetry();
        if repaired > 0 {
            warn!(repaired, "river edges recorded on one side only were mirrored");
        }
        tile_map.recompute_city_limits();

        Ok(tile_map)
    }

    pub fn from_json(json: &str) -> Result<Self, MapLoadError> {
        let record: MapRecord = serde_json::from_str(json)?;
        Self::from_record(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::MapLoadError;
    use crate::{
        grid::{Direction, Hex},
        map_parameters::EditorParameters,
        ruleset::Ruleset,
        tile_component::{District, Feature, Improvement, Resource, ResourceType, Terrain},
        tile_map::TileMap,
    };

    fn edited_map() -> TileMap {
        let ruleset = Ruleset::new();
        let mut tile_map = TileMap::new(&EditorParameters {
            radius: 4,
            seed: 17,
            ..Default::default()
        });
        let center = tile_map.tile(Hex::ORIGIN).unwrap();
        tile_map
            .try_place_district(center, Some(District::CityCenter), &ruleset)
            .unwrap();

        let desert = tile_map.tile(Hex::new(2, -1)).unwrap();
        desert.set_terrain(&mut tile_map, Terrain::Desert);
        desert.set_feature(&mut tile_map, Some(Feature::Floodplains));
        desert.set_resource(&mut tile_map, Some(Resource::Wheat));
        tile_map
            .try_place_improvement(desert, Some(Improvement::Farm), &ruleset)
            .unwrap();
        tile_map.toggle_river(desert, Direction::SouthWest);

        let hill = tile_map.tile(Hex::new(-4, 1)).unwrap();
        hill.set_hill(&mut tile_map, true);
        let mountain = tile_map.tile(Hex::new(0, 4)).unwrap();
        mountain.set_mountain(&mut tile_map, true);
        let lake = tile_map.tile(Hex::new(4, -4)).unwrap();
        lake.set_terrain(&mut tile_map, Terrain::Lake);
        tile_map.toggle_river(lake, Direction::East);
        tile_map
    }

    #[test]
    fn round_trip_reproduces_every_tile() {
        let tile_map = edited_map();
        let json = tile_map.to_json().unwrap();
        let loaded = TileMap::from_json(&json).unwrap();

        assert_eq!(loaded.len(), tile_map.len());
        assert_eq!(loaded.radius(), tile_map.radius());
        assert_eq!(loaded.to_record(), tile_map.to_record());
        assert!(loaded.rivers_are_symmetric());
    }

    #[test]
    fn derived_fields_are_recomputed() {
        let tile_map = edited_map();
        let mut record = tile_map.to_record();
        for tile_record in record.values_mut() {
            tile_record.within_city_limits = !tile_record.within_city_limits;
            tile_record.resource_type = Some(ResourceType::Artifact);
        }

        let loaded = TileMap::from_record(&record).unwrap();
        assert_eq!(loaded.to_record(), tile_map.to_record());
        let desert = loaded.tile(Hex::new(2, -1)).unwrap();
        assert_eq!(desert.resource_type(&loaded), Some(ResourceType::Bonus));
        assert!(desert.within_city_limits(&loaded));
    }

    #[test]
    fn malformed_maps_are_rejected() {
        assert!(matches!(
            TileMap::from_json("not json"),
            Err(MapLoadError::Json(_))
        ));
        assert!(matches!(TileMap::from_json("{}"), Err(MapLoadError::Empty)));
        assert!(matches!(
            TileMap::from_json(r#"{ "zero": { "q": 0, "r": 0 } }"#),
            Err(MapLoadError::InvalidKey(_))
        ));
        assert!(matches!(
            TileMap::from_json(r#"{ "1,0": { "q": 0, "r": 1 } }"#),
            Err(MapLoadError::KeyMismatch { .. })
        ));
        assert!(matches!(
            TileMap::from_json(r#"{ "0,0": { "q": 0, "r": 0 }, " 0,0": { "q": 0, "r": 0 } }"#),
            Err(MapLoadError::DuplicateTile(_))
        ));
        assert!(matches!(
            TileMap::from_json(r#"{ "0,0": { "q": 0, "r": 0, "hill": true, "mountain": true } }"#),
            Err(MapLoadError::HillAndMountain(_))
        ));
    }

    #[test]
    fn one_sided_rivers_are_mirrored_on_load() {
        let loaded = TileMap::from_json(
            r#"{
                "0,0": { "q": 0, "r": 0, "rivers": [true, false, false, false, false, false] },
                "1,0": { "q": 1, "r": 0 }
            }"#,
        )
        .unwrap();
        let east = loaded.tile(Hex::new(1, 0)).unwrap();
        assert!(east.has_river_in_direction(Direction::West, &loaded));
        assert_eq!(loaded.radius(), 1);
    }
}
