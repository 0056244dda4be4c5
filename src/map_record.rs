//! The serialized form of a map, shared by save files and the scoring service.
//!
//! A map is a JSON object from tile key `"q,r"` to [`TileRecord`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tile_component::{
    District, Feature, Improvement, Resource, ResourceType, Terrain, YieldType,
};

/// Tile records keyed by `"q,r"`.
pub type MapRecord = BTreeMap<String, TileRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    pub q: i32,
    pub r: i32,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub hill: bool,
    #[serde(default)]
    pub mountain: bool,
    #[serde(rename = "mountain_no", default = "default_mountain_variant")]
    pub mountain_variant: u8,
    #[serde(default, with = "none_as_string")]
    pub feature: Option<Feature>,
    #[serde(default, with = "none_as_string")]
    pub district: Option<District>,
    #[serde(default, with = "none_as_string")]
    pub resource: Option<Resource>,
    /// Derived from `resource`. Ignored when loading.
    #[serde(default, with = "none_as_string")]
    pub resource_type: Option<ResourceType>,
    #[serde(default, with = "none_as_string")]
    pub improvement: Option<Improvement>,
    /// River flags ordered E, SE, SW, W, NW, NE.
    #[serde(default)]
    pub rivers: [bool; 6],
    #[serde(default)]
    pub yields: BTreeMap<YieldType, u32>,
    /// Derived from the city centers of the map. Ignored when loading.
    #[serde(default)]
    pub within_city_limits: bool,
}

fn default_mountain_variant() -> u8 {
    1
}

/// (De)serializes `Option<T>` as the variant name of `T`, or `"none"` for `None`.
mod none_as_string {
    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{DeserializeOwned, IntoDeserializer, value::StringDeserializer},
    };

    const NONE: &str = "none";

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_str(NONE),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        if name == NONE {
            return Ok(None);
        }
        let name_deserializer: StringDeserializer<D::Error> = name.into_deserializer();
        T::deserialize(name_deserializer).map(Some)
    }
}
