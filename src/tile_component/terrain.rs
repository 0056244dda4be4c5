use std::fmt;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    #[default]
    Grassland,
    Plains,
    Desert,
    Snow,
    Tundra,
    Coast,
    Ocean,
    Lake,
}

impl Terrain {
    pub fn name(&self) -> &str {
        match self {
            Terrain::Grassland => "grassland",
            Terrain::Plains => "plains",
            Terrain::Desert => "desert",
            Terrain::Snow => "snow",
            Terrain::Tundra => "tundra",
            Terrain::Coast => "coast",
            Terrain::Ocean => "ocean",
            Terrain::Lake => "lake",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
