use std::fmt;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Woods,
    Jungle,
    Marsh,
    Oasis,
    Floodplains,
    GeothermalFissure,
    Reef,
    Volcano,
    VolcanicSoil,
    IceCaps,
}

impl Feature {
    pub fn name(&self) -> &str {
        match self {
            Feature::Woods => "woods",
            Feature::Jungle => "jungle",
            Feature::Marsh => "marsh",
            Feature::Oasis => "oasis",
            Feature::Floodplains => "floodplains",
            Feature::GeothermalFissure => "geothermal_fissure",
            Feature::Reef => "reef",
            Feature::Volcano => "volcano",
            Feature::VolcanicSoil => "volcanic_soil",
            Feature::IceCaps => "ice_caps",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
