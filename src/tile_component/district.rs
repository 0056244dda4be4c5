use std::fmt;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum District {
    CityCenter,
    Campus,
    TheaterSquare,
    HolySite,
    Encampment,
    CommercialHub,
    Harbor,
    IndustrialZone,
    Preserve,
    EntertainmentComplex,
    WaterPark,
    Aqueduct,
    Neighborhood,
    Canal,
    Dam,
    Aerodrome,
    Spaceport,
    GovernmentPlaza,
    DiplomaticQuarter,
}

impl District {
    pub fn name(&self) -> &str {
        match self {
            District::CityCenter => "city_center",
            District::Campus => "campus",
            District::TheaterSquare => "theater_square",
            District::HolySite => "holy_site",
            District::Encampment => "encampment",
            District::CommercialHub => "commercial_hub",
            District::Harbor => "harbor",
            District::IndustrialZone => "industrial_zone",
            District::Preserve => "preserve",
            District::EntertainmentComplex => "entertainment_complex",
            District::WaterPark => "water_park",
            District::Aqueduct => "aqueduct",
            District::Neighborhood => "neighborhood",
            District::Canal => "canal",
            District::Dam => "dam",
            District::Aerodrome => "aerodrome",
            District::Spaceport => "spaceport",
            District::GovernmentPlaza => "government_plaza",
            District::DiplomaticQuarter => "diplomatic_quarter",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
