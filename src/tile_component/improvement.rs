use std::fmt;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Improvement {
    Farm,
    Mine,
    Quarry,
    Plantation,
    Camp,
    Pasture,
    FishingBoats,
    LumberMill,
}

impl Improvement {
    pub fn name(&self) -> &str {
        match self {
            Improvement::Farm => "farm",
            Improvement::Mine => "mine",
            Improvement::Quarry => "quarry",
            Improvement::Plantation => "plantation",
            Improvement::Camp => "camp",
            Improvement::Pasture => "pasture",
            Improvement::FishingBoats => "fishing_boats",
            Improvement::LumberMill => "lumber_mill",
        }
    }
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
