use std::fmt;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

#[derive(
    Enum, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize, Debug,
)]
#[serde(rename_all = "snake_case")]
pub enum YieldType {
    Science,
    Culture,
    Gold,
    Faith,
    Production,
    Food,
}

impl YieldType {
    pub fn name(&self) -> &str {
        match self {
            YieldType::Science => "science",
            YieldType::Culture => "culture",
            YieldType::Gold => "gold",
            YieldType::Faith => "faith",
            YieldType::Production => "production",
            YieldType::Food => "food",
        }
    }
}

impl fmt::Display for YieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
