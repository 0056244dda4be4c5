use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// Elevation of a tile. A tile is flat, a hill, or a mountain, never both of the latter.
#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "snake_case")]
pub enum Relief {
    #[default]
    Flat,
    Hill,
    Mountain,
}

impl Relief {
    /// Builds the relief from the `hill`/`mountain` flag pair.
    ///
    /// Returns `None` when both flags are set.
    pub fn from_flags(hill: bool, mountain: bool) -> Option<Self> {
        match (hill, mountain) {
            (false, false) => Some(Relief::Flat),
            (true, false) => Some(Relief::Hill),
            (false, true) => Some(Relief::Mountain),
            (true, true) => None,
        }
    }

    pub fn is_hill(self) -> bool {
        self == Relief::Hill
    }

    pub fn is_mountain(self) -> bool {
        self == Relief::Mountain
    }

    pub fn name(&self) -> &str {
        match self {
            Relief::Flat => "flat",
            Relief::Hill => "hill",
            Relief::Mountain => "mountain",
        }
    }
}
