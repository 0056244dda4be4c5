use serde::{Deserialize, Serialize};

use crate::tile_component::{Feature, Resource, Terrain};

/// Legality constraints of one improvement type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ImprovementPlacementRule {
    pub invalid_terrain: Vec<Terrain>,
    pub required_terrain: Option<Vec<Terrain>>,
    pub invalid_features: Vec<Feature>,
    pub required_features: Option<Vec<Feature>>,
    /// Resources the improvement may be built on. Tiles without resource are not restricted.
    pub valid_resources: Option<Vec<Resource>>,
    /// The tile must carry one of these resources.
    pub required_resources: Option<Vec<Resource>>,
}
