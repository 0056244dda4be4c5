use serde::{Deserialize, Serialize};

use crate::tile_component::{Feature, ResourceType, Terrain};

/// Legality constraints shared by one or more district types.
///
/// Every field defaults to "no constraint". A `required_*` list that is present but empty
/// can never be satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DistrictPlacementRule {
    /// The tile must be within city limits.
    pub requires_city: bool,
    pub invalid_terrain: Vec<Terrain>,
    pub required_terrain: Option<Vec<Terrain>>,
    /// Only checked when the tile has a feature.
    pub invalid_features: Vec<Feature>,
    /// A tile without feature never matches.
    pub required_features: Option<Vec<Feature>>,
    pub invalid_resource_types: Vec<ResourceType>,
    /// The tile must not be a hill.
    pub requires_flat_land: bool,
    /// Some neighbor must be neither ocean nor coast.
    pub requires_adjacent_land: bool,
    /// Some neighbor must be a city center.
    pub requires_city_center: bool,
    /// No neighbor may be a city center.
    pub requires_not_city_center: bool,
    pub requires_freshwater: bool,
    pub requires_two_river_edges: bool,
    /// Water or city must lie on two non-adjacent sides of the tile.
    pub requires_connect_water_or_city: bool,
}
