//! Placement legality of districts and improvements.
//!
//! The checks are pure predicates over a [`Tile`](crate::tile::Tile) and its live neighbors.
//! They run in a fixed order and the first failing check is reported as a [`PlacementRejection`].

use std::fmt::Display;

use thiserror::Error;

use crate::tile_component::{Feature, Resource, ResourceType, Terrain};

mod district;
mod improvement;

/// The first check a proposed placement failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementRejection {
    #[error("tile is a mountain")]
    Mountain,
    #[error("tile is outside city limits")]
    OutsideCityLimits,
    #[error("terrain {0} is not allowed")]
    InvalidTerrain(Terrain),
    #[error("terrain {0} is not one of the required terrains")]
    MissingRequiredTerrain(Terrain),
    #[error("feature {0} is not allowed")]
    InvalidFeature(Feature),
    #[error("feature {} is not one of the required features", or_none(.0))]
    MissingRequiredFeature(Option<Feature>),
    #[error("resource type {0} is not allowed")]
    InvalidResourceType(ResourceType),
    #[error("resource {0} is not allowed")]
    InvalidResource(Resource),
    #[error("resource {} is not one of the required resources", or_none(.0))]
    MissingRequiredResource(Option<Resource>),
    #[error("tile is not flat land")]
    NotFlatLand,
    #[error("no adjacent land")]
    NoAdjacentLand,
    #[error("no adjacent city center")]
    NoAdjacentCityCenter,
    #[error("adjacent to a city center")]
    AdjacentCityCenter,
    #[error("no freshwater")]
    NoFreshwater,
    #[error("only {0} river edges, two are required")]
    TooFewRiverEdges(u32),
    #[error("does not connect water or cities on two non-adjacent sides")]
    NoWaterOrCityConnection,
    #[error("mine needs a hill, volcanic soil or a resource")]
    MineWithoutDeposit,
    #[error("farm on desert needs floodplains")]
    DesertFarmWithoutFloodplains,
}

fn or_none<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "none".to_owned(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::PlacementRejection;
    use crate::tile_component::{Feature, Terrain};

    #[test]
    fn rejections_render_as_messages() {
        assert_eq!(
            PlacementRejection::InvalidTerrain(Terrain::Ocean).to_string(),
            "terrain ocean is not allowed"
        );
        assert_eq!(
            PlacementRejection::MissingRequiredFeature(None).to_string(),
            "feature none is not one of the required features"
        );
        assert_eq!(
            PlacementRejection::MissingRequiredFeature(Some(Feature::Marsh)).to_string(),
            "feature marsh is not one of the required features"
        );
    }
}
