//! This module contains the components of the tile in the map.
//! For example, it includes the tile's Terrain, Feature, District, Resource, Improvement and so on.

mod district;
mod feature;
mod improvement;
mod relief;
mod resource;
mod river;
mod terrain;
mod yields;

pub use district::*;
pub use feature::*;
pub use improvement::*;
pub use relief::*;
pub use resource::*;
pub use river::*;
pub use terrain::*;
pub use yields::*;
