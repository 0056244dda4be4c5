//! Tile model and placement rules of a hex-grid city planner.
//!
//! The map is a hexagon of [`Tile`]s stored in a [`TileMap`]. Districts and improvements are
//! only placed when the [`Ruleset`] allows it, rivers are kept in sync on both sides of an edge,
//! and city limits follow the city centers. [`EditorSession`] bundles a map with the selection,
//! the active brush and the score returned by an external [`ScoringService`].

pub mod grid;
pub mod map_parameters;
pub mod map_record;
pub mod placement;
pub mod ruleset;
pub mod scoring;
pub mod session;
pub mod tile;
pub mod tile_component;
pub mod tile_map;

pub use grid::*;
pub use map_parameters::EditorParameters;
pub use placement::PlacementRejection;
pub use ruleset::Ruleset;
pub use scoring::ScoringService;
pub use session::EditorSession;
pub use tile::Tile;
pub use tile_map::TileMap;
