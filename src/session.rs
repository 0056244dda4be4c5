//! An editing session: one map, its rules, the selection, the active brush and the score.
//!
//! All state lives in [`EditorSession`], so several sessions can run side by side.

use enum_map::EnumMap;
use glam::Vec2;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::{
    grid::{Direction, Hex, HexLayout},
    map_parameters::EditorParameters,
    placement::PlacementRejection,
    ruleset::Ruleset,
    scoring::{
        RequestToken, ScoreBoard, ScoreRequest, ScoreResponse, ScoringError, ScoringService,
        ScoringStatus,
    },
    tile::Tile,
    tile_component::{District, Feature, Improvement, Resource, Terrain},
    tile_map::{MapLoadError, TileMap},
};

/// What a click on the map does besides selecting the tile under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brush {
    #[default]
    Select,
    /// Toggles the river on the edge under the cursor.
    River,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Service(#[from] ScoringError),
    #[error(transparent)]
    Load(#[from] MapLoadError),
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    tile_map: TileMap,
    ruleset: Ruleset,
    /// Stored as a coordinate so that it never refers to a tile of a replaced map.
    selected_hex: Option<Hex>,
    brush: Brush,
    score_board: ScoreBoard,
    last_request: RequestToken,
}

impl EditorSession {
    /// Starts a session on a blank map with the embedded placement rules.
    pub fn new(parameters: &EditorParameters) -> Self {
        Self::with_ruleset(parameters, Ruleset::new())
    }

    pub fn with_ruleset(parameters: &EditorParameters, ruleset: Ruleset) -> Self {
        Self {
            tile_map: TileMap::new(parameters),
            ruleset,
            selected_hex: None,
            brush: Brush::default(),
            score_board: ScoreBoard::default(),
            last_request: RequestToken::default(),
        }
    }

    pub fn tile_map(&self) -> &TileMap {
        &self.tile_map
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    pub fn score_board(&self) -> &ScoreBoard {
        &self.score_board
    }

    pub fn selected_tile(&self) -> Option<Tile> {
        self.selected_hex.and_then(|hex| self.tile_map.tile(hex))
    }

    /// Selects the tile at `hex`. A coordinate outside the map leaves the selection unchanged.
    pub fn select(&mut self, hex: Hex) -> Option<Tile> {
        let tile = self.tile_map.tile(hex)?;
        self.selected_hex = Some(hex);
        Some(tile)
    }

    pub fn clear_selection(&mut self) {
        self.selected_hex = None;
    }

    /// Moves the selection one step in `direction`, like the arrow keys do.
    ///
    /// Each coordinate of the target is clamped to the map radius. When no tile exists there,
    /// the selection stays where it is and `None` is returned.
    pub fn move_selection(&mut self, direction: Direction) -> Option<Tile> {
        let radius = i32::try_from(self.tile_map.radius()).unwrap_or(i32::MAX);
        let target = self.selected_hex?.neighbor(direction);
        let target = Hex::new(
            target.q().clamp(-radius, radius),
            target.r().clamp(-radius, radius),
        );
        self.select(target)
    }

    /// Handles a click at `pixel_position`: selects the tile under the cursor and, with the
    /// [`Brush::River`] brush, toggles the river on the edge under the cursor.
    pub fn click(&mut self, pixel_position: Vec2, layout: &HexLayout) -> Option<Tile> {
        let hex = layout.pixel_to_hex(pixel_position);
        let tile = self.select(hex)?;
        if self.brush == Brush::River {
            let direction = layout.edge_at_pixel(hex, pixel_position);
            let has_river = self.tile_map.toggle_river(tile, direction);
            self.map_edited();
            debug!(%hex, direction = direction.name(), has_river, "river toggled");
        }
        Some(tile)
    }

    /// Places or clears a district. A rejected placement leaves the map unchanged.
    pub fn place_district(
        &mut self,
        tile: Tile,
        district: Option<District>,
    ) -> Result<(), PlacementRejection> {
        self.tile_map
            .try_place_district(tile, district, &self.ruleset)
            .inspect(|_| self.map_edited())
            .inspect_err(|rejection| {
                warn!(hex = %tile.hex(&self.tile_map), ?district, %rejection, "can't place district here");
            })
    }

    /// Places or clears an improvement. A rejected placement leaves the map unchanged.
    pub fn place_improvement(
        &mut self,
        tile: Tile,
        improvement: Option<Improvement>,
    ) -> Result<(), PlacementRejection> {
        self.tile_map
            .try_place_improvement(tile, improvement, &self.ruleset)
            .inspect(|_| self.map_edited())
            .inspect_err(|rejection| {
                warn!(hex = %tile.hex(&self.tile_map), ?improvement, %rejection, "can't place improvement here");
            })
    }

    /// Same as [`EditorSession::place_district`] on the selected tile. `None` when nothing is selected.
    pub fn place_district_on_selection(
        &mut self,
        district: Option<District>,
    ) -> Option<Result<(), PlacementRejection>> {
        let tile = self.selected_tile()?;
        Some(self.place_district(tile, district))
    }

    /// Same as [`EditorSession::place_improvement`] on the selected tile. `None` when nothing is selected.
    pub fn place_improvement_on_selection(
        &mut self,
        improvement: Option<Improvement>,
    ) -> Option<Result<(), PlacementRejection>> {
        let tile = self.selected_tile()?;
        Some(self.place_improvement(tile, improvement))
    }

    /// Unvalidated attribute edit of the inspector.
    pub fn set_terrain(&mut self, tile: Tile, terrain: Terrain) {
        tile.set_terrain(&mut self.tile_map, terrain);
        self.map_edited();
    }

    pub fn set_feature(&mut self, tile: Tile, feature: Option<Feature>) {
        tile.set_feature(&mut self.tile_map, feature);
        self.map_edited();
    }

    pub fn set_resource(&mut self, tile: Tile, resource: Option<Resource>) {
        tile.set_resource(&mut self.tile_map, resource);
        self.map_edited();
    }

    pub fn set_hill(&mut self, tile: Tile, hill: bool) {
        tile.set_hill(&mut self.tile_map, hill);
        self.map_edited();
    }

    pub fn set_mountain(&mut self, tile: Tile, mountain: bool) {
        tile.set_mountain(&mut self.tile_map, mountain);
        self.map_edited();
    }

    /// Makes responses to requests issued before the edit stale.
    fn map_edited(&mut self) {
        self.last_request = self.last_request.next();
        if self.score_board.is_scoring() {
            self.score_board.status = ScoringStatus::Idle;
        }
    }

    /// Replaces the map with the one serialized in `json`.
    ///
    /// On success the selection is cleared and, as after any edit, pending score responses become stale.
    /// On failure the current map is kept.
    pub fn load_json(&mut self, json: &str) -> Result<(), MapLoadError> {
        match TileMap::from_json(json) {
            Ok(tile_map) => {
                self.tile_map = tile_map;
                self.selected_hex = None;
                self.map_edited();
                info!(tiles = self.tile_map.len(), radius = self.tile_map.radius(), "map loaded");
                Ok(())
            }
            Err(load_error) => {
                error!(error = %load_error, "can't load map");
                Err(load_error)
            }
        }
    }

    pub fn save_json(&self) -> Result<String, serde_json::Error> {
        self.tile_map.to_json()
    }

    /// Issues a new scoring request. Responses to earlier requests will be dropped.
    pub fn request_score(&mut self) -> ScoreRequest {
        self.last_request = self.last_request.next();
        self.score_board.status = ScoringStatus::Pending(self.last_request);
        ScoreRequest {
            token: self.last_request,
            body: self.tile_map.to_record(),
        }
    }

    /// Hands the outcome of the request `token` back to the session.
    ///
    /// Returns `false` and changes nothing when `token` is not the latest request.
    /// A failure marks the score board as failed and keeps the tile yields.
    /// A response replaces the totals and the yields of every tile at once.
    pub fn receive_score(
        &mut self,
        token: RequestToken,
        result: Result<ScoreResponse, ScoringError>,
    ) -> bool {
        if token != self.last_request {
            debug!(?token, latest = ?self.last_request, "stale score response dropped");
            return false;
        }

        match result {
            Ok(response) => self.apply_score(response),
            Err(scoring_error) => {
                error!(error = %scoring_error, "failed to calculate yields");
                self.score_board.status = ScoringStatus::Failed(scoring_error);
            }
        }
        true
    }

    fn apply_score(&mut self, response: ScoreResponse) {
        let mut totals = EnumMap::default();
        for (yield_type, amount) in response.summary {
            totals[yield_type] = amount;
        }

        let mut yields_list = vec![EnumMap::default(); self.tile_map.len()];
        for (key, tile_yields) in response.tiles {
            let Some(tile) = key.parse().ok().and_then(|hex| self.tile_map.tile(hex)) else {
                warn!(%key, "score for unknown tile skipped");
                continue;
            };
            for (yield_type, amount) in tile_yields {
                yields_list[tile.index()][yield_type] = amount;
            }
        }

        self.tile_map.yields_list = yields_list;
        self.score_board.totals = totals;
        self.score_board.status = ScoringStatus::Scored;
    }

    /// Scores the map with `service` and applies the result.
    pub fn refresh_score(&mut self, service: &impl ScoringService) -> bool {
        let request = self.request_score();
        let result = service.score(&request.body);
        self.receive_score(request.token, result)
    }

    /// Sends the map to the analysis service and loads the map it returns.
    pub fn analyze_map(&mut self, service: &impl ScoringService) -> Result<(), AnalysisError> {
        let analyzed = service
            .analyze(&self.tile_map.to_record())
            .inspect_err(|service_error| error!(error = %service_error, "map analysis failed"))?;
        self.load_json(&analyzed)?;
        Ok(())
    }
}
