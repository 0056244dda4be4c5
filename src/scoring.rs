//! The boundary to the external yield scoring and map analysis services.
//!
//! Every request carries a [`RequestToken`]. Only the response to the most recent request is applied;
//! responses to superseded requests are dropped when they arrive.

use std::collections::BTreeMap;

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{map_record::MapRecord, tile_component::YieldType};

/// Identifies one scoring request. Tokens issued by a session increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A scoring request ready to be sent: the token to answer with and the serialized map.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRequest {
    pub token: RequestToken,
    pub body: MapRecord,
}

/// The answer of the scoring service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResponse {
    /// Map-wide total of each yield. Missing yields count as zero.
    #[serde(default)]
    pub summary: BTreeMap<YieldType, u32>,
    /// Yields of each tile, keyed by `"q,r"`. Tiles that are missing yield nothing.
    #[serde(default)]
    pub tiles: BTreeMap<String, BTreeMap<YieldType, u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("service answered with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("service unreachable: {0}")]
    Unreachable(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<serde_json::Error> for ScoringError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedResponse(error.to_string())
    }
}

/// The external scoring and analysis services.
///
/// Implementations perform the round trip synchronously. A caller that runs it elsewhere
/// hands the result back through [`EditorSession::receive_score`](crate::session::EditorSession::receive_score).
pub trait ScoringService {
    /// Computes the yields of `map`.
    fn score(&self, map: &MapRecord) -> Result<ScoreResponse, ScoringError>;

    /// Asks for an improved layout of `map`. Returns the serialized map to load.
    fn analyze(&self, map: &MapRecord) -> Result<String, ScoringError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScoringStatus {
    /// Nothing was requested yet.
    #[default]
    Idle,
    /// Waiting for the response to this request.
    Pending(RequestToken),
    /// The last response was applied.
    Scored,
    /// The last request failed. The previous totals and tile yields are kept.
    Failed(ScoringError),
}

/// Map-wide yield totals of the last applied score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub(crate) status: ScoringStatus,
    pub(crate) totals: EnumMap<YieldType, u32>,
}

impl ScoreBoard {
    pub fn status(&self) -> &ScoringStatus {
        &self.status
    }

    pub fn is_scoring(&self) -> bool {
        matches!(self.status, ScoringStatus::Pending(_))
    }

    pub fn total(&self, yield_type: YieldType) -> u32 {
        self.totals[yield_type]
    }

    pub fn totals(&self) -> &EnumMap<YieldType, u32> {
        &self.totals
    }
}

#[cfg(test)]
mod tests {
    use super::{RequestToken, ScoreResponse, ScoringError};
    use crate::tile_component::YieldType;

    #[test]
    fn response_parses_service_json() {
        let response: ScoreResponse = serde_json::from_str(
            r#"{
                "summary": { "science": 4, "culture": 1, "faith": 0, "gold": 7, "production": 9, "food": 12 },
                "tiles": { "0,0": { "food": 2, "production": 1 }, "1,-1": {} }
            }"#,
        )
        .unwrap();
        assert_eq!(response.summary[&YieldType::Food], 12);
        assert_eq!(response.tiles["0,0"][&YieldType::Production], 1);
        assert!(response.tiles["1,-1"].is_empty());
    }

    #[test]
    fn token_counter_wraps_instead_of_overflowing() {
        assert_eq!(RequestToken(u64::MAX).next(), RequestToken(0));
        assert!(RequestToken::default() < RequestToken::default().next());
    }

    #[test]
    fn malformed_json_is_a_scoring_error() {
        let error: ScoringError = serde_json::from_str::<ScoreResponse>("[1, 2]")
            .unwrap_err()
            .into();
        assert!(matches!(error, ScoringError::MalformedResponse(_)));
    }
}
