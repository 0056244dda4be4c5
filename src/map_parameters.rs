use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::grid::HexLayout;

/// Parameters of an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorParameters {
    /// Radius of the hexagonal map. The map has `3 * radius * (radius + 1) + 1` tiles.
    pub radius: u32,
    /// Seed of the random number generator, used to pick the mountain sprite variant of each tile.
    pub seed: u64,
    /// Distance in pixels from the center of a hex to its corners.
    pub hex_size: f32,
    /// Vertical compression of the drawn grid. `1.0` means regular hexagons.
    pub squish_factor: f32,
}

impl EditorParameters {
    pub const DEFAULT_RADIUS: u32 = 4;
    pub const DEFAULT_HEX_SIZE: f32 = 60.0;
    pub const DEFAULT_SQUISH_FACTOR: f32 = 0.8;

    /// Number of tiles a freshly created map of this radius contains.
    pub fn tile_count(&self) -> usize {
        let radius = self.radius as usize;
        3 * radius * radius + 3 * radius + 1
    }

    /// The pixel layout of the map, centred on `canvas_center`.
    pub fn layout(&self, canvas_center: Vec2) -> HexLayout {
        HexLayout::new(self.hex_size, self.squish_factor, canvas_center)
    }
}

impl Default for EditorParameters {
    fn default() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_nanos() as u64)
            .unwrap_or_default();
        Self {
            radius: Self::DEFAULT_RADIUS,
            seed,
            hex_size: Self::DEFAULT_HEX_SIZE,
            squish_factor: Self::DEFAULT_SQUISH_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EditorParameters;

    #[test]
    fn default_map_has_sixty_one_tiles() {
        assert_eq!(EditorParameters::default().tile_count(), 61);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parameters: EditorParameters = serde_json::from_str(r#"{"radius": 2}"#).unwrap();
        assert_eq!(parameters.radius, 2);
        assert_eq!(parameters.tile_count(), 19);
        assert_eq!(parameters.squish_factor, EditorParameters::DEFAULT_SQUISH_FACTOR);
    }
}
