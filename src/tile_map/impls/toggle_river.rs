use crate::{grid::Direction, tile::Tile, tile_map::TileMap};

impl TileMap {
    /// Flips the river on the edge of `tile` in `direction` and returns the new value.
    ///
    /// The neighbor sharing that edge, if any, gets the same value on its opposite edge.
    /// An edge on the border of the map has no partner and only changes locally.
    pub fn toggle_river(&mut self, tile: Tile, direction: Direction) -> bool {
        let value = !tile.has_river_in_direction(direction, self);
        tile.set_river_edge(self, direction, value);
        if let Some(neighbor) = tile.neighbor_tile(direction, self) {
            neighbor.set_river_edge(self, direction.opposite(), value);
        }
        value
    }

    /// Makes every shared river edge agree on both of its tiles.
    ///
    /// An edge recorded on only one side is added to the other side.
    /// Returns the number of edges that had to be repaired.
    pub fn repair_river_symmetry(&mut self) -> usize {
        let mut repaired = 0;
        for tile in self.all_tiles() {
            for direction in tile.rivers(self).directions() {
                if let Some(neighbor) = tile.neighbor_tile(direction, self) {
                    if !neighbor.has_river_in_direction(direction.opposite(), self) {
                        neighbor.set_river_edge(self, direction.opposite(), true);
                        repaired += 1;
                    }
                }
            }
        }
        repaired
    }

    /// Whether every river edge is recorded identically on both tiles sharing it.
    pub fn rivers_are_symmetric(&self) -> bool {
        self.all_tiles().all(|tile| {
            tile.neighbor_tiles_with_direction(self)
                .into_iter()
                .all(|(direction, neighbor)| {
                    tile.has_river_in_direction(direction, self)
                        == neighbor.has_river_in_direction(direction.opposite(), self)
                })
        })
    }
}
