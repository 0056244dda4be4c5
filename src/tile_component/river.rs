use bitflags::bitflags;

use crate::grid::Direction;

bitflags! {
    /// The edges of a tile along which a river flows, one bit per [`Direction`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RiverEdges: u8 {
        const EAST = 1 << 0;
        const SOUTH_EAST = 1 << 1;
        const SOUTH_WEST = 1 << 2;
        const WEST = 1 << 3;
        const NORTH_WEST = 1 << 4;
        const NORTH_EAST = 1 << 5;
    }
}

impl RiverEdges {
    #[inline]
    pub fn from_direction(direction: Direction) -> Self {
        Self::from_bits_truncate(1 << direction.index())
    }

    #[inline]
    pub fn has_edge(self, direction: Direction) -> bool {
        self.contains(Self::from_direction(direction))
    }

    pub fn set_edge(&mut self, direction: Direction, value: bool) {
        self.set(Self::from_direction(direction), value);
    }

    /// Number of edges with a river.
    pub fn edge_count(self) -> u32 {
        self.bits().count_ones()
    }

    /// Iterates the directions that carry a river, in direction order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.has_edge(direction))
    }

    /// The wire form: one flag per direction, ordered by [`Direction::index`].
    pub fn to_array(self) -> [bool; 6] {
        Direction::ALL.map(|direction| self.has_edge(direction))
    }

    pub fn from_array(edges: [bool; 6]) -> Self {
        Direction::ALL
            .into_iter()
            .filter(|direction| edges[direction.index()])
            .fold(Self::empty(), |acc, direction| {
                acc | Self::from_direction(direction)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::RiverEdges;
    use crate::grid::Direction;

    #[test]
    fn array_form_is_indexed_by_direction() {
        let edges = RiverEdges::from_array([true, false, false, true, false, true]);
        assert!(edges.has_edge(Direction::East));
        assert!(edges.has_edge(Direction::West));
        assert!(edges.has_edge(Direction::NorthEast));
        assert!(!edges.has_edge(Direction::SouthEast));
        assert_eq!(edges.edge_count(), 3);
        assert_eq!(edges.to_array(), [true, false, false, true, false, true]);
        assert_eq!(
            edges.directions().collect::<Vec<_>>(),
            vec![Direction::East, Direction::West, Direction::NorthEast]
        );
    }

    #[test]
    fn set_edge_clears_and_sets() {
        let mut edges = RiverEdges::empty();
        edges.set_edge(Direction::SouthWest, true);
        assert_eq!(edges, RiverEdges::SOUTH_WEST);
        edges.set_edge(Direction::SouthWest, false);
        assert!(edges.is_empty());
    }
}
