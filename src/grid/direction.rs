use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// The six edge directions of a pointy-topped hex, in clockwise order starting from East.
///
/// The order is load-bearing: river edges, canal connectivity and edge lookups all use
/// [`Direction::index`] as a position in `[E, SE, SW, W, NW, NE]`.
///
/// ```txt
///          / \     / \
///         /   \   /   \
///        /  4  \ /  5  \
///       |  NW   |  NE   |
///       |       |       |
///      / \     / \     / \
///     /   \   /   \   /   \
///    /  3  \ /     \ /  0  \
///   |   W   |  Hex  |   E   |
///   |       |       |       |
///    \     / \     / \     /
///     \   /   \   /   \   /
///      \ /  2  \ /  1  \ /
///       |  SW   |  SE   |
///       |       |       |
///        \     / \     /
///         \   /   \   /
///          \ /     \ /
/// ```
#[derive(Enum, PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Direction {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl Direction {
    /// All edge directions, ordered by [`Direction::index`].
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
    ];

    /// Position of the direction in [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the direction at `index`, or `None` when `index >= 6`.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 6 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the opposite direction, i.e. the direction at `(index + 3) % 6`.
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// Returns the next direction in clockwise order
    pub const fn clockwise(self) -> Self {
        Self::ALL[(self.index() + 1) % 6]
    }

    /// Returns the next direction in counter clockwise order
    pub const fn counter_clockwise(self) -> Self {
        Self::ALL[(self.index() + 5) % 6]
    }

    pub fn name(&self) -> &str {
        match self {
            Direction::East => "East",
            Direction::SouthEast => "SouthEast",
            Direction::SouthWest => "SouthWest",
            Direction::West => "West",
            Direction::NorthWest => "NorthWest",
            Direction::NorthEast => "NorthEast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn index_round_trips_through_from_index() {
        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(direction.index(), i);
            assert_eq!(Direction::from_index(i), Some(direction));
        }
        assert_eq!(Direction::from_index(6), None);
    }

    #[test]
    fn opposite_is_three_steps_away() {
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::SouthEast.opposite(), Direction::NorthWest);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn clockwise_walks_the_ring() {
        assert_eq!(Direction::NorthEast.clockwise(), Direction::East);
        assert_eq!(Direction::East.counter_clockwise(), Direction::NorthEast);
    }
}
