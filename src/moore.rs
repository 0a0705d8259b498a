use crate::{Cell, Coord, Direction};
use enum_iterator::IntoEnumIterator;
use MooreDirection::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The eight directions of the Moore neighborhood, counter-clockwise from `Right`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MooreDirection {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction for MooreDirection {
    type Directions = <MooreDirection as IntoEnumIterator>::Iterator;

    #[inline]
    fn directions() -> Self::Directions {
        MooreDirection::into_enum_iter()
    }

    #[inline]
    fn delta(self) -> Coord {
        let (x, y) = match self {
            Right => (1, 0),
            UpRight => (1, -1),
            Up => (0, -1),
            UpLeft => (-1, -1),
            Left => (-1, 0),
            DownLeft => (-1, 1),
            Down => (0, 1),
            DownRight => (1, 1),
        };
        Coord::new(x, y)
    }
}

/// A cell with the eight neighbors sharing an edge or a corner with it.
///
/// This is the topology of Conway's Game of Life.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Moore {
    coord: Coord,
}

impl Cell for Moore {
    type Direction = MooreDirection;

    #[inline]
    fn at(coord: Coord) -> Self {
        Moore { coord }
    }

    #[inline]
    fn coord(&self) -> Coord {
        self.coord
    }
}
