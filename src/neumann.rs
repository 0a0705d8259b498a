use crate::{Cell, Coord, Direction};
use enum_iterator::IntoEnumIterator;
use NeumannDirection::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four edge-sharing directions, counter-clockwise from `Right`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NeumannDirection {
    Right,
    Up,
    Left,
    Down,
}

impl Direction for NeumannDirection {
    type Directions = <NeumannDirection as IntoEnumIterator>::Iterator;

    #[inline]
    fn directions() -> Self::Directions {
        NeumannDirection::into_enum_iter()
    }

    #[inline]
    fn delta(self) -> Coord {
        let (x, y) = match self {
            Right => (1, 0),
            Up => (0, -1),
            Left => (-1, 0),
            Down => (0, 1),
        };
        Coord::new(x, y)
    }
}

/// A cell with the von Neumann neighborhood: the four cells sharing an edge with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VonNeumann {
    coord: Coord,
}

impl Cell for VonNeumann {
    type Direction = NeumannDirection;

    #[inline]
    fn at(coord: Coord) -> Self {
        VonNeumann { coord }
    }

    #[inline]
    fn coord(&self) -> Coord {
        self.coord
    }
}
