use crate::{Coord, Direction};

/// A position on the grid that knows its own topology.
///
/// A `Cell` is only built long enough to produce the neighbor list of its coordinate;
/// the automaton caches that list and drops the cell. Implementors only need to pick a
/// [`Direction`] set, the provided [`Cell::neighbors`] wraps every offset around the torus.
pub trait Cell: Sized + 'static {
    type Direction: Direction;

    /// The cell sitting at `coord`.
    fn at(coord: Coord) -> Self;

    fn coord(&self) -> Coord;

    /// The coordinates of this cell's neighbors on a torus bounded by `max`, in the order
    /// of `Self::Direction::directions()`.
    ///
    /// Every returned coordinate is contained in `max`.
    fn neighbors(&self, max: Coord) -> Vec<Coord> {
        let origin = self.coord();
        Self::Direction::directions()
            .map(|dir| (origin + dir.delta()).wrap(max))
            .collect()
    }

    /// Shorthand for building the cell at `coord` and asking for its neighbors.
    #[inline]
    fn neighbors_of(coord: Coord, max: Coord) -> Vec<Coord> {
        Self::at(coord).neighbors(max)
    }
}
