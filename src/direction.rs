use crate::Coord;

/// One of the offsets a cell topology looks along to find its neighbors.
pub trait Direction: Copy + Sized {
    type Directions: Iterator<Item = Self>;

    /// An iterator over all directions.
    ///
    /// The order of this iterator is the order of every neighbor list built from it.
    fn directions() -> Self::Directions;

    /// The offset from a cell to its neighbor in this direction.
    fn delta(self) -> Coord;
}
