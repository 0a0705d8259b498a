//! Errors reported by [`Automaton`](crate::Automaton) operations.

use crate::Coord;

/// Everything that can go wrong when building or mutating an automaton.
///
/// These are all caller errors; the automaton is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The seed grid does not have the declared shape.
    #[error(
        "seed is {width}x{height} cells but the grid is {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
    /// The grid bounded by `(xmax, ymax)` does not fit `isize` coordinates or one allocation.
    #[error("a grid bounded by ({xmax}, {ymax}) is too large")]
    DimensionTooLarge { xmax: usize, ymax: usize },
    /// A coordinate falls outside `[0, bound.x] x [0, bound.y]`.
    #[error("coordinate {coord} is outside the grid bounded by {bound}")]
    OutOfBounds { coord: Coord, bound: Coord },
    /// Two automatons with different state types were combined.
    #[error("cannot place `{found}` states into an automaton of `{expected}` states")]
    TypeIncompatible {
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
