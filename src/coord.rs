use std::fmt;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the grid, `x` growing to the right and `y` growing down.
///
/// A `Coord` doubles as a bound: the grid's maximum coordinate describes the closed
/// rectangle from the origin to itself, see [`Coord::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    x: isize,
    y: isize,
}

impl Coord {
    #[inline]
    pub const fn new(x: isize, y: isize) -> Self {
        Coord { x, y }
    }

    #[inline]
    pub const fn x(self) -> isize {
        self.x
    }

    #[inline]
    pub const fn y(self) -> isize {
        self.y
    }

    /// Checks if `other` lies within `[0, self.x] x [0, self.y]`, bounds included.
    #[inline]
    pub fn contains(self, other: Coord) -> bool {
        (0..=self.x).contains(&other.x) && (0..=self.y).contains(&other.y)
    }

    /// Wraps this coordinate onto the torus bounded by `max`.
    ///
    /// Both components of `max` must be non-negative.
    #[inline]
    pub fn wrap(self, max: Coord) -> Coord {
        Coord {
            x: self.x.rem_euclid(max.x + 1),
            y: self.y.rem_euclid(max.y + 1),
        }
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, other: Coord) -> Coord {
        Coord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, other: Coord) -> Coord {
        Coord::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(isize, isize)> for Coord {
    #[inline]
    fn from((x, y): (isize, isize)) -> Self {
        Coord::new(x, y)
    }
}

impl From<Coord> for (isize, isize) {
    #[inline]
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
