use crate::{Cell, Coord, Error, Result, State, StateData};

use boolinator::Boolinator;
use itertools::iproduct;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use smallvec::SmallVec;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::marker::PhantomData;
use std::mem::size_of;
use std::slice::{Chunks, Iter};
use std::sync::Arc;

/// The initial states of a new automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seed<S> {
    /// Every cell starts in this state.
    Uniform(S),
    /// One state per cell, indexed `[y][x]`.
    Grid(Vec<Vec<S>>),
}

impl<S> From<Vec<Vec<S>>> for Seed<S> {
    fn from(rows: Vec<Vec<S>>) -> Self {
        Seed::Grid(rows)
    }
}

/// The identity of a type, captured when an automaton is built.
#[derive(Copy, Clone, Debug)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeTag {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The type's name, for diagnostics only.
    pub fn name(self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

/// A cellular automaton on a bounded toroidal grid.
///
/// `C` decides which coordinates a cell reads from, `S` decides what a cell becomes.
/// Neighbor lists are computed once when the automaton is built and are shared by every
/// later generation, since the grid never changes size.
pub struct Automaton<C, S> {
    /// Row-major, `(ymax + 1) * (xmax + 1)` records.
    matrix: Vec<StateData<S>>,
    generation: u64,
    max_coord: Coord,
    midpoint: Coord,
    cell_type: TypeTag,
    state_type: TypeTag,
    _cell: PhantomData<fn() -> C>,
}

impl<C, S> Automaton<C, S>
where
    C: Cell,
    S: State,
{
    /// Make a new automaton covering `[0, xmax] x [0, ymax]`.
    ///
    /// Fails with [`Error::DimensionTooLarge`] if the grid cannot be addressed with `isize`
    /// coordinates or stored in memory, and with [`Error::DimensionMismatch`] if a
    /// [`Seed::Grid`] is not exactly `ymax + 1` rows of `xmax + 1` states.
    pub fn new(xmax: usize, ymax: usize, seed: Seed<S>) -> Result<Self> {
        let (width, height) = dimensions::<S>(xmax, ymax)?;
        let states = match seed {
            Seed::Uniform(state) => vec![state; width * height],
            Seed::Grid(rows) => {
                let mismatch = |found_width| Error::DimensionMismatch {
                    expected_width: width,
                    expected_height: height,
                    width: found_width,
                    height: rows.len(),
                };
                if rows.len() != height {
                    return Err(mismatch(rows.first().map_or(0, Vec::len)));
                }
                if let Some(row) = rows.iter().find(|row| row.len() != width) {
                    return Err(mismatch(row.len()));
                }
                rows.into_iter().flatten().collect()
            }
        };
        Ok(Self::build(xmax, ymax, states))
    }

    /// Make a new automaton with every cell cloned from `state`.
    ///
    /// # Panics
    ///
    /// Panics if [`Automaton::new`] would return [`Error::DimensionTooLarge`].
    pub fn filled(xmax: usize, ymax: usize, state: S) -> Self {
        match Self::new(xmax, ymax, Seed::Uniform(state)) {
            Ok(automaton) => automaton,
            Err(err) => panic!("gridauto::Automaton::filled: {}", err),
        }
    }

    /// Make a new automaton using the state's `Default` impl.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Automaton::filled`].
    pub fn with_default(xmax: usize, ymax: usize) -> Self {
        Self::filled(xmax, ymax, S::default())
    }

    fn build(xmax: usize, ymax: usize, states: Vec<S>) -> Self {
        let max_coord = Coord::new(xmax as isize, ymax as isize);
        let matrix: Vec<StateData<S>> = coords(max_coord)
            .map(|coord| Arc::<[Coord]>::from(C::neighbors_of(coord, max_coord)))
            .zip(states)
            .map(|(neighbors, state)| StateData::new(neighbors, state))
            .collect();
        debug_assert_eq!(matrix.len(), (xmax + 1) * (ymax + 1));

        let cell_type = TypeTag::of::<C>();
        let state_type = TypeTag::of::<S>();
        tracing::debug!(
            width = xmax + 1,
            height = ymax + 1,
            cell = cell_type.name(),
            state = state_type.name(),
            "built automaton"
        );
        Automaton {
            matrix,
            generation: 0,
            max_coord,
            midpoint: Coord::new(max_coord.x() / 2, max_coord.y() / 2),
            cell_type,
            state_type,
            _cell: PhantomData,
        }
    }

    /// Advance one generation, computing every cell in parallel.
    ///
    /// Every transition reads the grid as it was before this call.
    pub fn evolve(&mut self) {
        let old = &self.matrix[..];
        let width = self.width();
        let next: Vec<StateData<S>> = old
            .par_iter()
            .map(|data| {
                let neighbors: SmallVec<[&S; 8]> = data
                    .neighbors
                    .iter()
                    .map(|&coord| &old[index(coord, width)].state)
                    .collect();
                data.succeed(data.state.change_state(&neighbors))
            })
            .collect();
        self.matrix = next;
        self.generation += 1;
        tracing::trace!(generation = self.generation, "evolved");
    }

    /// Evolve `n` times.
    pub fn run(&mut self, n: u64) {
        let start = self.generation;
        for _ in 0..n {
            self.evolve();
        }
        tracing::debug!(from = start, to = self.generation, "ran automaton");
    }

    /// An endless iterator that evolves once per item and yields the new generation.
    pub fn generations(&mut self) -> Generations<'_, C, S> {
        Generations { automaton: self }
    }

    /// Overwrite the state at `coord`.
    pub fn set_state(&mut self, coord: Coord, state: S) -> Result<()> {
        self.check_bounds(coord)?;
        let ix = index(coord, self.width());
        self.matrix[ix].state = state;
        Ok(())
    }

    /// Copy the current states of `other` into this grid with `other`'s origin at `at`.
    ///
    /// `other` may use any topology but must hold the same state type. The whole target
    /// region `[at, at + other.max_coord()]` must lie inside this grid; nothing is written
    /// unless every check passes. Neighbor lists of this grid are kept.
    pub fn spawn<C2, S2>(&mut self, other: &Automaton<C2, S2>, at: Coord) -> Result<()>
    where
        C2: Cell,
        S2: State,
    {
        let incompatible = Error::TypeIncompatible {
            expected: self.state_type.name(),
            found: other.state_type.name(),
        };
        (self.state_type == other.state_type).ok_or_else(|| incompatible.clone())?;
        self.check_bounds(at)?;
        self.check_bounds(at + other.max_coord)?;

        let states = other
            .matrix
            .iter()
            .map(|data| (&data.state as &dyn Any).downcast_ref::<S>().cloned())
            .collect::<Option<Vec<S>>>()
            .ok_or(incompatible)?;

        let width = self.width();
        for (offset, state) in other.coords().zip(states) {
            self.matrix[index(at + offset, width)].state = state;
        }
        tracing::debug!(
            %at,
            width = other.width(),
            height = other.height(),
            "spawned automaton"
        );
        Ok(())
    }

    /// Reset every cell to the default state and the generation to 0.
    pub fn clear(&mut self) {
        for data in &mut self.matrix {
            data.state = S::default();
        }
        self.generation = 0;
        tracing::debug!("cleared automaton");
    }

    /// Get the state at `coord`.
    pub fn state(&self, coord: Coord) -> Result<&S> {
        self.check_bounds(coord)?;
        Ok(&self.matrix[index(coord, self.width())].state)
    }

    /// Get the cached neighbor coordinates of `coord`.
    pub fn neighbors(&self, coord: Coord) -> Result<&[Coord]> {
        self.check_bounds(coord)?;
        Ok(self.matrix[index(coord, self.width())].neighbors())
    }

    /// Clone the current states into `[y][x]` rows, the shape of [`Seed::Grid`].
    pub fn to_rows(&self) -> Vec<Vec<S>> {
        self.rows()
            .map(|row| row.iter().map(|data| data.state.clone()).collect())
            .collect()
    }
}

impl<C, S> Automaton<C, S> {
    fn check_bounds(&self, coord: Coord) -> Result<()> {
        self.max_coord
            .contains(coord)
            .ok_or_else(|| Error::OutOfBounds {
                coord,
                bound: self.max_coord,
            })
    }

    /// The number of generations since construction or the last [`Automaton::clear`].
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The largest coordinate on the grid.
    #[inline]
    pub fn max_coord(&self) -> Coord {
        self.max_coord
    }

    #[inline]
    pub fn midpoint(&self) -> Coord {
        self.midpoint
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.max_coord.x() as usize + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.max_coord.y() as usize + 1
    }

    /// The number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    /// Always returns `false`, a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn cell_type(&self) -> TypeTag {
        self.cell_type
    }

    #[inline]
    pub fn state_type(&self) -> TypeTag {
        self.state_type
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        coords(self.max_coord)
    }

    /// Iterate over the rows of the grid, top to bottom.
    #[inline]
    pub fn rows(&self) -> Rows<'_, S> {
        self.matrix.chunks(self.width())
    }

    /// Iterate over every coordinate and its state in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<'_, S> {
        Cells {
            inner: self.matrix.iter().enumerate(),
            width: self.width(),
        }
    }
}

/// Checks that a grid bounded by `(xmax, ymax)` fits both `isize` coordinates and one
/// allocation, returning its width and height.
fn dimensions<S>(xmax: usize, ymax: usize) -> Result<(usize, usize)> {
    let too_large = || Error::DimensionTooLarge { xmax, ymax };
    // `Coord::wrap` adds one to each bound.
    let limit = isize::MAX as usize;
    (xmax < limit && ymax < limit).ok_or_else(too_large)?;
    let (width, height) = (xmax + 1, ymax + 1);
    width
        .checked_mul(height)
        .and_then(|len| len.checked_mul(size_of::<StateData<S>>()))
        .filter(|&bytes| bytes <= limit)
        .ok_or_else(too_large)?;
    Ok((width, height))
}

#[inline]
fn index(coord: Coord, width: usize) -> usize {
    coord.y() as usize * width + coord.x() as usize
}

fn coords(max: Coord) -> impl Iterator<Item = Coord> {
    iproduct!(0..=max.y(), 0..=max.x()).map(|(y, x)| Coord::new(x, y))
}

impl<C, S: Clone> Clone for Automaton<C, S> {
    fn clone(&self) -> Self {
        Automaton {
            matrix: self.matrix.clone(),
            generation: self.generation,
            max_coord: self.max_coord,
            midpoint: self.midpoint,
            cell_type: self.cell_type,
            state_type: self.state_type,
            _cell: PhantomData,
        }
    }
}

impl<C, S: fmt::Debug> fmt::Debug for Automaton<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("cell_type", &self.cell_type.name())
            .field("state_type", &self.state_type.name())
            .field("generation", &self.generation)
            .field("max_coord", &self.max_coord)
            .field("matrix", &self.matrix)
            .finish()
    }
}

impl<'a, C, S> IntoIterator for &'a Automaton<C, S> {
    type Item = (Coord, &'a S);
    type IntoIter = Cells<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The rows of an automaton, each a slice of `width` records.
pub type Rows<'a, S> = Chunks<'a, StateData<S>>;

/// Every coordinate of an automaton with its state.
#[derive(Clone, Debug)]
pub struct Cells<'a, S> {
    inner: Enumerate<Iter<'a, StateData<S>>>,
    width: usize,
}

impl<'a, S> Iterator for Cells<'a, S> {
    type Item = (Coord, &'a S);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let width = self.width;
        self.inner.next().map(|(ix, data)| {
            let coord = Coord::new((ix % width) as isize, (ix / width) as isize);
            (coord, &data.state)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S> ExactSizeIterator for Cells<'a, S> {}

impl<'a, S> FusedIterator for Cells<'a, S> {}

/// Drives an automaton forward, see [`Automaton::generations`].
#[derive(Debug)]
pub struct Generations<'a, C, S> {
    automaton: &'a mut Automaton<C, S>,
}

impl<'a, C, S> Iterator for Generations<'a, C, S>
where
    C: Cell,
    S: State,
{
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.automaton.evolve();
        Some(self.automaton.generation)
    }
}
