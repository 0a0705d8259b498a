use crate::Coord;
use std::sync::Arc;

/// The record kept for every grid position: its cached neighbors and its current state.
///
/// The neighbor list is shared between generations; only the state is replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateData<S> {
    pub(crate) neighbors: Arc<[Coord]>,
    pub(crate) state: S,
}

impl<S> StateData<S> {
    #[inline]
    pub(crate) fn new(neighbors: Arc<[Coord]>, state: S) -> Self {
        StateData { neighbors, state }
    }

    /// The coordinates this cell reads from every generation.
    #[inline]
    pub fn neighbors(&self) -> &[Coord] {
        &self.neighbors
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The same position carrying a new state.
    #[inline]
    pub(crate) fn succeed(&self, state: S) -> Self {
        StateData {
            neighbors: Arc::clone(&self.neighbors),
            state,
        }
    }
}
