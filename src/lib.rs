//! Gridauto is a cellular automaton engine for bounded grids whose edges wrap around.
//!
//! An [`Automaton`] is generic over two things: a [`Cell`] topology, which decides which
//! coordinates a cell reads from, and a [`State`], which decides what a cell becomes given
//! what it reads. Every generation is computed from the previous one as a whole, so the
//! order cells are visited in never matters and the work is spread over the rayon pool.
//!
//! ```
//! use gridauto::{Automaton, Coord, Moore, Seed, State};
//!
//! #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
//! struct Life(bool);
//!
//! impl State for Life {
//!     fn change_state(&self, neighbors: &[&Self]) -> Self {
//!         let alive = neighbors.iter().filter(|n| n.0).count();
//!         Life(alive == 3 || (self.0 && alive == 2))
//!     }
//! }
//!
//! let mut auto = Automaton::<Moore, Life>::new(4, 4, Seed::Uniform(Life(false))).unwrap();
//! for x in 1..=3 {
//!     auto.set_state(Coord::new(x, 2), Life(true)).unwrap();
//! }
//! auto.evolve();
//! assert_eq!(auto.state(Coord::new(2, 1)), Ok(&Life(true)));
//! assert_eq!(auto.state(Coord::new(1, 2)), Ok(&Life(false)));
//! ```

mod automaton;
mod cell;
mod coord;
mod direction;
pub mod error;
mod moore;
mod neumann;
mod state_data;

pub use automaton::*;
pub use cell::*;
pub use coord::*;
pub use direction::*;
pub use error::{Error, Result};
pub use moore::*;
pub use neumann::*;
pub use state_data::*;

/// What a cell is, and what it becomes.
///
/// This enforces a rule in that all new states are only produced from the old board. This
/// prevents the update order from breaking the simulation, and lets a generation be computed
/// from many threads at once.
pub trait State: Clone + Default + Send + Sync + 'static {
    /// Compute the next state from this one and the current states of the neighbors, in the
    /// order the cell topology lists them.
    ///
    /// This must be a pure function of its inputs.
    fn change_state(&self, neighbors: &[&Self]) -> Self;
}
