#![allow(dead_code)]

use gridauto::State;

/// Conway's Game of Life
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Life {
    #[default]
    Dead,
    Alive,
}

impl State for Life {
    fn change_state(&self, neighbors: &[&Self]) -> Self {
        let n = neighbors.iter().filter(|&&&c| c == Life::Alive).count();
        match (self, n) {
            (_, 3) | (Life::Alive, 2) => Life::Alive,
            _ => Life::Dead,
        }
    }
}

/// Takes on whatever its first neighbor held last generation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mirror(pub u8);

impl State for Mirror {
    fn change_state(&self, neighbors: &[&Self]) -> Self {
        *neighbors[0]
    }
}

/// Parse a pattern where `#` is alive and anything else is dead.
pub fn pattern(rows: &[&str]) -> Vec<Vec<Life>> {
    rows.iter()
        .map(|row| {
            row.chars()
                .map(|c| if c == '#' { Life::Alive } else { Life::Dead })
                .collect()
        })
        .collect()
}
