mod common;

use common::{Life, Mirror};
use gridauto::{Automaton, Coord, Error, Moore, Seed, VonNeumann};

fn neighbor_lists<C, S>(auto: &Automaton<C, S>) -> Vec<Vec<Coord>>
where
    C: gridauto::Cell,
    S: gridauto::State,
{
    auto.coords()
        .map(|coord| auto.neighbors(coord).unwrap().to_vec())
        .collect()
}

#[test]
fn seed_of_wrong_size_is_rejected() {
    let result = Automaton::<Moore, Life>::new(2, 2, Seed::Grid(vec![vec![Life::Dead; 2]; 2]));
    assert_eq!(
        result.unwrap_err(),
        Error::DimensionMismatch {
            expected_width: 3,
            expected_height: 3,
            width: 2,
            height: 2,
        }
    );
}

#[test]
fn oversized_grid_is_rejected() {
    let result = Automaton::<Moore, Life>::new(usize::MAX, 0, Seed::Grid(vec![]));
    assert_eq!(
        result.unwrap_err(),
        Error::DimensionTooLarge {
            xmax: usize::MAX,
            ymax: 0,
        }
    );

    let edge = isize::MAX as usize;
    assert!(Automaton::<Moore, Life>::new(0, edge, Seed::Uniform(Life::Dead)).is_err());

    let half = usize::MAX / 2;
    assert_eq!(
        Automaton::<Moore, Life>::new(half - 1, 3, Seed::Uniform(Life::Alive)).unwrap_err(),
        Error::DimensionTooLarge {
            xmax: half - 1,
            ymax: 3,
        }
    );
}

#[test]
#[should_panic(expected = "too large")]
fn filled_panics_on_oversized_grid() {
    Automaton::<Moore, Life>::filled(usize::MAX, usize::MAX, Life::Dead);
}

#[test]
fn set_state_out_of_bounds() {
    let mut auto = Automaton::<Moore, Life>::with_default(3, 2);
    let before = auto.to_rows();
    for &coord in &[Coord::new(4, 0), Coord::new(0, 3), Coord::new(-1, 0)] {
        assert_eq!(
            auto.set_state(coord, Life::Alive),
            Err(Error::OutOfBounds {
                coord,
                bound: Coord::new(3, 2),
            })
        );
        assert!(auto.state(coord).is_err());
    }
    assert_eq!(auto.to_rows(), before);
    assert!(auto.set_state(Coord::new(3, 2), Life::Alive).is_ok());
    assert_eq!(auto.state(Coord::new(3, 2)), Ok(&Life::Alive));
}

#[test]
fn evolve_reads_only_the_previous_generation() {
    // Two cells side by side: each cell's first neighbor is the other one.
    let mut auto = Automaton::<VonNeumann, Mirror>::new(
        1,
        0,
        Seed::Grid(vec![vec![Mirror(1), Mirror(2)]]),
    )
    .unwrap();
    assert_eq!(auto.neighbors(Coord::new(0, 0)).unwrap()[0], Coord::new(1, 0));
    assert_eq!(auto.neighbors(Coord::new(1, 0)).unwrap()[0], Coord::new(0, 0));

    auto.evolve();
    assert_eq!(auto.to_rows(), vec![vec![Mirror(2), Mirror(1)]]);
    auto.evolve();
    assert_eq!(auto.to_rows(), vec![vec![Mirror(1), Mirror(2)]]);
}

#[test]
fn set_state_keeps_generation_and_topology() {
    let mut auto = Automaton::<Moore, Life>::with_default(4, 3);
    let topology = neighbor_lists(&auto);
    auto.run(3);
    auto.set_state(Coord::new(1, 1), Life::Alive).unwrap();
    assert_eq!(auto.generation(), 3);
    assert_eq!(neighbor_lists(&auto), topology);
}

#[test]
fn clear_resets_states_and_generation() {
    let mut auto = Automaton::<Moore, Life>::new(5, 5, Seed::Uniform(Life::Alive)).unwrap();
    auto.set_state(Coord::new(2, 2), Life::Dead).unwrap();
    auto.run(2);
    let topology = neighbor_lists(&auto);

    auto.clear();
    assert_eq!(auto.generation(), 0);
    assert!(auto.iter().all(|(_, &s)| s == Life::default()));
    assert_eq!(neighbor_lists(&auto), topology);
}

#[test]
fn spawn_copies_states_but_not_neighbors() {
    let pattern = Automaton::<VonNeumann, Life>::new(
        1,
        1,
        Seed::Grid(vec![vec![Life::Alive, Life::Dead], vec![Life::Dead, Life::Alive]]),
    )
    .unwrap();
    let mut world = Automaton::<Moore, Life>::with_default(4, 4);
    let topology = neighbor_lists(&world);

    world.spawn(&pattern, Coord::new(3, 3)).unwrap();
    assert_eq!(world.state(Coord::new(3, 3)), Ok(&Life::Alive));
    assert_eq!(world.state(Coord::new(4, 3)), Ok(&Life::Dead));
    assert_eq!(world.state(Coord::new(4, 4)), Ok(&Life::Alive));
    assert_eq!(world.iter().filter(|(_, &s)| s == Life::Alive).count(), 2);
    assert_eq!(neighbor_lists(&world), topology);
    assert_eq!(world.generation(), 0);
}

#[test]
fn spawn_out_of_bounds_leaves_grid_untouched() {
    let pattern = Automaton::<Moore, Life>::new(2, 2, Seed::Uniform(Life::Alive)).unwrap();
    let mut world = Automaton::<Moore, Life>::with_default(4, 4);
    world.set_state(Coord::new(0, 0), Life::Alive).unwrap();
    let before = world.to_rows();

    let at = Coord::new(3, 3);
    assert_eq!(
        world.spawn(&pattern, at),
        Err(Error::OutOfBounds {
            coord: Coord::new(5, 5),
            bound: Coord::new(4, 4),
        })
    );
    assert!(world.spawn(&pattern, Coord::new(2, 3)).is_err());
    assert!(world.spawn(&pattern, Coord::new(-1, 0)).is_err());
    assert_eq!(world.to_rows(), before);

    assert!(world.spawn(&pattern, Coord::new(2, 2)).is_ok());
    assert_eq!(world.state(Coord::new(4, 4)), Ok(&Life::Alive));
}

#[test]
fn spawn_rejects_other_state_types() {
    let pattern = Automaton::<Moore, Mirror>::with_default(0, 0);
    let mut world = Automaton::<Moore, Life>::with_default(4, 4);
    let before = world.to_rows();
    match world.spawn(&pattern, Coord::new(0, 0)) {
        Err(Error::TypeIncompatible { expected, found }) => {
            assert!(expected.ends_with("Life"));
            assert!(found.ends_with("Mirror"));
        }
        other => panic!("expected a type error, got {:?}", other),
    }
    assert_eq!(world.to_rows(), before);
}

#[test]
fn rebuild_from_rows() {
    let mut auto = Automaton::<Moore, Life>::with_default(6, 4);
    auto.set_state(Coord::new(1, 1), Life::Alive).unwrap();
    auto.set_state(Coord::new(2, 1), Life::Alive).unwrap();
    auto.set_state(Coord::new(1, 2), Life::Alive).unwrap();
    auto.run(2);

    let copy = Automaton::<Moore, Life>::new(6, 4, Seed::from(auto.to_rows())).unwrap();
    assert_eq!(copy.generation(), 0);
    assert!(copy.iter().eq(auto.iter()));
    assert_eq!(copy.rows().count(), 5);
}
