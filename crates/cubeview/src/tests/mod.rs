mod geometry;

use cubepuzzle::{CubeState, Face, Slice};
use web_time::Duration;

use crate::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn face(i: u8) -> Face {
    Face::new(i).unwrap()
}

fn cube(size: usize) -> RubikCube {
    init_logging();
    let mut cube = RubikCube::with_size(size).unwrap();
    cube.set_seed(12345);
    cube
}

fn solved(size: usize) -> CubeState {
    CubeState::new_solved(size).unwrap()
}

/// Advances the cube in 16ms steps until no further ticks are requested.
fn run_until_idle(cube: &mut RubikCube) -> usize {
    let mut ticks = 0;
    while cube.advance(Duration::from_millis(16)) {
        ticks += 1;
        assert!(ticks < 100_000, "animation never finished");
    }
    ticks
}
