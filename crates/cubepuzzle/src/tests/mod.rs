mod topology;

use crate::*;

fn face(i: u8) -> Face {
    Face::new(i).unwrap()
}

fn slice(f: u8, depth: usize, clockwise: bool) -> Slice {
    Slice::new(face(f), depth, clockwise)
}

fn solved(size: usize) -> CubeState {
    CubeState::new_solved(size).unwrap()
}
