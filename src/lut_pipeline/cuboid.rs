//! Cube construction module
//!
//! Reshapes a flat color sequence into a fixed-size 3D grid.

mod cube;

pub use cube::Cuboid;
