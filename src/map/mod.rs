//! The static playfield: movement directions and walls.

pub mod direction;
pub mod wall;
