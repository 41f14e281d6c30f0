//! Shared constants and coordinate types for the spacesim workspace

pub mod constants;
pub mod coordinates;

pub use coordinates::CartesianPosition;
