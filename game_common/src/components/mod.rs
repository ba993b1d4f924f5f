pub mod missile;
pub mod movement;
pub mod ship;
