//! Domain records shared between all peers of a match.
//!
//! The types in this crate carry no knowledge of how they are transmitted. Their wire encoding
//! lives in `game_net`.

pub mod components;
pub mod player;
