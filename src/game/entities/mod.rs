//! Game entities module.
//!
//! This module organizes player and bomb entity logic.

pub mod bomb;
pub mod player;

pub use bomb::*;
pub use player::*;
