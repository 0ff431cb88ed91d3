//! Grid model.
//!
//! This module organizes tiles and the walled square grid.

pub mod grid;
pub mod tile;

pub use grid::*;
pub use tile::*;
