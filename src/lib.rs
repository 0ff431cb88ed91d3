//! Bomb arena backend.
//!
//! `game` is the turn-driven simulation core; `server` is the actix driver
//! that feeds it client input on a fixed tick and broadcasts the results.

pub mod config;
pub mod game;
pub mod server;
