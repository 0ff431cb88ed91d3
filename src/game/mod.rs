//! Deterministic simulation core.
//!
//! The grid and its occupants, the player roster, bomb timers and the
//! elimination rules. Nothing in here knows about time or I/O: the driver
//! hands in one [`actions::TickActions`] snapshot per tick.

pub mod actions;
pub mod entities;
pub mod error;
pub mod events;
pub mod grid;
pub mod state;
pub mod systems;
pub mod types;


pub use actions::{PlayerInput, TickActions};
pub use error::GameError;
pub use events::{EliminationCause, GameEvent};
pub use state::{GameState, TickReport};
pub use types::{Direction, Entity, Point};
