/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as tick duration,
/// bomb fuse and grid dimensions.
pub const TICK_DURATION_MS: u64 = 100; // Duration of a simulation tick in milliseconds.

/// Time (in milliseconds) between a bomb being dropped and its explosion.
pub const BOMB_FUSE_MS: u64 = 500;

/// Bomb fuse expressed in simulation ticks.
pub const BOMB_FUSE_TICKS: u64 = BOMB_FUSE_MS / TICK_DURATION_MS;

/// A session with no connected client for this long is shut down.
pub const IDLE_SESSION_TIMEOUT_MS: u64 = 30_000;

/// Side length of the square grid, border walls included.
pub const DEFAULT_GRID_SIZE: usize = 11;

/// Smallest grid that still leaves an interior for the players.
pub const MIN_GRID_SIZE: usize = 4;

/// Minimum number of players required to start a game.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players allowed in a game (one per interior corner).
pub const MAX_PLAYERS: usize = 4;
