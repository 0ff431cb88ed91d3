/// Main configuration module.
///
/// Re-exports submodules for game and server configuration, and defines the
/// per-game override record accepted when a game is created.
pub mod game;
pub mod server;

use serde::{Deserialize, Serialize};

use crate::config::game::{
    BOMB_FUSE_TICKS, DEFAULT_GRID_SIZE, MAX_PLAYERS, MIN_GRID_SIZE, MIN_PLAYERS,
};
use crate::game::error::GameError;

/// Per-game settings. Missing fields fall back to the constants in [`game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    #[serde(default = "default_player_count")]
    pub player_count: usize,
    #[serde(default = "default_fuse_ticks")]
    pub fuse_ticks: u64,
}

fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

fn default_player_count() -> usize {
    MIN_PLAYERS
}

fn default_fuse_ticks() -> u64 {
    BOMB_FUSE_TICKS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            player_count: MIN_PLAYERS,
            fuse_ticks: BOMB_FUSE_TICKS,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: usize, player_count: usize) -> Self {
        Self {
            grid_size,
            player_count,
            ..Self::default()
        }
    }

    /// Check the grid size and player count against the allowed ranges.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(GameError::GridTooSmall {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount {
                count: self.player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"player_count": 3}"#).unwrap();
        assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
        assert_eq!(config.player_count, 3);
        assert_eq!(config.fuse_ticks, BOMB_FUSE_TICKS);
    }

    #[test]
    fn test_validate_rejects_small_grid() {
        let config = GameConfig::new(3, 2);
        assert_eq!(
            config.validate(),
            Err(GameError::GridTooSmall { size: 3, min: MIN_GRID_SIZE })
        );
    }

    #[test]
    fn test_validate_rejects_player_count() {
        assert!(matches!(
            GameConfig::new(6, 1).validate(),
            Err(GameError::InvalidPlayerCount { count: 1, .. })
        ));
        assert!(matches!(
            GameConfig::new(6, 5).validate(),
            Err(GameError::InvalidPlayerCount { count: 5, .. })
        ));
        assert!(GameConfig::new(4, 4).validate().is_ok());
    }
}
