use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_GRID_SIZE: u8 = 9;
pub const DEFAULT_FENCE_COUNT: u8 = 10;
pub const MIN_GRID_SIZE: u8 = 2;
pub const MAX_GRID_SIZE: u8 = 19;

/// Board size and starting fences per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: u8,
    pub fence_count: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: DEFAULT_GRID_SIZE,
            fence_count: DEFAULT_FENCE_COUNT,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: u8, fence_count: u8) -> Result<Self, ConfigError> {
        let config = GameConfig {
            grid_size,
            fence_count,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(())
    }
}
