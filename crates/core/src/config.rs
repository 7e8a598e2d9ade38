//! Game configuration: grid size and drop timing.

use crate::error::ConfigError;
use crate::types::{
    BASE_DROP_MS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, LEVEL_DROP_OFFSET_MS, MAX_GRID_EDGE,
    MIN_DROP_MS, MIN_GRID_EDGE,
};

/// Tunables for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Tick interval at level 0
    pub base_drop_ms: u32,
    /// The interval never drops below this
    pub min_drop_ms: u32,
}

impl GameConfig {
    /// Default timing with a custom grid size
    pub fn with_size(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let edge = MIN_GRID_EDGE..=MAX_GRID_EDGE;
        if !edge.contains(&self.width) || !edge.contains(&self.height) {
            return Err(ConfigError::Dimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_drop_ms == 0 || self.base_drop_ms <= self.min_drop_ms {
            return Err(ConfigError::DropFloor {
                base_drop_ms: self.base_drop_ms,
                min_drop_ms: self.min_drop_ms,
            });
        }
        // Level 1 uses base / 2 + offset, which has to beat level 0.
        if self.base_drop_ms / 2 + LEVEL_DROP_OFFSET_MS >= self.base_drop_ms {
            return Err(ConfigError::BaseDropTooShort {
                base_drop_ms: self.base_drop_ms,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            base_drop_ms: BASE_DROP_MS,
            min_drop_ms: MIN_DROP_MS,
        }
    }
}
