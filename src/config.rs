//! Host configuration from `BLOCKFALL_*` environment variables.

use std::env;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{ConfigError, GameConfig};
use crate::types::SOFT_DROP_GRACE_MS;

pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";
pub const ENV_BASE_DROP_MS: &str = "BLOCKFALL_BASE_DROP_MS";
pub const ENV_MIN_DROP_MS: &str = "BLOCKFALL_MIN_DROP_MS";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_SOFT_DROP_GRACE_MS: &str = "BLOCKFALL_SOFT_DROP_GRACE_MS";

/// Everything the binary needs before it starts a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub game: GameConfig,
    /// `None` means "pick one from the clock"
    pub seed: Option<u32>,
    pub soft_drop_grace_ms: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            soft_drop_grace_ms: SOFT_DROP_GRACE_MS,
        }
    }
}

impl HostConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`HostConfig::from_env`] with a custom variable source.
    ///
    /// Unset or blank variables keep their defaults; anything else must parse
    /// and the resulting game configuration must validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let game = GameConfig {
            width: parse_var(&lookup, ENV_WIDTH)?.unwrap_or(defaults.game.width),
            height: parse_var(&lookup, ENV_HEIGHT)?.unwrap_or(defaults.game.height),
            base_drop_ms: parse_var(&lookup, ENV_BASE_DROP_MS)?
                .unwrap_or(defaults.game.base_drop_ms),
            min_drop_ms: parse_var(&lookup, ENV_MIN_DROP_MS)?
                .unwrap_or(defaults.game.min_drop_ms),
        };
        game.validate()?;

        Ok(Self {
            game,
            seed: parse_var(&lookup, ENV_SEED)?,
            soft_drop_grace_ms: parse_var(&lookup, ENV_SOFT_DROP_GRACE_MS)?
                .unwrap_or(defaults.soft_drop_grace_ms),
        })
    }

    /// Configured seed, or one derived from the system clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn parse_var<T, F>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        value: raw.clone(),
    })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
