//! Scoring module - row points, level thresholds and drop speed
//!
//! - Row clears score `rows * 10 * (level + 1)`.
//! - A level is gained once the cumulative row count exceeds `(level + 1) * 10`.
//! - From level 1 on the tick interval is `base / (level + 1) + 200`, clamped
//!   to the configured floor.

use crate::config::GameConfig;
use crate::types::{LEVEL_DROP_OFFSET_MS, POINTS_PER_ROW, ROWS_PER_LEVEL};

/// Points for clearing `rows` rows at `level` (0-based)
pub fn row_clear_points(rows: u32, level: u32) -> u32 {
    rows.saturating_mul(POINTS_PER_ROW)
        .saturating_mul(level.saturating_add(1))
}

/// Has the cumulative row count passed the threshold for `level`?
pub fn should_level_up(rows_cleared: u32, level: u32) -> bool {
    rows_cleared > level.saturating_add(1).saturating_mul(ROWS_PER_LEVEL)
}

/// Tick interval for a level
///
/// Each level is at least 1ms faster than the one before it until the floor,
/// even where the integer division above would repeat a value.
pub fn drop_interval_ms(level: u32, config: &GameConfig) -> u32 {
    let mut interval = config.base_drop_ms;
    for step in 1..=level {
        if interval <= config.min_drop_ms {
            break;
        }
        let scaled = config.base_drop_ms / step.saturating_add(1) + LEVEL_DROP_OFFSET_MS;
        interval = scaled.min(interval - 1).max(config.min_drop_ms);
    }
    interval
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_clear_points() {
        assert_eq!(row_clear_points(0, 0), 0);
        assert_eq!(row_clear_points(1, 0), 10);
        assert_eq!(row_clear_points(4, 0), 40);
        assert_eq!(row_clear_points(2, 3), 80);
    }

    #[test]
    fn test_level_threshold_is_strict() {
        assert!(!should_level_up(10, 0));
        assert!(should_level_up(11, 0));
        assert!(!should_level_up(20, 1));
        assert!(should_level_up(21, 1));
    }

    #[test]
    fn test_drop_interval_by_level() {
        let config = GameConfig::default();
        assert_eq!(drop_interval_ms(0, &config), 1000);
        assert_eq!(drop_interval_ms(1, &config), 700);
        assert_eq!(drop_interval_ms(2, &config), 533);
        assert_eq!(drop_interval_ms(3, &config), 450);
    }

    fn assert_strictly_decreasing(config: &GameConfig) {
        let mut previous = drop_interval_ms(0, config);
        for level in 1..2_000 {
            let interval = drop_interval_ms(level, config);
            if previous == config.min_drop_ms {
                assert_eq!(interval, config.min_drop_ms, "level {}", level);
            } else {
                assert!(
                    interval < previous,
                    "base {} min {}: level {} interval {} not below {}",
                    config.base_drop_ms,
                    config.min_drop_ms,
                    level,
                    interval,
                    previous
                );
            }
            previous = interval;
        }
        assert_eq!(previous, config.min_drop_ms);
    }

    #[test]
    fn test_low_floor_keeps_shrinking() {
        // base / (level + 1) repeats 227 at levels 35 and 36 here.
        let config = GameConfig {
            base_drop_ms: 1000,
            min_drop_ms: 100,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(drop_interval_ms(35, &config), 227);
        assert_eq!(drop_interval_ms(36, &config), 226);
        assert_strictly_decreasing(&config);

        for (base, min) in [(5000, 1), (2000, 50), (450, 10), (1000, 250)] {
            let config = GameConfig {
                base_drop_ms: base,
                min_drop_ms: min,
                ..GameConfig::default()
            };
            assert_eq!(config.validate(), Ok(()));
            assert_strictly_decreasing(&config);
        }
    }

    #[test]
    fn test_drop_interval_strictly_decreases_to_floor() {
        let config = GameConfig::default();
        let mut previous = drop_interval_ms(0, &config);
        for level in 1..100 {
            let interval = drop_interval_ms(level, &config);
            if previous == config.min_drop_ms {
                assert_eq!(interval, config.min_drop_ms);
            } else {
                assert!(interval < previous, "level {}", level);
            }
            previous = interval;
        }
        assert_eq!(previous, config.min_drop_ms);
    }
}
