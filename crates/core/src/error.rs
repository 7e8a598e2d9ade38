//! Error types for grid construction and configuration.
//!
//! Game commands themselves never fail; rejected moves are no-ops.

use thiserror::Error;

/// Errors from building a grid out of explicit rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    NoRows,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid size {width}x{height} is outside the supported range")]
    Dimensions { width: usize, height: usize },
}

/// Errors from validating or loading a game configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {width}x{height} is outside the supported range")]
    Dimensions { width: u8, height: u8 },

    #[error("grid is {width}x{height} but the configuration expects {expected_width}x{expected_height}")]
    GridMismatch {
        width: u8,
        height: u8,
        expected_width: u8,
        expected_height: u8,
    },

    #[error("base drop interval {base_drop_ms}ms must exceed the {min_drop_ms}ms floor")]
    DropFloor { base_drop_ms: u32, min_drop_ms: u32 },

    #[error("base drop interval {base_drop_ms}ms is too short for level-ups to speed the game up")]
    BaseDropTooShort { base_drop_ms: u32 },

    #[error("the active piece must be a playable shape, not the placeholder")]
    PlaceholderPiece,

    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: String, value: String },
}
