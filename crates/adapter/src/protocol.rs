//! Protocol module - JSON message types for the state stream

use serde::{Deserialize, Serialize};

use crate::core::{ActiveSnapshot, GameSnapshot, LandingEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateType {
    #[serde(rename = "state")]
    State,
}

impl Default for StateType {
    fn default() -> Self {
        Self::State
    }
}

/// One stage cell as `[tag, status]`
pub type CellMessage = (Option<String>, String);

/// Full game state after one driver step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: StateType,
    pub seq: u64,
    #[serde(rename = "game_id")]
    pub game_id: u32,
    pub phase: String,
    pub score: u32,
    #[serde(rename = "rows_cleared")]
    pub rows_cleared: u32,
    pub level: u32,
    #[serde(rename = "game_over")]
    pub game_over: bool,
    #[serde(rename = "drop_interval_ms")]
    pub drop_interval_ms: Option<u32>,
    pub stage: Vec<Vec<CellMessage>>,
    pub active: Option<ActiveMessage>,
    pub landing: Option<LandingMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveMessage {
    pub shape: String,
    pub x: i8,
    pub y: i8,
    pub size: u8,
}

impl From<&ActiveSnapshot> for ActiveMessage {
    fn from(active: &ActiveSnapshot) -> Self {
        Self {
            shape: active.id.as_str().to_string(),
            x: active.x,
            y: active.y,
            size: active.size,
        }
    }
}

/// The piece that just landed and what its landing did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingMessage {
    pub shape: Option<String>,
    pub x: i8,
    pub y: i8,
    #[serde(rename = "rows_cleared")]
    pub rows_cleared: u32,
    pub points: u32,
    #[serde(rename = "level_up")]
    pub level_up: bool,
    #[serde(rename = "game_over")]
    pub game_over: bool,
}

impl From<&LandingEvent> for LandingMessage {
    fn from(landing: &LandingEvent) -> Self {
        Self {
            shape: landing.piece.id().map(|id| id.as_str().to_string()),
            x: landing.piece.x,
            y: landing.piece.y,
            rows_cleared: landing.rows_cleared,
            points: landing.points,
            level_up: landing.level_up,
            game_over: landing.game_over,
        }
    }
}

impl StateMessage {
    pub fn from_snapshot(snapshot: &GameSnapshot, seq: u64) -> Self {
        let stage = snapshot
            .stage
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        (
                            cell.tag.map(|id| id.as_str().to_string()),
                            cell.status.as_str().to_string(),
                        )
                    })
                    .collect()
            })
            .collect();

        Self {
            msg_type: StateType::State,
            seq,
            game_id: snapshot.game_id,
            phase: snapshot.phase.as_str().to_string(),
            score: snapshot.score,
            rows_cleared: snapshot.rows_cleared,
            level: snapshot.level,
            game_over: snapshot.game_over,
            drop_interval_ms: snapshot.drop_interval.as_millis(),
            stage,
            active: snapshot.active.as_ref().map(ActiveMessage::from),
            landing: snapshot.landing.as_ref().map(LandingMessage::from),
        }
    }
}

/// Encode one snapshot as a single JSON line (no trailing newline)
pub fn encode_state(snapshot: &GameSnapshot, seq: u64) -> serde_json::Result<String> {
    serde_json::to_string(&StateMessage::from_snapshot(snapshot, seq))
}
