use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::types::{DropInterval, Phase, ShapeId};

/// Where the falling piece is, for collaborators that draw it themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub id: ShapeId,
    pub x: i8,
    pub y: i8,
    pub size: u8,
}

impl ActiveSnapshot {
    pub fn from_piece(piece: &ActivePiece) -> Option<Self> {
        Some(Self {
            id: piece.id()?,
            x: piece.x,
            y: piece.y,
            size: piece.shape.size(),
        })
    }
}

/// Reported by the update in which a piece landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LandingEvent {
    /// The piece as merged, with `collided` set
    pub piece: ActivePiece,
    pub rows_cleared: u32,
    pub points: u32,
    pub level_up: bool,
    pub game_over: bool,
}

/// Read-only view of a session after a command
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Settled board with the falling piece painted as clear cells
    pub stage: Grid,
    pub phase: Phase,
    pub score: u32,
    pub rows_cleared: u32,
    pub level: u32,
    pub game_over: bool,
    pub drop_interval: DropInterval,
    pub active: Option<ActiveSnapshot>,
    pub landing: Option<LandingEvent>,
    /// Increments on every start
    pub game_id: u32,
}
