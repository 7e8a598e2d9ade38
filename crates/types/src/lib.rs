//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the same
//! types flow through the engine, the input mapping and the JSON adapter.
//!
//! # Grid Dimensions
//!
//! - **Width**: 20 columns by default (configurable, 4..=64)
//! - **Height**: 20 rows by default (configurable, 4..=64)
//! - Coordinates are `(x, y)` with `y = 0` at the top
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Tick interval at level 0 |
//! | `LEVEL_DROP_OFFSET_MS` | 200 | Added to `base / (level + 1)` after a level-up |
//! | `MIN_DROP_MS` | 250 | Floor for the tick interval |
//! | `ROWS_PER_LEVEL` | 10 | Rows needed per level step |
//! | `POINTS_PER_ROW` | 10 | Row points before the level multiplier |
//! | `SOFT_DROP_GRACE_MS` | 150 | Synthetic key-release delay for soft drop |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, ShapeId, Shift, Spin};
//!
//! assert_eq!(ShapeId::from_str("t"), Some(ShapeId::T));
//! assert_eq!(Shift::Left.dx(), -1);
//! assert_eq!(Command::from_str("rotateCw"), Some(Command::Rotate(Spin::Clockwise)));
//! ```

/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: u8 = 20;

/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: u8 = 20;

/// Smallest accepted grid edge (fits the 4-wide I piece)
pub const MIN_GRID_EDGE: u8 = 4;

/// Largest accepted grid edge (keeps every coordinate inside `i8`)
pub const MAX_GRID_EDGE: u8 = 64;

/// Tick interval at level 0 in milliseconds
pub const BASE_DROP_MS: u32 = 1000;

/// Constant part of the post-level-up interval formula
pub const LEVEL_DROP_OFFSET_MS: u32 = 200;

/// Floor for the tick interval
pub const MIN_DROP_MS: u32 = 250;

/// Cumulative rows per level step
pub const ROWS_PER_LEVEL: u32 = 10;

/// Points per cleared row at level 0
pub const POINTS_PER_ROW: u32 = 10;

/// Soft drop is released if no soft-drop key arrives within this window
pub const SOFT_DROP_GRACE_MS: u32 = 150;


/// The seven playable shapes
///
/// Each shape has a distinct colour tag (see the core catalog):
/// - **I**: cyan bar
/// - **J**: blue
/// - **L**: orange
/// - **O**: yellow square
/// - **S**: green
/// - **T**: purple
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeId {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeId {
    /// All shape ids in catalog order
    pub const ALL: [ShapeId; 7] = [
        ShapeId::I,
        ShapeId::J,
        ShapeId::L,
        ShapeId::O,
        ShapeId::S,
        ShapeId::T,
        ShapeId::Z,
    ];

    /// Parse shape id from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_str("j"), Some(ShapeId::J));
    /// assert_eq!(ShapeId::from_str("Z"), Some(ShapeId::Z));
    /// assert_eq!(ShapeId::from_str("0"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeId::I),
            "j" => Some(ShapeId::J),
            "l" => Some(ShapeId::L),
            "o" => Some(ShapeId::O),
            "s" => Some(ShapeId::S),
            "t" => Some(ShapeId::T),
            "z" => Some(ShapeId::Z),
            _ => None,
        }
    }

    /// Lowercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::I => "i",
            ShapeId::J => "j",
            ShapeId::L => "l",
            ShapeId::O => "o",
            ShapeId::S => "s",
            ShapeId::T => "t",
            ShapeId::Z => "z",
        }
    }
}

/// Whether a cell is permanently part of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    /// Not merged: empty, or covered by the still-falling piece
    Clear,
    /// Locked into the settled board
    Merged,
}

impl CellStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellStatus::Clear => "clear",
            CellStatus::Merged => "merged",
        }
    }
}

/// One grid position: a shape tag (`None` = empty) and its merge status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub tag: Option<ShapeId>,
    pub status: CellStatus,
}

impl Cell {
    /// `(empty, clear)`
    pub const EMPTY: Cell = Cell {
        tag: None,
        status: CellStatus::Clear,
    };

    /// A settled cell of the given shape
    pub const fn merged(id: ShapeId) -> Self {
        Self {
            tag: Some(id),
            status: CellStatus::Merged,
        }
    }

    /// A cell covered by the falling piece
    pub const fn falling(id: ShapeId) -> Self {
        Self {
            tag: Some(id),
            status: CellStatus::Clear,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tag.is_none()
    }

    /// True iff the cell is merged and carries a shape tag
    pub fn is_occupied(&self) -> bool {
        self.status == CellStatus::Merged && self.tag.is_some()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Left,
    Right,
}

impl Shift {
    /// Column delta (-1 or +1)
    pub fn dx(&self) -> i8 {
        match self {
            Shift::Left => -1,
            Shift::Right => 1,
        }
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// Commands accepted by a game session
///
/// Input collaborators hand these over already decoded; the session never
/// sees raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin (or restart) a game
    Start,
    /// Move one column left or right
    Move(Shift),
    /// Rotate 90 degrees with a bounded wall kick
    Rotate(Spin),
    /// Immediate drop step; pauses automatic ticks until released
    SoftDrop,
    /// End a soft drop and resume automatic ticks
    SoftDropRelease,
    /// Gravity step
    Tick,
}

impl Command {
    /// Parse command from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "moveleft" => Some(Command::Move(Shift::Left)),
            "moveright" => Some(Command::Move(Shift::Right)),
            "rotatecw" => Some(Command::Rotate(Spin::Clockwise)),
            "rotateccw" => Some(Command::Rotate(Spin::CounterClockwise)),
            "softdrop" => Some(Command::SoftDrop),
            "softdroprelease" => Some(Command::SoftDropRelease),
            "tick" => Some(Command::Tick),
            _ => None,
        }
    }

    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Move(Shift::Left) => "moveLeft",
            Command::Move(Shift::Right) => "moveRight",
            Command::Rotate(Spin::Clockwise) => "rotateCw",
            Command::Rotate(Spin::CounterClockwise) => "rotateCcw",
            Command::SoftDrop => "softDrop",
            Command::SoftDropRelease => "softDropRelease",
            Command::Tick => "tick",
        }
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Running,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Delay between automatic ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropInterval {
    Every(u32),
    /// No automatic tick is scheduled
    Paused,
}

impl DropInterval {
    pub fn as_millis(&self) -> Option<u32> {
        match self {
            DropInterval::Every(ms) => Some(*ms),
            DropInterval::Paused => None,
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, DropInterval::Paused)
    }
}
