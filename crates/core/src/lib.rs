//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and the session state machine. It has
//! no dependencies on terminals, timers or I/O, which makes it:
//!
//! - **Deterministic**: the same seed and command sequence give the same game
//! - **Testable**: every rule is reachable through plain function calls
//! - **Portable**: the async driver, input mapping and JSON adapter sit on top
//!
//! # Module Structure
//!
//! - [`catalog`]: shape matrices, colour tags and random shape selection
//! - [`grid`]: the playfield with merge and row sweep
//! - [`piece`]: the falling piece, rotation and the bounded wall kick
//! - [`collision`]: placement legality against walls, floor and merged cells
//! - [`scoring`]: row points, level thresholds and drop intervals
//! - [`timer`]: the drop timer resource owned by a session
//! - [`session`]: the `Idle -> Running -> GameOver` state machine
//! - [`snapshot`]: read-only views handed to renderers
//!
//! # Game Rules
//!
//! - Shapes are picked uniformly at random.
//! - A piece spawns centred at the top row; if that spot is taken the game ends.
//! - Gravity moves the piece one row per tick. A piece that cannot fall is
//!   merged; if it rests above row 1 the game ends.
//! - Complete rows are removed together and score `rows * 10 * (level + 1)`.
//! - Every ten cleared rows past the current threshold raise the level and
//!   shorten the tick interval.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::{Command, Shift};
//!
//! let game = Session::new(12345)
//!     .apply(Command::Start)
//!     .apply(Command::Move(Shift::Left))
//!     .apply(Command::Tick);
//!
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 0);
//! ```

pub mod catalog;
pub mod collision;
pub mod config;
pub mod error;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use catalog::{colour, placeholder, random_shape_id, shape_for, Rgb, Shape, ShapeMatrix};
pub use collision::collides;
pub use config::GameConfig;
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use session::Session;
pub use snapshot::{ActiveSnapshot, GameSnapshot, LandingEvent};
pub use timer::DropTimer;
