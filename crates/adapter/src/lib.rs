//! Adapter module - line-delimited JSON state stream
//!
//! Every snapshot the driver publishes becomes one JSON object on its own
//! line, so any process reading the host's stdout can follow the game.
//!
//! # Message Shape
//!
//! ```text
//! {"type":"state","seq":3,"game_id":1,"phase":"running","score":0,"rows_cleared":0,"level":0,
//!  "game_over":false,"drop_interval_ms":1000,"stage":[[[null,"clear"],...],...],
//!  "active":{"shape":"t","x":9,"y":1,"size":3},"landing":null}
//! ```
//!
//! - `stage` is row-major, top row first; each cell is `[tag, status]` where
//!   `tag` is the lowercase shape letter or `null`.
//! - `drop_interval_ms` is `null` while no automatic tick is scheduled.
//! - `landing` is set only on the state produced by the update in which a
//!   piece landed.
//!
//! # Implementation
//!
//! - [`protocol`] holds the serde message types and [`encode_state`]
//! - [`stream`] writes the messages to any `tokio` writer, ending lines with
//!   `\n` or, for a terminal in raw mode, `\r\n`

pub mod protocol;
pub mod stream;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use protocol::{encode_state, ActiveMessage, CellMessage, LandingMessage, StateMessage, StateType};
pub use stream::{stream_states, stream_states_with, LineEnding};
