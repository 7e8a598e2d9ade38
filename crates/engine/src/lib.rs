//! Engine driver - runs a session against the clock.
//!
//! One tokio task owns the [`Session`](blockfall_core::Session). It applies
//! commands in arrival order, fires the automatic tick from the session's drop
//! timer and publishes a snapshot after every step.

pub mod driver;
pub mod error;
pub mod schedule;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use driver::{run, spawn, DriverHandle, COMMAND_QUEUE_DEPTH};
pub use error::EngineError;
pub use schedule::TickSchedule;
