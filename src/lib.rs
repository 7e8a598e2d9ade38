//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benchmarks can use `blockfall::{core,engine,...}`
//! while the implementation lives in dedicated crates under `crates/`.

pub mod config;

pub use blockfall_adapter as adapter;
pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_types as types;

pub use config::HostConfig;
