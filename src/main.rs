//! Headless terminal host (default binary).
//!
//! Reads keys from the controlling terminal, feeds them to the game driver
//! and writes one JSON state line per update to stdout. Logs go to stderr.
//!
//! Pipe stdout into a renderer or a file. When stdout is the terminal itself,
//! lines end in `\r\n` so they stay readable under raw mode.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use log::info;

use blockfall::adapter::{stream_states_with, LineEnding};
use blockfall::core::Session;
use blockfall::engine::{self, DriverHandle};
use blockfall::input::{should_quit, InputHandler};
use blockfall::types::Command;
use blockfall::HostConfig;

/// Input poll period
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = HostConfig::from_env().context("read BLOCKFALL_* configuration")?;
    let seed = config.seed_or_clock();
    let session = Session::with_config(config.game, seed)?;
    info!(
        "grid {}x{}, seed {}",
        config.game.width, config.game.height, seed
    );

    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    let (handle, driver) = {
        let _guard = runtime.enter();
        engine::spawn(session)
    };
    let line_ending = if std::io::stdout().is_terminal() {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    };
    let writer = runtime.spawn(stream_states_with(
        handle.subscribe(),
        tokio::io::stdout(),
        line_ending,
    ));

    terminal::enable_raw_mode().context("enable raw mode")?;
    let result = run(&handle, config.soft_drop_grace_ms);

    // Always try to restore terminal state.
    let _ = terminal::disable_raw_mode();

    drop(handle);
    let session = runtime.block_on(driver).context("join driver")?;
    runtime.block_on(writer).context("join writer")??;
    info!(
        "final score {}, rows {}, level {}",
        session.score(),
        session.rows_cleared(),
        session.level()
    );
    result
}

fn run(handle: &DriverHandle, soft_drop_grace_ms: u32) -> Result<()> {
    let mut input = InputHandler::with_grace_ms(soft_drop_grace_ms);
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    handle.send_blocking(Command::Start)?;

    loop {
        if event::poll(frame)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
                if let Some(command) = input.handle_key(key) {
                    handle.send_blocking(command)?;
                }
            }
        }

        let elapsed = last_frame.elapsed().as_millis() as u32;
        last_frame = Instant::now();
        if let Some(command) = input.update(elapsed) {
            handle.send_blocking(command)?;
        }
    }
}
