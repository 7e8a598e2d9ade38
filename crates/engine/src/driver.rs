//! Driver task - the single owner of a running session.

use log::{debug, info};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::core::{GameSnapshot, Session};
use crate::error::EngineError;
use crate::schedule::TickSchedule;
use crate::types::Command;

/// Commands buffered before senders wait
pub const COMMAND_QUEUE_DEPTH: usize = 64;

/// Cloneable front door to a running driver
///
/// The driver stops once every handle is dropped.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<GameSnapshot>,
}

impl DriverHandle {
    pub async fn send(&self, command: Command) -> Result<(), EngineError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| EngineError::Stopped)
    }

    /// Send from synchronous code. Must not be called from inside the runtime.
    pub fn send_blocking(&self, command: Command) -> Result<(), EngineError> {
        self.commands
            .blocking_send(command)
            .map_err(|_| EngineError::Stopped)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that sees every snapshot published from now on
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshots.clone()
    }
}

/// Spawn the driver onto the current runtime
///
/// The join handle yields the final session once all handles are gone.
pub fn spawn(session: Session) -> (DriverHandle, JoinHandle<Session>) {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());
    let task = tokio::spawn(run(session, command_rx, snapshot_tx));

    (
        DriverHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
        },
        task,
    )
}

/// Driver loop
///
/// Pending commands win over a due tick, so a command sent before the tick
/// is applied before the tick's collision check.
pub async fn run(
    mut session: Session,
    mut commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<GameSnapshot>,
) -> Session {
    let mut schedule = TickSchedule::new();
    schedule.sync(session.timer());
    info!("driver started in phase {}", session.phase().as_str());

    loop {
        tokio::select! {
            biased;

            command = commands.recv() => match command {
                Some(command) => {
                    debug!("applying {}", command.as_str());
                    session = session.apply(command);
                }
                None => break,
            },
            generation = schedule.fired() => {
                session = session.on_timer(generation);
            }
        }

        schedule.sync(session.timer());
        snapshots.send_replace(session.snapshot());
    }

    info!(
        "driver stopped: score {}, rows {}, level {}",
        session.score(),
        session.rows_cleared(),
        session.level()
    );
    session
}
