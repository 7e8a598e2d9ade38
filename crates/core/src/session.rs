//! Game session - one game from start to game over
//!
//! The session is a plain value. Every command goes through
//! [`Session::apply`], which consumes the session and returns the next one, so
//! a reader holding a session never sees a half-applied command.

use log::{debug, info};

use crate::collision::collides;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::scoring::{drop_interval_ms, row_clear_points, should_level_up};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, LandingEvent};
use crate::timer::DropTimer;
use crate::types::{Command, DropInterval, Phase, Shift, Spin};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    active: ActivePiece,
    rng: SimpleRng,
    phase: Phase,
    score: u32,
    rows_cleared: u32,
    level: u32,
    timer: DropTimer,
    soft_dropping: bool,
    last_landing: Option<LandingEvent>,
    game_id: u32,
}

impl Session {
    /// Idle session on the default 20x20 grid
    pub fn new(seed: u32) -> Self {
        Self::idle(GameConfig::default(), seed)
    }

    /// Idle session with a custom configuration
    pub fn with_config(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::idle(config, seed))
    }

    /// Running session on an arranged board, timer armed at the base interval
    ///
    /// The active piece is taken as given; if it already collides the
    /// session ends immediately. The placeholder is rejected.
    pub fn from_board(
        config: GameConfig,
        grid: Grid,
        active: ActivePiece,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.width() != config.width || grid.height() != config.height {
            return Err(ConfigError::GridMismatch {
                width: grid.width(),
                height: grid.height(),
                expected_width: config.width,
                expected_height: config.height,
            });
        }
        if active.is_placeholder() {
            return Err(ConfigError::PlaceholderPiece);
        }

        let mut session = Self::idle(config, seed);
        session.grid = grid;
        session.phase = Phase::Running;
        session.game_id = 1;
        session.timer.arm(config.base_drop_ms);
        session.place(active);
        Ok(session)
    }

    fn idle(config: GameConfig, seed: u32) -> Self {
        Self {
            config,
            grid: Grid::new(config.width, config.height),
            active: ActivePiece::placeholder(),
            rng: SimpleRng::new(seed),
            phase: Phase::Idle,
            score: 0,
            rows_cleared: 0,
            level: 0,
            timer: DropTimer::new(),
            soft_dropping: false,
            last_landing: None,
            game_id: 0,
        }
    }

    /// Apply one command and return the resulting session
    ///
    /// Outside `Running` every command except `Start` returns the session
    /// untouched.
    pub fn apply(mut self, command: Command) -> Self {
        match (command, self.phase) {
            (Command::Start, _) => {
                self.last_landing = None;
                self.start_game();
            }
            (_, Phase::Idle | Phase::GameOver) => {}
            (command, Phase::Running) => {
                self.last_landing = None;
                match command {
                    Command::Start => {}
                    Command::Move(shift) => self.shift_active(shift),
                    Command::Rotate(spin) => self.rotate_active(spin),
                    Command::SoftDrop => self.begin_soft_drop(),
                    Command::SoftDropRelease => self.end_soft_drop(),
                    Command::Tick => self.drop_step(),
                }
            }
        }
        self
    }

    /// Timer-driven tick; ignored unless `generation` is the timer's current
    /// arming
    pub fn on_timer(self, generation: u64) -> Self {
        if self.timer.accepts(generation) {
            self.apply(Command::Tick)
        } else {
            self
        }
    }

    pub fn start(self) -> Self {
        self.apply(Command::Start)
    }

    pub fn shift(self, shift: Shift) -> Self {
        self.apply(Command::Move(shift))
    }

    pub fn rotate(self, spin: Spin) -> Self {
        self.apply(Command::Rotate(spin))
    }

    pub fn soft_drop(self) -> Self {
        self.apply(Command::SoftDrop)
    }

    pub fn release_soft_drop(self) -> Self {
        self.apply(Command::SoftDropRelease)
    }

    pub fn tick(self) -> Self {
        self.apply(Command::Tick)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Settled board, without the falling piece
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval(&self) -> DropInterval {
        self.timer.interval()
    }

    pub fn timer(&self) -> &DropTimer {
        &self.timer
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_dropping
    }

    /// Landing reported by the last applied command, if any
    pub fn last_landing(&self) -> Option<&LandingEvent> {
        self.last_landing.as_ref()
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Board with the falling piece painted as clear cells
    pub fn stage(&self) -> Grid {
        let mut stage = self.grid.clone();
        if self.phase == Phase::Running {
            stage.paint(&self.active);
        }
        stage
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            stage: self.stage(),
            phase: self.phase,
            score: self.score,
            rows_cleared: self.rows_cleared,
            level: self.level,
            game_over: self.game_over(),
            drop_interval: self.timer.interval(),
            active: ActiveSnapshot::from_piece(&self.active),
            landing: self.last_landing,
            game_id: self.game_id,
        }
    }

    fn start_game(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.rows_cleared = 0;
        self.level = 0;
        self.soft_dropping = false;
        self.phase = Phase::Running;
        self.game_id = self.game_id.wrapping_add(1);
        self.timer.arm(self.config.base_drop_ms);
        info!(
            "game {} started on a {}x{} grid",
            self.game_id, self.config.width, self.config.height
        );
        let piece = ActivePiece::spawn(&mut self.rng, self.config.width);
        self.place(piece);
    }

    fn shift_active(&mut self, shift: Shift) {
        if !collides(&self.active, &self.grid, shift.dx(), 0) {
            self.active = self.active.translated(shift.dx(), 0);
        }
    }

    fn rotate_active(&mut self, spin: Spin) {
        self.active = self.active.rotate(spin, &self.grid);
    }

    fn begin_soft_drop(&mut self) {
        if !self.soft_dropping {
            self.soft_dropping = true;
            self.timer.cancel();
        }
        self.drop_step();
    }

    fn end_soft_drop(&mut self) {
        if !self.soft_dropping {
            return;
        }
        self.soft_dropping = false;
        self.timer.arm(drop_interval_ms(self.level, &self.config));
    }

    /// Move down one row, or land: merge, sweep, score, level, spawn
    fn drop_step(&mut self) {
        // A piece without cells never collides; it counts as landed.
        if !self.active.is_placeholder() && !collides(&self.active, &self.grid, 0, 1) {
            self.active = self.active.translated(0, 1);
            return;
        }

        let landed = self.active.landed();
        let topped_out = landed.y < 1;

        self.grid.merge(&landed);
        let rows = self.grid.sweep_completed_rows() as u32;
        let points = row_clear_points(rows, self.level);
        self.score = self.score.saturating_add(points);
        self.rows_cleared = self.rows_cleared.saturating_add(rows);

        let level_up = should_level_up(self.rows_cleared, self.level);
        if level_up {
            self.level += 1;
            let interval = drop_interval_ms(self.level, &self.config);
            info!("level {} reached, drop interval {}ms", self.level, interval);
            if !self.soft_dropping && !topped_out {
                self.timer.arm(interval);
            }
        }
        if rows > 0 {
            debug!("cleared {} rows for {} points", rows, points);
        }

        if topped_out {
            self.end_game();
        } else {
            let piece = ActivePiece::spawn(&mut self.rng, self.config.width);
            self.place(piece);
        }

        self.last_landing = Some(LandingEvent {
            piece: landed,
            rows_cleared: rows,
            points,
            level_up,
            game_over: self.game_over(),
        });
    }

    /// Make `piece` the active piece, or end the game if its spot is taken
    fn place(&mut self, piece: ActivePiece) {
        if collides(&piece, &self.grid, 0, 0) {
            self.end_game();
        } else {
            self.active = piece;
        }
    }

    fn end_game(&mut self) {
        self.phase = Phase::GameOver;
        self.soft_dropping = false;
        self.active = ActivePiece::placeholder();
        self.timer.cancel();
        info!(
            "game {} over: score {}, rows {}, level {}",
            self.game_id, self.score, self.rows_cleared, self.level
        );
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
