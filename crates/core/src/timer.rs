//! Drop timer - the session's handle on the automatic tick
//!
//! The session owns the timer state and arms or cancels it explicitly; an
//! outside scheduler only mirrors it. Every state change bumps the
//! generation, so a scheduler holding an older generation knows its pending
//! tick is stale.

use crate::types::DropInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropTimer {
    interval: DropInterval,
    generation: u64,
}

impl DropTimer {
    /// A timer with nothing scheduled
    pub fn new() -> Self {
        Self {
            interval: DropInterval::Paused,
            generation: 0,
        }
    }

    /// Schedule ticks every `interval_ms`, replacing any pending schedule
    pub fn arm(&mut self, interval_ms: u32) {
        self.interval = DropInterval::Every(interval_ms);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Drop any pending tick. Cancelling a paused timer changes nothing.
    pub fn cancel(&mut self) {
        if self.interval.is_paused() {
            return;
        }
        self.interval = DropInterval::Paused;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn interval(&self) -> DropInterval {
        self.interval
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_armed(&self) -> bool {
        !self.interval.is_paused()
    }

    /// Should a tick scheduled under `generation` still fire?
    pub fn accepts(&self, generation: u64) -> bool {
        self.is_armed() && self.generation == generation
    }
}

impl Default for DropTimer {
    fn default() -> Self {
        Self::new()
    }
}
