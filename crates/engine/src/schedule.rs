//! Tick schedule - mirrors a session's drop timer with a tokio interval.

use std::future;
use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::core::DropTimer;
use crate::types::DropInterval;

/// The pending automatic tick, if any
///
/// [`sync`](TickSchedule::sync) must run after every session step. A new
/// timer generation replaces the pending interval outright, so a tick armed
/// under an old generation can never fire.
#[derive(Debug)]
pub struct TickSchedule {
    seen: Option<u64>,
    pending: Option<(u64, Interval)>,
}

impl TickSchedule {
    pub fn new() -> Self {
        Self {
            seen: None,
            pending: None,
        }
    }

    /// Follow the timer: re-arm on a new generation, disarm when paused
    pub fn sync(&mut self, timer: &DropTimer) {
        let generation = timer.generation();
        if self.seen == Some(generation) {
            return;
        }
        self.seen = Some(generation);

        self.pending = match timer.interval() {
            DropInterval::Every(ms) => {
                let period = Duration::from_millis(u64::from(ms));
                let mut interval = time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Some((generation, interval))
            }
            DropInterval::Paused => None,
        };
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolve with the timer generation on the next tick; never resolves
    /// while disarmed. Cancel-safe.
    pub async fn fired(&mut self) -> u64 {
        match self.pending.as_mut() {
            Some((generation, interval)) => {
                interval.tick().await;
                *generation
            }
            None => future::pending().await,
        }
    }
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_one_period() {
        let mut timer = DropTimer::new();
        timer.arm(500);
        let mut schedule = TickSchedule::new();
        schedule.sync(&timer);

        let start = Instant::now();
        assert_eq!(schedule.fired().await, timer.generation());
        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_disarms() {
        let mut timer = DropTimer::new();
        timer.arm(500);
        let mut schedule = TickSchedule::new();
        schedule.sync(&timer);
        assert!(schedule.is_armed());

        timer.cancel();
        schedule.sync(&timer);
        assert!(!schedule.is_armed());

        let fired = time::timeout(Duration::from_secs(10), schedule.fired()).await;
        assert!(fired.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_generation_keeps_cadence() {
        let mut timer = DropTimer::new();
        timer.arm(300);
        let mut schedule = TickSchedule::new();
        schedule.sync(&timer);

        let start = Instant::now();
        schedule.fired().await;
        schedule.sync(&timer);
        schedule.fired().await;
        assert_eq!(start.elapsed(), Duration::from_millis(600));
    }
}
