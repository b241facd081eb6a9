//! Background one-second clocks.
//!
//! Each timed activity has its own ticker. Starting or resuming the activity
//! re-phases that ticker so the first tick lands one full second later.

use crate::application::commands::{AppState, TickTarget, tick_target_impl};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Aborts its task when dropped.
#[derive(Debug)]
pub struct ClockTicker {
    target: TickTarget,
    handle: JoinHandle<()>,
}

impl ClockTicker {
    /// Aborts the task and waits for it to wind down.
    pub async fn shutdown(mut self) {
        self.handle.abort();
        if let Err(error) = (&mut self.handle).await {
            if !error.is_cancelled() {
                tracing::warn!(clock = self.target.as_str(), %error, "clock ticker panicked");
            }
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Must be called from within a tokio runtime.
pub fn spawn_clock_ticker(state: Arc<AppState>, target: TickTarget) -> ClockTicker {
    let activity = state.activity(target);
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(error) = tick_target_impl(&state, target) {
                        tracing::warn!(clock = target.as_str(), %error, "clock tick failed");
                    }
                }
                () = activity.notified() => {
                    interval.reset();
                }
            }
        }
    });

    tracing::debug!(clock = target.as_str(), "spawned clock ticker");
    ClockTicker { target, handle }
}

pub fn spawn_clock_tickers(state: &Arc<AppState>) -> [ClockTicker; 2] {
    [
        spawn_clock_ticker(Arc::clone(state), TickTarget::StudySession),
        spawn_clock_ticker(Arc::clone(state), TickTarget::Pomodoro),
    ]
}
