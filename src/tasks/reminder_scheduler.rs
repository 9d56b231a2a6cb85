//! Recurring exercise reminder

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::info;

use crate::config::MAX_INTERVAL_MINUTES;
use crate::state::AppState;

/// Longest period the scheduler will wait between reminders
pub const MAX_PERIOD: Duration = Duration::from_secs(MAX_INTERVAL_MINUTES * 60);

/// Fires "time for exercises" at a fixed period
#[derive(Debug)]
pub struct ReminderScheduler {
    period: Duration,
    fired: u64,
    next_at: DateTime<Local>,
}

impl ReminderScheduler {
    /// `period` is capped at [`MAX_PERIOD`]
    pub fn new(period: Duration) -> Self {
        let period = period.min(MAX_PERIOD);
        Self {
            period,
            fired: 0,
            next_at: after(Local::now(), period),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of reminders fired so far
    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn next_fire_at(&self) -> DateTime<Local> {
        self.next_at
    }

    /// Timer whose first tick is one full period from now
    pub fn interval(&self) -> Interval {
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    }

    /// Show the window and reset the sequence, whatever it was doing
    pub fn fire(&mut self, app: &mut AppState) {
        self.fired += 1;
        self.next_at = after(Local::now(), self.period);
        info!(
            "Reminder #{}: time for eye exercises (next at {})",
            self.fired,
            self.next_at.format("%H:%M:%S")
        );
        app.remind();
    }
}

/// `from + period`, or `from` when that falls off the calendar
fn after(from: DateTime<Local>, period: Duration) -> DateTime<Local> {
    chrono::Duration::from_std(period)
        .ok()
        .and_then(|delta| from.checked_add_signed(delta))
        .unwrap_or(from)
}
