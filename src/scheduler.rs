//! Cooperative task timing.
//!
//! A [`Task`] only tracks when it is due; the owner polls it once per loop
//! iteration and runs the matching action itself. There is no preemption and
//! no callback storage, so tasks can live inside the state they act on.

use embassy_time::{Duration, Instant};

/// How many times a task fires once enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iterations {
    /// Fires once, then disables itself
    Once,
    /// Fires every interval until disabled
    Forever,
}

/// A periodic or one-shot deadline
#[derive(Debug, Clone)]
pub struct Task {
    interval: Duration,
    iterations: Iterations,
    enabled: bool,
    next_run: Instant,
    runs: u32,
}

impl Task {
    /// Create a disabled task
    pub const fn new(interval: Duration, iterations: Iterations) -> Self {
        Self {
            interval,
            iterations,
            enabled: false,
            next_run: Instant::from_millis(0),
            runs: 0,
        }
    }

    /// Periodic task firing every `interval`
    pub const fn periodic(interval: Duration) -> Self {
        Self::new(interval, Iterations::Forever)
    }

    /// One-shot task, armed with [`Task::restart_delayed`]
    pub const fn once() -> Self {
        Self::new(Duration::from_millis(0), Iterations::Once)
    }

    /// Enable the task. The first run is due immediately.
    pub fn enable(&mut self, now: Instant) {
        self.restart_delayed(now, Duration::from_millis(0));
    }

    /// Cancel any pending run
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// (Re)arm the task to first fire `delay` after `now`.
    ///
    /// Any previously scheduled run is replaced.
    pub fn restart_delayed(&mut self, now: Instant, delay: Duration) {
        self.enabled = true;
        self.runs = 0;
        self.next_run = now + delay;
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True while handling the first run after enabling
    pub const fn is_first_iteration(&self) -> bool {
        self.runs == 1
    }

    /// Deadline of the next run, if any
    pub const fn next_run(&self) -> Option<Instant> {
        if self.enabled {
            Some(self.next_run)
        } else {
            None
        }
    }

    /// Check whether the task is due at `now` and advance it if so.
    ///
    /// Periodic tasks that fell more than two intervals behind skip the
    /// backlog instead of firing in a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.enabled || now < self.next_run {
            return false;
        }

        self.runs = self.runs.saturating_add(1);
        match self.iterations {
            Iterations::Once => {
                self.enabled = false;
            }
            Iterations::Forever => {
                let max_drift = self.interval * 2;
                if now > self.next_run + max_drift {
                    self.next_run = now;
                }
                self.next_run += self.interval;
            }
        }
        true
    }
}
