//! Auto-shutoff timer and its overlay
//!
//! Two independent one-shot deadlines share the timer selection:
//! - the overlay deadline hides the bar-graph preview after a fixed window;
//! - the shutoff deadline powers the lamp down after the selected duration.
//!
//! Each timer edge re-arms both from scratch, so only the latest edge counts.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::controller::Lamp;
use crate::wake::SleepControl;

impl<O: OutputDriver, S: SleepControl, const N: usize> Lamp<'_, O, S, N> {
    /// Time left until the auto-shutoff fires, if armed
    pub fn shutoff_remaining(&self, now: Instant) -> Option<Duration> {
        let deadline = self.shutoff_task.next_run()?;
        Some(
            deadline
                .checked_duration_since(now)
                .unwrap_or(Duration::from_millis(0)),
        )
    }

    /// Deadline at which the timer overlay is hidden, if shown
    pub fn overlay_deadline(&self) -> Option<Instant> {
        self.overlay_task.next_run()
    }

    pub(crate) fn on_timer(&mut self, now: Instant) {
        self.state.advance_timer();

        self.state.show_timer_overlay = true;
        self.overlay_task
            .restart_delayed(now, self.config.overlay_duration);

        self.arm_shutoff(now);
        self.render(now);
    }

    /// Arm the shutoff for the selected duration, or disarm it for selector 0
    fn arm_shutoff(&mut self, now: Instant) {
        match self.config.shutoff_duration(self.state.selected_timer) {
            Some(duration) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Lamp.arm_shutoff] shutoff in {} s",
                    duration.as_secs()
                );
                self.shutoff_task.restart_delayed(now, duration);
            }
            None => {
                #[cfg(feature = "esp32-log")]
                println!("[Lamp.arm_shutoff] shutoff disarmed");
                self.shutoff_task.disable();
            }
        }
    }

    pub(crate) fn on_overlay_expired(&mut self, now: Instant) {
        self.state.show_timer_overlay = false;
        self.render(now);
    }

    pub(crate) fn on_shutoff_expired(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[Lamp.on_shutoff_expired] timer elapsed");
        self.shutdown();
    }

    /// Drop the timer selection together with its deadlines
    pub(crate) fn reset_timer(&mut self) {
        self.state.selected_timer = 0;
        self.state.show_timer_overlay = false;
        self.overlay_task.disable();
        self.shutoff_task.disable();
    }
}
