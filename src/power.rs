//! Boot animation and shutdown sequencing

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::config::FADE_NONE;
use crate::controller::Lamp;
use crate::wake::SleepControl;

#[allow(clippy::cast_possible_truncation)]
fn delay(delay: &mut impl DelayNs, duration: Duration) {
    delay.delay_ms(duration.as_millis().min(u64::from(u32::MAX)) as u32);
}

impl<O: OutputDriver, S: SleepControl, const N: usize> Lamp<'_, O, S, N> {
    /// Play the boot animation.
    ///
    /// Blocks until done: channels fill left to right, then the whole lamp
    /// fades to black. The lamp is left off with fade reset. Buttons are not
    /// serviced meanwhile.
    ///
    /// Run it once before the first [`tick`](Self::tick). Pending tasks and
    /// the timer selection are dropped; the selected mode is kept.
    pub fn boot(&mut self, delay_provider: &mut impl DelayNs) {
        #[cfg(feature = "esp32-log")]
        println!("[Lamp.boot] starting boot animation");

        let timings = self.config.boot;

        self.frame_task.disable();
        self.reset_timer();

        // Rendered as a powered lamp without animation offsets, the state
        // after boot is off
        self.state.power = true;
        self.state.fade = FADE_NONE;
        self.state.fill(false);
        self.renderer.render(&self.state, &self.config);

        for i in 0..N {
            self.state.channel_enabled[i] = true;
            self.renderer.render(&self.state, &self.config);
            delay(delay_provider, timings.settle);
        }

        let step = timings.fade_step.max(1);
        let mut fade = FADE_NONE;
        while fade > 0 {
            fade = fade.saturating_sub(step);
            self.state.fade = fade;
            self.renderer.render(&self.state, &self.config);
            delay(delay_provider, timings.fade_step_delay);
        }

        self.state.power = false;
        self.state.fade = FADE_NONE;
        self.state.fill(false);
        self.renderer.render(&self.state, &self.config);

        #[cfg(feature = "esp32-log")]
        println!("[Lamp.boot] boot animation done");
    }

    /// Set the global fade level (percent, clamped to 100) and re-render
    pub fn set_fade(&mut self, fade: u8, now: Instant) {
        self.state.fade = fade.min(FADE_NONE);
        self.render(now);
    }

    /// Switch the lamp off.
    ///
    /// Renders the all-off frame, stops every task and then runs the sleep
    /// strategy of the build. With a halting [`SleepControl`] this returns
    /// only after the wake interrupt posted its signal. Either way the lamp
    /// comes back off, with all channels disabled, no fade and no timer.
    pub fn shutdown(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[Lamp.shutdown] shutting down");

        self.shut_down = true;
        self.state.power = false;
        self.state.fade = FADE_NONE;
        self.state.fill(false);
        self.reset_timer();
        self.frame_task.disable();
        self.renderer.render(&self.state, &self.config);

        if S::HALTS {
            // Drop a request left over from before this shutdown
            self.wake.take();
            self.sleep.attach_wake();
            loop {
                self.sleep.power_down();
                if self.wake.take() {
                    break;
                }
            }
            self.sleep.detach_wake();

            #[cfg(feature = "esp32-log")]
            println!("[Lamp.shutdown] woken up");
        }

        // Nothing armed before sleeping may survive into the next session
        self.reset_timer();
    }
}
