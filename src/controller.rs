//! Lamp controller - the main orchestrator
//!
//! Owns the lamp state, the renderer and the three cooperative tasks, and
//! reacts to button edges. Timer handling lives in [`crate::timer`], boot and
//! shutdown in [`crate::power`].

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::animation::update_offsets;
use crate::config::LampConfig;
use crate::input::{Button, InputSource};
use crate::renderer::Renderer;
use crate::scheduler::Task;
use crate::state::{LampState, Mode};
use crate::wake::{SleepControl, WakeSignal};

/// Lamp engine
///
/// N is the number of LED channels
pub struct Lamp<'a, O: OutputDriver, S: SleepControl, const N: usize> {
    // External dependencies and configuration
    pub(crate) config: LampConfig,
    pub(crate) sleep: S,
    pub(crate) wake: &'a WakeSignal,

    // Internal state
    pub(crate) state: LampState<N>,
    pub(crate) frame_task: Task,
    pub(crate) overlay_task: Task,
    pub(crate) shutoff_task: Task,
    /// Set by a shutdown, ends the current loop cycle
    pub(crate) shut_down: bool,

    // Internal dependencies
    pub(crate) renderer: Renderer<O, N>,
}

impl<'a, O: OutputDriver, S: SleepControl, const N: usize> Lamp<'a, O, S, N> {
    /// Create a lamp in its boot state (off, static, mid brightness).
    ///
    /// Nothing is written to the output until the first render.
    pub fn new(output: O, sleep: S, wake: &'a WakeSignal, config: LampConfig) -> Self {
        Self {
            state: LampState::new(config.default_brightness),
            frame_task: Task::periodic(config.frame_duration),
            overlay_task: Task::once(),
            shutoff_task: Task::once(),
            shut_down: false,
            renderer: Renderer::new(output),
            config,
            sleep,
            wake,
        }
    }

    pub const fn state(&self) -> &LampState<N> {
        &self.state
    }

    pub const fn config(&self) -> &LampConfig {
        &self.config
    }

    /// Last frame written to the output
    pub const fn frame(&self) -> &[u8; N] {
        self.renderer.frame()
    }

    pub const fn output(&self) -> &O {
        self.renderer.output()
    }

    pub fn output_mut(&mut self) -> &mut O {
        self.renderer.output_mut()
    }

    pub const fn sleep(&self) -> &S {
        &self.sleep
    }

    /// Whether the periodic frame task is running
    pub const fn is_animating(&self) -> bool {
        self.frame_task.is_enabled()
    }

    /// Earliest pending task deadline.
    ///
    /// The caller may idle until then when no button is held.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.frame_task.next_run(),
            self.overlay_task.next_run(),
            self.shutoff_task.next_run(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Run one loop cycle: poll inputs, handle their edges, then run due tasks.
    ///
    /// Input edges are handled strictly before tasks so a button press wins
    /// over a deadline expiring in the same cycle. A shutdown ends the cycle:
    /// edges released together with the power button belong to the previous
    /// session and are dropped.
    pub fn tick<I: InputSource>(&mut self, inputs: &mut I, now: Instant) {
        self.shut_down = false;
        inputs.poll(now);
        for button in inputs.released() {
            self.handle(button, now);
            if self.shut_down {
                return;
            }
        }
        self.run_pending(now);
    }

    /// React to a released button
    pub fn handle(&mut self, button: Button, now: Instant) {
        match button {
            Button::Power => self.on_power(now),
            Button::Mode => self.on_mode(now),
            Button::BrightnessSpeed => self.on_brightness_speed(now),
            Button::Timer => self.on_timer(now),
        }
    }

    /// Run every task that is due at `now`
    pub fn run_pending(&mut self, now: Instant) {
        if self.shutoff_task.poll(now) {
            self.on_shutoff_expired();
            return;
        }
        if self.overlay_task.poll(now) {
            self.on_overlay_expired(now);
        }
        if self.frame_task.poll(now) {
            self.render(now);
        }
    }

    /// Update animation offsets for `now` and write one frame
    pub fn render(&mut self, now: Instant) {
        update_offsets(&mut self.state, &self.config, now);
        self.renderer.render(&self.state, &self.config);
    }

    fn on_power(&mut self, now: Instant) {
        self.state.power = !self.state.power;
        #[cfg(feature = "esp32-log")]
        println!("[Lamp.on_power] power: {}", self.state.power);

        if !self.state.power {
            self.shutdown();
            return;
        }

        self.state.fill(true);
        self.start_mode(now);
    }

    fn on_mode(&mut self, now: Instant) {
        self.state.mode = self.state.mode.toggled();
        #[cfg(feature = "esp32-log")]
        println!("[Lamp.on_mode] mode: {:?}", self.state.mode);

        if self.state.mode == Mode::Static && self.state.power {
            self.state.fill(true);
        }
        self.start_mode(now);
    }

    fn on_brightness_speed(&mut self, now: Instant) {
        match self.state.mode {
            Mode::Static => {
                self.state.advance_brightness();
                self.render(now);
            }
            Mode::Animated => {
                self.state.advance_speed();
            }
        }
    }

    /// Start rendering for the current mode.
    ///
    /// A static frame never changes, so static mode renders once and keeps
    /// the frame task stopped.
    fn start_mode(&mut self, now: Instant) {
        match self.state.mode {
            Mode::Static => {
                self.frame_task.disable();
                self.render(now);
            }
            Mode::Animated if self.state.power => {
                self.frame_task.enable(now);
            }
            Mode::Animated => {}
        }
    }
}
