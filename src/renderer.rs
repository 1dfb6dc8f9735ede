//! Frame renderer
//!
//! Maps the lamp state onto one 8-bit duty value per channel and writes the
//! frame to the output driver.

use crate::OutputDriver;
use crate::config::{BRIGHTNESS_MAX, FADE_NONE, LampConfig, Polarity};
use crate::state::LampState;

/// Full-scale duty of the output
pub const DUTY_MAX: u8 = u8::MAX;

/// Brightness of channel `index` in the `0..=BRIGHTNESS_MAX` domain
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn channel_level<const N: usize>(
    state: &LampState<N>,
    config: &LampConfig,
    index: usize,
) -> u16 {
    if !state.power {
        return 0;
    }

    if state.show_timer_overlay {
        return if index < state.selected_timer {
            BRIGHTNESS_MAX
        } else {
            0
        };
    }

    let mut raw = if state.channel_enabled[index] {
        f32::from(config.brightness(state.selected_brightness)) + state.channel_offset[index]
    } else {
        0.0
    };
    if state.fade != FADE_NONE {
        raw = raw * f32::from(state.fade) / 100.0;
    }

    libm::roundf(raw.clamp(0.0, f32::from(BRIGHTNESS_MAX))) as u16
}

/// Scale a brightness level to the output duty range
#[allow(clippy::cast_possible_truncation)]
pub const fn level_to_duty(level: u16, polarity: Polarity) -> u8 {
    let level = if level > BRIGHTNESS_MAX {
        BRIGHTNESS_MAX
    } else {
        level
    };
    let duty = ((level as u32 * DUTY_MAX as u32 + BRIGHTNESS_MAX as u32 / 2)
        / BRIGHTNESS_MAX as u32) as u8;
    match polarity {
        Polarity::ActiveHigh => duty,
        Polarity::ActiveLow => DUTY_MAX - duty,
    }
}

/// Compose a full frame without writing it anywhere
pub fn compose<const N: usize>(state: &LampState<N>, config: &LampConfig) -> [u8; N] {
    let mut frame = [0; N];
    for (i, duty) in frame.iter_mut().enumerate() {
        *duty = level_to_duty(channel_level(state, config, i), config.polarity);
    }
    frame
}

/// Renderer - owns the output and the last written frame
pub struct Renderer<O: OutputDriver, const N: usize> {
    output: O,
    frame: [u8; N],
}

impl<O: OutputDriver, const N: usize> Renderer<O, N> {
    pub const fn new(output: O) -> Self {
        Self {
            output,
            frame: [0; N],
        }
    }

    /// Render one frame of `state` to the output
    pub fn render(&mut self, state: &LampState<N>, config: &LampConfig) {
        self.frame = compose(state, config);
        self.output.write(&self.frame);
    }

    /// Last written frame
    pub const fn frame(&self) -> &[u8; N] {
        &self.frame
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
