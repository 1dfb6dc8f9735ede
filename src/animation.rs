//! Breathing animation
//!
//! Every channel oscillates around the selected brightness with the same
//! period, shifted in phase by its position so neighbouring zones do not pulse
//! in lockstep. Offsets depend on `now` only, so the computation can resume
//! after any pause without keeping state.

use embassy_time::Instant;

use crate::config::LampConfig;
use crate::state::{LampState, Mode};

/// Oscillation amplitude for a brightness level
#[allow(clippy::cast_precision_loss)]
pub fn amplitude(brightness: u16, amplitude_pct: u8) -> f32 {
    f32::from(brightness) * f32::from(amplitude_pct) / 100.0
}

/// Phase in radians at `now` for the given divisor
///
/// Computed in double precision: a millisecond counter exceeds the `f32`
/// mantissa after a few hours of uptime.
#[allow(clippy::cast_precision_loss)]
pub fn phase(now: Instant, period_ms: u32) -> f64 {
    now.as_millis() as f64 / f64::from(period_ms.max(1))
}

/// Offset of channel `index` for a given phase
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn channel_offset(phase: f64, index: usize, phase_shift: f32, amplitude: f32) -> f32 {
    let shifted = phase + index as f64 * f64::from(phase_shift);
    libm::sin(shifted) as f32 * amplitude
}

/// Recompute the per-channel offsets of `state` for `now`.
///
/// Static mode and disabled channels get a zero offset.
pub fn update_offsets<const N: usize>(state: &mut LampState<N>, config: &LampConfig, now: Instant) {
    if state.mode == Mode::Static {
        state.clear_offsets();
        return;
    }

    let amplitude = amplitude(
        config.brightness(state.selected_brightness),
        config.amplitude_pct,
    );
    let phase = phase(now, config.speed_period_ms(state.selected_speed));

    for (i, offset) in state.channel_offset.iter_mut().enumerate() {
        *offset = if state.channel_enabled[i] {
            channel_offset(phase, i, config.phase_shift, amplitude)
        } else {
            0.0
        };
    }
}
