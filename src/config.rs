//! Lamp configuration
//!
//! Option tables and timings are fixed-size so every selector can be advanced
//! with modulo arithmetic and never index out of range.

use embassy_time::Duration;

/// Default number of LED channels (zones)
pub const LED_NUM: usize = 6;

/// Number of selectable brightness levels
pub const BRIGHTNESS_NUM: usize = 5;

/// Number of selectable animation speeds
pub const SPEED_NUM: usize = 3;

/// Number of selectable auto-shutoff durations
pub const TIMER_NUM: usize = 6;

/// Upper bound of the brightness domain
pub const BRIGHTNESS_MAX: u16 = 1000;

/// Fade level meaning "no attenuation"
pub const FADE_NONE: u8 = 100;

/// Default frame rate of the animated mode (50 FPS).
pub const DEFAULT_FPS: u64 = 50;

/// Output level polarity of the LED channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Duty 0 is off
    ActiveHigh,
    /// Duty 0 is fully on (common-anode wiring, P-channel drivers)
    ActiveLow,
}

/// Timings of the blocking boot animation
#[derive(Debug, Clone, Copy)]
pub struct BootTimings {
    /// Delay after each channel is switched on
    pub settle: Duration,
    /// Delay between two fade steps of the blackout ramp
    pub fade_step_delay: Duration,
    /// Fade percent removed per step
    pub fade_step: u8,
}

/// Configuration for the lamp engine
#[derive(Debug, Clone)]
pub struct LampConfig {
    /// Brightness levels, monotonically increasing, within `0..=BRIGHTNESS_MAX`
    pub brightness_levels: [u16; BRIGHTNESS_NUM],
    /// Index of the brightness level selected at boot
    pub default_brightness: usize,
    /// Phase divisors in milliseconds per radian. Larger is slower.
    pub speed_periods_ms: [u32; SPEED_NUM],
    /// Auto-shutoff durations in minutes
    pub timer_minutes: [u16; TIMER_NUM],
    /// Oscillation amplitude as percent of the selected brightness
    pub amplitude_pct: u8,
    /// Phase offset between two neighbouring channels, in radians
    pub phase_shift: f32,
    /// Period of the animated frame task
    pub frame_duration: Duration,
    /// How long the timer overlay stays visible after a timer edge
    pub overlay_duration: Duration,
    pub boot: BootTimings,
    pub polarity: Polarity,
}

impl LampConfig {
    pub const DEFAULT: Self = Self {
        brightness_levels: [200, 400, 600, 700, 800],
        default_brightness: BRIGHTNESS_NUM / 2,
        speed_periods_ms: [1000, 1500, 2000],
        timer_minutes: [15, 30, 45, 60, 75, 90],
        amplitude_pct: 25,
        phase_shift: 1.1,
        frame_duration: Duration::from_millis(1000 / DEFAULT_FPS),
        overlay_duration: Duration::from_secs(2),
        boot: BootTimings {
            settle: Duration::from_millis(120),
            fade_step_delay: Duration::from_millis(10),
            fade_step: 2,
        },
        polarity: Polarity::ActiveHigh,
    };

    /// Brightness level for a selector index
    pub const fn brightness(&self, index: usize) -> u16 {
        self.brightness_levels[index % BRIGHTNESS_NUM]
    }

    /// Phase divisor for a selector index
    pub const fn speed_period_ms(&self, index: usize) -> u32 {
        self.speed_periods_ms[index % SPEED_NUM]
    }

    /// Auto-shutoff duration for a timer selector.
    ///
    /// Returns `None` for selector 0, which means "no timer".
    #[allow(clippy::cast_lossless)]
    pub const fn shutoff_duration(&self, selected_timer: usize) -> Option<Duration> {
        if selected_timer == 0 {
            return None;
        }
        let minutes = self.timer_minutes[(selected_timer - 1) % TIMER_NUM];
        Some(Duration::from_secs(minutes as u64 * 60))
    }
}

impl Default for LampConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
