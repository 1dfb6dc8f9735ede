use crate::config::{BRIGHTNESS_NUM, FADE_NONE, SPEED_NUM, TIMER_NUM};

/// Rendering behavior of a powered lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Constant brightness, rendered on change only
    Static,
    /// Phase-shifted breathing, rendered by the frame task
    Animated,
}

impl Mode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Static => Self::Animated,
            Self::Animated => Self::Static,
        }
    }
}

/// Mutable model of the lamp
///
/// N is the number of LED channels
#[derive(Debug, Clone, PartialEq)]
pub struct LampState<const N: usize> {
    pub(crate) power: bool,
    pub(crate) mode: Mode,
    pub(crate) selected_brightness: usize,
    pub(crate) selected_speed: usize,
    pub(crate) selected_timer: usize,
    pub(crate) fade: u8,
    pub(crate) show_timer_overlay: bool,
    pub(crate) channel_enabled: [bool; N],
    pub(crate) channel_offset: [f32; N],
}

impl<const N: usize> LampState<N> {
    /// Boot state: off, static, given brightness, first speed, no timer
    pub const fn new(selected_brightness: usize) -> Self {
        Self {
            power: false,
            mode: Mode::Static,
            selected_brightness: selected_brightness % BRIGHTNESS_NUM,
            selected_speed: 0,
            selected_timer: 0,
            fade: FADE_NONE,
            show_timer_overlay: false,
            channel_enabled: [false; N],
            channel_offset: [0.0; N],
        }
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn selected_brightness(&self) -> usize {
        self.selected_brightness
    }

    pub const fn selected_speed(&self) -> usize {
        self.selected_speed
    }

    /// 0 when no auto-shutoff is selected, otherwise 1-based table index
    pub const fn selected_timer(&self) -> usize {
        self.selected_timer
    }

    pub const fn fade(&self) -> u8 {
        self.fade
    }

    pub const fn show_timer_overlay(&self) -> bool {
        self.show_timer_overlay
    }

    pub const fn channel_enabled(&self) -> &[bool; N] {
        &self.channel_enabled
    }

    pub const fn channel_offset(&self) -> &[f32; N] {
        &self.channel_offset
    }

    /// Enable or disable every channel and drop animation offsets
    pub(crate) fn fill(&mut self, enabled: bool) {
        self.channel_enabled = [enabled; N];
        self.clear_offsets();
    }

    pub(crate) fn clear_offsets(&mut self) {
        self.channel_offset = [0.0; N];
    }

    pub(crate) fn advance_brightness(&mut self) {
        self.selected_brightness = (self.selected_brightness + 1) % BRIGHTNESS_NUM;
    }

    pub(crate) fn advance_speed(&mut self) {
        self.selected_speed = (self.selected_speed + 1) % SPEED_NUM;
    }

    /// Cycles through `0..=TIMER_NUM`, where 0 disarms the timer
    pub(crate) fn advance_timer(&mut self) {
        self.selected_timer = (self.selected_timer + 1) % (TIMER_NUM + 1);
    }
}
