#![allow(dead_code)]

use core::cell::Cell;
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};
use myrtio_zone_lamp::{
    Button, InputSource, Instant, Lamp, LampConfig, NoSleep, OutputDriver, SleepControl,
    WakeSignal,
};

pub const LEDS: usize = 6;

/// Duty of the default brightness (600 of 1000)
pub const DEFAULT_DUTY: u8 = 153;

pub static WAKE: WakeSignal = WakeSignal::new();

/// Output keeping every written frame
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub frames: Vec<Vec<u8>>,
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, duties: &[u8]) {
        self.frames.push(duties.to_vec());
    }
}

/// Delay that only accumulates the requested time
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Sleep mock whose halt returns as if the wake interrupt fired,
/// after `spurious` returns without a wake.
pub struct MockSleep<'a> {
    pub wake: &'a WakeSignal,
    pub attached: bool,
    pub attach_count: u32,
    pub detach_count: u32,
    pub power_downs: u32,
    pub spurious: u32,
}

impl<'a> MockSleep<'a> {
    pub fn new(wake: &'a WakeSignal) -> Self {
        Self {
            wake,
            attached: false,
            attach_count: 0,
            detach_count: 0,
            power_downs: 0,
            spurious: 0,
        }
    }
}

impl SleepControl for MockSleep<'_> {
    const HALTS: bool = true;

    fn attach_wake(&mut self) {
        self.attached = true;
        self.attach_count += 1;
    }

    fn detach_wake(&mut self) {
        self.attached = false;
        self.detach_count += 1;
    }

    fn power_down(&mut self) {
        self.power_downs += 1;
        if self.spurious > 0 {
            self.spurious -= 1;
        } else if self.attached {
            self.wake.signal();
        }
    }
}

/// Shared level of a mocked input pin, `true` is high
#[derive(Clone, Default)]
pub struct MockPin(pub Rc<Cell<bool>>);

impl MockPin {
    /// Idle pin of a pull-up button
    pub fn idle() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn press(&self) {
        self.0.set(false);
    }

    pub fn release(&self) {
        self.0.set(true);
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

pub fn ms(value: u64) -> Instant {
    Instant::from_millis(value)
}

pub fn lamp() -> Lamp<'static, RecordingOutput, NoSleep, LEDS> {
    lamp_with(LampConfig::DEFAULT)
}

pub fn lamp_with(config: LampConfig) -> Lamp<'static, RecordingOutput, NoSleep, LEDS> {
    Lamp::new(RecordingOutput::default(), NoSleep, &WAKE, config)
}

/// Input source replaying a fixed set of released buttons on its next poll
#[derive(Default)]
pub struct ScriptedInput {
    pending: Vec<Button>,
    released: Vec<Button>,
}

impl ScriptedInput {
    pub fn release(&mut self, buttons: &[Button]) {
        self.pending.extend_from_slice(buttons);
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _now: Instant) {
        self.released = core::mem::take(&mut self.pending);
    }

    fn was_released(&self, button: Button) -> bool {
        self.released.contains(&button)
    }
}
