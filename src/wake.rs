//! Wake-from-sleep signalling
//!
//! The wake interrupt only posts a flag here. Everything else (detaching the
//! interrupt, resetting the timer selection, rendering) happens in the main
//! loop once the halt primitive returns.

use core::cell::Cell;

use critical_section::Mutex;

/// Single-slot wake flag shared between the wake interrupt and the main loop.
///
/// Place it in a `static` and call [`WakeSignal::signal`] from the interrupt
/// handler.
pub struct WakeSignal {
    requested: Mutex<Cell<bool>>,
}

impl WakeSignal {
    pub const fn new() -> Self {
        Self {
            requested: Mutex::new(Cell::new(false)),
        }
    }

    /// Post a wake request
    pub fn signal(&self) {
        critical_section::with(|cs| self.requested.borrow(cs).set(true));
    }

    /// Consume a pending wake request
    pub fn take(&self) -> bool {
        critical_section::with(|cs| self.requested.borrow(cs).replace(false))
    }

    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.requested.borrow(cs).get())
    }
}

impl Default for WakeSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Low-power halt with wake-on-input
///
/// Implementations attach a low-level interrupt on the power button whose
/// handler calls [`WakeSignal::signal`].
pub trait SleepControl {
    /// Whether [`power_down`](Self::power_down) actually halts until woken
    const HALTS: bool;

    /// Attach the wake interrupt to the power input
    fn attach_wake(&mut self);

    /// Detach the wake interrupt
    fn detach_wake(&mut self);

    /// Halt until an interrupt fires
    fn power_down(&mut self);
}

/// Build variant without hardware sleep: shutdown returns straight to the
/// polling loop and the next power edge switches the lamp back on.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSleep;

impl SleepControl for NoSleep {
    const HALTS: bool = false;

    fn attach_wake(&mut self) {}

    fn detach_wake(&mut self) {}

    fn power_down(&mut self) {}
}
