//! Button input
//!
//! The engine consumes buttons through [`InputSource`]: one poll per loop
//! iteration, then a "released since last poll" query per button. The
//! debounced implementation below works on any `embedded-hal` input pin.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;
use heapless::Vec;

/// Number of lamp buttons
pub const BUTTON_NUM: usize = 4;

/// Default debounce window
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(25);

/// Lamp buttons, in the order their edges are handled within one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Power = 0,
    Mode = 1,
    BrightnessSpeed = 2,
    Timer = 3,
}

impl Button {
    pub const ALL: [Self; BUTTON_NUM] = [
        Self::Power,
        Self::Mode,
        Self::BrightnessSpeed,
        Self::Timer,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Released edges collected during one poll, in handling order
pub type Edges = Vec<Button, BUTTON_NUM>;

/// Source of debounced button edges
pub trait InputSource {
    /// Sample all inputs
    fn poll(&mut self, now: Instant);

    /// Whether `button` was released during the last poll
    fn was_released(&self, button: Button) -> bool;

    /// Every button released during the last poll
    fn released(&self) -> Edges {
        let mut edges = Edges::new();
        for button in Button::ALL {
            if self.was_released(button) {
                // Capacity equals the number of buttons
                let _ = edges.push(button);
            }
        }
        edges
    }
}

/// Debounced momentary button on a single input pin
pub struct DebouncedButton<P: InputPin> {
    pin: P,
    active_low: bool,
    debounce: Duration,
    /// Raw level seen on the previous sample
    last_raw: bool,
    last_change: Instant,
    /// Debounced pressed state
    pressed: bool,
    released: bool,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Button pulling the pin low when pressed (internal pull-up wiring)
    pub const fn new(pin: P) -> Self {
        Self::with_options(pin, true, DEFAULT_DEBOUNCE)
    }

    pub const fn with_options(pin: P, active_low: bool, debounce: Duration) -> Self {
        Self {
            pin,
            active_low,
            debounce,
            last_raw: false,
            last_change: Instant::from_millis(0),
            pressed: false,
            released: false,
        }
    }

    /// Sample the pin and update the debounced state
    pub fn read(&mut self, now: Instant) {
        self.released = false;

        // A failed read keeps the previous level
        let raw = match self.pin.is_high() {
            Ok(high) => high != self.active_low,
            Err(_) => self.last_raw,
        };

        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_change = now;
            return;
        }

        let stable_for = now
            .checked_duration_since(self.last_change)
            .unwrap_or(Duration::from_millis(0));
        if raw != self.pressed && stable_for >= self.debounce {
            self.pressed = raw;
            self.released = !raw;
        }
    }

    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the last [`read`](Self::read) saw a press end
    pub const fn was_released(&self) -> bool {
        self.released
    }

    pub fn release_pin(self) -> P {
        self.pin
    }
}

/// The four lamp buttons as one [`InputSource`]
pub struct ButtonBank<P: InputPin> {
    buttons: [DebouncedButton<P>; BUTTON_NUM],
}

impl<P: InputPin> ButtonBank<P> {
    /// Pins in [`Button::ALL`] order
    pub const fn new(buttons: [DebouncedButton<P>; BUTTON_NUM]) -> Self {
        Self { buttons }
    }

    pub fn from_pins(pins: [P; BUTTON_NUM]) -> Self {
        Self::new(pins.map(DebouncedButton::new))
    }

    pub fn button(&self, button: Button) -> &DebouncedButton<P> {
        &self.buttons[button.index()]
    }
}

impl<P: InputPin> InputSource for ButtonBank<P> {
    fn poll(&mut self, now: Instant) {
        for button in &mut self.buttons {
            button.read(now);
        }
    }

    fn was_released(&self, button: Button) -> bool {
        self.buttons[button.index()].was_released()
    }
}
