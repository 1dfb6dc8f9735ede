#![no_std]

pub mod animation;
pub mod config;
pub mod controller;
pub mod input;
pub mod output;
mod power;
pub mod renderer;
pub mod scheduler;
pub mod state;
mod timer;
pub mod wake;

pub use config::{BootTimings, LED_NUM, LampConfig, Polarity};
pub use controller::Lamp;
pub use input::{Button, ButtonBank, DebouncedButton, InputSource};
pub use output::PwmOutput;
pub use renderer::Renderer;
pub use scheduler::{Iterations, Task};
pub use state::{LampState, Mode};
pub use wake::{NoSleep, SleepControl, WakeSignal};

pub use embassy_time::{Duration, Instant};

/// Abstract LED output trait
///
/// Implement this trait to support different hardware platforms.
/// The lamp engine is generic over this trait.
pub trait OutputDriver {
    /// Write one duty value (0-255) per channel
    fn write(&mut self, duties: &[u8]);
}
