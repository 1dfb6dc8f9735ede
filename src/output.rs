//! PWM output adapter
//!
//! Drives one `embedded-hal` PWM channel per LED zone.

use embedded_hal::pwm::SetDutyCycle;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::renderer::DUTY_MAX;

/// Output driver writing 8-bit duties to PWM channels
///
/// Channels are addressed by position: duty `i` goes to `channels[i]`.
pub struct PwmOutput<P: SetDutyCycle, const N: usize> {
    channels: [P; N],
}

impl<P: SetDutyCycle, const N: usize> PwmOutput<P, N> {
    pub const fn new(channels: [P; N]) -> Self {
        Self { channels }
    }

    pub fn channels(&self) -> &[P; N] {
        &self.channels
    }

    pub fn release(self) -> [P; N] {
        self.channels
    }
}

impl<P: SetDutyCycle, const N: usize> OutputDriver for PwmOutput<P, N> {
    fn write(&mut self, duties: &[u8]) {
        for (channel, &duty) in self.channels.iter_mut().zip(duties) {
            // A rejected duty keeps the previous one until the next frame
            if channel
                .set_duty_cycle_fraction(u16::from(duty), u16::from(DUTY_MAX))
                .is_err()
            {
                #[cfg(feature = "esp32-log")]
                println!("[PwmOutput.write] failed to set duty {}", duty);
            }
        }
    }
}
