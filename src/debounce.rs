use crate::config;
use crate::time::BlockFor;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;

/// Line level at which a button counts as asserted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    High,
    Low,
}

/// Edge detector for a mechanical button.
///
/// Each assertion of the line is confirmed once. After confirming, the filter blocks for
/// `config::button::SETTLE` so contact bounce dies out, and then stays quiet until the line
/// has been seen de-asserted at least once. Holding the button does not re-trigger.
pub struct Debouncer<P> {
    pin: P,
    active: Level,
    /// The current assertion has already been confirmed.
    stable: bool,
}

impl<P: InputPin> Debouncer<P> {
    pub fn new(pin: P, active: Level) -> Self {
        Self {
            pin,
            active,
            stable: false,
        }
    }

    /// Returns `true` on the first poll that sees the line asserted since it was last de-asserted.
    ///
    /// Blocks for the settle delay before returning `true`.
    pub fn confirm(&mut self, delay: &mut impl DelayMs<u32>) -> bool {
        let asserted = match self.active {
            Level::High => self.pin.is_high(),
            Level::Low => self.pin.is_low(),
        };

        match asserted {
            Ok(true) if self.stable => false,
            Ok(true) => {
                self.stable = true;
                delay.block_for(config::button::SETTLE);
                true
            }
            Ok(false) => {
                self.stable = false;
                false
            }
            Err(_) => {
                warn!("Button read failed, ignoring this poll");
                false
            }
        }
    }

    #[cfg(test)]
    pub fn is_stable(&self) -> bool {
        self.stable
    }
}
