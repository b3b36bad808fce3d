//! Board capabilities used by the controller.
//!
//! Buttons, the buzzer and delays use the `embedded-hal` traits directly;
//! the traits here cover what `embedded-hal` has no vocabulary for.

use crate::output::Color;

/// Analog inputs sampled every iteration.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogChannel {
    Microphone,
    /// Joystick X axis, used for fine threshold adjustment
    Axis,
}

pub trait AnalogInput {
    /// Read a 12-bit sample from `channel`.
    fn read_analog(&mut self, channel: AnalogChannel) -> u16;
}

/// The three PWM-driven indicator LEDs.
pub trait ColorChannels {
    fn set_level(&mut self, color: Color, intensity: u8);

    fn set_enabled(&mut self, color: Color, enabled: bool);
}

/// A text display which is drawn into a buffer, then flushed.
pub trait StatusDisplay {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error>;

    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Samples taken once per iteration.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleReading {
    pub microphone: u16,
    pub axis: u16,
}

impl SampleReading {
    pub fn take(input: &mut impl AnalogInput) -> Self {
        let microphone = input.read_analog(AnalogChannel::Microphone);
        let axis = input.read_analog(AnalogChannel::Axis);
        Self { microphone, axis }
    }
}
