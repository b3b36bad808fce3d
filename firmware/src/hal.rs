//! Board bindings for the `noise_alert` capability traits.

use embedded_hal::adc::OneShot;
use noise_alert::hal::{AnalogChannel, AnalogInput, ColorChannels};
use noise_alert::math::{ScaleBy, ScalingFactor};
use noise_alert::Color;
use stm32f1xx_hal::adc::Adc;
use stm32f1xx_hal::device::{ADC1, TIM3};
use stm32f1xx_hal::timer::{Ch, Channel, PwmHz, Tim3NoRemap};

#[allow(non_camel_case_types)]
pub mod pins {
    use stm32f1xx_hal::gpio::{Alternate, Analog, Input, OpenDrain, Output, Pin, PullUp, PushPull};

    /// Microphone module output
    pub type A0_ADC1C0 = Pin<'A', 0, Analog>;

    /// Joystick X axis
    pub type A1_ADC1C1 = Pin<'A', 1, Analog>;

    /// Joystick push button (cycles sensitivity)
    pub type A3_SENSITIVITY_BUTTON = Pin<'A', 3, Input<PullUp>>;

    /// Alert button (shows sensitivity)
    pub type A4_ALERT_BUTTON = Pin<'A', 4, Input<PullUp>>;

    /// Red indicator LED
    pub type A6_TIM3C1 = Pin<'A', 6, Alternate<PushPull>>;
    /// Yellow indicator LED
    pub type A7_TIM3C2 = Pin<'A', 7, Alternate<PushPull>>;
    /// Green indicator LED
    pub type B0_TIM3C3 = Pin<'B', 0, Alternate<PushPull>>;

    /// Display clock
    pub type B6_I2C1_SCL = Pin<'B', 6, Alternate<OpenDrain>>;
    /// Display data
    pub type B7_I2C1_SDA = Pin<'B', 7, Alternate<OpenDrain>>;

    /// Active buzzer
    pub type B12_BUZZER = Pin<'B', 12, Output<PushPull>>;

    /// Debug LED output
    pub type C13_DEBUG_LED = Pin<'C', 13, Output<PushPull>>;
}

/// Microphone and joystick, both on ADC1.
pub struct Sensors {
    adc: Adc<ADC1>,
    microphone: pins::A0_ADC1C0,
    axis: pins::A1_ADC1C1,
}

impl Sensors {
    pub fn new(adc: Adc<ADC1>, microphone: pins::A0_ADC1C0, axis: pins::A1_ADC1C1) -> Self {
        Self {
            adc,
            microphone,
            axis,
        }
    }
}

impl AnalogInput for Sensors {
    fn read_analog(&mut self, channel: AnalogChannel) -> u16 {
        let res: Result<u16, _> = match channel {
            AnalogChannel::Microphone => self.adc.read(&mut self.microphone),
            AnalogChannel::Axis => self.adc.read(&mut self.axis),
        };

        match res {
            Ok(sample) => sample,
            Err(_) => {
                defmt::warn!("ADC read of {} failed", channel);
                // fall back to a reading that neither alarms nor drifts the threshold
                match channel {
                    AnalogChannel::Microphone => 0,
                    AnalogChannel::Axis => noise_alert::config::adc::CENTER,
                }
            }
        }
    }
}

pub type IndicatorPwm = PwmHz<
    TIM3,
    Tim3NoRemap,
    (Ch<0>, Ch<1>, Ch<2>),
    (pins::A6_TIM3C1, pins::A7_TIM3C2, pins::B0_TIM3C3),
>;

/// Indicator LEDs on TIM3.
pub struct Leds {
    pwm: IndicatorPwm,
}

impl Leds {
    pub fn new(mut pwm: IndicatorPwm) -> Self {
        for color in Color::ALL {
            pwm.set_duty(channel(color), 0);
            pwm.enable(channel(color));
        }
        Self { pwm }
    }
}

fn channel(color: Color) -> Channel {
    match color {
        Color::Red => Channel::C1,
        Color::Yellow => Channel::C2,
        Color::Green => Channel::C3,
    }
}

impl ColorChannels for Leds {
    fn set_level(&mut self, color: Color, intensity: u8) {
        let duty = self
            .pwm
            .get_max_duty()
            .scale_by(ScalingFactor::from_intensity(intensity));
        self.pwm.set_duty(channel(color), duty);
    }

    fn set_enabled(&mut self, color: Color, enabled: bool) {
        if enabled {
            self.pwm.enable(channel(color));
        } else {
            self.pwm.disable(channel(color));
        }
    }
}
