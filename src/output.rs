use crate::alert::AlertLevel;
use crate::config;
use crate::hal::{ColorChannels, StatusDisplay};
use crate::sensitivity::Preset;
use crate::time::{BlockFor, Millis};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

/// Indicator LED colors. Exactly one is lit at a time.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Yellow,
    Green,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Yellow, Color::Green];
}

/// Everything the outputs do for one alert level.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Actuation {
    pub color: Color,
    pub intensity: u8,
    /// Blocking buzzer pulse, if the buzzer sounds at all
    pub buzzer: Option<Millis>,
    pub text: &'static str,
    /// Blocking hold after the screen is drawn
    pub hold: Option<Millis>,
}

impl Actuation {
    pub const fn for_level(level: AlertLevel) -> Self {
        match level {
            AlertLevel::Alarm => Self {
                color: Color::Red,
                intensity: config::output::ALARM_INTENSITY,
                buzzer: Some(config::output::BUZZER_PULSE),
                text: "Alert: Siren!",
                hold: Some(config::output::ALARM_HOLD),
            },
            AlertLevel::Warning => Self {
                color: Color::Yellow,
                intensity: config::output::WARNING_INTENSITY,
                buzzer: None,
                text: "Alert: Doorbell!",
                hold: None,
            },
            AlertLevel::Safe => Self {
                color: Color::Green,
                intensity: config::output::SAFE_INTENSITY,
                buzzer: None,
                text: "Safe environment",
                hold: None,
            },
        }
    }
}

pub const fn sensitivity_text(preset: Preset) -> &'static str {
    match preset {
        Preset::Low => "Sensitivity: Low",
        Preset::Medium => "Sensitivity: Medium",
        Preset::High => "Sensitivity: High",
    }
}

/// Drives the indicator LEDs, buzzer and status display.
pub struct OutputCoordinator<C, B, D> {
    channels: C,
    buzzer: B,
    display: D,
}

impl<C, B, D> OutputCoordinator<C, B, D>
where
    C: ColorChannels,
    B: OutputPin,
    D: StatusDisplay,
{
    pub fn new(channels: C, mut buzzer: B, display: D) -> Self {
        if buzzer.set_low().is_err() {
            warn!("Failed to silence buzzer");
        }
        Self {
            channels,
            buzzer,
            display,
        }
    }

    /// Show an alert level on every output.
    ///
    /// Blocks for the buzzer pulse and the hold time, if the level has them.
    pub fn actuate(&mut self, level: AlertLevel, delay: &mut impl DelayMs<u32>) -> Actuation {
        let actuation = Actuation::for_level(level);

        self.light(actuation.color, actuation.intensity);

        if let Some(pulse) = actuation.buzzer {
            self.pulse_buzzer(pulse, delay);
        }

        self.show(actuation.text);

        if let Some(hold) = actuation.hold {
            delay.block_for(hold);
        }

        actuation
    }

    pub fn show_sensitivity(&mut self, preset: Preset) {
        self.show(sensitivity_text(preset));
    }

    fn light(&mut self, active: Color, intensity: u8) {
        for color in Color::ALL {
            let level = if color == active { intensity } else { 0 };
            self.channels.set_level(color, level);
        }
        for color in Color::ALL {
            self.channels.set_enabled(color, color == active);
        }
    }

    fn pulse_buzzer(&mut self, duration: Millis, delay: &mut impl DelayMs<u32>) {
        if self.buzzer.set_high().is_err() {
            warn!("Failed to start buzzer");
        }
        delay.block_for(duration);
        if self.buzzer.set_low().is_err() {
            warn!("Failed to stop buzzer");
        }
    }

    /// Clear the display and draw a single line of text.
    fn show(&mut self, text: &str) {
        fn draw<D: StatusDisplay>(display: &mut D, text: &str) -> Result<(), D::Error> {
            display.clear()?;
            display.draw_text(text, config::output::TEXT_X, config::output::TEXT_Y)?;
            display.flush()
        }

        if draw(&mut self.display, text).is_err() {
            warn!("Display update failed: {}", text);
        }
    }
}
