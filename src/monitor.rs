use crate::alert::{classify, AlertLevel};
use crate::config;
use crate::debounce::Debouncer;
use crate::hal::{AnalogInput, ColorChannels, SampleReading, StatusDisplay};
use crate::output::OutputCoordinator;
use crate::sensitivity::{Preset, Sensitivity};
use crate::time::BlockFor;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

/// What happened during one loop iteration.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Iteration {
    pub reading: SampleReading,
    /// Threshold the reading was classified against (after adjustment)
    pub threshold: u16,
    pub level: AlertLevel,
    /// Preset selected by the sensitivity button, if it was pressed
    pub new_preset: Option<Preset>,
    pub alert_pressed: bool,
}

/// The device's main loop.
///
/// Owns all controller state. Every iteration blocks for its full duration:
/// the settle delay of a confirmed button, the alarm buzzer pulse and hold, and the loop period.
pub struct Monitor<A, C, B, D, P, Q, T> {
    analog: A,
    outputs: OutputCoordinator<C, B, D>,
    cycle_button: Debouncer<P>,
    alert_button: Debouncer<Q>,
    delay: T,
    sensitivity: Sensitivity,
}

impl<A, C, B, D, P, Q, T> Monitor<A, C, B, D, P, Q, T>
where
    A: AnalogInput,
    C: ColorChannels,
    B: OutputPin,
    D: StatusDisplay,
    P: InputPin,
    Q: InputPin,
    T: DelayMs<u32>,
{
    pub fn new(
        analog: A,
        outputs: OutputCoordinator<C, B, D>,
        cycle_button: Debouncer<P>,
        alert_button: Debouncer<Q>,
        delay: T,
    ) -> Self {
        Self {
            analog,
            outputs,
            cycle_button,
            alert_button,
            delay,
            sensitivity: Sensitivity::new(config::sensitivity::INITIAL),
        }
    }

    pub fn sensitivity(&self) -> &Sensitivity {
        &self.sensitivity
    }

    /// Show the initial sensitivity, and leave it on screen for a while.
    pub fn startup(&mut self) {
        info!("Starting with {} sensitivity", self.sensitivity.preset());

        self.outputs.show_sensitivity(self.sensitivity.preset());
        self.delay.block_for(config::timing::STARTUP_HOLD);
    }

    /// Run one iteration of the main loop.
    pub fn step(&mut self) -> Iteration {
        // Step 1: the sensitivity button selects the next preset

        let new_preset = if self.cycle_button.confirm(&mut self.delay) {
            let preset = self.sensitivity.cycle_preset();
            info!("Sensitivity changed to {}", preset);
            self.outputs.show_sensitivity(preset);
            Some(preset)
        } else {
            None
        };

        // Step 2: sample microphone and axis

        let reading = SampleReading::take(&mut self.analog);

        // Step 3: trim threshold with the axis

        self.sensitivity.adjust(reading.axis);
        let threshold = self.sensitivity.current();

        if config::debug::LOG_CONTROL_VALUES {
            info!("Microphone: {}, threshold: {}", reading.microphone, threshold);
        }

        // Step 4: classify and actuate

        let level = classify(reading.microphone, threshold);
        self.outputs.actuate(level, &mut self.delay);

        // Step 5: the alert button brings back the sensitivity screen

        let alert_pressed = self.alert_button.confirm(&mut self.delay);
        if alert_pressed {
            info!("Alert button pressed");
            self.outputs.show_sensitivity(self.sensitivity.preset());
        }

        self.delay.block_for(config::timing::LOOP_PERIOD);

        Iteration {
            reading,
            threshold,
            level,
            new_preset,
            alert_pressed,
        }
    }

    /// Run the startup screen, then iterate until power-off.
    pub fn run(&mut self) -> ! {
        self.run_with(|_| {})
    }

    /// Like [`Monitor::run`], calling `after_step` with the result of every iteration.
    pub fn run_with(&mut self, mut after_step: impl FnMut(&Iteration)) -> ! {
        self.startup();

        loop {
            let iteration = self.step();
            after_step(&iteration);
        }
    }
}
