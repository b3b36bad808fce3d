use crate::config;
use crate::math::Truncate;

/// Named alert thresholds, selected with the sensitivity button.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Preset {
    Low,
    Medium,
    High,
}

impl Preset {
    pub const fn threshold(self) -> u16 {
        match self {
            Preset::Low => config::sensitivity::LOW,
            Preset::Medium => config::sensitivity::MEDIUM,
            Preset::High => config::sensitivity::HIGH,
        }
    }

    /// Next preset in button order, wrapping around after `High`.
    pub const fn next(self) -> Self {
        match self {
            Preset::Low => Preset::Medium,
            Preset::Medium => Preset::High,
            Preset::High => Preset::Low,
        }
    }
}

/// The current alert threshold.
///
/// The threshold starts at a preset's value, and then drifts with the axis input every iteration,
/// so it usually differs from `preset().threshold()` between button presses.
/// It is always within `LOW..=HIGH`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sensitivity {
    current: u16,
    preset: Preset,
}

impl Sensitivity {
    pub const fn new(preset: Preset) -> Self {
        Self {
            current: preset.threshold(),
            preset,
        }
    }

    pub const fn current(&self) -> u16 {
        self.current
    }

    pub const fn preset(&self) -> Preset {
        self.preset
    }

    /// Advance to the next preset, resetting the threshold to its value.
    pub fn cycle_preset(&mut self) -> Preset {
        self.preset = self.preset.next();
        self.current = self.preset.threshold();
        self.preset
    }

    /// Fold an axis sample into the threshold.
    ///
    /// Returns the delta that was applied, before clamping.
    pub fn adjust(&mut self, axis: u16) -> i32 {
        let delta = axis_delta(axis);

        let adjusted = i32::from(self.current) + delta;
        let clamped = adjusted.clamp(
            i32::from(config::sensitivity::LOW),
            i32::from(config::sensitivity::HIGH),
        );
        self.current = clamped.truncate();

        delta
    }
}

/// Signed threshold step for an axis sample.
///
/// Division truncates toward zero, so samples close to center produce no drift.
pub fn axis_delta(axis: u16) -> i32 {
    (i32::from(axis) - i32::from(config::adc::CENTER)) / config::sensitivity::STEP_DIVISOR
}
