use crate::time::Millis;

pub fn dump_to_log() {
    info!(
        "\n\
        Debugging flags:\n\
        - LOG_CONTROL_VALUES: {}\n\
        Sensitivity:\n\
        - LOW:    {}\n\
        - MEDIUM: {}\n\
        - HIGH:   {}\n\
        - STEP_DIVISOR: {}\n\
        ADC:\n\
        - RESOLUTION_BITS: {}\n\
        - CENTER: {}\n\
        Buttons:\n\
        - SETTLE: {} ms\n\
        Output:\n\
        - INTENSITY: {} / {} / {} (alarm / warning / safe)\n\
        - BUZZER_PULSE: {} ms\n\
        - ALARM_HOLD:   {} ms\n\
        Timing:\n\
        - STARTUP_HOLD: {} ms\n\
        - LOOP_PERIOD:  {} ms\n\
        ",
        debug::LOG_CONTROL_VALUES,
        sensitivity::LOW,
        sensitivity::MEDIUM,
        sensitivity::HIGH,
        sensitivity::STEP_DIVISOR,
        adc::RESOLUTION_BITS,
        adc::CENTER,
        button::SETTLE.to_millis(),
        output::ALARM_INTENSITY,
        output::WARNING_INTENSITY,
        output::SAFE_INTENSITY,
        output::BUZZER_PULSE.to_millis(),
        output::ALARM_HOLD.to_millis(),
        timing::STARTUP_HOLD.to_millis(),
        timing::LOOP_PERIOD.to_millis(),
    );
}

/// Debugging flags
pub mod debug {
    /// Log the microphone sample and effective threshold every iteration
    pub const LOG_CONTROL_VALUES: bool = true;
}

/// Alert threshold configuration
pub mod sensitivity {
    use crate::sensitivity::Preset;

    pub const LOW: u16 = 10_000;
    pub const MEDIUM: u16 = 20_000;
    pub const HIGH: u16 = 30_000;

    const _: () = assert!(LOW < MEDIUM && MEDIUM < HIGH);

    /// Preset selected at power-on
    pub const INITIAL: Preset = Preset::Medium;

    /// Axis offset from center is divided by this before being added to the threshold
    pub const STEP_DIVISOR: i32 = 500;
}

/// ADC configuration
pub mod adc {
    /// 12-bit converter
    pub const RESOLUTION_BITS: u32 = 12;

    pub const MAX_POSSIBLE_SAMPLE: u16 = (1 << RESOLUTION_BITS) - 1;

    /// Electrical midpoint of the axis input (joystick at rest)
    pub const CENTER: u16 = 1 << (RESOLUTION_BITS - 1);

    const _: () = assert!(CENTER == 2048);
}

/// Button configuration
pub mod button {
    use crate::debounce::Level;
    use crate::time::Millis;

    /// Time to wait after the first assertion of a button line, so contact bounce dies out
    pub const SETTLE: Millis = Millis::millis(20);

    /// Buttons use pull-up inputs, and are reported when the line reads high
    pub const ACTIVE_LEVEL: Level = Level::High;
}

/// Indicator, buzzer and display configuration
pub mod output {
    use super::Millis;

    pub const ALARM_INTENSITY: u8 = u8::MAX;
    pub const WARNING_INTENSITY: u8 = 128;
    pub const SAFE_INTENSITY: u8 = 64;

    /// Buzzer is held on for this long on every alarm iteration (blocking)
    pub const BUZZER_PULSE: Millis = Millis::millis(200);

    /// Alarm screen is held for this long after being drawn (blocking)
    pub const ALARM_HOLD: Millis = Millis::millis(500);

    /// Top-left corner of the status text
    pub const TEXT_X: i32 = 0;
    pub const TEXT_Y: i32 = 0;
}

/// Main loop cadence
pub mod timing {
    use super::Millis;

    /// Sensitivity screen is shown for this long before the first iteration (blocking)
    pub const STARTUP_HOLD: Millis = Millis::millis(1000);

    /// Delay at the end of every iteration
    pub const LOOP_PERIOD: Millis = Millis::millis(100);
}
