/// How loud the environment is relative to the threshold.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertLevel {
    Safe,
    Warning,
    Alarm,
}

/// Classify a microphone sample against the current threshold.
///
/// Samples above half the threshold (up to and including the threshold itself) are a warning,
/// anything above the threshold is an alarm.
pub fn classify(microphone: u16, threshold: u16) -> AlertLevel {
    if microphone > threshold {
        AlertLevel::Alarm
    } else if microphone > threshold / 2 {
        AlertLevel::Warning
    } else {
        AlertLevel::Safe
    }
}
