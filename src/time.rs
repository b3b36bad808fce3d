use embedded_hal::blocking::delay::DelayMs;

pub type Millis = fugit::MillisDurationU32;

/// Blocking waits on a named duration.
pub trait BlockFor {
    fn block_for(&mut self, duration: Millis);
}

impl<D: DelayMs<u32>> BlockFor for D {
    fn block_for(&mut self, duration: Millis) {
        self.delay_ms(duration.to_millis());
    }
}
