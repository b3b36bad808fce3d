pub fn dump_to_log() {
    defmt::info!(
        "\n\
        Debugging flags:\n\
        - LOG_TIMING: {}\n\
        Clocks:\n\
        - HSE_FREQ: {} Hz\n\
        - SYSCLK:   {} Hz\n\
        - PCLK1:    {} Hz\n\
        - PCLK2:    {} Hz\n\
        - ADCCLK:   {} Hz\n\
        Indicator:\n\
        - PWM_FREQ: {} Hz\n\
        I2C:\n\
        - FREQ: {} Hz\n\
        - DISPLAY_ADDR: {=u8:#x}\n\
        ",
        debug::LOG_TIMING,
        clk::HSE_FREQ.to_Hz(),
        clk::SYSCLK.to_Hz(),
        clk::PCLK1.to_Hz(),
        clk::PCLK2.to_Hz(),
        clk::ADCCLK.to_Hz(),
        indicator::PWM_FREQ.to_Hz(),
        i2c::FREQ.to_Hz(),
        i2c::DISPLAY_ADDR,
    );

    noise_alert::config::dump_to_log();
}

/// Debugging flags
pub mod debug {
    /// Log how long each loop iteration took
    pub const LOG_TIMING: bool = false;
}

/// Clock configuration
///
/// See clock tree in https://www.st.com/resource/en/datasheet/stm32f103c8.pdf
pub mod clk {
    use fugit::Rate;

    /// Use external oscillator (required to get max 72MHz sysclk)
    pub const HSE_FREQ: Rate<u32, 1, 1> = Rate::<u32, 1, 1>::MHz(8);

    /// PLLMUL @ x9 (max 72MHz)
    pub const SYSCLK: Rate<u32, 1, 1> = Rate::<u32, 1, 1>::MHz(72);
    pub const SYSCLK_HZ: u32 = SYSCLK.to_Hz();

    /// APB1 prescaler @ /2 (max 36MHz)
    pub const PCLK1: Rate<u32, 1, 1> = Rate::<u32, 1, 1>::MHz(36);
    /// APB2 prescaler @ /1 (max 72MHz)
    pub const PCLK2: Rate<u32, 1, 1> = Rate::<u32, 1, 1>::MHz(72);

    /// ADC prescaler @ /6 (max 14MHz)
    ///
    /// Controls are read one sample at a time, so there's no sample rate to hit here.
    pub const ADCCLK: Rate<u32, 1, 1> = Rate::<u32, 1, 1>::MHz(12);
}

/// Indicator LED configuration
pub mod indicator {
    use fugit::Rate;

    /// Fast enough to not flicker
    pub const PWM_FREQ: Rate<u32, 1, 1> = Rate::<u32, 1, 1>::kHz(1);
}

/// Display bus configuration
pub mod i2c {
    use fugit::Rate;

    /// Standard mode
    pub const FREQ: Rate<u32, 1, 1> = Rate::<u32, 1, 1>::kHz(100);

    /// SSD1306 default address (SA0 low)
    pub const DISPLAY_ADDR: u8 = 0x3C;

    pub const START_TIMEOUT_US: u32 = 1000;
    pub const START_RETRIES: u8 = 10;
    pub const ADDR_TIMEOUT_US: u32 = 1000;
    pub const DATA_TIMEOUT_US: u32 = 1000;
}
