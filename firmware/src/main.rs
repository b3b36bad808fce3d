#![no_main]
#![no_std]
#![allow(
    clippy::assertions_on_constants,
    clippy::let_and_return,
    clippy::type_complexity
)]
#![warn(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::ptr_as_ptr
)]

use defmt_rtt as _; // global logger
use stm32f1xx_hal as _; // memory layout

use panic_probe as _; // panicking-behavior

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

mod config;
mod display;
mod hal;

#[rtic::app(device = stm32f1xx_hal::pac, peripherals = true)]
mod app {
    use crate::config;
    use crate::display::Oled;
    use crate::hal::{pins, Leds, Sensors};
    use dwt_systick_monotonic::DwtSystick;
    use noise_alert::{Debouncer, Monitor, OutputCoordinator};
    use ssd1306::prelude::I2CInterface;
    use ssd1306::I2CDisplayInterface;
    use stm32f1xx_hal::adc::Adc;
    use stm32f1xx_hal::device::{I2C1, TIM2};
    use stm32f1xx_hal::gpio::PinState;
    use stm32f1xx_hal::i2c::{BlockingI2c, Mode};
    use stm32f1xx_hal::prelude::*;
    use stm32f1xx_hal::timer::{DelayMs, Timer};

    type Display = Oled<I2CInterface<BlockingI2c<I2C1, (pins::B6_I2C1_SCL, pins::B7_I2C1_SDA)>>>;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        monitor: Monitor<
            Sensors,
            Leds,
            pins::B12_BUZZER,
            Display,
            pins::A3_SENSITIVITY_BUTTON,
            pins::A4_ALERT_BUTTON,
            DelayMs<TIM2>,
        >,
        debug_led: pins::C13_DEBUG_LED,
    }

    #[init]
    fn init(mut cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("Dumping config...");

        config::dump_to_log();

        defmt::info!("Starting init...");

        let mut afio = cx.device.AFIO.constrain();
        let mut flash = cx.device.FLASH.constrain();
        let mut gpioa = cx.device.GPIOA.split();
        let mut gpiob = cx.device.GPIOB.split();
        let mut gpioc = cx.device.GPIOC.split();
        let rcc = cx.device.RCC.constrain();

        defmt::info!("Configuring clocks...");

        let clocks = rcc
            .cfgr
            .use_hse(config::clk::HSE_FREQ)
            .sysclk(config::clk::SYSCLK)
            .pclk1(config::clk::PCLK1)
            .pclk2(config::clk::PCLK2)
            .adcclk(config::clk::ADCCLK)
            .freeze(&mut flash.acr);

        assert!(config::clk::SYSCLK == clocks.sysclk());
        assert!(config::clk::PCLK1 == clocks.pclk1());
        assert!(config::clk::PCLK2 == clocks.pclk2());
        assert!(config::clk::ADCCLK == clocks.adcclk());

        defmt::info!("Configuring ADC1 to read microphone and joystick...");

        let adc1 = Adc::adc1(cx.device.ADC1, clocks);

        let microphone_pin: pins::A0_ADC1C0 = gpioa.pa0.into_analog(&mut gpioa.crl);
        let axis_pin: pins::A1_ADC1C1 = gpioa.pa1.into_analog(&mut gpioa.crl);

        let sensors = Sensors::new(adc1, microphone_pin, axis_pin);

        defmt::info!("Configuring indicator timer...");

        let tim3_ch1: pins::A6_TIM3C1 = gpioa.pa6.into_alternate_push_pull(&mut gpioa.crl);
        let tim3_ch2: pins::A7_TIM3C2 = gpioa.pa7.into_alternate_push_pull(&mut gpioa.crl);
        let tim3_ch3: pins::B0_TIM3C3 = gpiob.pb0.into_alternate_push_pull(&mut gpiob.crl);

        let indicator_timer = Timer::new(cx.device.TIM3, &clocks).pwm_hz(
            (tim3_ch1, tim3_ch2, tim3_ch3),
            &mut afio.mapr,
            config::indicator::PWM_FREQ,
        );
        let leds = Leds::new(indicator_timer);

        defmt::info!("Configuring buzzer and buttons...");

        let buzzer: pins::B12_BUZZER = gpiob
            .pb12
            .into_push_pull_output_with_state(&mut gpiob.crh, PinState::Low);

        let sensitivity_button: pins::A3_SENSITIVITY_BUTTON =
            gpioa.pa3.into_pull_up_input(&mut gpioa.crl);
        let alert_button: pins::A4_ALERT_BUTTON = gpioa.pa4.into_pull_up_input(&mut gpioa.crl);

        defmt::info!("Configuring display...");

        let scl: pins::B6_I2C1_SCL = gpiob.pb6.into_alternate_open_drain(&mut gpiob.crl);
        let sda: pins::B7_I2C1_SDA = gpiob.pb7.into_alternate_open_drain(&mut gpiob.crl);

        let i2c1 = BlockingI2c::i2c1(
            cx.device.I2C1,
            (scl, sda),
            &mut afio.mapr,
            Mode::Standard {
                frequency: config::i2c::FREQ,
            },
            clocks,
            config::i2c::START_TIMEOUT_US,
            config::i2c::START_RETRIES,
            config::i2c::ADDR_TIMEOUT_US,
            config::i2c::DATA_TIMEOUT_US,
        );

        let interface = I2CDisplayInterface::new_custom_address(i2c1, config::i2c::DISPLAY_ADDR);
        let display = match Oled::new(interface) {
            Ok(display) => display,
            Err(e) => defmt::panic!("Display init failed: {}", defmt::Debug2Format(&e)),
        };

        defmt::info!("Configuring delay and monotonic timers...");

        let delay = cx.device.TIM2.delay_ms(&clocks);

        let mono = DwtMono::new(
            &mut cx.core.DCB,
            cx.core.DWT,
            cx.core.SYST,
            clocks.sysclk().to_Hz(),
        );

        defmt::info!("Configuring debug indicator LED...");

        let led: pins::C13_DEBUG_LED = gpioc
            .pc13
            .into_push_pull_output_with_state(&mut gpioc.crh, PinState::High);

        let active = noise_alert::config::button::ACTIVE_LEVEL;
        let monitor = Monitor::new(
            sensors,
            OutputCoordinator::new(leds, buzzer, display),
            Debouncer::new(sensitivity_button, active),
            Debouncer::new(alert_button, active),
            delay,
        );

        defmt::info!("Finished init.");

        (
            Shared {},
            Local {
                monitor,
                debug_led: led,
            },
            init::Monotonics(mono),
        )
    }

    /// This provides a monotonic timer used to time loop iterations.
    #[monotonic(binds = SysTick, default = true)]
    type DwtMono = DwtSystick<{ config::clk::SYSCLK_HZ }>;

    /// The main loop runs here, forever.
    ///
    /// All of its waits are blocking delays, so nothing else runs on this core.
    #[idle(local = [monitor, debug_led])]
    fn idle(cx: idle::Context) -> ! {
        let monitor = cx.local.monitor;
        let debug_led = cx.local.debug_led;

        let mut last = monotonics::now();

        monitor.run_with(|iteration| {
            debug_led.toggle();

            if config::debug::LOG_TIMING {
                let now = monotonics::now();
                defmt::println!(
                    "{} iteration took {} ms",
                    iteration.level,
                    (now - last).to_millis()
                );
                last = now;
            }
        })
    }
}
