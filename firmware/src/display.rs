use display_interface::{DisplayError, WriteOnlyDataCommand};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use noise_alert::hal::StatusDisplay;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

/// 128x64 SSD1306 OLED, drawn into a frame buffer and flushed in one transfer.
pub struct Oled<DI> {
    display: Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
}

impl<DI: WriteOnlyDataCommand> Oled<DI> {
    pub fn new(interface: DI) -> Result<Self, DisplayError> {
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init()?;
        Ok(Self { display })
    }
}

impl<DI: WriteOnlyDataCommand> StatusDisplay for Oled<DI> {
    type Error = DisplayError;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.display.clear();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(&mut self.display)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.display.flush()
    }
}
