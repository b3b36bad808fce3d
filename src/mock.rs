//! Simulated board for host tests.
//!
//! Every fake shares one [`Bench`], which holds a millisecond clock.
//! Only [`Delay`] advances the clock; scripted pins read their level from it.

use crate::hal::{AnalogChannel, AnalogInput, ColorChannels, StatusDisplay};
use crate::output::Color;
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Delay(u32),
    Buzzer(bool),
    /// Text of a flushed frame, lines joined with `|`
    Frame(String),
}

#[derive(Default)]
pub struct State {
    pub now_ms: u32,
    pub events: Vec<Event>,
    pub levels: [u8; 3],
    pub enabled: [bool; 3],
    pub buzzer_on: bool,
    pub microphone: u16,
    pub axis: u16,
    frame: Vec<String>,
}

#[derive(Clone, Default)]
pub struct Bench(Rc<RefCell<State>>);

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u32 {
        self.0.borrow().now_ms
    }

    /// Let time pass without the controller blocking (time spent between polls).
    pub fn advance(&self, ms: u32) {
        self.0.borrow_mut().now_ms += ms;
    }

    pub fn set_inputs(&self, microphone: u16, axis: u16) {
        let mut state = self.0.borrow_mut();
        state.microphone = microphone;
        state.axis = axis;
    }

    pub fn take_events(&self) -> Vec<Event> {
        core::mem::take(&mut self.0.borrow_mut().events)
    }

    pub fn frames(&self) -> Vec<String> {
        self.0
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Frame(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn levels(&self) -> [u8; 3] {
        self.0.borrow().levels
    }

    pub fn enabled(&self) -> [bool; 3] {
        self.0.borrow().enabled
    }

    pub fn buzzer_on(&self) -> bool {
        self.0.borrow().buzzer_on
    }

    pub fn delay(&self) -> Delay {
        Delay(self.clone())
    }

    pub fn analog(&self) -> Analog {
        Analog(self.clone())
    }

    pub fn leds(&self) -> Leds {
        Leds(self.clone())
    }

    pub fn buzzer(&self) -> Buzzer {
        Buzzer(self.clone())
    }

    pub fn display(&self) -> Display {
        Display(self.clone())
    }

    /// A pin which reads `initial` until the first edge, then toggles at each listed time.
    pub fn pin(&self, initial: bool, edges_ms: &[u32]) -> ScriptedPin {
        ScriptedPin {
            bench: self.clone(),
            initial,
            edges_ms: edges_ms.to_vec(),
        }
    }
}

pub fn index(color: Color) -> usize {
    match color {
        Color::Red => 0,
        Color::Yellow => 1,
        Color::Green => 2,
    }
}

pub struct Delay(Bench);

impl DelayMs<u32> for Delay {
    fn delay_ms(&mut self, ms: u32) {
        let mut state = self.0 .0.borrow_mut();
        state.now_ms += ms;
        state.events.push(Event::Delay(ms));
    }
}

pub struct Analog(Bench);

impl AnalogInput for Analog {
    fn read_analog(&mut self, channel: AnalogChannel) -> u16 {
        let state = self.0 .0.borrow();
        match channel {
            AnalogChannel::Microphone => state.microphone,
            AnalogChannel::Axis => state.axis,
        }
    }
}

pub struct Leds(Bench);

impl ColorChannels for Leds {
    fn set_level(&mut self, color: Color, intensity: u8) {
        self.0 .0.borrow_mut().levels[index(color)] = intensity;
    }

    fn set_enabled(&mut self, color: Color, enabled: bool) {
        self.0 .0.borrow_mut().enabled[index(color)] = enabled;
    }
}

pub struct Buzzer(Bench);

impl OutputPin for Buzzer {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        state.buzzer_on = false;
        state.events.push(Event::Buzzer(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        state.buzzer_on = true;
        state.events.push(Event::Buzzer(true));
        Ok(())
    }
}

/// A buzzer whose driver rejects every write.
pub struct BrokenBuzzer;

impl OutputPin for BrokenBuzzer {
    type Error = ();

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(())
    }
}

pub struct Display(Bench);

impl StatusDisplay for Display {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.0 .0.borrow_mut().frame.clear();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error> {
        assert_eq!((x, y), (0, 0));
        self.0 .0.borrow_mut().frame.push(text.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        let text = state.frame.join("|");
        state.events.push(Event::Frame(text));
        Ok(())
    }
}

/// A display whose bus is unplugged.
pub struct BrokenDisplay;

impl StatusDisplay for BrokenDisplay {
    type Error = ();

    fn clear(&mut self) -> Result<(), Self::Error> {
        Err(())
    }

    fn draw_text(&mut self, _: &str, _: i32, _: i32) -> Result<(), Self::Error> {
        Err(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Err(())
    }
}

pub struct ScriptedPin {
    bench: Bench,
    initial: bool,
    edges_ms: Vec<u32>,
}

impl InputPin for ScriptedPin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        let now = self.bench.now();
        let toggles = self.edges_ms.iter().filter(|&&t| t <= now).count();
        Ok(self.initial ^ (toggles % 2 == 1))
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// A pin that can't be read.
pub struct BrokenPin;

impl InputPin for BrokenPin {
    type Error = ();

    fn is_high(&self) -> Result<bool, Self::Error> {
        Err(())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Err(())
    }
}
