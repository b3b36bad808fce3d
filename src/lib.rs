//! Core logic of an ambient-noise alert device.
//!
//! A microphone sample is compared against an adjustable threshold every loop iteration,
//! and the result is shown on three indicator LEDs, a buzzer, and a status display.
//! All hardware is reached through the traits in [`hal`], so everything here runs on the host too.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::let_and_return, clippy::type_complexity)]
#![warn(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::ptr_as_ptr
)]

#[macro_use]
mod log;

pub mod alert;
pub mod config;
pub mod debounce;
pub mod hal;
pub mod math;
pub mod monitor;
pub mod output;
pub mod sensitivity;
pub mod time;

#[cfg(test)]
mod mock;

pub use alert::{classify, AlertLevel};
pub use debounce::{Debouncer, Level};
pub use monitor::Monitor;
pub use output::{Actuation, Color, OutputCoordinator};
pub use sensitivity::{Preset, Sensitivity};
