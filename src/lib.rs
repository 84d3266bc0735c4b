//! Off-grid greenhouse irrigation controller
//!
//! Runs a pump for an operator chosen time once an hour while it is light outside, reports its
//! state through a status LED and shows diagnostic screens when a display is plugged in.
//!
//! The control logic only depends on [`embedded_hal`] traits and the small traits in this crate.
//! Everything tied to the Arduino Nano lives in the `board` module, which only builds for AVR targets.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[macro_use]
pub mod serial;

pub mod chrono;
pub mod config;
pub mod controller;
pub mod diagnostic;
pub mod display;
pub mod led;
pub mod outputs;
pub mod reset;
pub mod sampler;
pub mod watering;

#[cfg(target_arch = "avr")]
pub mod board;

pub use controller::{Controller, Mode, OperationalState};
pub use reset::{ResetTrigger, Restart};
