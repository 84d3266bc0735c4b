//! Arduino Nano wiring
//!
//! | Signal | Pin |
//! |---|---|
//! | reset switch | D4 |
//! | prime switch | D5 |
//! | tank-empty switch | D6 |
//! | display sense | D7 |
//! | pump relay | D8 |
//! | status LED | D9 |
//! | light sensor | A0 |
//! | pump potentiometer | A1 |
//! | display | A4 (SDA), A5 (SCL) |

pub mod display;
pub mod interrupts;
pub mod timer;

use arduino_hal::{
	clock::MHz16,
	hal::{
		port::{PB0, PB1, PC0, PC1, PD5, PD6, PD7},
		Adc,
	},
	port::{
		mode::{Analog, Input, Output, PullUp},
		Pin,
	},
};

use crate::{
	outputs::Outputs,
	sampler::{AnalogInputs, Sampler},
};

pub type BoardInputs = Sampler<
	Pin<Input<PullUp>, PD6>,
	Pin<Input<PullUp>, PD5>,
	Pin<Input<PullUp>, PD7>,
	AnalogSensors,
>;

pub type BoardOutputs = Outputs<Pin<Output, PB0>, Pin<Output, PB1>>;

/// Light sensor and pump potentiometer, read through the ADC
pub struct AnalogSensors {
	/// Analog to digital converter used for reading analog input values
	adc: Adc<MHz16>,
	/// Light dependent resistor, lower readings are brighter
	light_sensor: Pin<Analog, PC0>,
	/// Pump run time potentiometer
	pot: Pin<Analog, PC1>,
}

impl AnalogSensors {
	pub fn new(adc: Adc<MHz16>, light_sensor: Pin<Analog, PC0>, pot: Pin<Analog, PC1>) -> Self {
		Self {
			adc,
			light_sensor,
			pot,
		}
	}
}

impl AnalogInputs for AnalogSensors {
	fn light(&mut self) -> u16 {
		self.light_sensor.analog_read(&mut self.adc)
	}

	fn pot(&mut self) -> u16 {
		self.pot.analog_read(&mut self.adc)
	}
}
