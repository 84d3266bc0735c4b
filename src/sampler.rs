//! Conversion of raw switch levels and analog readings into values the controller acts on

use core::convert::Infallible;
use embedded_hal::digital::v2::InputPin;

use crate::config::{ADC_MAX, DARK_THRESHOLD, MAX_PUMP_TIME_MS, MIN_PUMP_TIME_MS};

/// Pump run time in milliseconds for a potentiometer reading
///
/// Maps `0..=1023` linearly onto [`MIN_PUMP_TIME_MS`]`..=`[`MAX_PUMP_TIME_MS`], rounding down.
/// Out of range readings are clamped.
pub fn pump_time_setting(raw_pot: u16) -> u32 {
	let raw = u32::from(raw_pot.min(ADC_MAX));
	MIN_PUMP_TIME_MS + (MAX_PUMP_TIME_MS - MIN_PUMP_TIME_MS) * raw / u32::from(ADC_MAX)
}

/// Whether a light sensor reading means it is light outside
pub fn is_light(raw_light: u16) -> bool {
	raw_light < DARK_THRESHOLD
}

/// Brightness as a percentage, 100 being the brightest
pub fn light_percent(raw_light: u16) -> u16 {
	let raw = u32::from(raw_light.min(ADC_MAX));
	((u32::from(ADC_MAX) - raw) * 100 / u32::from(ADC_MAX)) as u16
}

/// Potentiometer position as a percentage
pub fn pot_percent(raw_pot: u16) -> u16 {
	let raw = u32::from(raw_pot.min(ADC_MAX));
	(raw * 100 / u32::from(ADC_MAX)) as u16
}

/// Everything the controller reads from the outside world
pub trait Inputs {
	/// Whether the water reservoir has run dry
	fn tank_empty(&mut self) -> bool;
	/// Whether the prime (permanent run) switch is engaged
	fn prime_engaged(&mut self) -> bool;
	/// Whether a display module is plugged in
	fn display_present(&mut self) -> bool;
	/// Raw light sensor reading, lower is brighter
	fn raw_light(&mut self) -> u16;
	/// Raw pump potentiometer reading
	fn raw_pot(&mut self) -> u16;

	fn is_light(&mut self) -> bool {
		is_light(self.raw_light())
	}

	fn pump_time(&mut self) -> u32 {
		pump_time_setting(self.raw_pot())
	}
}

/// Analog channels sampled through the ADC
pub trait AnalogInputs {
	fn light(&mut self) -> u16;
	fn pot(&mut self) -> u16;
}

/// [`Inputs`] backed by pins
///
/// All switches are wired to ground with a pull-up, so a low level means the switch is closed.
pub struct Sampler<TANK, PRIME, SENSE, A> {
	/// Float switch in the reservoir
	tank_empty: TANK,
	/// Prime switch
	prime: PRIME,
	/// Grounded by the display module when it is plugged in
	display_sense: SENSE,
	/// Light sensor and potentiometer
	analog: A,
}

impl<TANK, PRIME, SENSE, A> Sampler<TANK, PRIME, SENSE, A> {
	pub fn new(tank_empty: TANK, prime: PRIME, display_sense: SENSE, analog: A) -> Self {
		Self {
			tank_empty,
			prime,
			display_sense,
			analog,
		}
	}
}

fn is_closed<P>(pin: &P) -> bool
where
	P: InputPin<Error = Infallible>,
{
	match pin.is_low() {
		Ok(low) => low,
		Err(never) => match never {},
	}
}

impl<TANK, PRIME, SENSE, A> Inputs for Sampler<TANK, PRIME, SENSE, A>
where
	TANK: InputPin<Error = Infallible>,
	PRIME: InputPin<Error = Infallible>,
	SENSE: InputPin<Error = Infallible>,
	A: AnalogInputs,
{
	fn tank_empty(&mut self) -> bool {
		is_closed(&self.tank_empty)
	}

	fn prime_engaged(&mut self) -> bool {
		is_closed(&self.prime)
	}

	fn display_present(&mut self) -> bool {
		is_closed(&self.display_sense)
	}

	fn raw_light(&mut self) -> u16 {
		self.analog.light()
	}

	fn raw_pot(&mut self) -> u16 {
		self.analog.pot()
	}
}
