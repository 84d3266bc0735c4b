use core::convert::Infallible;
use embedded_hal::digital::v2::OutputPin;

/// Everything the controller switches
pub trait Actuators {
	/// Energize or release the pump relay
	fn set_pump(&mut self, on: bool);
	/// Light or darken the status LED
	fn set_led(&mut self, lit: bool);
}

/// [`Actuators`] backed by pins
pub struct Outputs<PUMP, LED> {
	/// Pump relay, high energizes the pump
	pump: PUMP,
	/// Status LED, wired active low
	led: LED,
}

impl<PUMP, LED> Outputs<PUMP, LED> {
	pub fn new(pump: PUMP, led: LED) -> Self {
		Self { pump, led }
	}
}

fn drive<P>(pin: &mut P, high: bool)
where
	P: OutputPin<Error = Infallible>,
{
	let result = if high { pin.set_high() } else { pin.set_low() };
	if let Err(never) = result {
		match never {}
	}
}

impl<PUMP, LED> Actuators for Outputs<PUMP, LED>
where
	PUMP: OutputPin<Error = Infallible>,
	LED: OutputPin<Error = Infallible>,
{
	fn set_pump(&mut self, on: bool) {
		drive(&mut self.pump, on);
	}

	fn set_led(&mut self, lit: bool) {
		// The LED lights up when its pin is pulled low.
		drive(&mut self.led, !lit);
	}
}
