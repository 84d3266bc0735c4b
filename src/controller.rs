//! Logic for coordinating peripheral inputs and outputs

use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use ufmt::derive::uDebug;

use crate::{
	chrono::Clock,
	config::{ALARM_OFF_MS, ALARM_ON_MS, DIAGNOSTIC_DWELL_MS, STARTUP_BLINKS, STARTUP_BLINK_MS},
	diagnostic::Screen,
	display::TextDisplay,
	led::Annunciator,
	outputs::Actuators,
	reset::{ResetTrigger, Restart},
	sampler::Inputs,
	watering::{Phase, WateringCycle},
};

/// Operating mode, chosen once per session
#[derive(uDebug, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// A display is plugged in, cycle through the diagnostic screens
	Diagnostic,
	/// Run the watering cycle
	Operational,
}

impl Mode {
	pub fn from_display_presence(display_present: bool) -> Self {
		if display_present {
			Self::Diagnostic
		} else {
			Self::Operational
		}
	}
}

/// Control state of an operational session
///
/// Dropped on every restart.
pub struct OperationalState {
	pub cycle: WateringCycle,
	pub led: Annunciator,
}

impl OperationalState {
	pub fn new(now: u32) -> Self {
		Self {
			cycle: WateringCycle::new(now),
			led: Annunciator::new(now),
		}
	}
}

/// Central type which connects the components of the system
pub struct Controller<'r, I, O, D, C, DL> {
	/// Switches and sensors
	inputs: I,
	/// Pump relay and status LED
	outputs: O,
	/// Diagnostic display, only touched in [`Mode::Diagnostic`]
	display: D,
	/// Millisecond clock
	clock: C,
	/// Blocking delay
	delay: DL,
	/// Raised by the pin-change interrupt
	reset: &'r ResetTrigger,
}

impl<'r, I, O, D, C, DL> Controller<'r, I, O, D, C, DL>
where
	I: Inputs,
	O: Actuators,
	D: TextDisplay,
	C: Clock,
	DL: DelayMs<u16>,
{
	pub fn new(
		inputs: I,
		outputs: O,
		display: D,
		clock: C,
		delay: DL,
		reset: &'r ResetTrigger,
	) -> Self {
		Self {
			inputs,
			outputs,
			display,
			clock,
			delay,
			reset,
		}
	}

	/// Run a session until something requests a restart
	///
	/// Every call starts from scratch: outputs back to their safe state, a fresh mode selection
	/// and fresh control state.
	pub fn run(&mut self) -> Restart {
		match self.session() {
			Ok(never) => match never {},
			Err(restart) => restart,
		}
	}

	fn session(&mut self) -> Result<Infallible, Restart> {
		self.reset.clear();
		self.outputs.set_pump(false);
		self.outputs.set_led(false);

		self.startup_blink()?;

		let mode = self.select_mode();
		log!("mode: {:?}", mode);

		match mode {
			Mode::Diagnostic => self.run_diagnostics(),
			Mode::Operational => self.run_operational(),
		}
	}

	/// Read the display presence once and decide how to run
	pub fn select_mode(&mut self) -> Mode {
		Mode::from_display_presence(self.inputs.display_present())
	}

	/// Wait for `ms` milliseconds, giving up as soon as a restart is requested
	pub fn pause(&mut self, ms: u32) -> Result<(), Restart> {
		for _ in 0..ms {
			self.reset.check()?;
			self.delay.delay_ms(1);
		}

		self.reset.check()
	}

	fn blink(&mut self, on_ms: u32, off_ms: u32) -> Result<(), Restart> {
		self.outputs.set_led(true);
		self.pause(on_ms)?;
		self.outputs.set_led(false);
		self.pause(off_ms)
	}

	fn startup_blink(&mut self) -> Result<(), Restart> {
		for _ in 0..STARTUP_BLINKS {
			self.blink(STARTUP_BLINK_MS, STARTUP_BLINK_MS)?;
		}

		Ok(())
	}

	fn run_diagnostics(&mut self) -> Result<Infallible, Restart> {
		self.display.init();

		loop {
			for screen in Screen::SEQUENCE {
				self.reset.check()?;
				let reading = screen.sample(&mut self.inputs);
				reading.render(&mut self.display);
				self.pause(DIAGNOSTIC_DWELL_MS)?;
			}
		}
	}

	fn run_operational(&mut self) -> Result<Infallible, Restart> {
		let mut state = OperationalState::new(self.clock.millis());

		loop {
			self.tick(&mut state)?;
		}
	}

	/// A single pass of the operational loop
	///
	/// Checks the tank, advances the watering cycle and drives the pump, then advances the blink
	/// pattern and drives the LED. Never returns once the tank is empty.
	pub fn tick(&mut self, state: &mut OperationalState) -> Result<(), Restart> {
		self.reset.check()?;

		if self.inputs.tank_empty() {
			return match self.tank_alarm()? {};
		}

		// Re-read every pass so the run time can be tuned while the pump is running.
		let pump_time = self.inputs.pump_time();

		let now = self.clock.millis();
		if state.cycle.is_due(now, pump_time) {
			let prime = self.inputs.prime_engaged();
			let light = self.inputs.is_light();
			let phase = state.cycle.transition(now, prime, light);
			match phase {
				Phase::Pumping => log!("pump: on for {}ms", pump_time),
				Phase::Idle => log!("pump: off"),
			}
		}
		self.outputs.set_pump(state.cycle.is_pumping());

		let now = self.clock.millis();
		if let Some(lit) = state.led.update(now, state.cycle.is_pumping()) {
			self.outputs.set_led(lit);
		}

		Ok(())
	}

	/// Flash the LED fast until a restart is requested
	fn tank_alarm(&mut self) -> Result<Infallible, Restart> {
		log!("tank empty");
		self.outputs.set_pump(false);

		loop {
			self.blink(ALARM_ON_MS, ALARM_OFF_MS)?;
		}
	}
}
