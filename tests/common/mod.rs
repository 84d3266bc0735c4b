//! Shared test infrastructure for the controller integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::{
	cell::{Cell, RefCell},
	convert::Infallible,
	rc::Rc,
};

use embedded_hal::{
	blocking::delay::DelayMs,
	digital::v2::{InputPin, OutputPin},
};
use greenhouse_irrigation::{
	chrono::Clock,
	display::TextDisplay,
	outputs::Outputs,
	reset::ResetTrigger,
	sampler::{AnalogInputs, Inputs},
	Controller,
};
use ufmt::uWrite;

// ============================================================================
// Simulated time
// ============================================================================

struct TimeState {
	now: Cell<u32>,
	/// Added to the clock after every read, so that busy loops make progress
	step: Cell<u32>,
	/// Time at which a restart gets requested, once
	restart_at: Cell<Option<u32>>,
	reset: &'static ResetTrigger,
}

/// Millisecond clock shared by the controller's clock, its delay and the recording pins
#[derive(Clone)]
pub struct SimTime(Rc<TimeState>);

impl SimTime {
	pub fn new(reset: &'static ResetTrigger) -> Self {
		Self(Rc::new(TimeState {
			now: Cell::new(0),
			step: Cell::new(0),
			restart_at: Cell::new(None),
			reset,
		}))
	}

	pub fn now(&self) -> u32 {
		self.0.now.get()
	}

	pub fn set(&self, now: u32) {
		self.0.now.set(now);
		self.fire_if_due();
	}

	pub fn advance(&self, ms: u32) {
		self.set(self.now().wrapping_add(ms));
	}

	pub fn set_step(&self, step: u32) {
		self.0.step.set(step);
	}

	/// Request a restart as soon as the clock reaches `at`
	pub fn restart_at(&self, at: u32) {
		self.0.restart_at.set(Some(at));
	}

	fn fire_if_due(&self) {
		if let Some(at) = self.0.restart_at.get() {
			if self.now() >= at {
				self.0.restart_at.set(None);
				self.0.reset.request();
			}
		}
	}
}

impl Clock for SimTime {
	fn millis(&self) -> u32 {
		let now = self.now();
		let step = self.0.step.get();
		if step > 0 {
			self.advance(step);
		}
		now
	}
}

/// Delay which moves simulated time forward instead of sleeping
pub struct SimDelay(pub SimTime);

impl DelayMs<u16> for SimDelay {
	fn delay_ms(&mut self, ms: u16) {
		self.0.advance(u32::from(ms));
	}
}

// ============================================================================
// Mock inputs
// ============================================================================

#[derive(Default)]
pub struct Levels {
	pub tank_empty: Cell<bool>,
	pub prime: Cell<bool>,
	pub display_present: Cell<bool>,
	pub raw_light: Cell<u16>,
	pub raw_pot: Cell<u16>,
	/// Number of potentiometer samples taken
	pub pot_reads: Cell<u32>,
}

/// Inputs whose readings can be changed while the controller owns them
#[derive(Clone, Default)]
pub struct SimInputs(pub Rc<Levels>);

impl Inputs for SimInputs {
	fn tank_empty(&mut self) -> bool {
		self.0.tank_empty.get()
	}

	fn prime_engaged(&mut self) -> bool {
		self.0.prime.get()
	}

	fn display_present(&mut self) -> bool {
		self.0.display_present.get()
	}

	fn raw_light(&mut self) -> u16 {
		self.0.raw_light.get()
	}

	fn raw_pot(&mut self) -> u16 {
		self.0.pot_reads.set(self.0.pot_reads.get() + 1);
		self.0.raw_pot.get()
	}
}

/// Digital input with a level set by the test
#[derive(Clone, Default)]
pub struct LevelPin(pub Rc<Cell<bool>>);

impl LevelPin {
	pub fn high() -> Self {
		Self(Rc::new(Cell::new(true)))
	}

	pub fn low() -> Self {
		Self(Rc::new(Cell::new(false)))
	}
}

impl InputPin for LevelPin {
	type Error = Infallible;

	fn is_high(&self) -> Result<bool, Self::Error> {
		Ok(self.0.get())
	}

	fn is_low(&self) -> Result<bool, Self::Error> {
		Ok(!self.0.get())
	}
}

/// Fixed ADC readings
pub struct FixedAnalog {
	pub light: u16,
	pub pot: u16,
}

impl AnalogInputs for FixedAnalog {
	fn light(&mut self) -> u16 {
		self.light
	}

	fn pot(&mut self) -> u16 {
		self.pot
	}
}

// ============================================================================
// Mock outputs
// ============================================================================

/// Output pin which records every level change with the time it happened
#[derive(Clone)]
pub struct RecordingPin {
	time: SimTime,
	changes: Rc<RefCell<Vec<(u32, bool)>>>,
}

impl RecordingPin {
	pub fn new(time: SimTime) -> Self {
		Self {
			time,
			changes: Rc::new(RefCell::new(Vec::new())),
		}
	}

	/// `(time, level)` pairs, `true` meaning high
	pub fn changes(&self) -> Vec<(u32, bool)> {
		self.changes.borrow().clone()
	}

	pub fn level(&self) -> Option<bool> {
		self.changes.borrow().last().map(|(_, level)| *level)
	}

	pub fn clear(&self) {
		self.changes.borrow_mut().clear();
	}

	fn record(&mut self, level: bool) {
		let mut changes = self.changes.borrow_mut();
		if changes.last().map(|(_, last)| *last) != Some(level) {
			changes.push((self.time.now(), level));
		}
	}
}

impl OutputPin for RecordingPin {
	type Error = Infallible;

	fn set_low(&mut self) -> Result<(), Self::Error> {
		self.record(false);
		Ok(())
	}

	fn set_high(&mut self) -> Result<(), Self::Error> {
		self.record(true);
		Ok(())
	}
}

// ============================================================================
// Mock display
// ============================================================================

/// Display which keeps every cleared screen as a frame of rows
#[derive(Clone, Default)]
pub struct SimDisplay {
	initialized: Rc<Cell<bool>>,
	frames: Rc<RefCell<Vec<Vec<String>>>>,
	row: Rc<Cell<usize>>,
}

impl SimDisplay {
	pub fn is_initialized(&self) -> bool {
		self.initialized.get()
	}

	pub fn frames(&self) -> Vec<Vec<String>> {
		self.frames.borrow().clone()
	}
}

impl TextDisplay for SimDisplay {
	fn init(&mut self) {
		self.initialized.set(true);
	}

	fn clear(&mut self) {
		self.frames.borrow_mut().push(Vec::new());
		self.row.set(0);
	}

	fn set_position(&mut self, _column: u8, row: u8) {
		self.row.set(usize::from(row));
	}
}

impl uWrite for SimDisplay {
	type Error = Infallible;

	fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
		let mut frames = self.frames.borrow_mut();
		if frames.is_empty() {
			frames.push(Vec::new());
		}
		let frame = frames.last_mut().unwrap();
		let row = self.row.get();
		if frame.len() <= row {
			frame.resize(row + 1, String::new());
		}
		frame[row].push_str(s);
		Ok(())
	}
}

// ============================================================================
// Test rig
// ============================================================================

pub type SimController =
	Controller<'static, SimInputs, Outputs<RecordingPin, RecordingPin>, SimDisplay, SimTime, SimDelay>;

/// Handles onto everything a [`SimController`] is wired to
pub struct Rig {
	pub reset: &'static ResetTrigger,
	pub time: SimTime,
	pub inputs: SimInputs,
	pub pump: RecordingPin,
	pub led: RecordingPin,
	pub display: SimDisplay,
}

impl Rig {
	/// Tank full, no prime, no display, bright light, shortest pump time
	pub fn new() -> Self {
		let reset: &'static ResetTrigger = Box::leak(Box::new(ResetTrigger::new()));
		let time = SimTime::new(reset);
		let inputs = SimInputs::default();
		inputs.0.raw_light.set(100);

		Self {
			reset,
			pump: RecordingPin::new(time.clone()),
			led: RecordingPin::new(time.clone()),
			time,
			inputs,
			display: SimDisplay::default(),
		}
	}

	pub fn controller(&self) -> SimController {
		Controller::new(
			self.inputs.clone(),
			Outputs::new(self.pump.clone(), self.led.clone()),
			self.display.clone(),
			self.time.clone(),
			SimDelay(self.time.clone()),
			self.reset,
		)
	}

	/// Whether the LED is currently lit (its pin is active low)
	pub fn led_lit(&self) -> bool {
		self.led.level() == Some(false)
	}

	pub fn pump_on(&self) -> bool {
		self.pump.level() == Some(true)
	}
}
